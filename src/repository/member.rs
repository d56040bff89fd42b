//! Diesel implementation of the member reader and writer.
//!
//! Every search runs over `members LEFT JOIN teams`, so members without a
//! team stay candidates until a team filter rules them out. The free-text
//! search compares `fold_case(user_name)` against a lowercased pattern.

use diesel::{Connection, prelude::*, sqlite::Sqlite};

use crate::{
    db::fold_case,
    domain::{
        member::{Member, MemberWithTeam, NewMember},
        search::{MemberPredicate, MemberSearchCondition, SortDirection, SortField, SortOrder},
        team::Team,
        types::{MemberId, TeamId, TypeConstraintError, UserName},
    },
    models::{
        member::{Member as DbMember, NewMember as DbNewMember},
        team::Team as DbTeam,
    },
    pagination::{Page, PageRequest},
    repository::{
        DieselRepository, MemberReader, MemberSearchQuery, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
};

type MemberTeamQuery = diesel::dsl::IntoBoxed<
    'static,
    diesel::dsl::LeftJoin<members::table, teams::table>,
    Sqlite,
>;

/// Left-joined members and teams with every predicate AND-ed in.
fn filtered(predicates: &[MemberPredicate]) -> MemberTeamQuery {
    predicates.iter().fold(
        members::table
            .left_join(teams::table)
            .into_boxed::<Sqlite>(),
        |query, predicate| match predicate {
            MemberPredicate::UserNameEq(name) => {
                query.filter(members::user_name.eq(name.clone()))
            }
            MemberPredicate::TeamNameEq(name) => {
                query.filter(teams::name.nullable().eq(name.clone()))
            }
            MemberPredicate::AgeGoe(age) => query.filter(members::age.ge(*age)),
            MemberPredicate::AgeLoe(age) => query.filter(members::age.le(*age)),
            MemberPredicate::UserNameContains(term) => query.filter(
                fold_case(members::user_name)
                    .like(like_pattern(&term.to_lowercase()))
                    .escape('\\'),
            ),
        },
    )
}

fn ordered(query: MemberTeamQuery, orders: &[SortOrder]) -> MemberTeamQuery {
    orders
        .iter()
        .fold(query, |query, order| match (order.field, order.direction) {
            (SortField::MemberId, SortDirection::Asc) => query.then_order_by(members::id.asc()),
            (SortField::MemberId, SortDirection::Desc) => query.then_order_by(members::id.desc()),
            (SortField::UserName, SortDirection::Asc) => {
                query.then_order_by(members::user_name.asc())
            }
            (SortField::UserName, SortDirection::Desc) => {
                query.then_order_by(members::user_name.desc())
            }
            (SortField::Age, SortDirection::Asc) => query.then_order_by(members::age.asc()),
            (SortField::Age, SortDirection::Desc) => query.then_order_by(members::age.desc()),
            (SortField::TeamName, SortDirection::Asc) => {
                query.then_order_by(teams::name.nullable().asc())
            }
            (SortField::TeamName, SortDirection::Desc) => {
                query.then_order_by(teams::name.nullable().desc())
            }
        })
}

/// `%term%` with LIKE wildcards in `term` escaped by `\`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn to_sql_window(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn into_domain_rows(rows: Vec<(DbMember, Option<DbTeam>)>) -> RepositoryResult<Vec<MemberWithTeam>> {
    rows.into_iter()
        .map(|(member, team)| {
            Ok((
                Member::try_from(member)?,
                team.map(Team::try_from).transpose()?,
            ))
        })
        .collect::<Result<Vec<_>, TypeConstraintError>>()
        .map_err(RepositoryError::from)
}

fn into_domain_members(rows: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    rows.into_iter()
        .map(|member| Member::try_from(member).map_err(RepositoryError::from))
        .collect()
}

fn count_matching(
    conn: &mut SqliteConnection,
    condition: &MemberSearchCondition,
) -> RepositoryResult<usize> {
    let total = filtered(&condition.predicates())
        .count()
        .get_result::<i64>(conn)?;
    Ok(usize::try_from(total).unwrap_or_default())
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        match db_member {
            Some(db_member) => Ok(Some(
                Member::try_from(db_member).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_all_members(&self) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain_members(rows)
    }

    fn find_members_by_user_name(&self, user_name: &UserName) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .filter(members::user_name.eq(user_name.as_str()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain_members(rows)
    }

    fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .filter(members::team_id.eq(team_id.get()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain_members(rows)
    }

    fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberWithTeam>> {
        let mut conn = self.conn()?;
        let rows = ordered(filtered(&query.condition.predicates()), &query.sort.resolve())
            .load::<(DbMember, Option<DbTeam>)>(&mut conn)?;

        into_domain_rows(rows)
    }

    fn search_members_page(
        &self,
        query: &MemberSearchQuery,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberWithTeam>> {
        let mut conn = self.conn()?;

        let rows = ordered(filtered(&query.condition.predicates()), &query.sort.resolve())
            .offset(to_sql_window(page.offset()))
            .limit(to_sql_window(page.size()))
            .load::<(DbMember, Option<DbTeam>)>(&mut conn)?;
        let content = into_domain_rows(rows)?;

        Page::fetch_with_count(content, page, || -> RepositoryResult<usize> {
            count_matching(&mut conn, &query.condition)
        })
    }

    fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        count_matching(&mut conn, condition)
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        let mut conn = self.conn()?;
        let db_new_member: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&db_new_member)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewMember> = new_members.iter().map(Into::into).collect();

        let affected = diesel::insert_into(members::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member> {
        let mut conn = self.conn()?;

        conn.transaction::<Member, RepositoryError, _>(|conn| {
            let team = match team_id {
                Some(team_id) => {
                    let db_team = teams::table
                        .find(team_id.get())
                        .first::<DbTeam>(conn)
                        .optional()?
                        .ok_or(RepositoryError::NotFound)?;
                    Some(Team::try_from(db_team)?)
                }
                None => None,
            };

            let db_member = members::table
                .find(member_id.get())
                .first::<DbMember>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;
            let mut member = Member::try_from(db_member)?;

            member.change_team(team.as_ref());
            diesel::update(members::table.find(member.id.get()))
                .set(members::team_id.eq(member.team_id.map(TeamId::get)))
                .execute(conn)?;

            Ok(member)
        })
    }
}
