//! Member search and lookup use cases.

use crate::domain::member::Member;
use crate::domain::search::{MemberSearchCondition, Sort};
use crate::domain::types::{MemberId, TeamId, UserName};
use crate::dto::api::MemberPageResponse;
use crate::dto::member::{MemberDto, MemberTeamDto};
use crate::forms::member::MemberSearchForm;
use crate::pagination::{Page, PageRequest};
use crate::repository::{MemberReader, MemberSearchQuery, MemberWriter};
use crate::services::ServiceResult;

/// Returns every member matching `condition`, projected with its team.
pub fn search_members<R>(
    repo: &R,
    condition: MemberSearchCondition,
    sort: Sort,
) -> ServiceResult<Vec<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    let query = MemberSearchQuery::new(condition).sort(sort);
    let rows = repo.search_members(&query).map_err(|err| {
        log::error!("Failed to search members: {err}");
        err
    })?;

    Ok(rows.into_iter().map(MemberTeamDto::from).collect())
}

/// Returns one page of members matching `condition` plus the total count.
pub fn search_members_page<R>(
    repo: &R,
    condition: MemberSearchCondition,
    page: PageRequest,
    sort: Sort,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    let query = MemberSearchQuery::new(condition).sort(sort);
    let page = repo.search_members_page(&query, page).map_err(|err| {
        log::error!("Failed to load member page: {err}");
        err
    })?;

    Ok(page.map(MemberTeamDto::from))
}

/// Runs a paginated search described by a parsed query-string form.
pub fn search_members_response<R>(
    repo: &R,
    form: &MemberSearchForm,
    default_page_size: usize,
) -> ServiceResult<MemberPageResponse>
where
    R: MemberReader + ?Sized,
{
    let page = form.page_request(default_page_size)?;
    let result = search_members_page(repo, form.condition(), page, form.sort())?;
    Ok(MemberPageResponse::from(result))
}

/// Looks a member up by id; `Ok(None)` when no such member exists.
pub fn get_member<R>(repo: &R, member_id: i32) -> ServiceResult<Option<Member>>
where
    R: MemberReader + ?Sized,
{
    let member_id = MemberId::new(member_id)?;
    Ok(repo.get_member_by_id(member_id)?)
}

pub fn list_all_members<R>(repo: &R) -> ServiceResult<Vec<Member>>
where
    R: MemberReader + ?Sized,
{
    Ok(repo.list_all_members()?)
}

/// Name-and-age projections of every member called exactly `user_name`.
pub fn find_members_by_user_name<R>(repo: &R, user_name: &str) -> ServiceResult<Vec<MemberDto>>
where
    R: MemberReader + ?Sized,
{
    let user_name = UserName::new(user_name)?;
    let members = repo.find_members_by_user_name(&user_name)?;
    Ok(members.into_iter().map(MemberDto::from).collect())
}

/// Moves a member to another team, or removes it from its team with `None`.
pub fn change_member_team<R>(
    repo: &R,
    member_id: i32,
    team_id: Option<i32>,
) -> ServiceResult<Member>
where
    R: MemberWriter + ?Sized,
{
    let member_id = MemberId::new(member_id)?;
    let team_id = team_id.map(TeamId::new).transpose()?;

    repo.change_member_team(member_id, team_id)
        .map_err(|err| {
            log::error!("Failed to change team of member {member_id}: {err}");
            err.into()
        })
}
