use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{Member, MemberWithTeam, NewMember},
        search::{MemberSearchCondition, Sort},
        team::{NewTeam, Team},
        types::{MemberId, TeamId, TeamName, UserName},
    },
    pagination::{Page, PageRequest},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod team;

/// Diesel-backed repository shared by every reader and writer trait.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Filters and ordering for a member search.
#[derive(Debug, Clone, Default)]
pub struct MemberSearchQuery {
    pub condition: MemberSearchCondition,
    pub sort: Sort,
}

impl MemberSearchQuery {
    pub fn new(condition: MemberSearchCondition) -> Self {
        Self {
            condition,
            sort: Sort::unsorted(),
        }
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_all_members(&self) -> RepositoryResult<Vec<Member>>;
    fn find_members_by_user_name(&self, user_name: &UserName) -> RepositoryResult<Vec<Member>>;
    /// Members whose team reference equals `team_id`, ordered by id.
    fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>>;
    /// Every match, ordered, without a page window.
    fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberWithTeam>>;
    fn search_members_page(
        &self,
        query: &MemberSearchQuery,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberWithTeam>>;
    fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
    /// Points the member at `team_id` (or detaches it). Unknown ids are `NotFound`.
    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
