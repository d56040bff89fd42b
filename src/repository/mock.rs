//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{Member, MemberWithTeam, NewMember};
use crate::domain::search::MemberSearchCondition;
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId, TeamName, UserName};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    MemberReader, MemberSearchQuery, MemberWriter, TeamReader, TeamWriter,
};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_all_members(&self) -> RepositoryResult<Vec<Member>>;
        fn find_members_by_user_name(&self, user_name: &UserName) -> RepositoryResult<Vec<Member>>;
        fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>>;
        fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberWithTeam>>;
        fn search_members_page(
            &self,
            query: &MemberSearchQuery,
            page: PageRequest,
        ) -> RepositoryResult<Page<MemberWithTeam>>;
        fn count_members(&self, condition: &MemberSearchCondition) -> RepositoryResult<usize>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
        fn change_member_team(
            &self,
            member_id: MemberId,
            team_id: Option<TeamId>,
        ) -> RepositoryResult<Member>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
