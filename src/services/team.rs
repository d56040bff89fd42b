//! Team use cases.

use crate::domain::member::Member;
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::TeamId;
use crate::repository::{MemberReader, TeamReader, TeamWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_team<R>(repo: &R, name: &str) -> ServiceResult<Team>
where
    R: TeamWriter + ?Sized,
{
    let new_team = NewTeam::try_new(name)?;
    repo.create_team(&new_team).map_err(|err| {
        log::error!("Failed to create team {name}: {err}");
        err.into()
    })
}

pub fn list_teams<R>(repo: &R) -> ServiceResult<Vec<Team>>
where
    R: TeamReader + ?Sized,
{
    Ok(repo.list_teams()?)
}

/// The team's members, derived from the members' team references.
pub fn list_team_members<R>(repo: &R, team_id: i32) -> ServiceResult<Vec<Member>>
where
    R: TeamReader + MemberReader + ?Sized,
{
    let team_id = TeamId::new(team_id)?;
    let team = repo
        .get_team_by_id(team_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(repo.list_team_members(team.id)?)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn members_of_unknown_team_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_team_by_id().returning(|_| Ok(None));
        repo.expect_list_team_members().times(0);

        assert!(matches!(
            list_team_members(&repo, 3),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn blank_team_name_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_create_team().times(0);

        assert!(matches!(
            create_team(&repo, "  "),
            Err(ServiceError::TypeConstraint(_))
        ));
    }
}
