use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::domain::types::{MemberId, TeamId, TypeConstraintError, UserName};

/// A member row left-joined with its team.
pub type MemberWithTeam = (Member, Option<Team>);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub user_name: Option<UserName>,
    pub age: i32,
    /// Owning side of the member/team relation.
    pub team_id: Option<TeamId>,
}

impl Member {
    /// Moves the member to `team`, or detaches it when `None`.
    pub fn change_team(&mut self, team: Option<&Team>) {
        self.team_id = team.map(|team| team.id);
    }

    /// Returns `true` when the member references the given team.
    pub fn belongs_to(&self, team_id: TeamId) -> bool {
        self.team_id == Some(team_id)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewMember {
    pub user_name: Option<UserName>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(user_name: Option<UserName>, age: i32, team_id: Option<TeamId>) -> Self {
        Self {
            user_name,
            age,
            team_id,
        }
    }

    /// Builds a member payload from raw values; a blank name is stored as absent.
    pub fn try_new(
        user_name: Option<String>,
        age: i32,
        team_id: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        let user_name = user_name
            .filter(|name| !name.trim().is_empty())
            .map(UserName::new)
            .transpose()?;
        let team_id = team_id.map(TeamId::new).transpose()?;

        Ok(Self::new(user_name, age, team_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TeamName;

    fn member() -> Member {
        Member {
            id: MemberId::new(1).unwrap(),
            user_name: Some(UserName::new("member1").unwrap()),
            age: 10,
            team_id: None,
        }
    }

    #[test]
    fn change_team_sets_and_clears_reference() {
        let team = Team {
            id: TeamId::new(3).unwrap(),
            name: TeamName::new("teamA").unwrap(),
        };
        let mut member = member();

        member.change_team(Some(&team));
        assert!(member.belongs_to(team.id));

        member.change_team(None);
        assert_eq!(member.team_id, None);
    }

    #[test]
    fn try_new_treats_blank_name_as_absent() {
        let new = NewMember::try_new(Some("  ".to_string()), 5, None).unwrap();
        assert_eq!(new.user_name, None);
        assert_eq!(new.age, 5);

        assert_eq!(
            NewMember::try_new(None, 5, Some(0)),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
