//! Flat projections of members joined with their team.

use serde::{Deserialize, Serialize};

use crate::domain::member::{Member, MemberWithTeam};
use crate::domain::team::Team;
use crate::domain::types::{MemberId, TeamId, TeamName, TypeConstraintError, UserName};

/// A member row flattened together with its (optional) team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub user_name: Option<String>,
    pub age: i32,
    /// `None` when the member has no team.
    pub team_id: Option<i32>,
    /// `None` when the member has no team.
    pub team_name: Option<String>,
}

impl From<MemberWithTeam> for MemberTeamDto {
    fn from((member, team): MemberWithTeam) -> Self {
        let (team_id, team_name) = match team {
            Some(team) => (Some(team.id.get()), Some(team.name.into_inner())),
            None => (None, None),
        };

        Self {
            member_id: member.id.get(),
            user_name: member.user_name.map(UserName::into_inner),
            age: member.age,
            team_id,
            team_name,
        }
    }
}

impl MemberTeamDto {
    /// Rebuilds the member and team the projection was made from.
    pub fn into_parts(self) -> Result<MemberWithTeam, TypeConstraintError> {
        let team = match (self.team_id, self.team_name) {
            (Some(id), Some(name)) => Some(Team {
                id: TeamId::new(id)?,
                name: TeamName::new(name)?,
            }),
            (None, None) => None,
            _ => {
                return Err(TypeConstraintError::InvalidValue(
                    "team id and team name must be both present or both absent".to_string(),
                ));
            }
        };

        let member = Member {
            id: MemberId::new(self.member_id)?,
            user_name: self.user_name.map(UserName::new).transpose()?,
            age: self.age,
            team_id: team.as_ref().map(|team| team.id),
        };

        Ok((member, team))
    }
}

/// Name-and-age projection of a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub user_name: Option<String>,
    pub age: i32,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            user_name: member.user_name.map(UserName::into_inner),
            age: member.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: TeamId::new(2).unwrap(),
            name: TeamName::new("teamB").unwrap(),
        }
    }

    fn member(team_id: Option<TeamId>) -> Member {
        Member {
            id: MemberId::new(37).unwrap(),
            user_name: Some(UserName::new("member37").unwrap()),
            age: 37,
            team_id,
        }
    }

    #[test]
    fn projection_round_trips() {
        let row = (member(Some(team().id)), Some(team()));
        let dto = MemberTeamDto::from(row.clone());

        assert_eq!(dto.member_id, 37);
        assert_eq!(dto.user_name.as_deref(), Some("member37"));
        assert_eq!(dto.team_id, Some(2));
        assert_eq!(dto.team_name.as_deref(), Some("teamB"));
        assert_eq!(dto.into_parts().unwrap(), row);
    }

    #[test]
    fn teamless_member_projects_absent_team_fields() {
        let dto = MemberTeamDto::from((member(None), None));
        assert_eq!(dto.team_id, None);
        assert_eq!(dto.team_name, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["memberId"], 37);
        assert!(json["teamName"].is_null());
    }

    #[test]
    fn half_present_team_is_rejected() {
        let dto = MemberTeamDto {
            member_id: 1,
            user_name: None,
            age: 1,
            team_id: Some(1),
            team_name: None,
        };
        assert!(matches!(
            dto.into_parts(),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }
}
