use serde::{Deserialize, Serialize};

use crate::domain::types::{TeamId, TeamName, TypeConstraintError};

/// A team members can belong to.
///
/// The list of members is not part of the entity; it is always derived by
/// querying members whose team reference points at this team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }

    /// Builds a team payload from a raw name.
    pub fn try_new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(TeamName::new(name)?))
    }
}
