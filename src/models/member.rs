//! Diesel models for members.

use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};
use crate::domain::types::{MemberId, TeamId, TypeConstraintError, UserName};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub user_name: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub user_name: Option<&'a str>,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::try_from(member.id)?,
            user_name: member.user_name.map(UserName::new).transpose()?,
            age: member.age,
            team_id: member.team_id.map(TeamId::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            user_name: member.user_name.as_deref(),
            age: member.age,
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_newmember() {
        let domain = DomainNewMember::try_new(Some("member1".into()), 1, Some(2)).unwrap();
        let new: NewMember = (&domain).into();
        assert_eq!(new.user_name, Some("member1"));
        assert_eq!(new.age, 1);
        assert_eq!(new.team_id, Some(2));
    }

    #[test]
    fn member_into_domain() {
        let db = Member {
            id: 5,
            user_name: None,
            age: 40,
            team_id: None,
        };
        let domain = DomainMember::try_from(db).expect("valid member");
        assert_eq!(domain.id.get(), 5);
        assert_eq!(domain.user_name, None);
        assert_eq!(domain.age, 40);
        assert_eq!(domain.team_id, None);
    }

    #[test]
    fn member_with_invalid_team_reference_is_rejected() {
        let db = Member {
            id: 5,
            user_name: Some("m".into()),
            age: 1,
            team_id: Some(0),
        };
        assert_eq!(
            DomainMember::try_from(db),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
