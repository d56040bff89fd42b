//! Demo data: two teams and a hundred members.

use crate::domain::member::NewMember;
use crate::domain::team::NewTeam;
use crate::domain::types::UserName;
use crate::repository::{MemberWriter, TeamReader, TeamWriter};
use crate::services::ServiceResult;

pub const DEMO_MEMBER_COUNT: i32 = 100;

/// Inserts `teamA`, `teamB` and `member0..member99` (age = index, even
/// indices in `teamA`, odd in `teamB`).
///
/// Does nothing and returns `false` when any team already exists.
pub fn seed_demo_data<R>(repo: &R) -> ServiceResult<bool>
where
    R: TeamReader + TeamWriter + MemberWriter + ?Sized,
{
    if !repo.list_teams()?.is_empty() {
        log::info!("Store already contains teams, skipping demo data");
        return Ok(false);
    }

    let team_a = repo.create_team(&NewTeam::try_new("teamA")?)?;
    let team_b = repo.create_team(&NewTeam::try_new("teamB")?)?;

    let members = (0..DEMO_MEMBER_COUNT)
        .map(|i| {
            let team = if i % 2 == 0 { &team_a } else { &team_b };
            Ok(NewMember::new(
                Some(UserName::new(format!("member{i}"))?),
                i,
                Some(team.id),
            ))
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    let inserted = repo.create_members(&members)?;
    log::info!("Seeded {inserted} demo members into teamA and teamB");

    Ok(true)
}
