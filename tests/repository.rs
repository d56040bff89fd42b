use member_search::domain::member::NewMember;
use member_search::domain::team::NewTeam;
use member_search::domain::types::{MemberId, TeamId, TeamName, UserName};
use member_search::repository::errors::RepositoryError;
use member_search::repository::{
    DieselRepository, MemberReader, MemberWriter, TeamReader, TeamWriter,
};
use member_search::services::ServiceError;
use member_search::services::seed::seed_demo_data;
use member_search::services::team::list_team_members;

mod common;

fn new_member(name: &str, age: i32, team_id: Option<TeamId>) -> NewMember {
    NewMember::new(Some(UserName::new(name).unwrap()), age, team_id)
}

#[test]
fn test_team_repository_crud() {
    let test_db = common::TestDb::new("test_team_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let team_a = repo.create_team(&NewTeam::try_new("teamA").unwrap()).unwrap();
    let team_b = repo.create_team(&NewTeam::try_new("teamB").unwrap()).unwrap();
    assert_ne!(team_a.id, team_b.id);

    let found = repo.get_team_by_id(team_b.id).unwrap().unwrap();
    assert_eq!(found.name.as_str(), "teamB");

    let by_name = repo
        .get_team_by_name(&TeamName::new("teamA").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, team_a.id);

    assert!(
        repo.get_team_by_name(&TeamName::new("teamC").unwrap())
            .unwrap()
            .is_none()
    );
    assert_eq!(repo.list_teams().unwrap().len(), 2);
}

#[test]
fn test_member_repository_crud() {
    let test_db = common::TestDb::new("test_member_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let team = repo.create_team(&NewTeam::try_new("teamA").unwrap()).unwrap();

    let alice = repo
        .create_member(&new_member("alice", 30, Some(team.id)))
        .unwrap();
    assert_eq!(alice.user_name.as_ref().unwrap().as_str(), "alice");
    assert_eq!(alice.team_id, Some(team.id));

    let anonymous = repo
        .create_member(&NewMember::try_new(Some("  ".into()), 5, None).unwrap())
        .unwrap();
    assert_eq!(anonymous.user_name, None);
    assert_eq!(anonymous.team_id, None);

    let inserted = repo
        .create_members(&[
            new_member("bob", 20, Some(team.id)),
            new_member("alice", 41, None),
        ])
        .unwrap();
    assert_eq!(inserted, 2);

    assert_eq!(repo.get_member_by_id(alice.id).unwrap(), Some(alice.clone()));
    assert_eq!(
        repo.get_member_by_id(MemberId::new(9_999).unwrap()).unwrap(),
        None
    );

    let all = repo.list_all_members().unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let alices = repo
        .find_members_by_user_name(&UserName::new("alice").unwrap())
        .unwrap();
    assert_eq!(alices.iter().map(|m| m.age).collect::<Vec<_>>(), vec![30, 41]);
}

#[test]
fn test_change_member_team() {
    let test_db = common::TestDb::new("test_change_member_team.db");
    let repo = DieselRepository::new(test_db.pool());
    let team_a = repo.create_team(&NewTeam::try_new("teamA").unwrap()).unwrap();
    let team_b = repo.create_team(&NewTeam::try_new("teamB").unwrap()).unwrap();
    let member = repo
        .create_member(&new_member("member1", 10, Some(team_a.id)))
        .unwrap();

    let moved = repo.change_member_team(member.id, Some(team_b.id)).unwrap();
    assert!(moved.belongs_to(team_b.id));
    assert!(repo.list_team_members(team_a.id).unwrap().is_empty());
    assert_eq!(repo.list_team_members(team_b.id).unwrap(), vec![moved]);

    let detached = repo.change_member_team(member.id, None).unwrap();
    assert_eq!(detached.team_id, None);

    let unknown_team = repo.change_member_team(member.id, Some(TeamId::new(77).unwrap()));
    assert!(matches!(unknown_team, Err(RepositoryError::NotFound)));
    assert_eq!(
        repo.get_member_by_id(member.id).unwrap().unwrap().team_id,
        None
    );

    let unknown_member = repo.change_member_team(MemberId::new(77).unwrap(), Some(team_a.id));
    assert!(matches!(unknown_member, Err(RepositoryError::NotFound)));
}

#[test]
fn test_team_members_are_derived_from_member_references() {
    let test_db = common::TestDb::new("test_team_members_derived.db");
    let repo = DieselRepository::new(test_db.pool());
    assert!(seed_demo_data(&repo).unwrap());

    let team_a = repo
        .get_team_by_name(&TeamName::new("teamA").unwrap())
        .unwrap()
        .unwrap();
    let members = list_team_members(&repo, team_a.id.get()).unwrap();
    assert_eq!(members.len(), 50);
    assert!(members.iter().all(|m| m.age % 2 == 0 && m.belongs_to(team_a.id)));

    assert!(matches!(
        list_team_members(&repo, 9_999),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_seed_demo_data_is_idempotent() {
    let test_db = common::TestDb::new("test_seed_demo_data_is_idempotent.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(seed_demo_data(&repo).unwrap());
    assert!(!seed_demo_data(&repo).unwrap());

    assert_eq!(repo.list_teams().unwrap().len(), 2);
    assert_eq!(repo.list_all_members().unwrap().len(), 100);
}
