use diesel::prelude::*;
use member_search::db::run_migrations;
use member_search::schema::{members, teams};

mod common;

#[test]
fn test_creates_and_migrates_db() {
    let test_db = common::TestDb::new("test_creates_and_migrates_db.db");
    let mut conn = test_db.pool().get().expect("connection");

    let teams: i64 = teams::table.count().get_result(&mut conn).unwrap();
    let members: i64 = members::table.count().get_result(&mut conn).unwrap();
    assert_eq!((teams, members), (0, 0));
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    assert!(run_migrations(&test_db.pool()).is_ok());
}
