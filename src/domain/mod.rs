//! Domain entities and search vocabulary for members and teams.

pub mod member;
pub mod search;
pub mod team;
pub mod types;
