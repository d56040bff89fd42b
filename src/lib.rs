//! Filtered, sorted and paginated search over team members.
//!
//! Members optionally belong to a team. A search combines optional
//! equality, range and substring criteria, always left-joins the team so
//! teamless members remain candidates, and returns either every match or a
//! single page with its total.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
