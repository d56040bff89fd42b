//! DTO modules that bridge services with callers.

pub mod api;
pub mod member;
