//! Test fixture modules for database record creation.
//!
//! Each submodule provides insert helpers for one slice of the schema:
//!
//! - `catalog` - planets, people, and vehicles
//! - `favorite` - per user favorite entries
//! - `user` - user accounts

pub mod catalog;
pub mod favorite;
pub mod user;
