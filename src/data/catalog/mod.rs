//! Repositories for the catalog tables.

pub mod person;
pub mod planet;
pub mod vehicle;
