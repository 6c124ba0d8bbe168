//! Repositories for the favorite entry tables.
//!
//! One repository per favorited target kind. Both expose the same method
//! shape so the favorite service treats planets and people uniformly.

pub mod person;
pub mod planet;
