//! Tests for person controller endpoints.
//!
//! This module contains integration tests for the person catalog HTTP
//! endpoints, covering list retrieval and single-person lookups.

mod get_people;
mod get_person;

use super::*;
