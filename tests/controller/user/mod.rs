//! Tests for user controller endpoints.
//!
//! This module contains integration tests for user-related HTTP endpoints,
//! including account listing and per-user favorites retrieval.

mod get_users;

use super::*;
