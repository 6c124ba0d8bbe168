//! Tests for favorite controller endpoints.
//!
//! This module contains integration tests for the favorite management HTTP
//! endpoints, covering favorite creation and removal for planets and people
//! plus the full add/duplicate/remove lifecycle through the router.

mod favorites_flow;

use super::*;
