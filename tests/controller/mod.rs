//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, and error handling for all
//! API endpoints.

mod favorite;
mod person;
mod user;

use holocron_test_utils::prelude::*;
