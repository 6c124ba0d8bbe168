//! HTTP controller endpoints for the holocron web API.
//!
//! This module contains Axum handlers for the catalog read routes and the
//! favorite management routes. Controllers handle HTTP requests, interact with
//! repositories and services, and return appropriate HTTP responses. They use
//! utoipa for OpenAPI documentation.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
