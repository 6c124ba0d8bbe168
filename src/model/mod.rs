//! Application models and type definitions.
//!
//! This module contains the data transfer objects returned by the HTTP
//! surface along with the shared application state. DTOs control exactly
//! which entity fields are serialized; anything internal (password hashes,
//! foreign-key plumbing) stays out of the wire format.

pub mod api;
pub mod app;
pub mod catalog;
pub mod favorite;
pub mod user;
