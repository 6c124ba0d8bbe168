//! Holocron server application core modules.
//!
//! This crate contains all server-side functionality for the Holocron catalog
//! API, including HTTP routing, the planet/person/vehicle catalog, user
//! accounts, and per-user favorite management backed by a relational store.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
