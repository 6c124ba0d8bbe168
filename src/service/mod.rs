//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic on
//! top of the repositories. The favorite service owns the existence and
//! uniqueness checks that guard favorite creation and removal.

pub mod favorite;
