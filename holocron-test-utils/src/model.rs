//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models
//! used throughout the test utilities.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the person database model.
pub type PersonModel = entity::person::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the favorite planet database model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for the favorite person database model.
pub type FavoritePersonModel = entity::favorite_person::Model;

/// Type alias for the favorite vehicle database model.
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;
