use serde::{Deserialize, Serialize};

/// A planet from the catalog.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    /// Surrogate ID of the planet.
    pub id: i32,
    /// Planet name.
    pub name: String,
    /// Climate description.
    pub climate: String,
    /// Gravity description.
    pub gravity: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            gravity: planet.gravity,
        }
    }
}

/// A person from the catalog.
///
/// The home world foreign key is internal plumbing and not serialized.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    /// Surrogate ID of the person.
    pub id: i32,
    /// Person name.
    pub name: String,
    /// Skin color description.
    pub skin_color: String,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            skin_color: person.skin_color,
        }
    }
}
