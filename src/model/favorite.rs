use serde::{Deserialize, Serialize};

/// A favorite entry linking a user to a planet.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    /// Surrogate ID of the favorite entry.
    pub id: i32,
    /// ID of the owning user.
    pub user_id: i32,
    /// ID of the favorited planet.
    pub planet_id: i32,
}

impl From<entity::favorite_planet::Model> for FavoritePlanetDto {
    fn from(favorite: entity::favorite_planet::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

/// A favorite entry linking a user to a person.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePersonDto {
    /// Surrogate ID of the favorite entry.
    pub id: i32,
    /// ID of the owning user.
    pub user_id: i32,
    /// ID of the favorited person.
    pub person_id: i32,
}

impl From<entity::favorite_person::Model> for FavoritePersonDto {
    fn from(favorite: entity::favorite_person::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            person_id: favorite.person_id,
        }
    }
}

/// Everything a single user has favorited, as two parallel lists.
///
/// Field names match the wire format, `favorite_person` singular included.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    /// The user's favorite planets in storage order.
    pub favorite_planets: Vec<FavoritePlanetDto>,
    /// The user's favorite people in storage order.
    pub favorite_person: Vec<FavoritePersonDto>,
}
