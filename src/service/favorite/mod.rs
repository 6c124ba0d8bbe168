//! Favorite management service layer.
//!
//! This module contains the business logic for per-user favorites. It
//! coordinates the user, catalog, and favorite repositories, running the
//! existence and uniqueness checks that decide which client-facing failure a
//! request maps to before any row is written.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        catalog::{person::PersonRepository, planet::PlanetRepository},
        favorite::{person::FavoritePersonRepository, planet::FavoritePlanetRepository},
        user::UserRepository,
    },
    error::{favorite::FavoriteError, Error},
    model::favorite::{FavoritePersonDto, FavoritePlanetDto, UserFavoritesDto},
};

/// Service for managing a user's favorite planets and people.
///
/// Favorite rows are only ever created and destroyed through this service so
/// the checks below are the single place the favorite invariants live.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a planet to a user's favorites
    ///
    /// # Behavior
    /// - The user must exist, otherwise [`FavoriteError::UserNotFound`] is returned
    /// - The planet must exist, otherwise [`FavoriteError::PlanetNotFound`] is
    ///   returned. This check runs before the duplicate check, a stale favorite
    ///   entry for a planet that no longer exists still reports the planet as missing
    /// - The pair must not already be favorited, otherwise
    ///   [`FavoriteError::PlanetAlreadyFavorited`] is returned
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetDto)` - The created favorite entry
    /// - `Err(Error::FavoriteError(_))` - One of the checks above failed
    /// - `Err(Error::DbErr(_))` - Database operation failed, including a racing
    ///   duplicate insert rejected by the unique index
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        if user_repo.get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if planet_repo.get(planet_id).await?.is_none() {
            return Err(FavoriteError::PlanetNotFound(planet_id).into());
        }

        if favorite_repo
            .find_by_user_and_planet(user_id, planet_id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::PlanetAlreadyFavorited(user_id, planet_id).into());
        }

        let favorite = favorite_repo.create(user_id, planet_id).await?;

        tracing::info!(
            "User ID {} favorited planet ID {} (entry ID {})",
            user_id,
            planet_id,
            favorite.id
        );

        Ok(FavoritePlanetDto::from(favorite))
    }

    /// Removes a planet from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - The favorite entry was deleted
    /// - `Err(Error::FavoriteError(_))` - The user has no favorite entry for the planet
    /// - `Err(Error::DbErr(_))` - Database operation failed
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let favorite = match favorite_repo
            .find_by_user_and_planet(user_id, planet_id)
            .await?
        {
            Some(favorite) => favorite,
            None => {
                return Err(FavoriteError::FavoritePlanetNotFound(user_id, planet_id).into());
            }
        };

        favorite_repo.delete(favorite.id).await?;

        Ok(())
    }

    /// Adds a person to a user's favorites
    ///
    /// Runs the same check sequence as [`FavoriteService::add_planet`] with the
    /// person-flavored failures: user existence, person existence, then the
    /// duplicate check.
    pub async fn add_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<FavoritePersonDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let person_repo = PersonRepository::new(self.db);
        let favorite_repo = FavoritePersonRepository::new(self.db);

        if user_repo.get(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        if person_repo.get(person_id).await?.is_none() {
            return Err(FavoriteError::PersonNotFound(person_id).into());
        }

        if favorite_repo
            .find_by_user_and_person(user_id, person_id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::PersonAlreadyFavorited(user_id, person_id).into());
        }

        let favorite = favorite_repo.create(user_id, person_id).await?;

        tracing::info!(
            "User ID {} favorited person ID {} (entry ID {})",
            user_id,
            person_id,
            favorite.id
        );

        Ok(FavoritePersonDto::from(favorite))
    }

    /// Removes a person from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - The favorite entry was deleted
    /// - `Err(Error::FavoriteError(_))` - The user has no favorite entry for the person
    /// - `Err(Error::DbErr(_))` - Database operation failed
    pub async fn remove_person(&self, user_id: i32, person_id: i32) -> Result<(), Error> {
        let favorite_repo = FavoritePersonRepository::new(self.db);

        let favorite = match favorite_repo
            .find_by_user_and_person(user_id, person_id)
            .await?
        {
            Some(favorite) => favorite,
            None => {
                return Err(FavoriteError::FavoritePersonNotFound(user_id, person_id).into());
            }
        };

        favorite_repo.delete(favorite.id).await?;

        Ok(())
    }

    /// Lists a user's favorite planets and people in storage order
    ///
    /// Unknown user IDs are not rejected, they yield empty lists.
    pub async fn get_for_user(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let favorite_planet_repo = FavoritePlanetRepository::new(self.db);
        let favorite_person_repo = FavoritePersonRepository::new(self.db);

        let favorite_planets = favorite_planet_repo
            .get_many_by_user_id(user_id)
            .await?
            .into_iter()
            .map(FavoritePlanetDto::from)
            .collect();

        let favorite_person = favorite_person_repo
            .get_many_by_user_id(user_id)
            .await?
            .into_iter()
            .map(FavoritePersonDto::from)
            .collect();

        Ok(UserFavoritesDto {
            favorite_planets,
            favorite_person,
        })
    }
}
