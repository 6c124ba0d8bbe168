use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite entry linking a user to a planet
    ///
    /// Both the user and the planet must exist, the foreign key constraints
    /// reject the insert otherwise. A duplicate (user, planet) pair fails the
    /// unique index.
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn find_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite_planet::Model>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_planet::Model>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite entry by its own id
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
