use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Deletes a planet along with any favorite entries referencing it
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    ///
    /// # Notes
    /// - Favorite entries are removed in a separate statement before the planet
    ///   row, if you need transactional behavior pass a transaction as the connection
    /// - Deleting a planet still referenced as a person's home world fails the
    ///   foreign key constraint, person rows are never removed here
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await?;

        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
