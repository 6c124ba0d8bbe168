use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find().all(self.db).await
    }

    /// Deletes a person along with any favorite entries referencing them
    ///
    /// Returns OK regardless of person existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    ///
    /// # Notes
    /// - Favorite entries are removed in a separate statement before the person
    ///   row, if you need transactional behavior pass a transaction as the connection
    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePerson::delete_many()
            .filter(entity::favorite_person::Column::PersonId.eq(person_id))
            .exec(self.db)
            .await?;

        entity::prelude::Person::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}
