use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoritePersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePersonRepository<'a, C> {
    /// Creates a new instance of [`FavoritePersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite entry linking a user to a person
    ///
    /// Both the user and the person must exist, the foreign key constraints
    /// reject the insert otherwise. A duplicate (user, person) pair fails the
    /// unique index.
    pub async fn create(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::favorite_person::Model, DbErr> {
        let favorite = entity::favorite_person::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn find_by_user_and_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<Option<entity::favorite_person::Model>, DbErr> {
        entity::prelude::FavoritePerson::find()
            .filter(entity::favorite_person::Column::UserId.eq(user_id))
            .filter(entity::favorite_person::Column::PersonId.eq(person_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_person::Model>, DbErr> {
        entity::prelude::FavoritePerson::find()
            .filter(entity::favorite_person::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite entry by its own id
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePerson::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
