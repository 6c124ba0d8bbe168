use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }
}
