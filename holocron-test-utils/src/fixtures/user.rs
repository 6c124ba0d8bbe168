use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
