use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PersonModel, PlanetModel, VehicleModel},
    TestSetup,
};

impl TestSetup {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set("arid".to_string()),
            gravity: ActiveValue::Set("1 standard".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_person(
        &self,
        name: &str,
        home_world_id: i32,
    ) -> Result<PersonModel, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            skin_color: ActiveValue::Set("fair".to_string()),
            home_world_id: ActiveValue::Set(home_world_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                crew: ActiveValue::Set("1".to_string()),
                consumables: ActiveValue::Set("2 months".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
