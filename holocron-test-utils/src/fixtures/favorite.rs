use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoritePersonModel, FavoritePlanetModel, FavoriteVehicleModel},
    TestSetup,
};

impl TestSetup {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(entity::prelude::FavoritePlanet::insert(
            entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<FavoritePersonModel, TestError> {
        Ok(entity::prelude::FavoritePerson::insert(
            entity::favorite_person::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                person_id: ActiveValue::Set(person_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, TestError> {
        Ok(entity::prelude::FavoriteVehicle::insert(
            entity::favorite_vehicle::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
