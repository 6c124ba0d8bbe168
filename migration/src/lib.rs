pub use sea_orm_migration::prelude::*;

mod m20260815_000001_user;
mod m20260815_000002_planet;
mod m20260815_000003_person;
mod m20260815_000004_vehicle;
mod m20260815_000005_favorite_planet;
mod m20260815_000006_favorite_person;
mod m20260815_000007_favorite_vehicle;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_user::Migration),
            Box::new(m20260815_000002_planet::Migration),
            Box::new(m20260815_000003_person::Migration),
            Box::new(m20260815_000004_vehicle::Migration),
            Box::new(m20260815_000005_favorite_planet::Migration),
            Box::new(m20260815_000006_favorite_person::Migration),
            Box::new(m20260815_000007_favorite_vehicle::Migration),
        ]
    }
}
