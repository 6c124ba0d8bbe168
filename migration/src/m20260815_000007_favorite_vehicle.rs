use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000004_vehicle::Vehicle};

static IDX_FAVORITE_VEHICLE_USER_ID_VEHICLE_ID: &str = "idx-favorite_vehicle-user_id-vehicle_id";
static FK_FAVORITE_VEHICLE_USER_ID: &str = "fk-favorite_vehicle-user_id";
static FK_FAVORITE_VEHICLE_VEHICLE_ID: &str = "fk-favorite_vehicle-vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicle::Id))
                    .col(integer(FavoriteVehicle::UserId))
                    .col(integer(FavoriteVehicle::VehicleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID_VEHICLE_ID)
                    .table(FavoriteVehicle::Table)
                    .col(FavoriteVehicle::UserId)
                    .col(FavoriteVehicle::VehicleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_VEHICLE_USER_ID)
                    .from_tbl(FavoriteVehicle::Table)
                    .from_col(FavoriteVehicle::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_VEHICLE_VEHICLE_ID)
                    .from_tbl(FavoriteVehicle::Table)
                    .from_col(FavoriteVehicle::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_VEHICLE_VEHICLE_ID)
                    .table(FavoriteVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_VEHICLE_USER_ID)
                    .table(FavoriteVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID_VEHICLE_ID)
                    .table(FavoriteVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteVehicle {
    Table,
    Id,
    UserId,
    VehicleId,
}
