use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000002_planet::Planet};

static IDX_FAVORITE_PLANET_USER_ID_PLANET_ID: &str = "idx-favorite_planet-user_id-planet_id";
static FK_FAVORITE_PLANET_USER_ID: &str = "fk-favorite_planet-user_id";
static FK_FAVORITE_PLANET_PLANET_ID: &str = "fk-favorite_planet-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanet::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanet::Id))
                    .col(integer(FavoritePlanet::UserId))
                    .col(integer(FavoritePlanet::PlanetId))
                    .to_owned(),
            )
            .await?;

        // Unique pair also settles concurrent duplicate inserts.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANET_USER_ID_PLANET_ID)
                    .table(FavoritePlanet::Table)
                    .col(FavoritePlanet::UserId)
                    .col(FavoritePlanet::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_USER_ID)
                    .from_tbl(FavoritePlanet::Table)
                    .from_col(FavoritePlanet::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_PLANET_ID)
                    .from_tbl(FavoritePlanet::Table)
                    .from_col(FavoritePlanet::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_PLANET_ID)
                    .table(FavoritePlanet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_USER_ID)
                    .table(FavoritePlanet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PLANET_USER_ID_PLANET_ID)
                    .table(FavoritePlanet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanet {
    Table,
    Id,
    UserId,
    PlanetId,
}
