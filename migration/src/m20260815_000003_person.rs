use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000002_planet::Planet;

static IDX_PERSON_HOME_WORLD_ID: &str = "idx-person-home_world_id";
static FK_PERSON_HOME_WORLD_ID: &str = "fk-person-home_world_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string(Person::Name))
                    .col(string(Person::SkinColor))
                    .col(integer(Person::HomeWorldId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSON_HOME_WORLD_ID)
                    .table(Person::Table)
                    .col(Person::HomeWorldId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSON_HOME_WORLD_ID)
                    .from_tbl(Person::Table)
                    .from_col(Person::HomeWorldId)
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
                    .name(FK_PERSON_HOME_WORLD_ID)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSON_HOME_WORLD_ID)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    SkinColor,
    HomeWorldId,
}
