use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000003_person::Person};

static IDX_FAVORITE_PERSON_USER_ID_PERSON_ID: &str = "idx-favorite_person-user_id-person_id";
static FK_FAVORITE_PERSON_USER_ID: &str = "fk-favorite_person-user_id";
static FK_FAVORITE_PERSON_PERSON_ID: &str = "fk-favorite_person-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePerson::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePerson::Id))
                    .col(integer(FavoritePerson::UserId))
                    .col(integer(FavoritePerson::PersonId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PERSON_USER_ID_PERSON_ID)
                    .table(FavoritePerson::Table)
                    .col(FavoritePerson::UserId)
                    .col(FavoritePerson::PersonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PERSON_USER_ID)
                    .from_tbl(FavoritePerson::Table)
                    .from_col(FavoritePerson::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PERSON_PERSON_ID)
                    .from_tbl(FavoritePerson::Table)
                    .from_col(FavoritePerson::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PERSON_PERSON_ID)
                    .table(FavoritePerson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PERSON_USER_ID)
                    .table(FavoritePerson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PERSON_USER_ID_PERSON_ID)
                    .table(FavoritePerson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePerson::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePerson {
    Table,
    Id,
    UserId,
    PersonId,
}
