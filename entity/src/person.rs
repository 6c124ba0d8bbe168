use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub skin_color: String,
    pub home_world_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeWorldId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(has_many = "super::favorite_person::Entity")]
    FavoritePerson,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::favorite_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
