use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub crew: String,
    pub consumables: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_vehicle::Entity")]
    FavoriteVehicle,
}

impl Related<super::favorite_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
