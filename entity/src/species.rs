use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub average_height: f64,
    pub average_lifespan: f64,
    pub language: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::user_favorite_species::Entity")]
    UserFavoriteSpecies,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::user_favorite_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteSpecies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
