use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld_id: i32,
    pub species_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Species,
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
