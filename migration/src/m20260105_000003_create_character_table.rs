use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_planet_table::Planet;
use super::m20260105_000002_create_species_table::Species;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string_null(Character::HairColor))
                    .col(string_null(Character::EyeColor))
                    .col(integer(Character::HomeworldId))
                    .col(integer(Character::SpeciesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_homeworld_id")
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_species_id")
                            .from(Character::Table, Character::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    HairColor,
    EyeColor,
    HomeworldId,
    SpeciesId,
}
