use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_species_table::Species;
use super::m20260105_000004_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteSpecies::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteSpecies::UserId))
                    .col(integer(UserFavoriteSpecies::SpeciesId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_species")
                            .col(UserFavoriteSpecies::UserId)
                            .col(UserFavoriteSpecies::SpeciesId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_species_user_id")
                            .from(UserFavoriteSpecies::Table, UserFavoriteSpecies::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_species_species_id")
                            .from(UserFavoriteSpecies::Table, UserFavoriteSpecies::SpeciesId)
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
            .drop_table(Table::drop().table(UserFavoriteSpecies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteSpecies {
    Table,
    UserId,
    SpeciesId,
}
