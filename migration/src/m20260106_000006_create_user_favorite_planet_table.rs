use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_planet_table::Planet;
use super::m20260105_000004_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePlanet::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePlanet::UserId))
                    .col(integer(UserFavoritePlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_planet")
                            .col(UserFavoritePlanet::UserId)
                            .col(UserFavoritePlanet::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planet_user_id")
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planet_planet_id")
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoritePlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoritePlanet {
    Table,
    UserId,
    PlanetId,
}
