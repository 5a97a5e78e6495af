use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_character_table::Character;
use super::m20260105_000004_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteCharacter::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteCharacter::UserId))
                    .col(integer(UserFavoriteCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_character")
                            .col(UserFavoriteCharacter::UserId)
                            .col(UserFavoriteCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_character_user_id")
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_character_character_id")
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteCharacter {
    Table,
    UserId,
    CharacterId,
}
