use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
