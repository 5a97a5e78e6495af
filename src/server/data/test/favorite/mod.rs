use crate::server::{data::favorite::FavoriteRepository, model::favorite::FavoriteKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod exists;
mod get_for_users;
mod remove;
