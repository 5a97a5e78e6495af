use crate::server::{data::species::SpeciesRepository, model::species::CreateSpeciesParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
