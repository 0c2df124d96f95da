use crate::data::player::PlayerRepository;
use crate::model::player::{CreatePlayerParams, UpdatePlayerParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_tournament_id;
