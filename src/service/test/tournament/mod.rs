use crate::error::AppError;
use crate::model::player::PlayerDraft;
use crate::model::tournament::{CreateTournamentParams, UpdateTournamentParams};
use crate::service::tournament::TournamentService;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_players;
mod get_tournament_by_id;
mod get_tournaments;
