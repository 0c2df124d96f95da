use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    service::player::PlayerService,
    state::AppState,
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Validation message for a blank name query parameter.
pub const NAME_PARAM_BLANK_MESSAGE: &str = "The name parameter must not be blank!";

/// Validation message for a player search with neither supported parameter.
pub const SEARCH_PARAM_REQUIRED_MESSAGE: &str =
    "Either the name or tournament_id parameter is required!";

#[derive(Deserialize)]
pub struct PlayerSearchParams {
    pub name: Option<String>,
    pub tournament_id: Option<i64>,
}

/// Create a new player.
///
/// Creates a player inside the tournament referenced by the payload. The referenced
/// tournament must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Player creation data (name and tournament reference)
///
/// # Returns
/// - `201 Created` - Successfully created player with its assigned id
/// - `400 Bad Request` - Field validation failed
/// - `404 Not Found` - Referenced tournament does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Referenced tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (tournament_id, params) = payload.into_params()?;

    let service = PlayerService::new(&state.db);

    let player = service.create(tournament_id, params).await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Search players by name or by owning tournament.
///
/// With a `name` parameter, returns every player whose name matches exactly; an
/// empty match set is a 404. With a `tournament_id` parameter, returns the players
/// owned by that tournament; an existing tournament with no players yields an empty
/// list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Search parameters (`name` or `tournament_id`)
///
/// # Returns
/// - `200 OK` - Matching players
/// - `400 Bad Request` - Blank name, or neither parameter supplied
/// - `404 Not Found` - No player with the name, or no tournament with the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(
        ("name" = Option<String>, Query, description = "Exact player name to match"),
        ("tournament_id" = Option<i64>, Query, description = "Owning tournament id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved players", body = Vec<PlayerDto>),
        (status = 400, description = "Invalid search parameters", body = ErrorDto),
        (status = 404, description = "No matching player or tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let players = match (params.name, params.tournament_id) {
        (Some(name), _) => {
            if name.trim().is_empty() {
                return Err(AppError::Validation(vec![
                    NAME_PARAM_BLANK_MESSAGE.to_string()
                ]));
            }
            service.get_players_by_name(&name).await?
        }
        (None, Some(tournament_id)) => service.get_players_by_tournament_id(tournament_id).await?,
        (None, None) => {
            return Err(AppError::Validation(vec![
                SEARCH_PARAM_REQUIRED_MESSAGE.to_string()
            ]));
        }
    };

    Ok((
        StatusCode::OK,
        Json(
            players
                .into_iter()
                .map(|player| player.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update a player.
///
/// Overwrites the id and name of the player selected by the payload's id. The
/// tournament reference is required by validation but never modified.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Updated player data
///
/// # Returns
/// - `200 OK` - Successfully updated player
/// - `400 Bad Request` - Field validation failed
/// - `404 Not Found` - No player with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (player_id, params) = payload.into_params()?;

    let service = PlayerService::new(&state.db);

    let player = service.update(player_id, params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Delete a player.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Player id to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted player
/// - `404 Not Found` - No player with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player id")
    ),
    responses(
        (status = 204, description = "Successfully deleted player"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
