use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        player::PlayerDto,
        tournament::{CreateTournamentDto, TournamentDto, UpdateTournamentDto},
    },
    service::tournament::TournamentService,
    state::AppState,
};

/// Tag for grouping tournament endpoints in OpenAPI documentation
pub static TOURNAMENT_TAG: &str = "tournament";

/// Create a new tournament.
///
/// Creates a tournament with the caller-supplied id and reward amount, inserting any
/// supplied player drafts as owned players. The id must not already be in use.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Tournament creation data (id, reward amount, optional players)
///
/// # Returns
/// - `201 Created` - Successfully created tournament
/// - `400 Bad Request` - Field validation failed or the id is already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    request_body = CreateTournamentDto,
    responses(
        (status = 201, description = "Successfully created tournament", body = TournamentDto),
        (status = 400, description = "Invalid tournament data or duplicate id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.into_params()?;

    let service = TournamentService::new(&state.db);

    let tournament = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(tournament.into_dto())))
}

/// Get all tournaments.
///
/// Returns every tournament together with its owned players, in store order.
///
/// # Returns
/// - `200 OK` - List of tournaments
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tournaments", body = Vec<TournamentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournaments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = TournamentService::new(&state.db);

    let tournaments = service.get_tournaments().await?;

    Ok((
        StatusCode::OK,
        Json(
            tournaments
                .into_iter()
                .map(|tournament| tournament.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a tournament by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Tournament id to fetch
///
/// # Returns
/// - `200 OK` - Tournament details including owned players
/// - `404 Not Found` - No tournament with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i64, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tournament", body = TournamentDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = TournamentService::new(&state.db);

    let tournament = service.get_tournament_by_id(id).await?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Update a tournament.
///
/// Applies the reward amount to the tournament with the given id. When the payload
/// carries a player list, the owned player set is replaced by it; omitting the list
/// leaves the players untouched.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Tournament id to update
/// - `payload` - Updated tournament data
///
/// # Returns
/// - `200 OK` - Successfully updated tournament
/// - `400 Bad Request` - Field validation failed
/// - `404 Not Found` - No tournament with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i64, Path, description = "Tournament id")
    ),
    request_body = UpdateTournamentDto,
    responses(
        (status = 200, description = "Successfully updated tournament", body = TournamentDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload.into_params()?;

    let service = TournamentService::new(&state.db);

    let tournament = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Delete a tournament.
///
/// Removes the tournament and every player it owns.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Tournament id to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted tournament
/// - `404 Not Found` - No tournament with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i64, Path, description = "Tournament id")
    ),
    responses(
        (status = 204, description = "Successfully deleted tournament"),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = TournamentService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the players owned by a tournament.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Tournament id whose players to fetch
///
/// # Returns
/// - `200 OK` - List of owned players; empty when the tournament has none
/// - `404 Not Found` - No tournament with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/players",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i64, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved players", body = Vec<PlayerDto>),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament_players(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = TournamentService::new(&state.db);

    let players = service.get_players(id).await?;

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
