use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        player::{create_player, delete_player, get_players, update_player},
        tournament::{
            create_tournament, delete_tournament, get_tournament_by_id, get_tournament_players,
            get_tournaments, update_tournament,
        },
    },
    middleware::error_details::attach_error_details,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::tournament::create_tournament,
        crate::controller::tournament::get_tournaments,
        crate::controller::tournament::get_tournament_by_id,
        crate::controller::tournament::update_tournament,
        crate::controller::tournament::delete_tournament,
        crate::controller::tournament::get_tournament_players,
        crate::controller::player::create_player,
        crate::controller::player::get_players,
        crate::controller::player::update_player,
        crate::controller::player::delete_player,
    ),
    tags(
        (name = "tournament", description = "Tournament management endpoints"),
        (name = "player", description = "Player management endpoints")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Routes mirror the REST surface: tournament CRUD under `/api/tournaments`, player
/// CRUD under `/api/players`, plus Swagger UI serving the generated OpenAPI
/// document. The error-details middleware wraps every route so failed responses all
/// carry the structured error body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/tournaments",
            post(create_tournament).get(get_tournaments),
        )
        .route(
            "/api/tournaments/{id}",
            get(get_tournament_by_id)
                .put(update_tournament)
                .delete(delete_tournament),
        )
        .route("/api/tournaments/{id}/players", get(get_tournament_players))
        .route(
            "/api/players",
            post(create_player).get(get_players).put(update_player),
        )
        .route("/api/players/{id}", delete(delete_player))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(attach_error_details))
        .layer(CorsLayer::permissive())
}
