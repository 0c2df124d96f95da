use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{error::ErrorMessages, model::api::ErrorDto};

/// Replaces the body of failed responses with the structured error payload.
///
/// Handlers surface failures as `AppError`, whose `IntoResponse` impl records the
/// status code and stashes the human-readable messages in the response extensions.
/// Only this layer sees the request, so it contributes the request path and the
/// timestamp, producing the `{ timestamp, messages, path }` body every failed
/// response carries.
pub async fn attach_error_details(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let status = response.status();
    if let Some(ErrorMessages(messages)) = response.extensions_mut().remove::<ErrorMessages>() {
        return (
            status,
            Json(ErrorDto {
                timestamp: Utc::now(),
                messages,
                path,
            }),
        )
            .into_response();
    }

    response
}
