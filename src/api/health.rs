//! Root and ping endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Plain-text greeting served at the root
pub async fn greeting() -> &'static str {
    "Biblio library management server is running"
}

#[derive(Serialize, ToSchema)]
pub struct PingResponse {
    /// Liveness acknowledgement
    pub message: String,
}

/// Liveness ping
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}
