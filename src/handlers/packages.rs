use crate::core::state::AppState;
use crate::models::package::Package;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// The package catalog, sorted by id
///
/// GET /packages
pub async fn list_handler(State(state): State<Arc<AppState>>) -> Response {
    let packages: Vec<Package> = state
        .packages
        .list()
        .iter()
        .map(|package| (**package).clone())
        .collect();

    (StatusCode::OK, Json(packages)).into_response()
}
