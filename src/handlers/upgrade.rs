use crate::core::error::UpgradeError;
use crate::core::state::AppState;
use crate::models::api::{SuccessResponse, UpgradeRequest};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Queue an agent upgrade behind the simulated payment verification delay
///
/// POST /agent/upgrade {"user_id": ...}
///
/// Scheduling again before the delay elapses restarts it. The upgrade
/// itself lands from the background task; `GET /session` reflects the new
/// role once it has.
pub async fn upgrade_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpgradeRequest>,
) -> Result<Response, UpgradeError> {
    if state.directory.get_user(&request.user_id).is_none() {
        warn!(user_id = %request.user_id, "Agent upgrade for unknown user");
        return Err(UpgradeError::UserNotFound(request.user_id));
    }

    let delay = Duration::from_millis(state.config.auth.upgrade_delay_ms);
    state.upgrades.schedule(&request.user_id, delay);

    info!(
        user_id = %request.user_id,
        delay_ms = state.config.auth.upgrade_delay_ms,
        "Agent upgrade scheduled"
    );

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Agent upgrade scheduled".to_string(),
        }),
    )
        .into_response())
}

/// Drop a pending agent upgrade
///
/// POST /agent/upgrade/cancel {"user_id": ...}
pub async fn cancel_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpgradeRequest>,
) -> Result<Response, UpgradeError> {
    if !state.upgrades.cancel(&request.user_id) {
        return Err(UpgradeError::NoPendingUpgrade(request.user_id));
    }

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Agent upgrade cancelled".to_string(),
        }),
    )
        .into_response())
}
