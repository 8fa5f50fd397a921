use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{LoginRequest, LoginResponse, SessionResponse, SuccessResponse};
use crate::utils::auth::verify_secret;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Sign a directory user in
///
/// POST /login {"email": ..., "password": ...}
///
/// The password is checked against the one configured shared secret; on
/// success the session is set and persisted to the snapshot file. Failure
/// leaves no trace.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    let user = match state.directory.find_by_email(&request.email) {
        Some(user) => user,
        None => {
            warn!(email = %request.email, "Login attempt with unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !verify_secret(&request.password, &state.config.auth.shared_secret) {
        warn!(email = %request.email, "Login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    state.session.sign_in(Arc::clone(&user));

    if let Err(e) = state.snapshot.save(&user) {
        warn!(error = %e, "Failed to persist session snapshot");
        // Continue anyway - the in-memory session is set
    }

    info!(user_id = %user.id, role = ?user.role, "User signed in");

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            user: (*user).clone(),
        }),
    )
        .into_response())
}

/// Sign the session user out
///
/// POST /logout
///
/// Clears the session, removes the snapshot file, and drops any pending
/// agent upgrade for the user who is leaving.
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> Response {
    if let Some(user) = state.session.current() {
        if state.upgrades.cancel(&user.id) {
            info!(user_id = %user.id, "Pending agent upgrade dropped on logout");
        }
        info!(user_id = %user.id, "User signed out");
    }

    state.session.sign_out();

    if let Err(e) = state.snapshot.clear() {
        warn!(error = %e, "Failed to remove session snapshot");
        // Continue anyway - the in-memory session is cleared
    }

    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Signed out".to_string(),
        }),
    )
        .into_response()
}

/// Who is signed in
///
/// GET /session
pub async fn session_handler(State(state): State<Arc<AppState>>) -> Response {
    let user = state.session.current().map(|user| (*user).clone());
    (StatusCode::OK, Json(SessionResponse { user })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::apply_seed_data;
    use crate::models::user::Role;
    use tempfile::TempDir;

    fn create_test_state() -> (Arc<AppState>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config: Config = toml::from_str(&format!(
            r#"
                [server]
                port = 8080

                [auth]
                shared_secret = "123456"
                session_file = "{}"

                [logging]
            "#,
            temp_dir.path().join("session.json").display()
        ))
        .unwrap();

        let state = Arc::new(AppState::new(config));
        apply_seed_data(&state);
        (state, temp_dir)
    }

    #[tokio::test]
    async fn test_login_success_sets_session_and_snapshot() {
        let (state, _dir) = create_test_state();

        let response = login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "jamaah@test.com".to_string(),
                password: "123456".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let session_user = state.session.current().unwrap();
        assert_eq!(session_user.id, "1");
        assert_eq!(session_user.role, Role::Pilgrim);

        let saved = state.snapshot.load().unwrap().unwrap();
        assert_eq!(saved.id, "1");
    }

    #[tokio::test]
    async fn test_login_wrong_password_has_no_side_effects() {
        let (state, _dir) = create_test_state();

        let result = login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "jamaah@test.com".to_string(),
                password: "654321".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        assert!(!state.session.is_signed_in());
        assert!(state.snapshot.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let (state, _dir) = create_test_state();

        let result = login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "nobody@test.com".to_string(),
                password: "123456".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        assert!(!state.session.is_signed_in());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_snapshot() {
        let (state, _dir) = create_test_state();

        login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "agen@test.com".to_string(),
                password: "123456".to_string(),
            }),
        )
        .await
        .unwrap();

        let response = logout_handler(State(Arc::clone(&state))).await;
        assert_eq!(response.status(), StatusCode::OK);

        assert!(!state.session.is_signed_in());
        assert!(state.snapshot.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_cancels_pending_upgrade() {
        let (state, _dir) = create_test_state();

        login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "jamaah@test.com".to_string(),
                password: "123456".to_string(),
            }),
        )
        .await
        .unwrap();

        state
            .upgrades
            .schedule("1", std::time::Duration::from_secs(60));
        assert!(state.upgrades.has_pending("1"));

        logout_handler(State(Arc::clone(&state))).await;
        assert!(!state.upgrades.has_pending("1"));
    }

    #[tokio::test]
    async fn test_logout_without_session_is_fine() {
        let (state, _dir) = create_test_state();
        let response = logout_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_handler_reports_current_user() {
        let (state, _dir) = create_test_state();

        let response = session_handler(State(Arc::clone(&state))).await;
        assert_eq!(response.status(), StatusCode::OK);

        login_handler(
            State(Arc::clone(&state)),
            Json(LoginRequest {
                email: "admin@test.com".to_string(),
                password: "123456".to_string(),
            }),
        )
        .await
        .unwrap();

        use http_body_util::BodyExt;
        let response = session_handler(State(state)).await;
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["user"]["id"], "5");
        assert_eq!(body["user"]["role"], "admin");
    }
}
