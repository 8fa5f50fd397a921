// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Session endpoints
        .route("/login", post(crate::handlers::auth::login_handler))
        .route("/logout", post(crate::handlers::auth::logout_handler))
        .route("/session", get(crate::handlers::auth::session_handler))

        // Catalog endpoints
        .route("/packages", get(crate::handlers::packages::list_handler))

        // Registration endpoints
        .route("/registrations", get(crate::handlers::registrations::list_handler))
        .route("/registration/create", post(crate::handlers::registrations::create_handler))
        .route("/registration/status", post(crate::handlers::registrations::status_handler))
        .route("/registration/payment", post(crate::handlers::registrations::payment_handler))
        .route("/registration/document", post(crate::handlers::registrations::document_handler))

        // Agent upgrade endpoints
        .route("/agent/upgrade", post(crate::handlers::upgrade::upgrade_handler))
        .route("/agent/upgrade/cancel", post(crate::handlers::upgrade::cancel_handler))

        // E-learning endpoints
        .route("/courses", get(crate::handlers::courses::list_handler))
        .route("/course/start", post(crate::handlers::courses::start_handler))
        .route("/course/lesson/complete", post(crate::handlers::courses::complete_lesson_handler))
        .route("/course/certificate", post(crate::handlers::courses::certificate_handler))
        .route("/course/progress", get(crate::handlers::courses::progress_handler))

        // Dashboard figures
        .route("/summary", get(crate::handlers::summary::summary_handler))
        .route("/summary/agent", get(crate::handlers::summary::agent_summary_handler))

        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
