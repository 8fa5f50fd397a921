use crate::core::error::CourseError;
use crate::core::state::AppState;
use crate::elearning::scoring::score_quiz;
use crate::models::api::{
    CertificateRequest, CompleteLessonRequest, CompleteLessonResponse, CourseListQuery,
    ProgressQuery, ProgressResponse, StartCourseRequest, SuccessResponse,
};
use crate::models::course::{Course, LessonKind};
use crate::utils::time::current_timestamp;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Courses offered to a role
///
/// GET /courses?role=<role>
///
/// Without an explicit role the session user's role is used.
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CourseListQuery>,
) -> Result<Response, CourseError> {
    let role = match params.role {
        Some(role) => role,
        None => match state.session.current() {
            Some(user) => user.role,
            None => return Err(CourseError::NotSignedIn),
        },
    };

    let courses: Vec<Course> = state
        .courses
        .for_role(role)
        .iter()
        .map(|course| (**course).clone())
        .collect();

    Ok((StatusCode::OK, Json(courses)).into_response())
}

/// Open a progress record for the session user
///
/// POST /course/start {"course_id": ...}
///
/// Starting an already-started course changes nothing.
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartCourseRequest>,
) -> Result<Response, CourseError> {
    let user = state.session.current().ok_or(CourseError::NotSignedIn)?;

    let course = match state.courses.get_course(&request.course_id) {
        Some(course) => course,
        None => {
            warn!(course_id = %request.course_id, "Start of unknown course");
            return Err(CourseError::CourseNotFound(request.course_id));
        }
    };

    let created = state.progress.start(&course, &user.id, current_timestamp());

    if created {
        info!(course_id = %course.id, user_id = %user.id, "Course started");
    }

    let message = if created {
        "Course started"
    } else {
        "Course already started"
    };

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response())
}

/// Mark a lesson complete for the session user
///
/// POST /course/lesson/complete {"course_id": ..., "lesson_id": ..., "answers": [...]}
///
/// For quiz lessons the submitted answer indices are scored here and the
/// score recorded with the completion.
pub async fn complete_lesson_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompleteLessonRequest>,
) -> Result<Response, CourseError> {
    let user = state.session.current().ok_or(CourseError::NotSignedIn)?;

    let course = match state.courses.get_course(&request.course_id) {
        Some(course) => course,
        None => {
            warn!(course_id = %request.course_id, "Lesson completion for unknown course");
            return Err(CourseError::CourseNotFound(request.course_id));
        }
    };

    let score = request.answers.as_deref().and_then(|answers| {
        course
            .lessons
            .iter()
            .find(|lesson| lesson.id == request.lesson_id && lesson.kind == LessonKind::Quiz)
            .map(|lesson| score_quiz(lesson, answers))
    });

    let progress = match state.progress.complete_lesson(
        &course,
        &user.id,
        &request.lesson_id,
        score,
        current_timestamp(),
    ) {
        Some(progress) => progress,
        None => {
            warn!(
                course_id = %course.id,
                user_id = %user.id,
                "Lesson completion without a started course"
            );
            return Err(CourseError::NotStarted(request.course_id));
        }
    };

    info!(
        course_id = %course.id,
        user_id = %user.id,
        lesson_id = %request.lesson_id,
        progress = progress.progress,
        score = ?score,
        "Lesson completed"
    );

    Ok((
        StatusCode::OK,
        Json(CompleteLessonResponse {
            success: true,
            score,
            progress,
        }),
    )
        .into_response())
}

/// Issue the completion certificate for the session user
///
/// POST /course/certificate {"course_id": ...}
pub async fn certificate_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CertificateRequest>,
) -> Result<Response, CourseError> {
    let user = state.session.current().ok_or(CourseError::NotSignedIn)?;

    let progress = state
        .progress
        .get(&request.course_id, &user.id)
        .ok_or_else(|| CourseError::NotStarted(request.course_id.clone()))?;

    if progress.progress != 100 {
        warn!(
            course_id = %request.course_id,
            user_id = %user.id,
            progress = progress.progress,
            "Certificate requested before completion"
        );
        return Err(CourseError::Incomplete {
            progress: progress.progress,
        });
    }

    state.progress.issue_certificate(&request.course_id, &user.id);

    info!(course_id = %request.course_id, user_id = %user.id, "Certificate issued");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Certificate issued".to_string(),
        }),
    )
        .into_response())
}

/// The session user's progress on one course
///
/// GET /course/progress?course_id=<id>
pub async fn progress_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProgressQuery>,
) -> Result<Response, CourseError> {
    let user = state.session.current().ok_or(CourseError::NotSignedIn)?;

    let progress = state.progress.get(&params.course_id, &user.id);

    Ok((StatusCode::OK, Json(ProgressResponse { progress })).into_response())
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

    fn sign_in_agent(state: &Arc<AppState>) {
        let agent = state.directory.get_user("2").unwrap();
        state.session.sign_in(agent);
    }

    async fn complete(
        state: &Arc<AppState>,
        course_id: &str,
        lesson_id: &str,
        answers: Option<Vec<usize>>,
    ) {
        complete_lesson_handler(
            State(Arc::clone(state)),
            Json(CompleteLessonRequest {
                course_id: course_id.to_string(),
                lesson_id: lesson_id.to_string(),
                answers,
            }),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_list_uses_session_role() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        use http_body_util::BodyExt;
        let response = list_handler(
            State(Arc::clone(&state)),
            Query(CourseListQuery { role: None }),
        )
        .await
        .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let courses: Vec<Course> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(courses.len(), 3);
        assert!(courses.iter().all(|c| c.target_role == Role::Agent));
    }

    #[tokio::test]
    async fn test_list_with_explicit_role_needs_no_session() {
        let (state, _dir) = create_test_state();

        let response = list_handler(
            State(state),
            Query(CourseListQuery {
                role: Some(Role::BranchManager),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_without_session_or_role() {
        let (state, _dir) = create_test_state();

        let result = list_handler(State(state), Query(CourseListQuery { role: None })).await;
        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_start_requires_session() {
        let (state, _dir) = create_test_state();

        let result = start_handler(
            State(state),
            Json(StartCourseRequest {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_start_unknown_course() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        let result = start_handler(
            State(Arc::clone(&state)),
            Json(StartCourseRequest {
                course_id: "NOPE_101".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        assert!(state.progress.is_empty());
    }

    #[tokio::test]
    async fn test_start_twice_keeps_one_record() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        for _ in 0..2 {
            start_handler(
                State(Arc::clone(&state)),
                Json(StartCourseRequest {
                    course_id: "AGENT_SALES_101".to_string(),
                }),
            )
            .await
            .unwrap();
        }

        assert_eq!(state.progress.len(), 1);
    }

    #[tokio::test]
    async fn test_full_course_run_with_quiz_and_certificate() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        start_handler(
            State(Arc::clone(&state)),
            Json(StartCourseRequest {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await
        .unwrap();

        complete(&state, "AGENT_SALES_101", "L001", None).await;
        complete(&state, "AGENT_SALES_101", "L002", None).await;
        complete(&state, "AGENT_SALES_101", "L003", None).await;

        let before_quiz = state.progress.get("AGENT_SALES_101", "2").unwrap();
        assert_eq!(before_quiz.progress, 75);
        assert!(before_quiz.completed_at.is_none());

        // Certificate is refused before the quiz
        let refused = certificate_handler(
            State(Arc::clone(&state)),
            Json(CertificateRequest {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await;
        assert!(refused.is_err());

        // One of the two quiz answers is correct
        complete(&state, "AGENT_SALES_101", "L004", Some(vec![1, 0])).await;

        let done = state.progress.get("AGENT_SALES_101", "2").unwrap();
        assert_eq!(done.progress, 100);
        assert!(done.completed_at.is_some());
        assert_eq!(done.quiz_scores.get("L004"), Some(&50));

        certificate_handler(
            State(Arc::clone(&state)),
            Json(CertificateRequest {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(state.progress.get("AGENT_SALES_101", "2").unwrap().certificate_issued);
    }

    #[tokio::test]
    async fn test_answers_on_non_quiz_lesson_record_no_score() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        start_handler(
            State(Arc::clone(&state)),
            Json(StartCourseRequest {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await
        .unwrap();

        // L001 is a video lesson; stray answers are ignored
        complete(&state, "AGENT_SALES_101", "L001", Some(vec![0, 1])).await;

        let progress = state.progress.get("AGENT_SALES_101", "2").unwrap();
        assert!(progress.quiz_scores.is_empty());
        assert_eq!(progress.progress, 25);
    }

    #[tokio::test]
    async fn test_complete_without_start() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        let result = complete_lesson_handler(
            State(state),
            Json(CompleteLessonRequest {
                course_id: "AGENT_SALES_101".to_string(),
                lesson_id: "L001".to_string(),
                answers: None,
            }),
        )
        .await;

        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_progress_handler_reports_none_before_start() {
        let (state, _dir) = create_test_state();
        sign_in_agent(&state);

        use http_body_util::BodyExt;
        let response = progress_handler(
            State(state),
            Query(ProgressQuery {
                course_id: "AGENT_SALES_101".to_string(),
            }),
        )
        .await
        .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["progress"].is_null());
    }
}
