use crate::models::user::Role;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonKind {
    Video,
    Document,
    Quiz,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    /// Question ID
    pub id: String,
    pub text: String,
    /// Answer options, in presentation order
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson ID
    pub id: String,
    pub title: String,
    pub kind: LessonKind,
    /// Minutes
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// Populated for quiz lessons only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
}

/// A training course from the e-learning catalog. Seeded at startup,
/// never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    /// Course ID
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// The role the course is offered to
    pub target_role: Role,
    /// Lessons in presentation order
    pub lessons: Vec<Lesson>,
    /// Minutes across all lessons
    pub total_duration: u32,
    pub certificate_template: String,
}

/// Per-user progress through one course, keyed by `(course_id, user_id)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub user_id: String,
    /// Lesson ids completed so far (set semantics, duplicate-safe)
    pub completed_lessons: HashSet<String>,
    /// First lesson of the course at start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_lesson: Option<String>,
    /// `round(100 * completed / lessons)`
    pub progress: u8,
    /// Unix timestamp of the start call
    pub started_at: i64,
    /// Stamped once, on the call that first reaches 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default)]
    pub certificate_issued: bool,
    /// Latest quiz score per lesson id
    #[serde(default)]
    pub quiz_scores: HashMap<String, u8>,
}

impl CourseProgress {
    pub fn started(course: &Course, user_id: impl Into<String>, started_at: i64) -> Self {
        Self {
            course_id: course.id.clone(),
            user_id: user_id.into(),
            completed_lessons: HashSet::new(),
            current_lesson: course.lessons.first().map(|lesson| lesson.id.clone()),
            progress: 0,
            started_at,
            completed_at: None,
            certificate_issued: false,
            quiz_scores: HashMap::new(),
        }
    }
}
