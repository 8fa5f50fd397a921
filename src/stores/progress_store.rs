use crate::models::course::{Course, CourseProgress};
use dashmap::DashMap;

/// In-memory course progress store, keyed by (course id, user id).
/// Records are created on course start and never removed.
pub struct ProgressStore {
    records: DashMap<(String, String), CourseProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Open a progress record for the user on the given course.
    /// Starting an already-started course is a no-op; returns whether a
    /// record was created.
    pub fn start(&self, course: &Course, user_id: &str, started_at: i64) -> bool {
        let key = (course.id.clone(), user_id.to_string());
        if self.records.contains_key(&key) {
            return false;
        }
        self.records
            .insert(key, CourseProgress::started(course, user_id, started_at));
        true
    }

    /// Mark a lesson complete and recompute the percentage.
    ///
    /// Set semantics make repeated completion harmless. The percentage is
    /// `round(100 * completed / lessons)`; `completed_at` is stamped on the
    /// call that first reaches 100 and never touched again. A supplied
    /// score is recorded under the lesson id whatever the lesson kind, and
    /// lesson membership in the course is not checked.
    ///
    /// Returns the updated record, or None when the course was never
    /// started by this user.
    pub fn complete_lesson(
        &self,
        course: &Course,
        user_id: &str,
        lesson_id: &str,
        score: Option<u8>,
        now: i64,
    ) -> Option<CourseProgress> {
        let key = (course.id.clone(), user_id.to_string());
        let mut entry = self.records.get_mut(&key)?;
        let record = entry.value_mut();

        record.completed_lessons.insert(lesson_id.to_string());

        let total = course.lessons.len();
        record.progress = if total == 0 {
            0
        } else {
            ((record.completed_lessons.len() * 100) as f64 / total as f64).round() as u8
        };

        if record.progress == 100 && record.completed_at.is_none() {
            record.completed_at = Some(now);
        }

        if let Some(score) = score {
            record.quiz_scores.insert(lesson_id.to_string(), score);
        }

        Some(record.clone())
    }

    /// Issue the certificate once the course is fully complete.
    /// Silently does nothing below 100 percent; repeat calls are harmless.
    /// Returns whether the record now carries a certificate.
    pub fn issue_certificate(&self, course_id: &str, user_id: &str) -> bool {
        let key = (course_id.to_string(), user_id.to_string());
        match self.records.get_mut(&key) {
            Some(mut entry) if entry.value().progress == 100 => {
                entry.value_mut().certificate_issued = true;
                true
            }
            _ => false,
        }
    }

    /// Progress record for one user on one course
    pub fn get(&self, course_id: &str, user_id: &str) -> Option<CourseProgress> {
        let key = (course_id.to_string(), user_id.to_string());
        self.records.get(&key).map(|entry| entry.value().clone())
    }

    /// All progress records belonging to one user
    pub fn for_user(&self, user_id: &str) -> Vec<CourseProgress> {
        let mut records: Vec<CourseProgress> = self
            .records
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
