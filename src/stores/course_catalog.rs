use crate::models::course::Course;
use crate::models::user::Role;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory course catalog
pub struct CourseCatalog {
    courses: DashMap<String, Arc<Course>>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            courses: DashMap::new(),
        }
    }

    /// Add a course to the catalog
    /// If a course with the same id already exists, it will be replaced
    pub fn add_course(&self, course: Course) {
        self.courses.insert(course.id.clone(), Arc::new(course));
    }

    /// Get a course by id
    pub fn get_course(&self, id: &str) -> Option<Arc<Course>> {
        self.courses.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Catalog subset offered to the given role
    pub fn for_role(&self, role: Role) -> Vec<Arc<Course>> {
        let mut courses: Vec<Arc<Course>> = self
            .courses
            .iter()
            .filter(|entry| entry.value().target_role == role)
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }

    pub fn list(&self) -> Vec<Arc<Course>> {
        let mut courses: Vec<Arc<Course>> = self
            .courses
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
