//! Cascade deletion query

use super::course::CourseId;

/// Value object handed to every dependent-entity subsystem when a course is
/// deleted; built once per cascade and shared read-only across the calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeDeletionQuery {
    course_id: CourseId,
}

impl CascadeDeletionQuery {
    pub fn for_course(course_id: CourseId) -> Self {
        Self { course_id }
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }
}
