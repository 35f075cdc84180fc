//! Denormalized course snapshot for search documents

use serde::Serialize;

use super::course::{Course, CourseId};
use super::instructor::Instructor;

/// By-value snapshot of the course fields embedded in instructor search
/// documents.
///
/// Goes stale if the source course changes after the document is built;
/// refreshed only by re-indexing. Never back-references the course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseProjection {
    pub course_id: CourseId,
    pub name: String,
    pub institute: String,
    pub time_zone: String,
}

impl CourseProjection {
    pub fn of(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            name: course.name.clone(),
            institute: course.institute.clone(),
            time_zone: course.time_zone.clone(),
        }
    }
}

/// Search document for one instructor, embedding a snapshot of its course
#[derive(Debug, Clone, Serialize)]
pub struct InstructorSearchDocument {
    pub instructor: Instructor,
    pub course: CourseProjection,
}
