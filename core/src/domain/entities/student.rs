//! Student domain entity
//!
//! Student records are owned by the students subsystem; they reference their
//! course by id.

use serde::Serialize;

use super::course::{CourseId, CourseRef};

/// Section name given to students that were never assigned a section
pub const DEFAULT_SECTION: &str = "None";

/// A student enrollment record as held by the students subsystem
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub course_id: CourseId,
    pub email: String,
    pub name: String,
    pub account_id: Option<String>,
    pub section: String,
    pub team: String,
}

impl CourseRef for Student {
    fn course_id(&self) -> &CourseId {
        &self.course_id
    }
}
