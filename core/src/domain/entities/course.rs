//! Course domain entity
//!
//! The primary entity managed by this crate: an organizational container
//! referenced by instructors, students and feedback sessions. Courses live in
//! the remote course store; this crate never persists them locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length of a course identifier
const MAX_ID_LENGTH: usize = 64;

/// Unique identifier for a course, assigned by the caller at creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course as held by the remote course store.
///
/// `deleted_at` is absent while the course is active and set once it has been
/// moved to the recycle bin; when present it is never earlier than
/// `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub institute: String,
    pub time_zone: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Whether the course sits in the recycle bin
    pub fn is_soft_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A record owned by another subsystem that references a course by id
pub trait CourseRef {
    fn course_id(&self) -> &CourseId;
}

/// Data needed to create a new course
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub id: CourseId,
    pub name: String,
    pub institute: String,
    pub time_zone: String,
}

impl CourseDraft {
    /// Checks the draft against the store's field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().is_empty() {
            return Err(DomainError::Validation(
                "course id must not be empty".to_string(),
            ));
        }
        if self.id.as_str().len() > MAX_ID_LENGTH {
            return Err(DomainError::Validation(format!(
                "course id must not be longer than {} characters",
                MAX_ID_LENGTH
            )));
        }
        if self.id.as_str().chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "course id must not contain whitespace".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "course name must not be empty".to_string(),
            ));
        }
        if self.institute.trim().is_empty() {
            return Err(DomainError::Validation(
                "course institute must not be empty".to_string(),
            ));
        }
        if self.time_zone.trim().is_empty() {
            return Err(DomainError::Validation(
                "course timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Field changes to apply to an existing course
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub institute: Option<String>,
    pub time_zone: Option<String>,
}
