//! Instructor domain entity
//!
//! Instructor records are owned by the instructors subsystem; they reference
//! their course by id.

use serde::{Deserialize, Serialize};

use super::account::OwnerAccount;
use super::course::{CourseId, CourseRef};

/// Privilege role of an instructor within a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructorRole {
    /// Full privileges, including modifying and deleting the course
    CoOwner,
    Manager,
    Observer,
    Tutor,
}

impl std::fmt::Display for InstructorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstructorRole::CoOwner => write!(f, "coowner"),
            InstructorRole::Manager => write!(f, "manager"),
            InstructorRole::Observer => write!(f, "observer"),
            InstructorRole::Tutor => write!(f, "tutor"),
        }
    }
}

impl std::str::FromStr for InstructorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coowner" => Ok(InstructorRole::CoOwner),
            "manager" => Ok(InstructorRole::Manager),
            "observer" => Ok(InstructorRole::Observer),
            "tutor" => Ok(InstructorRole::Tutor),
            _ => Err(format!("Unknown instructor role: {}", s)),
        }
    }
}

/// An instructor record as held by the instructors subsystem
#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    pub course_id: CourseId,
    pub email: String,
    pub name: String,
    pub account_id: Option<String>,
    pub role: InstructorRole,
}

impl CourseRef for Instructor {
    fn course_id(&self) -> &CourseId {
        &self.course_id
    }
}

/// Data needed to create a new instructor
#[derive(Debug, Clone)]
pub struct NewInstructor {
    pub course_id: CourseId,
    pub email: String,
    pub name: String,
    pub account_id: Option<String>,
    pub role: InstructorRole,
}

impl NewInstructor {
    /// The initial co-owner instructor for a newly created course
    pub fn course_owner(course_id: CourseId, owner: &OwnerAccount) -> Self {
        Self {
            course_id,
            email: owner.email.clone(),
            name: owner.name.clone(),
            account_id: Some(owner.id.clone()),
            role: InstructorRole::CoOwner,
        }
    }
}
