//! Dependent-entity gateway port traits
//!
//! Each subsystem owns its own records keyed by course id and exposes a bulk
//! delete used when a course is removed. Implementations are provided by the
//! hosting application.

use async_trait::async_trait;

use crate::domain::entities::{CascadeDeletionQuery, CourseId, Instructor, NewInstructor, Student};
use crate::error::DomainError;

/// Gateway to the feedback response comments subsystem
#[async_trait]
pub trait ResponseCommentsGateway: Send + Sync {
    /// Delete every response comment belonging to the queried course
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;
}

/// Gateway to the feedback responses subsystem
#[async_trait]
pub trait ResponsesGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;
}

/// Gateway to the feedback questions subsystem
#[async_trait]
pub trait QuestionsGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;
}

/// Gateway to the feedback sessions subsystem
#[async_trait]
pub trait FeedbackSessionsGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;

    /// Align the timezone of every session in the course with the course's
    /// own timezone
    async fn update_time_zone_for_course(
        &self,
        course_id: &CourseId,
        time_zone: &str,
    ) -> Result<(), DomainError>;
}

/// Gateway to the students subsystem
#[async_trait]
pub trait StudentsGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;

    /// Every student enrolled in the course
    async fn list_for_course(&self, course_id: &CourseId) -> Result<Vec<Student>, DomainError>;

    /// Every enrollment record of the given account across courses
    async fn list_for_account(&self, account_id: &str) -> Result<Vec<Student>, DomainError>;
}

/// Gateway to the instructors subsystem
#[async_trait]
pub trait InstructorsGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;

    /// Create an instructor record; fails with `AlreadyExists` when one
    /// already exists for the same course and email
    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, DomainError>;
}

/// Gateway to the deadline extensions subsystem
#[async_trait]
pub trait DeadlineExtensionsGateway: Send + Sync {
    async fn delete_by_query(&self, query: &CascadeDeletionQuery) -> Result<(), DomainError>;
}
