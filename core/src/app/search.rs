//! Course projections for instructor search documents

use std::sync::Arc;

use crate::domain::entities::{CourseId, CourseProjection, Instructor, InstructorSearchDocument};
use crate::domain::ports::CourseStore;
use crate::error::{AppError, DomainError};

/// Builds course snapshots for embedding into instructor search documents.
///
/// Every build reads the course afresh from the store - no caching, no TTL -
/// so the snapshot is as current as the store at build time. A snapshot only
/// goes stale when the course changes after the document was indexed, and is
/// refreshed by re-indexing.
pub struct CourseProjector<S>
where
    S: CourseStore,
{
    store: Arc<S>,
}

impl<S> CourseProjector<S>
where
    S: CourseStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Snapshot the projected fields of a course.
    ///
    /// There is no placeholder projection: a course that cannot be read
    /// fails the build with the underlying error.
    pub async fn project(&self, course_id: &CourseId) -> Result<CourseProjection, AppError> {
        let course = self
            .store
            .get(course_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Course does not exist: {}", course_id)))?;
        Ok(CourseProjection::of(&course))
    }

    /// Build the search document for one instructor, embedding a fresh
    /// snapshot of its course
    pub async fn document_for(
        &self,
        instructor: &Instructor,
    ) -> Result<InstructorSearchDocument, AppError> {
        let course = self.project(&instructor.course_id).await?;
        Ok(InstructorSearchDocument {
            instructor: instructor.clone(),
            course,
        })
    }
}
