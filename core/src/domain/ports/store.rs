//! Course store port trait
//!
//! Defines the interface to the remote course store. Every operation is one
//! synchronous round trip against the store service; the client keeps no
//! state between calls and is safe to share across tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Course, CourseDraft, CourseId, CourseUpdate};
use crate::error::StoreError;

/// Client for the remote course store
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Create a course from a draft. The store assigns the creation
    /// timestamp and echoes the draft fields back.
    async fn create(&self, draft: &CourseDraft) -> Result<Course, StoreError>;

    /// Fetch a course by id. An absent id is `Ok(None)`, never conflated
    /// with a transport failure.
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, StoreError>;

    /// Fetch several courses by id. The store has no batch read; ids are
    /// fetched one at a time and ids that no longer resolve are left out of
    /// the result, so the caller is responsible for noticing a size
    /// mismatch.
    async fn get_many(&self, ids: &[CourseId]) -> Result<Vec<Course>, StoreError>;

    /// Apply field changes to an existing course.
    async fn update(&self, id: &CourseId, changes: &CourseUpdate) -> Result<Course, StoreError>;

    /// Move a course to the recycle bin. Returns the deletion timestamp
    /// assigned by the store; how a repeat call is treated is the store's
    /// own policy.
    async fn soft_delete(&self, id: &CourseId) -> Result<DateTime<Utc>, StoreError>;

    /// Bring a course back from the recycle bin. The store rejects restoring
    /// a course that is not in the bin.
    async fn restore(&self, id: &CourseId) -> Result<(), StoreError>;

    /// Permanently remove a course.
    async fn delete(&self, id: &CourseId) -> Result<(), StoreError>;

    /// Number of courses created within the given time range.
    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, StoreError>;
}
