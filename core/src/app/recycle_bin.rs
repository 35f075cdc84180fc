//! Recycle bin transitions for courses
//!
//! A course is either active (`deleted_at` absent) or sitting in the recycle
//! bin (`deleted_at` present); the recycle bin is the only reversible form of
//! deletion. Hard deletion is handled by the cascade service and is terminal
//! from either state.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::CourseId;
use crate::domain::ports::CourseStore;
use crate::error::{not_found_as_domain, AppError};

/// Service for moving courses in and out of the recycle bin
pub struct RecycleBinService<S>
where
    S: CourseStore,
{
    store: Arc<S>,
}

impl<S> RecycleBinService<S>
where
    S: CourseStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Moves a course to the recycle bin.
    ///
    /// Returns the deletion timestamp assigned by the store. Whether a
    /// repeat call returns the existing timestamp or is rejected is the
    /// store's own policy; this service surfaces whatever the store decides.
    pub async fn move_to_recycle_bin(
        &self,
        course_id: &CourseId,
    ) -> Result<DateTime<Utc>, AppError> {
        let deleted_at = self
            .store
            .soft_delete(course_id)
            .await
            .map_err(not_found_as_domain)?;
        Ok(deleted_at)
    }

    /// Restores a course from the recycle bin, clearing its deletion
    /// timestamp.
    ///
    /// Restoring a course that is not in the bin is rejected by the store
    /// and surfaces as a conflict, never as a silent success.
    pub async fn restore_from_recycle_bin(&self, course_id: &CourseId) -> Result<(), AppError> {
        self.store
            .restore(course_id)
            .await
            .map_err(not_found_as_domain)?;
        Ok(())
    }
}
