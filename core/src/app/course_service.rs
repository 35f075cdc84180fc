//! General course operations
//!
//! Read and update operations that sit directly on the course store, plus the
//! roster-derived queries (sections and teams) that combine the store with
//! the students subsystem.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Course, CourseId, CourseUpdate, DEFAULT_SECTION};
use crate::domain::ports::{CourseStore, FeedbackSessionsGateway, StudentsGateway};
use crate::error::{not_found_as_domain, AppError, DomainError};

/// Service for course reads, updates and roster-derived queries
pub struct CourseService<S, FS, ST>
where
    S: CourseStore,
    FS: FeedbackSessionsGateway,
    ST: StudentsGateway,
{
    store: Arc<S>,
    sessions: Arc<FS>,
    students: Arc<ST>,
}

impl<S, FS, ST> CourseService<S, FS, ST>
where
    S: CourseStore,
    FS: FeedbackSessionsGateway,
    ST: StudentsGateway,
{
    pub fn new(store: Arc<S>, sessions: Arc<FS>, students: Arc<ST>) -> Self {
        Self {
            store,
            sessions,
            students,
        }
    }

    /// Fetch a course, `None` when it does not exist
    pub async fn get_course(&self, course_id: &CourseId) -> Result<Option<Course>, AppError> {
        Ok(self.store.get(course_id).await?)
    }

    /// Fetch a course that is expected to exist
    pub async fn require_course(&self, course_id: &CourseId) -> Result<Course, AppError> {
        let course = self
            .store
            .get(course_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Course does not exist: {}", course_id)))?;
        Ok(course)
    }

    /// Whether the course exists at all, in the recycle bin or not
    pub async fn is_course_present(&self, course_id: &CourseId) -> Result<bool, AppError> {
        Ok(self.store.get(course_id).await?.is_some())
    }

    /// The institute a course belongs to
    pub async fn course_institute(&self, course_id: &CourseId) -> Result<String, AppError> {
        let course = self.require_course(course_id).await?;
        Ok(course.institute)
    }

    /// Applies field changes to a course.
    ///
    /// When the change moves the course to another timezone, the timezone of
    /// its feedback sessions is updated along with it.
    pub async fn update_course(
        &self,
        course_id: &CourseId,
        changes: &CourseUpdate,
    ) -> Result<Course, AppError> {
        let old_course = self.require_course(course_id).await?;

        let updated = self
            .store
            .update(course_id, changes)
            .await
            .map_err(not_found_as_domain)?;

        if updated.time_zone != old_course.time_zone {
            self.sessions
                .update_time_zone_for_course(course_id, &updated.time_zone)
                .await?;
        }

        Ok(updated)
    }

    /// Section names in use across a course, excluding students that were
    /// never assigned a section, sorted alphabetically
    pub async fn sections_for_course(&self, course_id: &CourseId) -> Result<Vec<String>, AppError> {
        self.require_course(course_id).await?;

        let students = self.students.list_for_course(course_id).await?;
        let sections: BTreeSet<String> = students
            .into_iter()
            .map(|s| s.section)
            .filter(|section| section != DEFAULT_SECTION)
            .collect();

        Ok(sections.into_iter().collect())
    }

    /// Distinct team names across the whole course, sorted alphabetically
    pub async fn teams_for_course(&self, course_id: &CourseId) -> Result<Vec<String>, AppError> {
        self.require_course(course_id).await?;

        let students = self.students.list_for_course(course_id).await?;
        let teams: BTreeSet<String> = students.into_iter().map(|s| s.team).collect();

        Ok(teams.into_iter().collect())
    }

    /// Distinct team names within one section of a course, sorted
    /// alphabetically
    pub async fn teams_for_section(
        &self,
        section: &str,
        course_id: &CourseId,
    ) -> Result<Vec<String>, AppError> {
        self.require_course(course_id).await?;

        let students = self.students.list_for_course(course_id).await?;
        let teams: BTreeSet<String> = students
            .into_iter()
            .filter(|s| s.section == section)
            .map(|s| s.team)
            .collect();

        Ok(teams.into_iter().collect())
    }

    /// Number of courses created within the given time range
    pub async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        Ok(self.store.count_created_between(from, to).await?)
    }
}
