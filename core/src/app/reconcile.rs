//! Reconciliation of records that reference courses
//!
//! Instructor and student records are owned by other subsystems and carry the
//! course id as a plain foreign key. When a course is hard-deleted those
//! references dangle; this module classifies references against the current
//! course state and drops the dangling ones instead of failing, since a
//! missing course satisfies neither predicate.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::error;

use crate::domain::entities::{Course, CourseId, CourseRef, Instructor};
use crate::domain::ports::{CourseStore, StudentsGateway};
use crate::error::AppError;

/// Filters course references by the current state of the referenced course
pub struct ReconciliationService<S, ST>
where
    S: CourseStore,
    ST: StudentsGateway,
{
    store: Arc<S>,
    students: Arc<ST>,
}

impl<S, ST> ReconciliationService<S, ST>
where
    S: CourseStore,
    ST: StudentsGateway,
{
    pub fn new(store: Arc<S>, students: Arc<ST>) -> Self {
        Self { store, students }
    }

    /// Keeps the records whose course is currently active
    pub async fn retain_with_active_course<R: CourseRef>(
        &self,
        records: Vec<R>,
    ) -> Result<Vec<R>, AppError> {
        let courses = self.resolve_referenced(&records).await?;
        Ok(records
            .into_iter()
            .filter(|r| {
                courses
                    .get(r.course_id())
                    .map(|c| !c.is_soft_deleted())
                    .unwrap_or(false)
            })
            .collect())
    }

    /// Keeps the records whose course sits in the recycle bin
    pub async fn retain_with_soft_deleted_course<R: CourseRef>(
        &self,
        records: Vec<R>,
    ) -> Result<Vec<R>, AppError> {
        let courses = self.resolve_referenced(&records).await?;
        Ok(records
            .into_iter()
            .filter(|r| {
                courses
                    .get(r.course_id())
                    .map(|c| c.is_soft_deleted())
                    .unwrap_or(false)
            })
            .collect())
    }

    /// Active courses taught by the given instructors, sorted by id
    pub async fn active_courses_for_instructors(
        &self,
        instructors: &[Instructor],
    ) -> Result<Vec<Course>, AppError> {
        let courses = self.resolve_referenced(instructors).await?;
        Ok(sorted_by_id(
            courses.into_values().filter(|c| !c.is_soft_deleted()).collect(),
        ))
    }

    /// Recycle-bin courses taught by the given instructors, sorted by id
    pub async fn soft_deleted_courses_for_instructors(
        &self,
        instructors: &[Instructor],
    ) -> Result<Vec<Course>, AppError> {
        let courses = self.resolve_referenced(instructors).await?;
        Ok(sorted_by_id(
            courses.into_values().filter(|c| c.is_soft_deleted()).collect(),
        ))
    }

    /// Active courses the given account is enrolled in as a student, sorted
    /// by id
    pub async fn courses_for_student_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<Course>, AppError> {
        let enrollments = self.students.list_for_account(account_id).await?;
        let courses = self.resolve_referenced(&enrollments).await?;
        Ok(sorted_by_id(
            courses.into_values().filter(|c| !c.is_soft_deleted()).collect(),
        ))
    }

    /// Resolves the distinct courses referenced by the records.
    ///
    /// A reference whose course no longer exists is a data-skew condition,
    /// not an error: the ids are logged and the records are left for the
    /// caller's filter to drop.
    async fn resolve_referenced<R: CourseRef>(
        &self,
        records: &[R],
    ) -> Result<HashMap<CourseId, Course>, AppError> {
        let mut seen = HashSet::new();
        let ids: Vec<CourseId> = records
            .iter()
            .map(|r| r.course_id().clone())
            .filter(|id| seen.insert(id.clone()))
            .collect();

        let courses = self.store.get_many(&ids).await?;

        if courses.len() < ids.len() {
            let resolved: HashSet<&CourseId> = courses.iter().map(|c| &c.id).collect();
            let dangling: Vec<&str> = ids
                .iter()
                .filter(|id| !resolved.contains(id))
                .map(|id| id.as_str())
                .collect();
            error!(
                "course(s) no longer exist but dependent records still reference them: {:?}",
                dangling
            );
        }

        Ok(courses.into_iter().map(|c| (c.id.clone(), c)).collect())
    }
}

fn sorted_by_id(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
    courses
}
