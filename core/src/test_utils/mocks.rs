//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. The course
//! store mirrors the remote store's transition semantics; the gateway mock
//! implements every dependent-entity port and records its calls into a
//! shared log so tests can assert cross-subsystem ordering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    CascadeDeletionQuery, Course, CourseDraft, CourseId, CourseUpdate, Instructor, NewInstructor,
    OwnerAccount, Student,
};
use crate::domain::ports::{
    AccountsGateway, CourseStore, DeadlineExtensionsGateway, FeedbackSessionsGateway,
    InstructorsGateway, QuestionsGateway, ResponseCommentsGateway, ResponsesGateway,
    StudentsGateway,
};
use crate::error::{DomainError, StoreError};

// ============================================================================
// Call log
// ============================================================================

/// Shared log of collaborator calls, for ordering assertions
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

// ============================================================================
// In-memory course store
// ============================================================================

/// In-memory course store mirroring the remote store's semantics
#[derive(Default)]
pub struct InMemoryCourseStore {
    courses: Arc<RwLock<HashMap<CourseId, Course>>>,
    log: Option<CallLog>,
    failing: bool,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record store deletions into the given call log
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    /// A store where every operation fails with a server error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a course
    pub fn with_course(self, course: Course) -> Self {
        self.courses
            .write()
            .unwrap()
            .insert(course.id.clone(), course);
        self
    }

    pub fn contains(&self, id: &CourseId) -> bool {
        self.courses.read().unwrap().contains_key(id)
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Api {
                status: 500,
                message: "injected store failure".to_string(),
            });
        }
        Ok(())
    }

    fn record(&self, call: &str) {
        if let Some(log) = &self.log {
            log.record(call);
        }
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn create(&self, draft: &CourseDraft) -> Result<Course, StoreError> {
        self.check_failing()?;
        let mut courses = self.courses.write().unwrap();
        if courses.contains_key(&draft.id) {
            return Err(StoreError::Conflict(format!(
                "course {} already exists",
                draft.id
            )));
        }
        let course = Course {
            id: draft.id.clone(),
            name: draft.name.clone(),
            institute: draft.institute.clone(),
            time_zone: draft.time_zone.clone(),
            created_at: Utc::now(),
            deleted_at: None,
        };
        courses.insert(course.id.clone(), course.clone());
        Ok(course)
    }

    async fn get(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        self.check_failing()?;
        Ok(self.courses.read().unwrap().get(id).cloned())
    }

    async fn get_many(&self, ids: &[CourseId]) -> Result<Vec<Course>, StoreError> {
        self.check_failing()?;
        let courses = self.courses.read().unwrap();
        Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }

    async fn update(&self, id: &CourseId, changes: &CourseUpdate) -> Result<Course, StoreError> {
        self.check_failing()?;
        let mut courses = self.courses.write().unwrap();
        let course = courses
            .get_mut(id)
            .ok_or_else(|| StoreError::CourseNotFound(id.clone()))?;
        if let Some(name) = &changes.name {
            course.name = name.clone();
        }
        if let Some(institute) = &changes.institute {
            course.institute = institute.clone();
        }
        if let Some(time_zone) = &changes.time_zone {
            course.time_zone = time_zone.clone();
        }
        Ok(course.clone())
    }

    async fn soft_delete(&self, id: &CourseId) -> Result<DateTime<Utc>, StoreError> {
        self.check_failing()?;
        let mut courses = self.courses.write().unwrap();
        let course = courses
            .get_mut(id)
            .ok_or_else(|| StoreError::CourseNotFound(id.clone()))?;
        // repeat soft deletes keep the original timestamp
        let deleted_at = *course.deleted_at.get_or_insert_with(Utc::now);
        Ok(deleted_at)
    }

    async fn restore(&self, id: &CourseId) -> Result<(), StoreError> {
        self.check_failing()?;
        let mut courses = self.courses.write().unwrap();
        let course = courses
            .get_mut(id)
            .ok_or_else(|| StoreError::CourseNotFound(id.clone()))?;
        if course.deleted_at.is_none() {
            return Err(StoreError::Conflict(format!(
                "course {} is not in the recycle bin",
                id
            )));
        }
        course.deleted_at = None;
        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), StoreError> {
        self.check_failing()?;
        self.record("course_store.delete");
        let mut courses = self.courses.write().unwrap();
        courses
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::CourseNotFound(id.clone()))
    }

    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        self.check_failing()?;
        let courses = self.courses.read().unwrap();
        Ok(courses
            .values()
            .filter(|c| c.created_at >= from && c.created_at < to)
            .count() as u64)
    }
}

// ============================================================================
// Recording dependent-entity gateways
// ============================================================================

/// Failure modes a recording gateway can be configured with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InjectedFailure {
    AlreadyExists,
    Invalid,
    Internal,
}

/// Implements every dependent-entity gateway, recording calls into a shared
/// log; can be told to fail at one labelled step
pub struct RecordingDependents {
    log: CallLog,
    fail_on: Option<(&'static str, InjectedFailure)>,
    students: RwLock<Vec<Student>>,
    created_instructors: RwLock<Vec<Instructor>>,
}

impl RecordingDependents {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_on: None,
            students: RwLock::new(Vec::new()),
            created_instructors: RwLock::new(Vec::new()),
        }
    }

    /// Fail when the labelled call is reached, with the given failure kind
    pub fn failing_on(log: CallLog, label: &'static str, failure: InjectedFailure) -> Self {
        Self {
            fail_on: Some((label, failure)),
            ..Self::new(log)
        }
    }

    /// Pre-populate the students subsystem
    pub fn with_students(self, students: Vec<Student>) -> Self {
        *self.students.write().unwrap() = students;
        self
    }

    /// Instructors created through the gateway so far
    pub fn created_instructors(&self) -> Vec<Instructor> {
        self.created_instructors.read().unwrap().clone()
    }

    fn call(&self, label: &'static str) -> Result<(), DomainError> {
        if let Some((fail_label, failure)) = self.fail_on {
            if fail_label == label {
                return Err(match failure {
                    InjectedFailure::AlreadyExists => {
                        DomainError::AlreadyExists(format!("injected failure in {}", label))
                    }
                    InjectedFailure::Invalid => {
                        DomainError::Validation(format!("injected failure in {}", label))
                    }
                    InjectedFailure::Internal => {
                        DomainError::Internal(format!("injected failure in {}", label))
                    }
                });
            }
        }
        self.log.record(label);
        Ok(())
    }
}

#[async_trait]
impl ResponseCommentsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("response_comments.delete")
    }
}

#[async_trait]
impl ResponsesGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("responses.delete")
    }
}

#[async_trait]
impl QuestionsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("questions.delete")
    }
}

#[async_trait]
impl FeedbackSessionsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("sessions.delete")
    }

    async fn update_time_zone_for_course(
        &self,
        _course_id: &CourseId,
        _time_zone: &str,
    ) -> Result<(), DomainError> {
        self.call("sessions.update_time_zone")
    }
}

#[async_trait]
impl StudentsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("students.delete")
    }

    async fn list_for_course(&self, course_id: &CourseId) -> Result<Vec<Student>, DomainError> {
        Ok(self
            .students
            .read()
            .unwrap()
            .iter()
            .filter(|s| &s.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn list_for_account(&self, account_id: &str) -> Result<Vec<Student>, DomainError> {
        Ok(self
            .students
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.account_id.as_deref() == Some(account_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InstructorsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("instructors.delete")
    }

    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, DomainError> {
        self.call("instructors.create")?;
        let created = Instructor {
            course_id: instructor.course_id.clone(),
            email: instructor.email.clone(),
            name: instructor.name.clone(),
            account_id: instructor.account_id.clone(),
            role: instructor.role,
        };
        self.created_instructors
            .write()
            .unwrap()
            .push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl DeadlineExtensionsGateway for RecordingDependents {
    async fn delete_by_query(&self, _query: &CascadeDeletionQuery) -> Result<(), DomainError> {
        self.call("deadline_extensions.delete")
    }
}

// ============================================================================
// Stub accounts gateway
// ============================================================================

/// Accounts gateway backed by a fixed set of accounts
#[derive(Default)]
pub struct StubAccountsGateway {
    accounts: HashMap<String, OwnerAccount>,
}

impl StubAccountsGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: OwnerAccount) -> Self {
        self.accounts.insert(account.id.clone(), account);
        self
    }
}

#[async_trait]
impl AccountsGateway for StubAccountsGateway {
    async fn resolve(&self, account_id: &str) -> Result<Option<OwnerAccount>, DomainError> {
        Ok(self.accounts.get(account_id).cloned())
    }
}
