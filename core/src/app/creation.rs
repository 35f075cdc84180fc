//! Course creation, including the initial course owner

use std::sync::Arc;

use tracing::error;

use crate::domain::entities::{Course, CourseDraft, NewInstructor};
use crate::domain::ports::{AccountsGateway, CourseStore, InstructorsGateway};
use crate::error::{AppError, DomainError, StoreError};

/// Service that creates courses and their initial owning instructor
pub struct CourseCreationService<S, A, I>
where
    S: CourseStore,
    A: AccountsGateway,
    I: InstructorsGateway,
{
    store: Arc<S>,
    accounts: Arc<A>,
    instructors: Arc<I>,
}

impl<S, A, I> CourseCreationService<S, A, I>
where
    S: CourseStore,
    A: AccountsGateway,
    I: InstructorsGateway,
{
    pub fn new(store: Arc<S>, accounts: Arc<A>, instructors: Arc<I>) -> Self {
        Self {
            store,
            accounts,
            instructors,
        }
    }

    /// Create a course from a draft after validating it
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<Course, AppError> {
        draft.validate()?;

        let created = self.store.create(draft).await.map_err(|e| match e {
            StoreError::Conflict(_) => AppError::Domain(DomainError::AlreadyExists(format!(
                "course {} already exists",
                draft.id
            ))),
            e => AppError::Store(e),
        })?;

        Ok(created)
    }

    /// Creates a course and an associated co-owner instructor for it.
    ///
    /// The owner account must already exist; an unresolvable owner is a
    /// precondition failure, not a recoverable condition. If the instructor
    /// turns out to already exist or to be invalid after the course was
    /// created, the course is deleted again and the whole operation fails as
    /// an internal consistency error - under correct preconditions that path
    /// never runs.
    pub async fn create_course_and_owner(
        &self,
        owner_account_id: &str,
        draft: &CourseDraft,
    ) -> Result<(), AppError> {
        let owner = self.accounts.resolve(owner_account_id).await?.ok_or_else(|| {
            DomainError::Precondition(format!(
                "cannot create a course for missing account {}",
                owner_account_id
            ))
        })?;

        let created = self.create_course(draft).await?;

        let instructor = NewInstructor::course_owner(created.id.clone(), &owner);
        match self.instructors.create(&instructor).await {
            Ok(_) => Ok(()),
            Err(e @ (DomainError::AlreadyExists(_) | DomainError::Validation(_))) => {
                // roll back so no ownerless course is left behind; a cleanup
                // failure must not mask the primary one
                if let Err(cleanup) = self.store.delete(&created.id).await {
                    error!(
                        "failed to delete course {} while rolling back owner creation: {}",
                        created.id, cleanup
                    );
                }
                Err(DomainError::Internal(format!(
                    "could not create the owning instructor for new course {}: {}",
                    created.id, e
                ))
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
