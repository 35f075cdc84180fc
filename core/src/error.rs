//! Unified error types for the course lifecycle core
//!
//! This module defines error types for each layer:
//! - `DomainError`: core business logic errors
//! - `StoreError`: course store client errors
//! - `AppError`: application layer errors returned by the orchestration services

use thiserror::Error;

use crate::domain::entities::CourseId;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Course store client errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Course not found: {0}")]
    CourseNotFound(CourseId),

    #[error("Rejected transition: {0}")]
    Conflict(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - returned by the orchestration services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Course store error: {0}")]
    Store(#[from] StoreError),
}

/// Maps a store-level missing course onto the domain error used by callers
/// that require the course to exist.
pub(crate) fn not_found_as_domain(e: StoreError) -> AppError {
    match e {
        StoreError::CourseNotFound(id) => {
            AppError::Domain(DomainError::NotFound(format!("Course does not exist: {}", id)))
        }
        e => AppError::Store(e),
    }
}
