//! Owner account entity
//!
//! The slice of a user account this crate needs when a course is created on
//! the account's behalf.

/// A user account that can own courses
#[derive(Debug, Clone)]
pub struct OwnerAccount {
    pub id: String,
    pub name: String,
    pub email: String,
}
