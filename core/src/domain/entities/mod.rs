//! Domain entities
//!
//! Pure domain models representing core business concepts. Instructor and
//! student records are owned by their own subsystems; the copies here carry
//! only what this crate needs from them.

pub mod account;
pub mod cascade;
pub mod course;
pub mod instructor;
pub mod projection;
pub mod student;

pub use account::OwnerAccount;
pub use cascade::CascadeDeletionQuery;
pub use course::{Course, CourseDraft, CourseId, CourseRef, CourseUpdate};
pub use instructor::{Instructor, InstructorRole, NewInstructor};
pub use projection::{CourseProjection, InstructorSearchDocument};
pub use student::{Student, DEFAULT_SECTION};
