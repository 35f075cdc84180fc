//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};

use crate::domain::entities::{
    Course, CourseDraft, CourseId, Instructor, InstructorRole, OwnerAccount, Student,
};

/// Create an active test course with the given id
pub fn test_course(id: &str) -> Course {
    Course {
        id: CourseId::new(id),
        name: format!("Course {}", id),
        institute: "Test Institute".to_string(),
        time_zone: "UTC".to_string(),
        created_at: Utc::now() - Duration::days(1),
        deleted_at: None,
    }
}

/// Create a test course sitting in the recycle bin
pub fn test_course_soft_deleted(id: &str) -> Course {
    let mut course = test_course(id);
    course.deleted_at = Some(Utc::now());
    course
}

/// Create a valid course draft with the given id
pub fn test_draft(id: &str) -> CourseDraft {
    CourseDraft {
        id: CourseId::new(id),
        name: format!("Course {}", id),
        institute: "Test Institute".to_string(),
        time_zone: "UTC".to_string(),
    }
}

/// Create a test instructor referencing the given course
pub fn test_instructor(course_id: &str, email: &str) -> Instructor {
    Instructor {
        course_id: CourseId::new(course_id),
        email: email.to_string(),
        name: format!("Instructor {}", email),
        account_id: None,
        role: InstructorRole::CoOwner,
    }
}

/// Create a test student referencing the given course
pub fn test_student(course_id: &str, email: &str) -> Student {
    Student {
        course_id: CourseId::new(course_id),
        email: email.to_string(),
        name: format!("Student {}", email),
        account_id: None,
        section: "Section A".to_string(),
        team: "Team 1".to_string(),
    }
}

/// Create a test enrollment record tied to the given account
pub fn test_enrollment(course_id: &str, account_id: &str) -> Student {
    let mut student = test_student(course_id, &format!("{}@example.com", account_id));
    student.account_id = Some(account_id.to_string());
    student
}

/// Create a test owner account
pub fn test_account(id: &str) -> OwnerAccount {
    OwnerAccount {
        id: id.to_string(),
        name: format!("Owner {}", id),
        email: format!("{}@example.com", id),
    }
}
