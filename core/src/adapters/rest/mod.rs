//! Remote course store adapter
//!
//! reqwest implementation of the course store port.

pub mod client;

pub use client::RestCourseStore;
