//! Course lifecycle core
//!
//! Client-side orchestration for the course entity: talks to the remote
//! course store over HTTP, coordinates cascading deletes across the
//! dependent-entity subsystems, and keeps the instructor search projection
//! coherent with the store.
//! Uses hexagonal (ports & adapters) architecture so every collaborator can
//! be swapped for a test double.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;


#[cfg(test)]
mod test_utils;
