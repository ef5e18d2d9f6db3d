//! A Rust library for querying an in-memory hospital record set
//! (doctors, patients, appointments) with deterministic, ordered results.
//!
//! The crate has three layers: the entity models (pure data holders),
//! the [`RecordStore`] that owns the populated collections, and the
//! query functions in [`query`] that compute analytical answers over a
//! store snapshot. Population is the caller's job; once a store is
//! built, every query is a pure read.

pub mod collections;
pub mod error;
pub mod models;
pub mod query;

// Re-export the most common types for easier use
// Core types
pub use collections::RecordStore;
pub use error::{RegistryError, Result};
pub use models::types::{BloodType, RhFactor, Sex, Specialization};
pub use models::{Appointment, Doctor, Patient};

// Query operations
pub use query::{
    experienced_doctors, follow_up_count, patients_of_doctor, room_schedule,
    senior_multi_doctor_patients,
};
