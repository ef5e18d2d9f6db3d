//! Entity models for the hospital record set
//!
//! Doctors, patients and appointments are plain value objects: every
//! field is set at construction and nothing in the query layer mutates
//! them. Relationships between entities are expressed only as id fields
//! resolved by explicit joins, never as embedded references.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod traits;
pub mod types;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use patient::Patient;
pub use traits::EntityModel;
