//! Error handling for the clinic registry.

use thiserror::Error;

/// Specialized error type for record store queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An appointment refers to a doctor or patient id absent from the store.
    ///
    /// Referential integrity is not checked at population time; a dangling
    /// reference surfaces here the first time a join dereferences it.
    #[error("appointment {appointment_id} references unknown {entity} id {id}")]
    InconsistentReference {
        /// Id of the appointment holding the dangling reference
        appointment_id: i32,
        /// Kind of the referenced entity ("doctor" or "patient")
        entity: &'static str,
        /// The id that failed to resolve
        id: i32,
    },

    /// A query parameter was rejected before any data scan began.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A value outside its enumerated domain (e.g. an unknown blood type).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
