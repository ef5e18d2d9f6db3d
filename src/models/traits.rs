//! Trait definitions for entity models

use std::hash::Hash;

/// A trait that all entity models implement.
///
/// `EntityModel` provides common functionality for all records in the
/// store, including identifier access used by the keyed indexes.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}
