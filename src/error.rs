//! Error types raised by the model layer
//!
//! The model layer itself enforces almost nothing: length, pattern, range
//! and enum-membership constraints are the service's responsibility and are
//! only surfaced locally through the advisory [`crate::validation`] module.
//! The one hard failure a model can produce is a duplicate key handed to a
//! map `add_*` convenience.

use thiserror::Error;

/// Error produced by a model convenience method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A map `add_*` convenience was called with a key that is already
    /// present. The stored value for the key is left untouched.
    #[error("duplicate key `{key}` provided for {field}")]
    DuplicateKey {
        /// Wire name of the map field the key was added to.
        field: &'static str,
        /// The offending key.
        key: String,
    },
}
