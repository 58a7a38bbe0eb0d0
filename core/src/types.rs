//! types.rs
//! Unified error type shared by every algorithm and the registry.
//!
//! Taxonomy:
//! - configuration: `NoAlgorithmsConfigured`, `InvalidParameters`, `Config`
//! - input/format: `MalformedPayload`, `UnknownHashFunction`
//! - environment: `RandomSourceExhausted`
//!
//! A wrong password is never an error. Neither is an algorithm tag or an
//! inner hash function that the running configuration does not accept; those
//! are ordinary non-matches.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PwCryptoError {
    /// `hash` was called on a registry without algorithms.
    #[error("no password crypto algorithms configured")]
    NoAlgorithmsConfigured,

    /// The OS random source failed while generating a salt. Not retried.
    #[error("secure random source exhausted: {0}")]
    RandomSourceExhausted(String),

    /// The stored payload of the matched algorithm failed structural parsing.
    #[error("malformed {algorithm} payload: {reason}")]
    MalformedPayload {
        algorithm: &'static str,
        reason: String,
    },

    /// Hash-function code outside the known set.
    #[error("unknown hash function: {code}")]
    UnknownHashFunction { code: String },

    /// The configured parameters were rejected by the primitive.
    #[error("invalid {algorithm} parameters: {reason}")]
    InvalidParameters {
        algorithm: &'static str,
        reason: String,
    },

    /// Typed configuration could not be decoded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PwCryptoError {
    #[inline]
    pub(crate) fn malformed(algorithm: &'static str, reason: impl Into<String>) -> Self {
        PwCryptoError::MalformedPayload {
            algorithm,
            reason: reason.into(),
        }
    }

    #[inline]
    pub(crate) fn invalid_params(algorithm: &'static str, reason: impl Into<String>) -> Self {
        PwCryptoError::InvalidParameters {
            algorithm,
            reason: reason.into(),
        }
    }

    /// Stored data is corrupt or foreign (as opposed to a wrong password).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            PwCryptoError::MalformedPayload { .. } | PwCryptoError::UnknownHashFunction { .. }
        )
    }

    /// Setup problem the caller must fix; retrying will not help.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PwCryptoError::NoAlgorithmsConfigured
                | PwCryptoError::InvalidParameters { .. }
                | PwCryptoError::Config(_)
        )
    }
}

impl From<serde_json::Error> for PwCryptoError {
    fn from(e: serde_json::Error) -> Self {
        PwCryptoError::Config(e.to_string())
    }
}

impl From<rand::Error> for PwCryptoError {
    fn from(e: rand::Error) -> Self {
        PwCryptoError::RandomSourceExhausted(e.to_string())
    }
}
