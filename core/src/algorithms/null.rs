//! algorithms/null.rs
//! Identity encoding. Explicitly insecure; exists so plaintext credentials
//! can be imported and upgraded to a real algorithm on next login.

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::algorithm_ids;
use crate::types::PwCryptoError;
use crate::utils::ct_eq;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullCrypto;

impl NullCrypto {
    pub fn new() -> Self {
        NullCrypto
    }
}

impl Algorithm for NullCrypto {
    fn id(&self) -> &'static str {
        algorithm_ids::NULL
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        Ok(plaintext.to_owned())
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        // No parameters, so never stale at this level.
        Ok(Verdict::from_comparison(
            ct_eq(plaintext.as_bytes(), payload.as_bytes()),
            false,
        ))
    }
}
