//! crypto/digest.rs
//! Registry of inner digest primitives used as a parameter by composite KDFs.
//!
//! Design:
//! - Closed set, extensible only by recompilation.
//! - Each function has a stable small integer code used only for serialization.
//! - Parsing is strict: a stored hash naming a function this build does not
//!   know is rejected, never mapped onto a known one.

use std::fmt;

use ::digest::DynDigest;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::hash_fn_codes;
use crate::types::PwCryptoError;

/// Supported inner hash functions.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    Sha1   = hash_fn_codes::SHA1,
    Sha224 = hash_fn_codes::SHA224,
    Sha256 = hash_fn_codes::SHA256,
    Sha384 = hash_fn_codes::SHA384,
    Sha512 = hash_fn_codes::SHA512,
}

impl HashFunction {
    pub const ALL: [HashFunction; 5] = [
        HashFunction::Sha1,
        HashFunction::Sha224,
        HashFunction::Sha256,
        HashFunction::Sha384,
        HashFunction::Sha512,
    ];

    /// Stable serialization code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, PwCryptoError> {
        Self::try_from_primitive(code).map_err(|_| PwCryptoError::UnknownHashFunction {
            code: code.to_string(),
        })
    }

    /// Parse the decimal code found in a payload field.
    pub fn parse(code: &str) -> Result<Self, PwCryptoError> {
        let raw: u8 = code.parse().map_err(|_| PwCryptoError::UnknownHashFunction {
            code: code.to_string(),
        })?;
        Self::from_code(raw)
    }

    pub fn name(self) -> &'static str {
        match self {
            HashFunction::Sha1 => "sha1",
            HashFunction::Sha224 => "sha224",
            HashFunction::Sha256 => "sha256",
            HashFunction::Sha384 => "sha384",
            HashFunction::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashFunction::Sha1 => 20,
            HashFunction::Sha224 => 28,
            HashFunction::Sha256 => 32,
            HashFunction::Sha384 => 48,
            HashFunction::Sha512 => 64,
        }
    }

    /// Fresh streaming digest instance.
    pub fn new_digest(self) -> Box<dyn DynDigest> {
        match self {
            HashFunction::Sha1 => Box::new(sha1::Sha1::default()),
            HashFunction::Sha224 => Box::new(sha2::Sha224::default()),
            HashFunction::Sha256 => Box::new(sha2::Sha256::default()),
            HashFunction::Sha384 => Box::new(sha2::Sha384::default()),
            HashFunction::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }

    /// One-shot digest over the concatenation of `parts`.
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        let mut state = self.new_digest();
        for part in parts {
            state.update(part);
        }
        state.finalize().into_vec()
    }

    /// PBKDF2-HMAC keyed by this function; fills all of `out`.
    pub fn pbkdf2(self, password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
        use ::pbkdf2::pbkdf2_hmac;

        match self {
            HashFunction::Sha1 => pbkdf2_hmac::<sha1::Sha1>(password, salt, rounds, out),
            HashFunction::Sha224 => pbkdf2_hmac::<sha2::Sha224>(password, salt, rounds, out),
            HashFunction::Sha256 => pbkdf2_hmac::<sha2::Sha256>(password, salt, rounds, out),
            HashFunction::Sha384 => pbkdf2_hmac::<sha2::Sha384>(password, salt, rounds, out),
            HashFunction::Sha512 => pbkdf2_hmac::<sha2::Sha512>(password, salt, rounds, out),
        }
    }
}

/// Payload form: the decimal code.
impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
