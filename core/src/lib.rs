//! pwcrypto-core
//!
//! Pluggable password hashing with self-describing, versioned encodings.
//! One storage column can hold hashes from several algorithms and parameter
//! sets at once; `check` reports when a stored hash should be re-minted with
//! the preferred algorithm and its current parameters.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub(crate) mod utils;

// Primitives and algorithms
pub mod crypto;
pub mod algorithms;

// Dispatch and configuration
pub mod registry;
pub mod config;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::algorithms::{
        Algorithm, Argon2Crypto, NullCrypto, Pbkdf2Crypto, SaltedDigest, ScryptCrypto, Verdict,
    };
    pub use crate::config::{AlgorithmConfig, RegistryConfig};
    pub use crate::crypto::HashFunction;
    pub use crate::registry::{CryptoRegistry, Rehash};
    pub use crate::types::PwCryptoError;
}
