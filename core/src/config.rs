//! config.rs
//! Typed construction-time configuration for a registry.
//!
//! Example (JSON):
//!
//! ```text
//! {
//!   "algorithms": [
//!     { "algorithm": "pbkdf2", "iterations": 8192, "hash_functions": ["sha512", "sha1"] },
//!     { "algorithm": "sha1" },
//!     { "algorithm": "null" }
//!   ]
//! }
//! ```
//!
//! Omitted fields take the recommended defaults from `constants`. Order is
//! significant: the first entry is preferred.

use serde::{Deserialize, Serialize};

use crate::algorithms::{
    Algorithm, Argon2Crypto, NullCrypto, Pbkdf2Crypto, SaltedDigest, ScryptCrypto,
};
use crate::constants::{
    argon2_defaults, pbkdf2_defaults, scrypt_defaults, DEFAULT_SALTED_DIGEST_SALT_LEN,
};
use crate::crypto::HashFunction;
use crate::registry::CryptoRegistry;
use crate::types::PwCryptoError;

fn salted_salt_len() -> usize {
    DEFAULT_SALTED_DIGEST_SALT_LEN
}

fn pbkdf2_iterations() -> u32 {
    pbkdf2_defaults::ITERATIONS
}

fn pbkdf2_key_len() -> usize {
    pbkdf2_defaults::KEY_LEN
}

fn pbkdf2_salt_len() -> usize {
    pbkdf2_defaults::SALT_LEN
}

fn pbkdf2_hash_functions() -> Vec<HashFunction> {
    vec![HashFunction::Sha512, HashFunction::Sha256, HashFunction::Sha1]
}

fn scrypt_salt_len() -> usize {
    scrypt_defaults::SALT_LEN
}

fn scrypt_cpu_mem_cost() -> u64 {
    scrypt_defaults::CPU_MEM_COST
}

fn scrypt_r() -> u32 {
    scrypt_defaults::R
}

fn scrypt_p() -> u32 {
    scrypt_defaults::P
}

fn scrypt_key_len() -> usize {
    scrypt_defaults::KEY_LEN
}

fn argon2_salt_len() -> usize {
    argon2_defaults::SALT_LEN
}

fn argon2_time() -> u32 {
    argon2_defaults::TIME
}

fn argon2_memory() -> u32 {
    argon2_defaults::MEMORY
}

fn argon2_threads() -> u8 {
    argon2_defaults::THREADS
}

fn argon2_key_len() -> u32 {
    argon2_defaults::KEY_LEN
}

/// One algorithm instance and its current parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase", deny_unknown_fields)]
pub enum AlgorithmConfig {
    Null,
    Sha1 {
        #[serde(default = "salted_salt_len")]
        salt_len: usize,
    },
    Sha256 {
        #[serde(default = "salted_salt_len")]
        salt_len: usize,
    },
    Pbkdf2 {
        #[serde(default = "pbkdf2_iterations")]
        iterations: u32,
        #[serde(default = "pbkdf2_key_len")]
        key_len: usize,
        #[serde(default = "pbkdf2_salt_len")]
        salt_len: usize,
        #[serde(default = "pbkdf2_hash_functions")]
        hash_functions: Vec<HashFunction>,
    },
    Scrypt {
        #[serde(default = "scrypt_salt_len")]
        salt_len: usize,
        #[serde(default = "scrypt_cpu_mem_cost")]
        cpu_mem_cost: u64,
        #[serde(default = "scrypt_r")]
        r: u32,
        #[serde(default = "scrypt_p")]
        p: u32,
        #[serde(default = "scrypt_key_len")]
        key_len: usize,
    },
    Argon2 {
        #[serde(default = "argon2_salt_len")]
        salt_len: usize,
        #[serde(default = "argon2_time")]
        time: u32,
        #[serde(default = "argon2_memory")]
        memory: u32,
        #[serde(default = "argon2_threads")]
        threads: u8,
        #[serde(default = "argon2_key_len")]
        key_len: u32,
    },
}

impl AlgorithmConfig {
    pub fn build(&self) -> Box<dyn Algorithm> {
        match self {
            AlgorithmConfig::Null => Box::new(NullCrypto::new()),
            AlgorithmConfig::Sha1 { salt_len } => {
                Box::new(SaltedDigest::sha1().with_salt_len(*salt_len))
            }
            AlgorithmConfig::Sha256 { salt_len } => {
                Box::new(SaltedDigest::sha256().with_salt_len(*salt_len))
            }
            AlgorithmConfig::Pbkdf2 { iterations, key_len, salt_len, hash_functions } => {
                Box::new(Pbkdf2Crypto::with_options(
                    *iterations,
                    *key_len,
                    *salt_len,
                    hash_functions.clone(),
                ))
            }
            AlgorithmConfig::Scrypt { salt_len, cpu_mem_cost, r, p, key_len } => {
                Box::new(ScryptCrypto::with_options(*salt_len, *cpu_mem_cost, *r, *p, *key_len))
            }
            AlgorithmConfig::Argon2 { salt_len, time, memory, threads, key_len } => {
                Box::new(Argon2Crypto::with_options(*salt_len, *time, *memory, *threads, *key_len))
            }
        }
    }
}

/// Ordered registry description; element 0 is preferred.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub algorithms: Vec<AlgorithmConfig>,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self, PwCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PwCryptoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> CryptoRegistry {
        CryptoRegistry::new(self.algorithms.iter().map(AlgorithmConfig::build).collect())
    }
}
