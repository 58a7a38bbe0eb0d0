//! constants.rs
//! Stable identifiers, separators and recommended parameter sets.
//!
//! Algorithm ids and hash-function codes are persisted inside stored hashes.
//! Once released they must never be reused for a different payload shape;
//! changing a payload layout means minting a new id.

/// Separator between the algorithm id and its payload, and between payload fields.
pub const SEPARATOR: char = '|';

/// Algorithm identifiers (dispatch keys).
pub mod algorithm_ids {
    pub const NULL: &str = "null";
    pub const SHA1: &str = "sha1";
    pub const SHA256: &str = "sha256";
    pub const PBKDF2: &str = "pbkdf2";
    pub const SCRYPT: &str = "Scrypt";
    pub const ARGON2: &str = "argon2";
}

/// Inner hash-function codes (serialized into PBKDF2 payloads).
pub mod hash_fn_codes {
    pub const SHA1: u8 = 0;
    pub const SHA224: u8 = 1;
    pub const SHA256: u8 = 2;
    pub const SHA384: u8 = 3;
    pub const SHA512: u8 = 4;
}

/// Salt length for the salted SHA-1 / SHA-256 digests.
pub const DEFAULT_SALTED_DIGEST_SALT_LEN: usize = 32;

/// PBKDF2 recommended options.
pub mod pbkdf2_defaults {
    pub const ITERATIONS: u32 = 8192;
    pub const KEY_LEN: usize = 32;
    pub const SALT_LEN: usize = 24;
}

/// Scrypt recommended options.
pub mod scrypt_defaults {
    pub const SALT_LEN: usize = 32;
    pub const CPU_MEM_COST: u64 = 32768;
    pub const R: u32 = 8;
    pub const P: u32 = 1;
    pub const KEY_LEN: usize = 32;
}

/// Argon2id recommended options.
pub mod argon2_defaults {
    pub const SALT_LEN: usize = 32;
    pub const TIME: u32 = 2;
    /// KiB
    pub const MEMORY: u32 = 256 * 1024;
    pub const THREADS: u8 = 4;
    pub const KEY_LEN: u32 = 32;
}

/// Ceilings on costs read back from stored payloads. A payload above them is
/// malformed unless the instance's own configuration is at least as large.
pub mod payload_limits {
    /// Scrypt working set, `128 * r * (N + p)` bytes.
    pub const SCRYPT_MAX_MEMORY_BYTES: u64 = 1 << 30;
    /// KiB
    pub const ARGON2_MAX_MEMORY: u32 = 1 << 20;
    pub const ARGON2_MAX_TIME: u32 = 64;
}
