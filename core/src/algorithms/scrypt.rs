//! algorithms/scrypt.rs
//! Scrypt memory-hard KDF.
//!
//! Payload: `derived_hex|salt_hex|N|r|p|key_len`
//!
//! `N` is stored as the decimal CPU/memory cost (e.g. 32768), not its log.
//! Any value that is not a power of two greater than 1 is malformed, as is a
//! payload whose working set exceeds both the fixed ceiling and this
//! instance's own.

use tracing::trace;

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::{algorithm_ids, payload_limits, scrypt_defaults};
use crate::types::PwCryptoError;
use crate::utils::{ct_eq, decode_hex, parse_decimal, random_salt, split_fields};

const ID: &str = algorithm_ids::SCRYPT;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScryptCrypto {
    salt_len: usize,
    cpu_mem_cost: u64,
    r: u32,
    p: u32,
    key_len: usize,
}

impl Default for ScryptCrypto {
    fn default() -> Self {
        Self::new()
    }
}

impl ScryptCrypto {
    /// Recommended options: 32-byte salt, N=32768, r=8, p=1, 32-byte key.
    pub fn new() -> Self {
        Self::with_options(
            scrypt_defaults::SALT_LEN,
            scrypt_defaults::CPU_MEM_COST,
            scrypt_defaults::R,
            scrypt_defaults::P,
            scrypt_defaults::KEY_LEN,
        )
    }

    pub fn with_options(salt_len: usize, cpu_mem_cost: u64, r: u32, p: u32, key_len: usize) -> Self {
        Self {
            salt_len,
            cpu_mem_cost,
            r,
            p,
            key_len,
        }
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn cpu_mem_cost(&self) -> u64 {
        self.cpu_mem_cost
    }

    pub fn r(&self) -> u32 {
        self.r
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Bytes the primitive allocates for these parameters.
    fn memory_cost(cpu_mem_cost: u64, r: u32, p: u32) -> u128 {
        128 * u128::from(r) * (u128::from(cpu_mem_cost) + u128::from(p))
    }

    fn derive(
        plaintext: &str,
        salt: &[u8],
        cpu_mem_cost: u64,
        r: u32,
        p: u32,
        key_len: usize,
    ) -> Result<Vec<u8>, String> {
        if cpu_mem_cost < 2 || !cpu_mem_cost.is_power_of_two() {
            return Err(format!(
                "cost {} is not a power of two greater than 1",
                cpu_mem_cost
            ));
        }
        let log_n = cpu_mem_cost.trailing_zeros() as u8;

        // The params length is only consulted for PHC strings; the output
        // buffer decides the derived length.
        let params = ::scrypt::Params::new(log_n, r, p, ::scrypt::Params::RECOMMENDED_LEN)
            .map_err(|e| e.to_string())?;

        let mut out = vec![0u8; key_len];
        ::scrypt::scrypt(plaintext.as_bytes(), salt, &params, &mut out).map_err(|e| e.to_string())?;
        Ok(out)
    }
}

impl Algorithm for ScryptCrypto {
    fn id(&self) -> &'static str {
        ID
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        let salt = random_salt(self.salt_len)?;
        let derived = Self::derive(plaintext, &salt, self.cpu_mem_cost, self.r, self.p, self.key_len)
            .map_err(|reason| PwCryptoError::invalid_params(ID, reason))?;
        trace!(n = self.cpu_mem_cost, r = self.r, p = self.p, "minted scrypt hash");

        Ok(format!(
            "{}|{}|{}|{}|{}|{}",
            hex::encode(derived),
            hex::encode(salt),
            self.cpu_mem_cost,
            self.r,
            self.p,
            self.key_len
        ))
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        let [derived_hex, salt_hex, n_field, r_field, p_field, key_len_field] =
            split_fields::<6>(ID, payload)?;

        let expected = decode_hex(ID, "derived key", derived_hex)?;
        let salt = decode_hex(ID, "salt", salt_hex)?;
        let cpu_mem_cost: u64 = parse_decimal(ID, "cpu/memory cost", n_field)?;
        let r: u32 = parse_decimal(ID, "r", r_field)?;
        let p: u32 = parse_decimal(ID, "p", p_field)?;
        let key_len: usize = parse_decimal(ID, "key length", key_len_field)?;

        if key_len == 0 || key_len != expected.len() {
            return Err(PwCryptoError::malformed(ID, "key length disagrees with derived key"));
        }

        let ceiling = u128::from(payload_limits::SCRYPT_MAX_MEMORY_BYTES)
            .max(Self::memory_cost(self.cpu_mem_cost, self.r, self.p));
        if Self::memory_cost(cpu_mem_cost, r, p) > ceiling {
            return Err(PwCryptoError::malformed(ID, "cost parameters exceed memory ceiling"));
        }

        let actual = Self::derive(plaintext, &salt, cpu_mem_cost, r, p, key_len)
            .map_err(|reason| PwCryptoError::malformed(ID, reason))?;
        let stale = salt.len() != self.salt_len
            || cpu_mem_cost != self.cpu_mem_cost
            || r != self.r
            || p != self.p
            || key_len != self.key_len;

        Ok(Verdict::from_comparison(ct_eq(&actual, &expected), stale))
    }
}
