//! utils.rs
//! Payload field helpers shared by the algorithm implementations.

use std::fmt::Display;
use std::str::FromStr;

use rand::{rngs::OsRng, RngCore};
use subtle::ConstantTimeEq;

use crate::constants::SEPARATOR;
use crate::types::PwCryptoError;

/// Split a payload into exactly `N` bar-separated fields.
pub(crate) fn split_fields<'a, const N: usize>(
    algorithm: &'static str,
    payload: &'a str,
) -> Result<[&'a str; N], PwCryptoError> {
    let parts: Vec<&'a str> = payload.split(SEPARATOR).collect();
    <[&'a str; N]>::try_from(parts).map_err(|parts| {
        PwCryptoError::malformed(
            algorithm,
            format!("expected {} fields, found {}", N, parts.len()),
        )
    })
}

/// Decode a lower-case hex field.
pub(crate) fn decode_hex(
    algorithm: &'static str,
    field: &str,
    value: &str,
) -> Result<Vec<u8>, PwCryptoError> {
    if value.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(PwCryptoError::malformed(
            algorithm,
            format!("{} is not lower-case hex", field),
        ));
    }
    hex::decode(value)
        .map_err(|e| PwCryptoError::malformed(algorithm, format!("{}: {}", field, e)))
}

/// Parse a decimal numeric field.
pub(crate) fn parse_decimal<T>(
    algorithm: &'static str,
    field: &str,
    value: &str,
) -> Result<T, PwCryptoError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| PwCryptoError::malformed(algorithm, format!("{} {:?}: {}", field, value, e)))
}

/// Constant-time byte equality. Length mismatch compares unequal.
#[inline]
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Fresh salt from the OS random source.
pub(crate) fn random_salt(len: usize) -> Result<Vec<u8>, PwCryptoError> {
    let mut salt = vec![0u8; len];
    OsRng.try_fill_bytes(&mut salt)?;
    Ok(salt)
}
