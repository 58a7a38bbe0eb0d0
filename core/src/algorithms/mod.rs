//! algorithms/mod.rs
//! Capability contract every password hashing algorithm satisfies, plus the
//! built-in implementations.
//!
//! Each algorithm owns the internal layout of its payload; the registry owns
//! the `<id>|` prefix. Verification uses only the parameters embedded in the
//! payload. The instance's current parameters decide staleness, never
//! correctness.

use std::fmt;

use crate::types::PwCryptoError;

pub mod argon2;
pub mod null;
pub mod pbkdf2;
pub mod salted;
pub mod scrypt;

pub use self::argon2::Argon2Crypto;
pub use self::null::NullCrypto;
pub use self::pbkdf2::Pbkdf2Crypto;
pub use self::salted::SaltedDigest;
pub use self::scrypt::ScryptCrypto;

/// Outcome of a successful `check`.
///
/// `must_upgrade` is only ever set together with `valid`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    valid: bool,
    must_upgrade: bool,
}

impl Verdict {
    /// Not a match (wrong password, foreign format, rejected parameter choice).
    pub const MISMATCH: Verdict = Verdict {
        valid: false,
        must_upgrade: false,
    };

    #[inline]
    pub const fn matched(stale: bool) -> Self {
        Verdict {
            valid: true,
            must_upgrade: stale,
        }
    }

    /// Whether the plaintext matched.
    #[inline]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Whether a matched hash should be re-minted with current settings.
    #[inline]
    pub fn must_upgrade(&self) -> bool {
        self.must_upgrade
    }

    /// Map a comparison result, flagging staleness only on a match.
    #[inline]
    pub(crate) fn from_comparison(equal: bool, stale: bool) -> Self {
        if equal {
            Verdict::matched(stale)
        } else {
            Verdict::MISMATCH
        }
    }
}

pub trait Algorithm: Send + Sync + fmt::Debug {
    /// Stable dispatch key stored in front of every payload.
    fn id(&self) -> &'static str;

    /// Derive a fresh payload (random salt, current parameters).
    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError>;

    /// Verify `plaintext` against a payload previously produced by `hash`.
    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError>;
}

impl<A: Algorithm + ?Sized> Algorithm for Box<A> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        (**self).hash(plaintext)
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        (**self).check(plaintext, payload)
    }
}
