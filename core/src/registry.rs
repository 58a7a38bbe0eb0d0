//! registry.rs
//! Dispatcher over an ordered list of algorithms.
//!
//! Encoded form: `<algorithm-id>|<algorithm-payload>`. The registry owns the
//! first separator only; payloads may contain further bars.
//!
//! - Element 0 is preferred: every new hash is minted with it.
//! - Unknown tags are non-matches, so rolling back to a build that lacks a
//!   newer algorithm fails closed instead of erroring.
//! - Upgrade = (wrong algorithm family) OR (right family, stale parameters).
//! - Duplicate ids are allowed; the first registered one wins.

use std::fmt;

use tracing::{debug, warn};

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::SEPARATOR;
use crate::types::PwCryptoError;

/// Result of [`CryptoRegistry::check_and_rehash`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rehash {
    pub valid: bool,
    /// Replacement encoded hash, present only when the stored one was valid
    /// but must be upgraded.
    pub upgraded: Option<String>,
}

pub struct CryptoRegistry {
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl CryptoRegistry {
    pub fn new(algorithms: Vec<Box<dyn Algorithm>>) -> Self {
        for (i, alg) in algorithms.iter().enumerate() {
            if algorithms[..i].iter().any(|a| a.id() == alg.id()) {
                warn!(id = alg.id(), position = i, "duplicate algorithm id is unreachable");
            }
        }
        Self { algorithms }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Id of the algorithm used for new hashes.
    pub fn preferred(&self) -> Option<&'static str> {
        self.algorithms.first().map(|a| a.id())
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algorithms.iter().map(|a| a.id())
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    fn find(&self, id: &str) -> Option<&dyn Algorithm> {
        self.algorithms
            .iter()
            .find(|a| a.id() == id)
            .map(|a| &**a)
    }

    /// Whether some registered algorithm claims the tag of `encoded`.
    pub fn supports(&self, encoded: &str) -> bool {
        let tag = encoded.split_once(SEPARATOR).map_or(encoded, |(tag, _)| tag);
        self.find(tag).is_some()
    }

    /// Hash `plaintext` with the preferred algorithm.
    pub fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        let alg = self
            .algorithms
            .first()
            .ok_or(PwCryptoError::NoAlgorithmsConfigured)?;
        let payload = alg.hash(plaintext)?;
        Ok(format!("{}{}{}", alg.id(), SEPARATOR, payload))
    }

    /// Verify `plaintext` against a stored encoded hash.
    pub fn check(&self, plaintext: &str, encoded: &str) -> Result<Verdict, PwCryptoError> {
        let (tag, payload) = match encoded.split_once(SEPARATOR) {
            Some((tag, payload)) => (tag, Some(payload)),
            None => (encoded, None),
        };

        let Some(alg) = self.find(tag) else {
            debug!(tag, "no registered algorithm for tag");
            return Ok(Verdict::MISMATCH);
        };

        let Some(payload) = payload else {
            warn!(algorithm = alg.id(), "stored hash has no payload separator");
            return Err(PwCryptoError::malformed(alg.id(), "missing payload separator"));
        };

        let verdict = alg.check(plaintext, payload).map_err(|e| {
            if e.is_malformed() {
                warn!(algorithm = alg.id(), error = %e, "stored hash failed to parse");
            }
            e
        })?;

        if !verdict.valid() {
            return Ok(Verdict::MISMATCH);
        }

        let foreign_family = self.preferred() != Some(alg.id());
        let must_upgrade = foreign_family || verdict.must_upgrade();
        if must_upgrade {
            debug!(
                algorithm = alg.id(),
                foreign_family,
                stale_parameters = verdict.must_upgrade(),
                "stored hash should be upgraded"
            );
        }
        Ok(Verdict::matched(must_upgrade))
    }

    /// `check`, then mint a replacement hash when the stored one is valid but
    /// outdated.
    pub fn check_and_rehash(&self, plaintext: &str, encoded: &str) -> Result<Rehash, PwCryptoError> {
        let verdict = self.check(plaintext, encoded)?;
        let upgraded = if verdict.must_upgrade() {
            Some(self.hash(plaintext)?)
        } else {
            None
        };
        Ok(Rehash {
            valid: verdict.valid(),
            upgraded,
        })
    }
}

impl fmt::Debug for CryptoRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.algorithms.iter()).finish()
    }
}

/// Incremental construction; the first added algorithm is preferred.
#[derive(Default)]
pub struct RegistryBuilder {
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl RegistryBuilder {
    pub fn with<A: Algorithm + 'static>(mut self, algorithm: A) -> Self {
        self.algorithms.push(Box::new(algorithm));
        self
    }

    pub fn build(self) -> CryptoRegistry {
        CryptoRegistry::new(self.algorithms)
    }
}
