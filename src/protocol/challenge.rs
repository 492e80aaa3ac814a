use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Digest;

use crate::{Curve, DomainParameters, Error, Result};

/// Number of counter-separated re-derivations attempted when a challenge reduces to zero.
const MAX_CHALLENGE_RETRIES: u32 = 16;

/// Identifier a proof is bound to, such as a user id.
///
/// Its canonical byte encoding is the UTF-8 text. The identifier is never carried
/// inside a proof; the verifier must learn it out of band.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Creates an identifier, rejecting the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use possession_proof::Identifier;
    ///
    /// let id = Identifier::new("user-42").unwrap();
    /// assert_eq!(id.as_bytes(), b"user-42");
    /// assert!(Identifier::new("").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidIdentifier(
                "Identifier cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical byte encoding hashed into the challenge.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Rejects identifiers longer than `max_bytes`.
    pub fn check_length(&self, max_bytes: usize) -> Result<()> {
        if self.0.len() > max_bytes {
            return Err(Error::InvalidIdentifier(format!(
                "Identifier is {} bytes, limit is {}",
                self.0.len(),
                max_bytes
            )));
        }
        Ok(())
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the Fiat-Shamir challenge `c = H(identifier || R.x) mod n`.
///
/// `commitment_x` is the big-endian x-coordinate of the commitment `R`. The digest
/// is read as a big-endian integer and reduced modulo the group order. If that
/// yields zero, the input is re-hashed with a 4-byte big-endian counter appended
/// (1, 2, ...) so a degenerate challenge is never returned.
pub fn challenge<C: Curve, D: Digest>(
    params: &DomainParameters<C>,
    identifier: &Identifier,
    commitment_x: &[u8],
) -> Result<C::Scalar> {
    for counter in 0..=MAX_CHALLENGE_RETRIES {
        let mut hasher = D::new();
        hasher.update(identifier.as_bytes());
        hasher.update(commitment_x);
        if counter > 0 {
            hasher.update(counter.to_be_bytes());
        }

        let c = BigUint::from_bytes_be(&hasher.finalize()) % params.order();
        if !c.is_zero() {
            return C::scalar_from_biguint(&c);
        }
    }

    Err(Error::InvalidScalar(
        "Challenge reduced to zero for every counter".to_string(),
    ))
}
