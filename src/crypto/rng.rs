//! Cryptographically secure randomness and uniform scalar sampling.

use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};

use super::Curve;
use crate::{Error, Result};

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library. It holds no state, so
/// any number of workers may each own one.
#[derive(Clone, Copy, Debug)]
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Draws a scalar uniformly from `[1, n - 1]` by rejection sampling.
///
/// Candidates that are not below `n`, or are zero, are discarded. A failing
/// source, or one that keeps producing rejected candidates for `max_attempts`
/// draws, yields [`Error::InsufficientEntropy`].
pub(crate) fn sample_nonzero_scalar<C: Curve, R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    max_attempts: u32,
) -> Result<C::Scalar> {
    let mut buf = vec![0u8; C::ENCODED_BYTES];

    for _ in 0..max_attempts {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::InsufficientEntropy(format!("Random source failed: {}", e)))?;

        if let Ok(scalar) = C::scalar_from_be_bytes(&buf) {
            if !C::scalar_is_zero(&scalar) {
                zeroize::Zeroize::zeroize(&mut buf);
                return Ok(scalar);
            }
        }
    }

    zeroize::Zeroize::zeroize(&mut buf);
    Err(Error::InsufficientEntropy(format!(
        "No scalar in [1, n-1] after {} draws",
        max_attempts
    )))
}
