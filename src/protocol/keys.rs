//! Long-term key material for the proof of possession.

use core::fmt;

use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::codec::DecimalCodec;
use crate::crypto::rng::sample_nonzero_scalar;
use crate::{Curve, Error, ProtocolConfig, Result, SecureRng};

/// Private key: a scalar in `[1, n - 1]`.
///
/// The key is normalized so that its public point has an even y-coordinate: when
/// `d * G` has odd y, `n - d` is stored instead. Both scalars correspond to the
/// same x-only [`PublicKey`].
///
/// # Security
///
/// - The key is automatically zeroized when dropped
/// - It is never serialized, transmitted or logged; `Debug` output is redacted
pub struct PrivateKey<C: Curve> {
    secret: C::Scalar,
}

impl<C: Curve> PrivateKey<C> {
    /// Creates a private key from an existing scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] if the scalar is zero.
    pub fn from_scalar(scalar: C::Scalar) -> Result<Self> {
        if C::scalar_is_zero(&scalar) {
            return Err(Error::InvalidScalar(
                "Private key cannot be zero".to_string(),
            ));
        }

        let point = C::scalar_mul(&C::generator(), &scalar);
        let secret = if C::point_has_odd_y(&point) {
            C::scalar_negate(&scalar)
        } else {
            scalar
        };

        Ok(Self { secret })
    }

    /// Draws a uniformly random private key from `rng`.
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R, config: &ProtocolConfig) -> Result<Self> {
        let scalar = sample_nonzero_scalar::<C, R>(rng, config.max_sampling_attempts)?;
        Self::from_scalar(scalar)
    }

    /// Derives the public key `d * G`.
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            point: C::scalar_mul(&C::generator(), &self.secret),
        }
    }

    /// Returns a reference to the secret scalar.
    pub(crate) fn secret(&self) -> &C::Scalar {
        &self.secret
    }
}

impl<C: Curve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl<C: Curve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// Public key: the even-y curve point `d * G`, identified on the wire by its x-coordinate.
///
/// Always lies on the curve and is never the identity.
#[derive(Clone, Debug)]
pub struct PublicKey<C: Curve> {
    point: C::Point,
}

impl<C: Curve> PublicKey<C> {
    /// Builds a public key from untrusted affine coordinates.
    ///
    /// The point is validated and then normalized to its even-y form, so a key and
    /// its negation name the same x-only public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if the point is not on the curve or is the identity.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        let point = C::point_from_coordinates(x, y)?;
        Ok(Self::from_point(point))
    }

    /// Lifts an x-coordinate to the even-y public key.
    pub fn from_x(x: &[u8]) -> Result<Self> {
        Ok(Self {
            point: C::point_from_x(x)?,
        })
    }

    /// Decodes a public key from its fixed-width decimal x-coordinate.
    pub fn from_decimal_x(codec: &DecimalCodec, text: &str) -> Result<Self> {
        let x = codec.decode_coordinate(text)?;
        Self::from_x(&x)
    }

    pub(crate) fn from_point(point: C::Point) -> Self {
        let point = if C::point_has_odd_y(&point) {
            C::point_negate(&point)
        } else {
            point
        };
        Self { point }
    }

    /// Returns the curve point.
    pub fn point(&self) -> &C::Point {
        &self.point
    }

    /// Returns the big-endian x-coordinate.
    pub fn x(&self) -> Vec<u8> {
        C::point_coordinates(&self.point)
            .map(|(x, _)| x)
            .unwrap_or_else(|| unreachable!("Public key is never the identity"))
    }

    /// Returns the x-coordinate as a fixed-width decimal string.
    pub fn to_decimal_x(&self, codec: &DecimalCodec) -> String {
        codec.encode_coordinate(&self.x())
    }
}

impl<C: Curve> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<C: Curve> Eq for PublicKey<C> {}

/// A private key together with its public key.
#[derive(Debug)]
pub struct KeyPair<C: Curve> {
    private_key: PrivateKey<C>,
    public_key: PublicKey<C>,
}

impl<C: Curve> KeyPair<C> {
    /// Generates a key pair from the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientEntropy`] if the source fails or cannot
    /// produce an unbiased scalar within the configured number of draws.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, config: &ProtocolConfig) -> Result<Self> {
        let private_key = PrivateKey::random(rng, config)?;
        let public_key = private_key.public_key();
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Builds the pair for an existing private key.
    pub fn from_private_key(private_key: PrivateKey<C>) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// Returns the private key.
    pub fn private_key(&self) -> &PrivateKey<C> {
        &self.private_key
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Splits the pair into its private and public halves.
    pub fn into_parts(self) -> (PrivateKey<C>, PublicKey<C>) {
        (self.private_key, self.public_key)
    }
}

/// Generates a key pair for curve `C` from the operating system's random source.
///
/// # Examples
///
/// ```rust
/// use possession_proof::{generate_keypair, P256};
///
/// let (private_key, public_key) = generate_keypair::<P256>().unwrap();
/// assert_eq!(private_key.public_key(), public_key);
/// ```
pub fn generate_keypair<C: Curve>() -> Result<(PrivateKey<C>, PublicKey<C>)> {
    tracing::debug!(curve = C::name(), "generating key pair");
    KeyPair::generate(&mut SecureRng::new(), &ProtocolConfig::default()).map(KeyPair::into_parts)
}
