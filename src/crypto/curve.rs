use core::fmt::Debug;

use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::{Error, Result};

/// Trait for prime-order short-Weierstrass curves used by the proof of possession.
///
/// Implementations provide both point operations and scalar arithmetic modulo the
/// group order `n`. Scalars are fixed-size values, never wider than `n - 1`.
pub trait Curve: Clone + Debug + Send + Sync + 'static {
    /// Scalar type for this curve (integers modulo `n`).
    ///
    /// Scalars must be zeroizable for security.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;

    /// Point type for this curve.
    type Point: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Number of bytes in a canonical scalar or coordinate encoding.
    const ENCODED_BYTES: usize;

    /// Returns the name of this curve.
    fn name() -> &'static str;

    /// Returns the prime `p` of the base field.
    fn field_prime() -> BigUint;

    /// Returns the prime order `n` of the point group.
    fn order() -> BigUint;

    /// Returns the base point `G`.
    fn generator() -> Self::Point;

    /// Returns the identity element (point at infinity).
    fn identity() -> Self::Point;

    /// Checks if a point is the identity.
    fn is_identity(point: &Self::Point) -> bool;

    /// Parses a canonical big-endian scalar.
    ///
    /// Fails with [`Error::InvalidScalar`] unless `bytes` is exactly
    /// [`Self::ENCODED_BYTES`] long and encodes a value below `n`.
    fn scalar_from_be_bytes(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Serializes a scalar to canonical big-endian bytes.
    fn scalar_to_be_bytes(scalar: &Self::Scalar) -> Vec<u8>;

    /// Checks if a scalar is zero.
    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;

    /// Adds two scalars: `a + b mod n`.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplies two scalars: `a * b mod n`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Negates a scalar: `n - s mod n`.
    fn scalar_negate(scalar: &Self::Scalar) -> Self::Scalar;

    /// Performs scalar multiplication: `scalar * point`.
    fn scalar_mul(point: &Self::Point, scalar: &Self::Scalar) -> Self::Point;

    /// Adds two points.
    fn point_add(a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Negates a point.
    fn point_negate(point: &Self::Point) -> Self::Point;

    /// Builds a point from untrusted big-endian affine coordinates.
    ///
    /// Fails with [`Error::InvalidPoint`] if the coordinates are not on the curve
    /// or describe the identity.
    fn point_from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::Point>;

    /// Lifts an x-coordinate to the curve point with an even y-coordinate.
    ///
    /// Fails with [`Error::InvalidPoint`] if no point has this x-coordinate.
    fn point_from_x(x: &[u8]) -> Result<Self::Point>;

    /// Returns the big-endian affine coordinates, or `None` for the identity.
    fn point_coordinates(point: &Self::Point) -> Option<(Vec<u8>, Vec<u8>)>;

    /// Checks if the affine y-coordinate of a point is odd.
    fn point_has_odd_y(point: &Self::Point) -> bool;

    /// Converts an integer already reduced below `n` into a scalar.
    fn scalar_from_biguint(value: &BigUint) -> Result<Self::Scalar> {
        let bytes = left_pad(&value.to_bytes_be(), Self::ENCODED_BYTES).ok_or_else(|| {
            Error::InvalidScalar(format!(
                "Integer does not fit in {} bytes",
                Self::ENCODED_BYTES
            ))
        })?;
        Self::scalar_from_be_bytes(&bytes)
    }

    /// Converts a scalar into an integer in `[0, n)`.
    fn scalar_to_biguint(scalar: &Self::Scalar) -> BigUint {
        BigUint::from_bytes_be(&Self::scalar_to_be_bytes(scalar))
    }
}

/// Left-pads big-endian bytes with zeros to `width`, or `None` if they do not fit.
pub(crate) fn left_pad(bytes: &[u8], width: usize) -> Option<Vec<u8>> {
    if bytes.len() > width {
        return None;
    }
    let mut padded = vec![0u8; width - bytes.len()];
    padded.extend_from_slice(bytes);
    Some(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pad_fills_leading_zeros() {
        assert_eq!(left_pad(&[1, 2], 4), Some(vec![0, 0, 1, 2]));
        assert_eq!(left_pad(&[], 2), Some(vec![0, 0]));
    }

    #[test]
    fn left_pad_rejects_oversized_input() {
        assert_eq!(left_pad(&[1, 2, 3], 2), None);
    }
}
