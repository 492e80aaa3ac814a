//! NIST P-256 (secp256r1) curve implementation.
//!
//! # Security Level
//!
//! P-256 provides approximately 128 bits of security against classical attacks.
//! All field and scalar arithmetic comes from the RustCrypto `p256` crate, which
//! works on fixed-size 256-bit limbs in constant time.

use num_bigint::BigUint;
use p256::elliptic_curve::point::AffineCoordinates;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::{Field, PrimeField};
use p256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as P256Scalar};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{Curve, Error, Result};

/// Number of bytes in a P-256 scalar or field element (32 bytes).
const P256_BYTES: usize = 32;

/// SEC1 tag of a compressed point with an even y-coordinate.
const SEC1_EVEN_Y_TAG: u8 = 0x02;

/// Base field prime `p = 2^256 - 2^224 + 2^192 + 2^96 - 1` (SEC 2, section 2.4.2).
const P256_FIELD_PRIME_HEX: &str =
    "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// NIST P-256 (secp256r1) curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct P256;

/// Scalar modulo the P-256 group order.
///
/// Scalars are automatically zeroized when dropped for security.
#[derive(Clone, Debug)]
pub struct Scalar(P256Scalar);

/// Point on the P-256 curve.
///
/// Points are stored in projective coordinates for efficient arithmetic.
#[derive(Clone, Debug)]
pub struct Point(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        // P256Scalar doesn't expose mutable internals, so we overwrite with zero
        self.0 = P256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Point {}

impl Scalar {
    /// Creates a new scalar from a p256 Scalar.
    pub fn new(value: P256Scalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner p256 Scalar.
    pub fn inner(&self) -> &P256Scalar {
        &self.0
    }
}

impl Point {
    /// Creates a new point from a ProjectivePoint.
    pub fn new(value: ProjectivePoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner ProjectivePoint.
    pub fn inner(&self) -> &ProjectivePoint {
        &self.0
    }
}

fn field_bytes(bytes: &[u8], what: &str) -> Result<FieldBytes> {
    if bytes.len() != P256_BYTES {
        return Err(Error::InvalidPoint(format!(
            "Expected {} bytes for {}, got {}",
            P256_BYTES,
            what,
            bytes.len()
        )));
    }

    let mut arr = [0u8; P256_BYTES];
    arr.copy_from_slice(bytes);
    Ok(arr.into())
}

fn decode_affine(encoded: &EncodedPoint) -> Result<Point> {
    let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(encoded))
        .ok_or_else(|| Error::InvalidPoint("Coordinates are not on the P-256 curve".to_string()))?;

    if bool::from(affine.is_identity()) {
        return Err(Error::InvalidPoint(
            "Point is the identity element".to_string(),
        ));
    }

    Ok(Point(ProjectivePoint::from(affine)))
}

impl Curve for P256 {
    type Scalar = Scalar;
    type Point = Point;

    const ENCODED_BYTES: usize = P256_BYTES;

    fn name() -> &'static str {
        "P-256"
    }

    fn field_prime() -> BigUint {
        let bytes = hex::decode(P256_FIELD_PRIME_HEX)
            .unwrap_or_else(|_| unreachable!("P-256 field prime is valid hex"));
        BigUint::from_bytes_be(&bytes)
    }

    fn order() -> BigUint {
        // n - 1 is the largest canonical scalar
        let n_minus_one = -P256Scalar::ONE;
        BigUint::from_bytes_be(&n_minus_one.to_bytes()) + 1u32
    }

    fn generator() -> Self::Point {
        Point(ProjectivePoint::GENERATOR)
    }

    fn identity() -> Self::Point {
        Point(ProjectivePoint::IDENTITY)
    }

    fn is_identity(point: &Self::Point) -> bool {
        point.0.to_affine().is_identity().into()
    }

    fn scalar_from_be_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() != P256_BYTES {
            return Err(Error::InvalidScalar(format!(
                "Expected {} bytes, got {}",
                P256_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; P256_BYTES];
        arr.copy_from_slice(bytes);

        let scalar = Option::<P256Scalar>::from(P256Scalar::from_repr(arr.into()));
        arr.zeroize();

        scalar.map(Scalar).ok_or_else(|| {
            Error::InvalidScalar("Bytes do not represent a value below the P-256 order".to_string())
        })
    }

    fn scalar_to_be_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_bytes().to_vec()
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_negate(scalar: &Self::Scalar) -> Self::Scalar {
        Scalar(-scalar.0)
    }

    fn scalar_mul(point: &Self::Point, scalar: &Self::Scalar) -> Self::Point {
        Point(point.0 * scalar.0)
    }

    fn point_add(a: &Self::Point, b: &Self::Point) -> Self::Point {
        Point(a.0 + b.0)
    }

    fn point_negate(point: &Self::Point) -> Self::Point {
        Point(-point.0)
    }

    fn point_from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::Point> {
        let x = field_bytes(x, "x-coordinate")?;
        let y = field_bytes(y, "y-coordinate")?;
        decode_affine(&EncodedPoint::from_affine_coordinates(&x, &y, false))
    }

    fn point_from_x(x: &[u8]) -> Result<Self::Point> {
        let x = field_bytes(x, "x-coordinate")?;

        let mut compressed = Vec::with_capacity(P256_BYTES + 1);
        compressed.push(SEC1_EVEN_Y_TAG);
        compressed.extend_from_slice(&x);

        let encoded = EncodedPoint::from_bytes(&compressed)
            .map_err(|_| Error::InvalidPoint("Failed to parse encoded point".to_string()))?;
        decode_affine(&encoded)
    }

    fn point_coordinates(point: &Self::Point) -> Option<(Vec<u8>, Vec<u8>)> {
        let encoded = point.0.to_affine().to_encoded_point(false);
        let x = encoded.x()?;
        let y = encoded.y()?;
        Some((x.to_vec(), y.to_vec()))
    }

    fn point_has_odd_y(point: &Self::Point) -> bool {
        point.0.to_affine().y_is_odd().into()
    }
}
