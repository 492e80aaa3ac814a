//! Domain parameters of a named prime-order curve.

use core::marker::PhantomData;

use num_bigint::BigUint;

use super::Curve;

/// Public domain parameters: curve name, field prime `p`, order `n`, base point `G`.
///
/// Pure data derived from the curve implementation. A value is built once and
/// handed to the prover, verifier and codec; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct DomainParameters<C: Curve> {
    name: &'static str,
    field_prime: BigUint,
    order: BigUint,
    generator: C::Point,
    generator_x: BigUint,
    generator_y: BigUint,
    _curve: PhantomData<C>,
}

impl<C: Curve> DomainParameters<C> {
    /// Builds the domain parameters of curve `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use possession_proof::{DomainParameters, P256};
    ///
    /// let params = DomainParameters::<P256>::new();
    /// assert_eq!(params.name(), "P-256");
    /// ```
    pub fn new() -> Self {
        let generator = C::generator();
        let (x, y) = C::point_coordinates(&generator)
            .unwrap_or_else(|| unreachable!("Base point is never the identity"));

        Self {
            name: C::name(),
            field_prime: C::field_prime(),
            order: C::order(),
            generator,
            generator_x: BigUint::from_bytes_be(&x),
            generator_y: BigUint::from_bytes_be(&y),
            _curve: PhantomData,
        }
    }

    /// Returns the curve identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the base field prime `p`.
    pub fn field_prime(&self) -> &BigUint {
        &self.field_prime
    }

    /// Returns the group order `n`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Returns the base point `G`.
    pub fn generator(&self) -> &C::Point {
        &self.generator
    }

    /// Returns the affine x-coordinate of `G`.
    pub fn generator_x(&self) -> &BigUint {
        &self.generator_x
    }

    /// Returns the affine y-coordinate of `G`.
    pub fn generator_y(&self) -> &BigUint {
        &self.generator_y
    }
}

impl<C: Curve> Default for DomainParameters<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::P256;

    #[test]
    fn p256_parameters_match_sec2() {
        let params = DomainParameters::<P256>::new();

        let p = BigUint::parse_bytes(
            b"ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            16,
        )
        .unwrap();
        let n = BigUint::parse_bytes(
            b"ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            16,
        )
        .unwrap();
        let gx = BigUint::parse_bytes(
            b"6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            16,
        )
        .unwrap();
        let gy = BigUint::parse_bytes(
            b"4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            16,
        )
        .unwrap();

        assert_eq!(params.field_prime(), &p);
        assert_eq!(params.order(), &n);
        assert_eq!(params.generator_x(), &gx);
        assert_eq!(params.generator_y(), &gy);
        assert!(params.order() < params.field_prime());
    }

    #[test]
    fn generator_satisfies_curve_equation() {
        let params = DomainParameters::<P256>::new();
        let p = params.field_prime();
        let x = params.generator_x();
        let y = params.generator_y();

        // y^2 = x^3 - 3x + b (mod p)
        let b = BigUint::parse_bytes(
            b"5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            16,
        )
        .unwrap();
        let lhs = (y * y) % p;
        let rhs = ((x * x * x) + p * 3u32 - (x * 3u32) % p + &b) % p;
        assert_eq!(lhs, rhs);
    }
}
