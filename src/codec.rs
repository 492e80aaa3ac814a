//! Base-10 text encoding of scalars and coordinates.
//!
//! Values cross the text boundary as fixed-width decimal strings: exactly as many
//! digits as the decimal expansion of the modulus, zero-padded on the left. Every
//! in-range value therefore has one encoding, and a truncated or extended string
//! is rejected instead of silently decoding to a different number.

use num_bigint::BigUint;

use crate::crypto::curve::left_pad;
use crate::{Curve, DomainParameters, Error, Result};

/// Decimal codec bound to the moduli of one curve.
#[derive(Clone, Debug)]
pub struct DecimalCodec {
    order: BigUint,
    field_prime: BigUint,
    width: usize,
    byte_len: usize,
}

impl DecimalCodec {
    /// Creates a codec for the scalars and coordinates of curve `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use possession_proof::{DecimalCodec, DomainParameters, P256};
    ///
    /// let codec = DecimalCodec::new(&DomainParameters::<P256>::new());
    /// assert_eq!(codec.width(), 78);
    /// ```
    pub fn new<C: Curve>(params: &DomainParameters<C>) -> Self {
        let width = decimal_digits(params.order()).max(decimal_digits(params.field_prime()));
        Self {
            order: params.order().clone(),
            field_prime: params.field_prime().clone(),
            width,
            byte_len: C::ENCODED_BYTES,
        }
    }

    /// Returns the number of digits in every encoded value.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encodes a non-negative integer as a fixed-width decimal string.
    pub fn encode_integer(&self, value: &BigUint) -> String {
        format!("{:0>width$}", value.to_str_radix(10), width = self.width)
    }

    /// Decodes a fixed-width decimal string into an integer below `modulus`.
    pub fn decode_integer(&self, text: &str, modulus: &BigUint) -> Result<BigUint> {
        if text.len() != self.width {
            return Err(Error::Encoding(format!(
                "Expected {} decimal digits, got {} characters",
                self.width,
                text.len()
            )));
        }

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Encoding(
                "Value contains non-decimal characters".to_string(),
            ));
        }

        let value = BigUint::parse_bytes(text.as_bytes(), 10)
            .ok_or_else(|| Error::Encoding("Value is not a decimal integer".to_string()))?;

        if &value >= modulus {
            return Err(Error::Encoding("Value is out of range".to_string()));
        }

        Ok(value)
    }

    /// Encodes a scalar in `[0, n)`.
    pub fn encode_scalar<C: Curve>(&self, scalar: &C::Scalar) -> String {
        self.encode_integer(&C::scalar_to_biguint(scalar))
    }

    /// Decodes a scalar, rejecting anything not below the group order `n`.
    pub fn decode_scalar<C: Curve>(&self, text: &str) -> Result<C::Scalar> {
        let value = self.decode_integer(text, &self.order)?;
        C::scalar_from_biguint(&value).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Encodes a big-endian field element (an affine coordinate).
    pub fn encode_coordinate(&self, bytes: &[u8]) -> String {
        self.encode_integer(&BigUint::from_bytes_be(bytes))
    }

    /// Decodes a coordinate below the field prime `p` into big-endian bytes.
    pub fn decode_coordinate(&self, text: &str) -> Result<Vec<u8>> {
        let value = self.decode_integer(text, &self.field_prime)?;
        left_pad(&value.to_bytes_be(), self.byte_len)
            .ok_or_else(|| Error::Encoding("Coordinate does not fit the field".to_string()))
    }
}

fn decimal_digits(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}
