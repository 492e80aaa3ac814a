use serde::{Deserialize, Serialize};

use crate::codec::DecimalCodec;
use crate::protocol::PublicKey;
use crate::{Curve, Error, Result};

/// Decoded proof of possession.
///
/// Holds the commitment `R = k * G` (always with an even y-coordinate), the
/// response `s = k + d * c mod n`, and the public key the prover asserts.
///
/// # Security
///
/// - A proof is produced for one request and consumed by one verification
/// - Freshness (replay windows) is the verifier's responsibility, enforced outside this crate
#[derive(Clone, Debug)]
pub struct Proof<C: Curve> {
    commitment: C::Point,
    response: C::Scalar,
    public_key: PublicKey<C>,
}

impl<C: Curve> Proof<C> {
    /// Creates a proof from its parts.
    ///
    /// This is typically called by [`Prover`](crate::Prover) and not directly by users.
    pub(crate) fn new(commitment: C::Point, response: C::Scalar, public_key: PublicKey<C>) -> Self {
        Self {
            commitment,
            response,
            public_key,
        }
    }

    /// Returns the commitment point `R`.
    pub fn commitment(&self) -> &C::Point {
        &self.commitment
    }

    /// Returns the big-endian x-coordinate of `R`.
    pub fn commitment_x(&self) -> Vec<u8> {
        C::point_coordinates(&self.commitment)
            .map(|(x, _)| x)
            .unwrap_or_else(|| unreachable!("Commitment is never the identity"))
    }

    /// Returns the response scalar `s`.
    pub fn response(&self) -> &C::Scalar {
        &self.response
    }

    /// Returns the public key asserted by the prover.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Encodes the proof as three fixed-width decimal strings.
    pub fn to_wire(&self, codec: &DecimalCodec) -> WireProof {
        WireProof {
            r_x: codec.encode_coordinate(&self.commitment_x()),
            s: codec.encode_scalar::<C>(&self.response),
            public_key: self.public_key.to_decimal_x(codec),
        }
    }

    /// Decodes a wire proof.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedProof`] if a field is not a canonical in-range
    /// decimal integer, or an x-coordinate has no point on the curve.
    pub fn from_wire(wire: &WireProof, codec: &DecimalCodec) -> Result<Self> {
        let r_x = codec
            .decode_coordinate(&wire.r_x)
            .map_err(|e| Error::MalformedProof(format!("R_x: {}", e)))?;
        let commitment =
            C::point_from_x(&r_x).map_err(|e| Error::MalformedProof(format!("R_x: {}", e)))?;

        let response = codec
            .decode_scalar::<C>(&wire.s)
            .map_err(|e| Error::MalformedProof(format!("s: {}", e)))?;

        let public_key = PublicKey::from_decimal_x(codec, &wire.public_key)
            .map_err(|e| Error::MalformedProof(format!("public_key: {}", e)))?;

        Ok(Self {
            commitment,
            response,
            public_key,
        })
    }
}

/// Proof as carried in a JSON request body.
///
/// Three decimal strings: the commitment x-coordinate, the response scalar and
/// the public-key x-coordinate. Field names follow the existing clients
/// (`R_x`, `s`, `public_key`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireProof {
    /// Commitment x-coordinate.
    #[serde(rename = "R_x")]
    pub r_x: String,
    /// Response scalar.
    pub s: String,
    /// Public-key x-coordinate.
    pub public_key: String,
}

impl WireProof {
    /// Serializes the proof as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Parses a JSON object; anything that is not the three string fields is malformed.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::MalformedProof(e.to_string()))
    }
}
