use core::marker::PhantomData;

use sha2::{Digest, Sha256};

use super::{challenge, Identifier, Proof, PublicKey, WireProof};
use crate::codec::DecimalCodec;
use crate::{Curve, DomainParameters, ProtocolConfig, Result};

/// Verifier for the proof of possession.
///
/// Stateless: one verifier can be shared by any number of threads.
#[derive(Clone, Debug)]
pub struct Verifier<C: Curve, D = Sha256> {
    params: DomainParameters<C>,
    codec: DecimalCodec,
    config: ProtocolConfig,
    _digest: PhantomData<fn() -> D>,
}

impl<C: Curve> Verifier<C> {
    /// Creates a SHA-256 verifier with the default configuration.
    pub fn new(params: DomainParameters<C>) -> Self {
        let codec = DecimalCodec::new(&params);
        Self {
            params,
            codec,
            config: ProtocolConfig::default(),
            _digest: PhantomData,
        }
    }
}

impl<C: Curve, D: Digest> Verifier<C, D> {
    /// Creates a verifier with an explicit configuration and hash function.
    pub fn with_config(params: DomainParameters<C>, config: ProtocolConfig) -> Result<Self> {
        config.validate()?;
        let codec = DecimalCodec::new(&params);
        Ok(Self {
            params,
            codec,
            config,
            _digest: PhantomData,
        })
    }

    /// Returns the codec used to decode wire proofs.
    pub fn codec(&self) -> &DecimalCodec {
        &self.codec
    }

    /// Verifies a wire proof against the expected public key and identifier.
    ///
    /// Returns `Ok(true)` if the proof is valid and `Ok(false)` if it is well
    /// formed but does not verify.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedProof`](crate::Error::MalformedProof) if a field cannot be decoded
    /// - [`Error::InvalidIdentifier`](crate::Error::InvalidIdentifier) if the identifier exceeds the configured limit
    ///
    /// # Examples
    ///
    /// ```rust
    /// use possession_proof::{generate_keypair, DomainParameters, Identifier, Prover, SecureRng, Verifier, P256};
    ///
    /// let (private_key, public_key) = generate_keypair::<P256>().unwrap();
    /// let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
    /// let id = Identifier::new("user-42").unwrap();
    /// let wire = prover.prove_wire(&id).unwrap();
    ///
    /// let verifier = Verifier::<P256>::new(DomainParameters::new());
    /// assert!(verifier.verify(&public_key, &id, &wire).unwrap());
    /// assert!(!verifier.verify(&public_key, &Identifier::new("user-43").unwrap(), &wire).unwrap());
    /// ```
    pub fn verify(
        &self,
        public_key: &PublicKey<C>,
        identifier: &Identifier,
        wire: &WireProof,
    ) -> Result<bool> {
        let proof = Proof::from_wire(wire, &self.codec)?;
        self.verify_proof(public_key, identifier, &proof)
    }

    /// Verifies a decoded proof.
    ///
    /// Checks `s * G == R + c * P` with `c = H(identifier || R.x) mod n`.
    pub fn verify_proof(
        &self,
        public_key: &PublicKey<C>,
        identifier: &Identifier,
        proof: &Proof<C>,
    ) -> Result<bool> {
        identifier.check_length(self.config.max_identifier_bytes)?;

        if proof.public_key() != public_key {
            tracing::debug!(curve = C::name(), "proof asserts a different public key");
            return Ok(false);
        }

        let c = challenge::<C, D>(&self.params, identifier, &proof.commitment_x())?;

        let lhs = C::scalar_mul(self.params.generator(), proof.response());
        let cp = C::scalar_mul(public_key.point(), &c);
        let rhs = C::point_add(proof.commitment(), &cp);

        let valid = lhs == rhs;
        tracing::debug!(curve = C::name(), valid, "verified proof of possession");
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_keypair, Error, Prover, SecureRng, P256};

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    fn setup() -> (PublicKey<P256>, WireProof, Verifier<P256>) {
        let (private_key, public_key) = generate_keypair::<P256>().unwrap();
        let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
        let wire = prover.prove_wire(&id("user-42")).unwrap();
        (public_key, wire, Verifier::new(DomainParameters::new()))
    }

    #[test]
    fn verifier_accepts_valid_proof() {
        let (public_key, wire, verifier) = setup();
        assert!(verifier.verify(&public_key, &id("user-42"), &wire).unwrap());
    }

    #[test]
    fn verifier_rejects_other_identifier() {
        let (public_key, wire, verifier) = setup();
        assert!(!verifier.verify(&public_key, &id("user-43"), &wire).unwrap());
    }

    #[test]
    fn verifier_rejects_other_public_key() {
        let (_, wire, verifier) = setup();
        let (_, other) = generate_keypair::<P256>().unwrap();
        assert!(!verifier.verify(&other, &id("user-42"), &wire).unwrap());
    }

    #[test]
    fn verifier_rejects_tampered_response() {
        let (public_key, mut wire, verifier) = setup();
        let codec = verifier.codec();
        let s = codec.decode_integer(&wire.s, &P256::order()).unwrap();
        wire.s = codec.encode_integer(&((s + 1u32) % P256::order()));

        assert!(!verifier.verify(&public_key, &id("user-42"), &wire).unwrap());
    }

    #[test]
    fn truncated_response_is_malformed() {
        let (public_key, mut wire, verifier) = setup();
        wire.s.pop();
        assert!(matches!(
            verifier.verify(&public_key, &id("user-42"), &wire),
            Err(Error::MalformedProof(_))
        ));
    }

    #[test]
    fn oversized_identifier_is_rejected() {
        let (public_key, wire, _) = setup();
        let config = ProtocolConfig {
            max_identifier_bytes: 3,
            ..ProtocolConfig::default()
        };
        let verifier =
            Verifier::<P256, Sha256>::with_config(DomainParameters::new(), config).unwrap();
        assert!(matches!(
            verifier.verify(&public_key, &id("user-42"), &wire),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn verifier_is_shareable_across_threads() {
        let (public_key, wire, verifier) = setup();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(verifier.verify(&public_key, &id("user-42"), &wire).unwrap());
                });
            }
        });
    }
}
