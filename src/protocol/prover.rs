use core::marker::PhantomData;

use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::{challenge, Identifier, PrivateKey, Proof, PublicKey, WireProof};
use crate::codec::DecimalCodec;
use crate::crypto::rng::sample_nonzero_scalar;
use crate::{Curve, DomainParameters, Error, ProtocolConfig, Result};

/// Prover for the proof of possession.
///
/// Produces non-interactive proofs that the holder of a private key `d` controls
/// the public key `P = d * G`, bound to a caller-supplied identifier. The hash
/// function `D` (SHA-256 by default) and the random source `R` are injected so
/// tests can substitute deterministic fakes.
///
/// # Security
///
/// - Each prover owns its random source; give every worker its own prover
/// - A fresh nonce is drawn for every proof and never leaves this type
/// - Randomness failures abort proof generation; there is no fallback nonce
pub struct Prover<C: Curve, R, D = Sha256> {
    params: DomainParameters<C>,
    codec: DecimalCodec,
    config: ProtocolConfig,
    private_key: PrivateKey<C>,
    public_key: PublicKey<C>,
    nonces: NonceSource<C, R>,
    _digest: PhantomData<fn() -> D>,
}

impl<C: Curve, R: CryptoRngCore> Prover<C, R> {
    /// Creates a SHA-256 prover with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use possession_proof::{generate_keypair, DomainParameters, Identifier, Prover, SecureRng, P256};
    ///
    /// let (private_key, public_key) = generate_keypair::<P256>().unwrap();
    /// let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
    ///
    /// let proof = prover.prove(&Identifier::new("user-42").unwrap()).unwrap();
    /// assert_eq!(proof.public_key(), &public_key);
    /// ```
    pub fn new(params: DomainParameters<C>, private_key: PrivateKey<C>, rng: R) -> Self {
        let config = ProtocolConfig::default();
        let codec = DecimalCodec::new(&params);
        let public_key = private_key.public_key();
        let nonces = NonceSource::new(rng, config.max_sampling_attempts);

        Self {
            params,
            codec,
            config,
            private_key,
            public_key,
            nonces,
            _digest: PhantomData,
        }
    }
}

impl<C: Curve, R: CryptoRngCore, D: Digest> Prover<C, R, D> {
    /// Creates a prover with an explicit configuration and hash function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration fails validation.
    pub fn with_config(
        params: DomainParameters<C>,
        private_key: PrivateKey<C>,
        rng: R,
        config: ProtocolConfig,
    ) -> Result<Self> {
        config.validate()?;
        let codec = DecimalCodec::new(&params);
        let public_key = private_key.public_key();
        let nonces = NonceSource::new(rng, config.max_sampling_attempts);

        Ok(Self {
            params,
            codec,
            config,
            private_key,
            public_key,
            nonces,
            _digest: PhantomData,
        })
    }

    /// Returns the public key this prover proves possession of.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Returns the codec used for wire encoding.
    pub fn codec(&self) -> &DecimalCodec {
        &self.codec
    }

    /// Generates a proof bound to `identifier`.
    ///
    /// Draws a fresh nonce `k`, commits to `R = k * G`, derives
    /// `c = H(identifier || R.x) mod n` and responds with `s = k + d * c mod n`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIdentifier`] if the identifier exceeds the configured limit
    /// - [`Error::KeyGeneration`] if no nonce could be drawn from the random source
    pub fn prove(&mut self, identifier: &Identifier) -> Result<Proof<C>> {
        identifier.check_length(self.config.max_identifier_bytes)?;

        let (nonce, commitment) = self.commit()?;
        let commitment_x = C::point_coordinates(&commitment)
            .map(|(x, _)| x)
            .ok_or_else(|| Error::KeyGeneration("Commitment is the identity".to_string()))?;

        let challenge = challenge::<C, D>(&self.params, identifier, &commitment_x)?;
        let response = self.respond(nonce, &challenge);

        tracing::debug!(
            curve = C::name(),
            identifier_bytes = identifier.as_bytes().len(),
            "generated proof of possession"
        );

        Ok(Proof::new(commitment, response, self.public_key.clone()))
    }

    /// Generates a proof and encodes it for the wire.
    pub fn prove_wire(&mut self, identifier: &Identifier) -> Result<WireProof> {
        let proof = self.prove(identifier)?;
        Ok(proof.to_wire(&self.codec))
    }

    fn commit(&mut self) -> Result<(Nonce<C>, C::Point)> {
        self.nonces.draw().map_err(|e| {
            tracing::warn!(curve = C::name(), "nonce generation failed");
            Error::KeyGeneration(e.to_string())
        })
    }

    /// Computes `s = k + d * c`, consuming the nonce.
    fn respond(&self, nonce: Nonce<C>, challenge: &C::Scalar) -> C::Scalar {
        let dc = C::scalar_mul_scalar(self.private_key.secret(), challenge);
        C::scalar_add(&nonce.k, &dc)
    }
}

/// Single-use secret nonce `k`.
///
/// Only [`NonceSource`] can create one, it cannot be cloned, and it is consumed
/// when the response is computed. Zeroized on drop.
struct Nonce<C: Curve> {
    k: C::Scalar,
}

impl<C: Curve> Drop for Nonce<C> {
    fn drop(&mut self) {
        self.k.zeroize();
    }
}

/// The prover's sole handle on its random source.
///
/// Every call to [`NonceSource::draw`] pulls fresh randomness; nothing about a
/// previous nonce is retained.
struct NonceSource<C: Curve, R> {
    rng: R,
    max_attempts: u32,
    _curve: PhantomData<C>,
}

impl<C: Curve, R: CryptoRngCore> NonceSource<C, R> {
    fn new(rng: R, max_attempts: u32) -> Self {
        Self {
            rng,
            max_attempts,
            _curve: PhantomData,
        }
    }

    /// Draws `k` uniformly from `[1, n - 1]` and returns it with `R = k * G`.
    ///
    /// When `R` has an odd y-coordinate both are negated, so the commitment is
    /// always recoverable from its x-coordinate.
    fn draw(&mut self) -> Result<(Nonce<C>, C::Point)> {
        let k = sample_nonzero_scalar::<C, R>(&mut self.rng, self.max_attempts)?;
        let commitment = C::scalar_mul(&C::generator(), &k);

        if C::point_has_odd_y(&commitment) {
            Ok((
                Nonce {
                    k: C::scalar_negate(&k),
                },
                C::point_negate(&commitment),
            ))
        } else {
            Ok((Nonce { k }, commitment))
        }
    }
}
