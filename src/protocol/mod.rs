/// Fiat-Shamir challenge derivation and proof identifiers.
pub mod challenge;
/// Private keys, public keys and key pair generation.
pub mod keys;
/// Decoded proofs and their wire form.
pub mod proof;
/// Prover implementation for generating proofs.
pub mod prover;
/// Verifier implementation for validating proofs.
pub mod verifier;

pub use challenge::{challenge, Identifier};
pub use keys::{generate_keypair, KeyPair, PrivateKey, PublicKey};
pub use proof::{Proof, WireProof};
pub use prover::Prover;
pub use verifier::Verifier;
