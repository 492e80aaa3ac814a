//! Common test utilities shared across integration tests.

use possession_proof::{
    generate_keypair, DomainParameters, Identifier, Prover, PublicKey, SecureRng, WireProof, P256,
};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Only logs from this crate are shown. Subsequent calls are ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("possession_proof=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Generates a fresh key pair and one wire proof for `identifier`.
#[allow(dead_code)]
pub fn prove_fresh(identifier: &str) -> (PublicKey<P256>, Identifier, WireProof) {
    let (private_key, public_key) =
        generate_keypair::<P256>().expect("Key generation should succeed");
    let identifier = Identifier::new(identifier).expect("Identifier should be valid");
    let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
    let wire = prover
        .prove_wire(&identifier)
        .expect("Proof generation should succeed");
    (public_key, identifier, wire)
}
