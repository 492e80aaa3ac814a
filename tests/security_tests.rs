mod common;

use std::collections::HashSet;

use possession_proof::{
    generate_keypair, DomainParameters, Error, Identifier, PrivateKey, Proof, Prover, SecureRng,
    Verifier, P256,
};

use common::{init_tracing, prove_fresh};

#[test]
fn user_42_scenario() {
    init_tracing();

    let mut bytes = [0u8; 32];
    bytes[31] = 0x2a;
    bytes[0] = 0x51;
    let scalar = <P256 as possession_proof::Curve>::scalar_from_be_bytes(&bytes)
        .expect("Scalar should be in range");
    let private_key = PrivateKey::<P256>::from_scalar(scalar).expect("Key should be nonzero");
    let public_key = private_key.public_key();

    let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
    let verifier = Verifier::<P256>::new(DomainParameters::new());
    let user_42 = Identifier::new("user-42").expect("Identifier should be valid");
    let user_43 = Identifier::new("user-43").expect("Identifier should be valid");

    let wire = prover.prove_wire(&user_42).expect("Proof generation should succeed");

    assert!(
        verifier.verify(&public_key, &user_42, &wire).expect("Proof should decode"),
        "Proof should verify with the identifier it was bound to"
    );
    assert!(
        !verifier.verify(&public_key, &user_43, &wire).expect("Proof should decode"),
        "Proof should fail verification with a different identifier"
    );

    let mut truncated = wire;
    truncated.s.pop();
    assert!(
        matches!(
            verifier.verify(&public_key, &user_42, &truncated),
            Err(Error::MalformedProof(_))
        ),
        "Truncated response should be rejected as malformed"
    );
}

#[test]
fn reject_proof_under_wrong_public_key() {
    let (_, identifier, wire) = prove_fresh("user-42");
    let (_, other_key) = generate_keypair::<P256>().expect("Key generation should succeed");
    let verifier = Verifier::<P256>::new(DomainParameters::new());

    assert!(
        !verifier.verify(&other_key, &identifier, &wire).expect("Proof should decode"),
        "Proof should not verify against an unrelated public key"
    );
}

#[test]
fn reject_proof_with_substituted_public_key_field() {
    let (public_key, identifier, mut wire) = prove_fresh("user-42");
    let (_, _, other) = prove_fresh("user-42");
    wire.public_key = other.public_key;

    let verifier = Verifier::<P256>::new(DomainParameters::new());
    assert!(
        !verifier.verify(&public_key, &identifier, &wire).expect("Proof should decode"),
        "Proof asserting a different public key should not verify"
    );
}

#[test]
fn reject_proof_with_swapped_commitment() {
    let (public_key, identifier, mut wire) = prove_fresh("user-42");
    let (_, _, other) = prove_fresh("user-42");
    wire.r_x = other.r_x;

    let verifier = Verifier::<P256>::new(DomainParameters::new());
    assert!(
        !verifier.verify(&public_key, &identifier, &wire).expect("Proof should decode"),
        "Proof with a foreign commitment should not verify"
    );
}

#[test]
fn reject_non_numeric_fields() {
    let (public_key, identifier, wire) = prove_fresh("user-42");
    let verifier = Verifier::<P256>::new(DomainParameters::new());

    let inputs = [
        "not a number".to_string(),
        String::new(),
        format!("-{}", &wire.s[1..]),
        format!("{} ", &wire.s[..wire.s.len() - 1]),
        "9".repeat(78),
        format!("0{}", wire.s),
    ];

    for input in inputs {
        let mut bad = wire.clone();
        bad.s = input.clone();
        assert!(
            matches!(
                verifier.verify(&public_key, &identifier, &bad),
                Err(Error::MalformedProof(_))
            ),
            "Response {input:?} should be rejected as malformed"
        );

        let mut bad = wire.clone();
        bad.r_x = input.clone();
        assert!(
            matches!(
                verifier.verify(&public_key, &identifier, &bad),
                Err(Error::MalformedProof(_))
            ),
            "Commitment {input:?} should be rejected as malformed"
        );
    }
}

#[test]
fn nonces_are_never_reused() {
    let (private_key, _) = generate_keypair::<P256>().expect("Key generation should succeed");
    let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
    let identifier = Identifier::new("user-42").expect("Identifier should be valid");

    let mut commitments = HashSet::new();
    for _ in 0..256 {
        let wire = prover.prove_wire(&identifier).expect("Proof generation should succeed");
        assert!(
            commitments.insert(wire.r_x),
            "Every proof should carry a fresh commitment"
        );
    }
}

#[test]
fn decoded_proof_commitment_has_even_y() {
    let (_, _, wire) = prove_fresh("user-42");
    let verifier = Verifier::<P256>::new(DomainParameters::new());
    let proof = Proof::<P256>::from_wire(&wire, verifier.codec()).expect("Proof should decode");

    assert!(!<P256 as possession_proof::Curve>::point_has_odd_y(proof.commitment()));
}
