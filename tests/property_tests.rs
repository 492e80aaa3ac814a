use num_bigint::BigUint;
use possession_proof::{
    Curve, DecimalCodec, DomainParameters, Identifier, PrivateKey, Prover, SecureRng, Verifier,
    P256,
};
use proptest::prelude::*;

fn private_key_from(bytes: [u8; 32]) -> Option<PrivateKey<P256>> {
    let value = BigUint::from_bytes_be(&bytes) % P256::order();
    let scalar = P256::scalar_from_biguint(&value).ok()?;
    PrivateKey::from_scalar(scalar).ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn proof_verifies_for_any_key_and_identifier(
        key in any::<[u8; 32]>(),
        identifier in "[a-zA-Z0-9_-]{1,64}",
    ) {
        let Some(private_key) = private_key_from(key) else {
            return Ok(());
        };
        let public_key = private_key.public_key();
        let identifier = Identifier::new(identifier).expect("Identifier should be valid");

        let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
        let wire = prover.prove_wire(&identifier).expect("Proof generation should succeed");

        let verifier = Verifier::<P256>::new(DomainParameters::new());
        prop_assert!(
            verifier.verify(&public_key, &identifier, &wire).expect("Proof should decode"),
            "Valid proof should verify successfully"
        );
    }

    #[test]
    fn proof_fails_for_any_other_identifier(
        a in "[a-z0-9-]{1,32}",
        b in "[a-z0-9-]{1,32}",
    ) {
        prop_assume!(a != b);

        let (private_key, public_key) = possession_proof::generate_keypair::<P256>()
            .expect("Key generation should succeed");
        let a = Identifier::new(a).expect("Identifier should be valid");
        let b = Identifier::new(b).expect("Identifier should be valid");

        let mut prover = Prover::new(DomainParameters::new(), private_key, SecureRng::new());
        let wire = prover.prove_wire(&a).expect("Proof generation should succeed");

        let verifier = Verifier::<P256>::new(DomainParameters::new());
        prop_assert!(
            !verifier.verify(&public_key, &b, &wire).expect("Proof should decode"),
            "Proof should not verify under a different identifier"
        );
    }

    #[test]
    fn scalar_decimal_encoding_is_lossless(bytes in any::<[u8; 32]>()) {
        let value = BigUint::from_bytes_be(&bytes) % P256::order();
        let scalar = P256::scalar_from_biguint(&value).expect("Reduced value should be in range");
        let codec = DecimalCodec::new(&DomainParameters::<P256>::new());

        let text = codec.encode_scalar::<P256>(&scalar);
        prop_assert_eq!(text.len(), codec.width());
        prop_assert_eq!(text.parse::<BigUint>().expect("Text should be decimal"), value);

        let decoded = codec.decode_scalar::<P256>(&text).expect("Encoding should decode");
        prop_assert_eq!(decoded, scalar);
    }

    #[test]
    fn arbitrary_text_never_panics_the_codec(text in "\\PC{0,100}") {
        let codec = DecimalCodec::new(&DomainParameters::<P256>::new());
        let _ = codec.decode_scalar::<P256>(&text);
        let _ = codec.decode_coordinate(&text);
    }
}
