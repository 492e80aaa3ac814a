//! Basic usage example of the proof of possession.
//!
//! This example demonstrates:
//! - Generating a key pair
//! - Proving possession of the private key for an identifier
//! - Encoding the proof as JSON for a request body
//! - Verifying the proof and deriving a user-facing message

use possession_proof::{
    generate_keypair, DomainParameters, Identifier, ProofAuthorizer, Prover, Role, SecureRng,
    Verifier, WireProof, P256,
};

fn main() {
    println!("Proof of Possession: Basic Example\n");

    println!("Step 1: Load domain parameters");
    let params = DomainParameters::<P256>::new();
    println!("  Curve: {}", params.name());
    println!("  Order n: {}\n", params.order());

    println!("Step 2: Generate a key pair");
    let (private_key, public_key) = generate_keypair::<P256>().expect("Key generation should succeed");
    println!("  Private key generated (automatically zeroized on drop)\n");

    println!("Step 3: Prove possession for identifier \"user-42\"");
    let identifier = Identifier::new("user-42").expect("Identifier should be valid");
    let mut prover = Prover::new(params.clone(), private_key, SecureRng::new());
    let wire = prover
        .prove_wire(&identifier)
        .expect("Proof generation should succeed");
    println!("  R_x = {}", wire.r_x);
    println!("  s   = {}\n", wire.s);

    println!("Step 4: Encode the proof for transmission");
    let json = wire.to_json().expect("Serialization should succeed");
    println!("  {} bytes of JSON\n", json.len());

    println!("Step 5: Verify the received proof");
    let received = WireProof::from_json(&json).expect("Deserialization should succeed");
    let verifier = Verifier::<P256>::new(params);
    match verifier.verify(&public_key, &identifier, &received) {
        Ok(true) => println!("  Proof is VALID"),
        Ok(false) => println!("  Proof is INVALID"),
        Err(e) => println!("  Proof is MALFORMED: {}", e),
    }

    println!("\nStep 6: Authorize a care-plan update");
    let authorizer = ProofAuthorizer::new(verifier);
    let decision = authorizer.authorize(&public_key, &identifier, &received);
    println!("  {}", decision.message(Role::Doctor, "care plan"));

    let other = Identifier::new("user-43").expect("Identifier should be valid");
    let decision = authorizer.authorize(&public_key, &other, &received);
    println!("  {}", decision.message(Role::Doctor, "care plan"));
}
