//! Non-interactive proof of possession of an elliptic-curve private key.
//!
//! A prover shows it holds the private key `d` behind a public key `P = d * G`,
//! bound to an identifier such as a user id:
//! - **crypto**: Curve trait, domain parameters and secure randomness
//! - **curves**: Concrete curve implementations (NIST P-256)
//! - **protocol**: Challenge derivation, key pairs, prover and verifier
//! - **codec**: Fixed-width decimal encoding of scalars and coordinates
//! - **authorization**: Grant/deny decisions and user-facing messages

/// Request authorization on top of proof verification.
pub mod authorization;
/// Decimal wire encoding.
pub mod codec;
/// Protocol configuration.
pub mod config;
/// Cryptographic primitives and traits.
pub mod crypto;
/// Curve implementations.
pub mod curves;
/// Error types.
pub mod error;
/// Proof-of-possession protocol.
pub mod protocol;

pub use authorization::{AuthDecision, ProofAuthorizer, Role};
pub use codec::DecimalCodec;
pub use config::ProtocolConfig;
pub use crypto::{Curve, DomainParameters, SecureRng};
pub use curves::P256;
pub use error::Error;
pub use protocol::{
    challenge, generate_keypair, Identifier, KeyPair, PrivateKey, Proof, Prover, PublicKey,
    Verifier, WireProof,
};

/// Result type for this library.
pub type Result<T> = core::result::Result<T, Error>;
