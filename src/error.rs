//! Error types for proof-of-possession generation and verification.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The random source failed or could not produce an unbiased scalar.
    #[error("Insufficient entropy: {0}")]
    InsufficientEntropy(String),

    /// A fresh nonce could not be drawn for a proof.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Coordinates do not describe a non-identity point on the curve.
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A received proof could not be decoded into curve values.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// A decimal string is not the canonical encoding of an in-range integer.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The identifier bound into the challenge is empty or too long.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Protocol configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A role name outside the closed set of known roles.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
