/// NIST P-256 (secp256r1) curve implementation.
pub mod p256;

pub use self::p256::P256;
