/// Curve trait for scalar and point arithmetic.
pub mod curve;
/// Domain parameters of a named curve.
pub mod params;
/// Cryptographically secure random number generation.
pub mod rng;

pub use curve::Curve;
pub use params::DomainParameters;
pub use rng::SecureRng;
