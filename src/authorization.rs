//! Request authorization on top of proof verification.
//!
//! Maps a verification outcome to a grant/deny decision and to the user-facing
//! message shown for each role. Failures never expose scalar values or error
//! details to the user; only the failure category is logged.

use core::fmt;
use core::str::FromStr;

use sha2::{Digest, Sha256};

use crate::protocol::{Identifier, PublicKey, Verifier, WireProof};
use crate::{Curve, Error, Result};

/// Role of the user issuing a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Administrator.
    Admin,
    /// Doctor.
    Doctor,
    /// Patient.
    Patient,
}

impl Role {
    /// Message shown when a request for `feature` succeeds.
    pub fn success_message(&self, feature: &str) -> String {
        match self {
            Role::Admin => format!("Thank you, Admin! Your {feature} has been completed successfully."),
            Role::Doctor => format!("Great job, Doctor! Your {feature} was successful."),
            Role::Patient => {
                format!("Thank you, Patient! Your {feature} has been updated successfully.")
            }
        }
    }

    /// Message shown when a request for `feature` fails, whatever the cause.
    pub fn failure_message(&self, feature: &str) -> String {
        match self {
            Role::Admin => format!("Sorry, Admin, we couldn\u{2019}t process your {feature} request."),
            Role::Doctor => format!("Oops, Doctor, we encountered an issue with your {feature}."),
            Role::Patient => {
                format!("Sorry, Patient, we couldn\u{2019}t complete your {feature} request.")
            }
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Doctor => f.write_str("doctor"),
            Role::Patient => f.write_str("patient"),
        }
    }
}

/// Outcome of authorizing a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    /// The proof verified.
    Granted,
    /// The proof was rejected or could not be decoded.
    Denied,
}

impl AuthDecision {
    /// Returns `true` for [`AuthDecision::Granted`].
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthDecision::Granted)
    }

    /// User-facing message for this decision.
    pub fn message(&self, role: Role, feature: &str) -> String {
        match self {
            AuthDecision::Granted => role.success_message(feature),
            AuthDecision::Denied => role.failure_message(feature),
        }
    }
}

/// Authorizes requests carrying a proof of possession.
#[derive(Clone, Debug)]
pub struct ProofAuthorizer<C: Curve, D = Sha256> {
    verifier: Verifier<C, D>,
}

impl<C: Curve, D: Digest> ProofAuthorizer<C, D> {
    /// Creates an authorizer around a verifier.
    pub fn new(verifier: Verifier<C, D>) -> Self {
        Self { verifier }
    }

    /// Decides whether a request may proceed.
    ///
    /// Only a proof that verifies is granted; a failed check and any decoding
    /// error both deny.
    pub fn authorize(
        &self,
        public_key: &PublicKey<C>,
        identifier: &Identifier,
        wire: &WireProof,
    ) -> AuthDecision {
        match self.verifier.verify(public_key, identifier, wire) {
            Ok(true) => AuthDecision::Granted,
            Ok(false) => {
                tracing::warn!(reason = "verification_failed", "request denied");
                AuthDecision::Denied
            }
            Err(e) => {
                tracing::warn!(reason = failure_category(&e), "request denied");
                AuthDecision::Denied
            }
        }
    }
}

fn failure_category(error: &Error) -> &'static str {
    match error {
        Error::MalformedProof(_) | Error::Encoding(_) | Error::InvalidPoint(_) => "malformed_proof",
        Error::InvalidIdentifier(_) => "invalid_identifier",
        Error::InvalidScalar(_) => "degenerate_challenge",
        _ => "internal",
    }
}
