//! Caller identity, certificate fingerprinting, and trust verification.

pub mod fingerprint;
pub mod identity;
pub mod platform;
pub mod trust;
pub mod verifier;

pub use fingerprint::*;
pub use identity::*;
pub use platform::*;
pub use trust::*;
pub use verifier::*;
