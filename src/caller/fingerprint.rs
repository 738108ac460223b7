//! Signing-certificate fingerprint derivation.

// crates.io
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, caller::identity::CertificateFingerprint};

/// Errors raised while deriving a certificate fingerprint.
///
/// Both variants fail the enclosing verification closed: they are logged as diagnostics and the
/// caller is rejected, never accepted on partial information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum FingerprintError {
	/// The input bytes do not decode as a well-formed X.509 certificate.
	#[error("Certificate bytes do not decode as well-formed X.509 DER.")]
	CertificateParse,
	/// The SHA-256 digest primitive is unavailable in this runtime.
	///
	/// Unreachable with the statically linked digest implementation this crate ships; the
	/// variant exists so the failure taxonomy stays exhaustive for alternative backends.
	#[error("SHA-256 digest primitive is unavailable.")]
	DigestUnavailable,
}

/// Derives the canonical fingerprint of a DER-encoded X.509 certificate.
///
/// The certificate is parsed before digesting so the SHA-256 digest covers exactly the
/// certificate's own DER encoding—interoperable with any other implementation computing the
/// same fingerprint—and bytes trailing the certificate never leak into the digest. Pure
/// function; equal inputs yield equal outputs.
pub fn certificate_fingerprint(der: &[u8]) -> Result<CertificateFingerprint, FingerprintError> {
	let (rest, _) = x509_parser::parse_x509_certificate(der)
		.map_err(|_| FingerprintError::CertificateParse)?;
	let span = &der[..der.len() - rest.len()];
	let digest: [u8; CertificateFingerprint::DIGEST_LEN] = Sha256::digest(span).into();

	Ok(CertificateFingerprint::from_digest(&digest))
}
