//! Caller verification against the trusted-caller registry.

// self
use crate::{
	_prelude::*,
	caller::{
		fingerprint::{self, FingerprintError},
		identity::PackageName,
		platform::{AppLookupError, AppRegistry},
		trust::{TrustedCaller, TrustedCallerRegistry},
	},
	obs::{self, HandshakeStage, StageOutcome, StageSpan},
};

/// Reasons a caller fails verification.
///
/// Every variant aborts the handshake before the inbound payload is read; there is no partial
/// trust and no retry. The reason is surfaced to the operator as a diagnostic and never
/// returned to the (unverified) caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum CallerRejected {
	/// The platform could not identify an invoking application.
	#[error("No invoking application was identified.")]
	Absent,
	/// The invoking package name does not match the configured counterpart.
	#[error("Package `{got}` does not match the trusted caller.")]
	PackageMismatch {
		/// Package name the invoker presented.
		got: String,
	},
	/// The invoking application could not be resolved in the host registry.
	#[error(transparent)]
	Lookup(#[from] AppLookupError),
	/// The installed certificate could not be fingerprinted; verification fails closed.
	#[error(transparent)]
	Fingerprint(#[from] FingerprintError),
	/// The installed certificate's fingerprint does not match the configured one.
	#[error("Signing-certificate fingerprint `{got}` does not match the trusted caller.")]
	FingerprintMismatch {
		/// Fingerprint computed from the installed certificate.
		got: String,
	},
}

/// Verifies that the invoking application is the one configured counterpart.
///
/// Holds only immutable state, so a single verifier can serve concurrent invocations.
#[derive(Clone)]
pub struct CallerVerifier {
	expected: TrustedCaller,
	apps: Arc<dyn AppRegistry>,
}
impl CallerVerifier {
	/// Creates a verifier bound to the registry's expected caller and a platform registry.
	pub fn new(registry: &TrustedCallerRegistry, apps: Arc<dyn AppRegistry>) -> Self {
		Self { expected: registry.expected().clone(), apps }
	}

	/// Runs the verification chain, reporting the first failing step.
	///
	/// Step order matters: an absent caller short-circuits before any registry lookup, and a
	/// package mismatch short-circuits before the certificate is resolved. A rejection is
	/// logged once as an operator diagnostic.
	pub fn evaluate(&self, caller: Option<&str>) -> Result<(), CallerRejected> {
		let _guard = StageSpan::new(HandshakeStage::Verify, "evaluate").entered();

		obs::record_stage_outcome(HandshakeStage::Verify, StageOutcome::Attempt);

		match self.run_checks(caller) {
			Ok(()) => {
				obs::record_stage_outcome(HandshakeStage::Verify, StageOutcome::Success);

				Ok(())
			},
			Err(rejection) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(%rejection, "Caller verification failed.");

				obs::record_stage_outcome(HandshakeStage::Verify, StageOutcome::Failure);

				Err(rejection)
			},
		}
	}

	/// Boolean form of [`evaluate`](Self::evaluate) for the invocation boundary.
	///
	/// Converts every failure—including internal certificate and digest errors—to `false`; no
	/// error crosses the boundary.
	pub fn verify(&self, caller: Option<&str>) -> bool {
		self.evaluate(caller).is_ok()
	}

	fn run_checks(&self, caller: Option<&str>) -> Result<(), CallerRejected> {
		let Some(caller) = caller else {
			return Err(CallerRejected::Absent);
		};

		if !self.expected.package.matches_ignore_ascii_case(caller) {
			return Err(CallerRejected::PackageMismatch { got: caller.to_owned() });
		}

		// A string that case-insensitively equals the validated registry entry is itself a valid
		// package name, so this conversion cannot fail in practice.
		let package = PackageName::new(caller)
			.map_err(|_| CallerRejected::PackageMismatch { got: caller.to_owned() })?;
		let certificate = self.apps.primary_signing_certificate(&package)?;
		let computed = fingerprint::certificate_fingerprint(&certificate)?;

		if computed != self.expected.fingerprint {
			return Err(CallerRejected::FingerprintMismatch { got: computed.to_string() });
		}

		Ok(())
	}
}
impl Debug for CallerVerifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CallerVerifier").field("expected", &self.expected).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, caller::platform::MemoryAppRegistry};

	fn verifier() -> CallerVerifier {
		CallerVerifier::new(&test_registry(), test_app_registry())
	}

	#[test]
	fn absent_caller_is_rejected_before_any_lookup() {
		// The application registry is empty, so reaching the lookup step would also fail; the
		// absent check must win.
		let verifier =
			CallerVerifier::new(&test_registry(), Arc::new(MemoryAppRegistry::default()));

		assert_eq!(verifier.evaluate(None), Err(CallerRejected::Absent));
		assert!(!verifier.verify(None));
	}

	#[test]
	fn package_mismatch_is_rejected() {
		let rejection = verifier()
			.evaluate(Some("com.example.other"))
			.expect_err("Mismatched package must be rejected.");

		assert_eq!(
			rejection,
			CallerRejected::PackageMismatch { got: "com.example.other".into() }
		);
	}

	#[test]
	fn package_comparison_ignores_ascii_case() {
		assert!(verifier().verify(Some("COM.Example.Requester")));
	}

	#[test]
	fn uninstalled_caller_is_rejected() {
		let verifier =
			CallerVerifier::new(&test_registry(), Arc::new(MemoryAppRegistry::default()));
		let rejection = verifier
			.evaluate(Some(REQUESTER_PACKAGE))
			.expect_err("Uninstalled package must be rejected.");

		assert!(matches!(rejection, CallerRejected::Lookup(AppLookupError::NotInstalled { .. })));
	}

	#[test]
	fn fingerprint_mismatch_is_rejected() {
		let apps = Arc::new(
			MemoryAppRegistry::default().install(requester_package(), IMPOSTOR_CERT_DER),
		);
		let verifier = CallerVerifier::new(&test_registry(), apps);
		let rejection = verifier
			.evaluate(Some(REQUESTER_PACKAGE))
			.expect_err("Impostor certificate must be rejected.");

		assert!(matches!(rejection, CallerRejected::FingerprintMismatch { .. }));
		assert!(!verifier.verify(Some(REQUESTER_PACKAGE)));
	}

	#[test]
	fn unparseable_certificate_fails_closed() {
		let apps = Arc::new(
			MemoryAppRegistry::default().install(requester_package(), b"mangled".to_vec()),
		);
		let verifier = CallerVerifier::new(&test_registry(), apps);

		assert_eq!(
			verifier.evaluate(Some(REQUESTER_PACKAGE)),
			Err(CallerRejected::Fingerprint(FingerprintError::CertificateParse))
		);
		assert!(!verifier.verify(Some(REQUESTER_PACKAGE)));
	}

	#[test]
	fn matching_caller_verifies() {
		assert_eq!(verifier().evaluate(Some(REQUESTER_PACKAGE)), Ok(()));
		assert!(verifier().verify(Some(REQUESTER_PACKAGE)));
	}
}
