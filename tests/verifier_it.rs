// std
use std::sync::Arc;
// self
use appflip_handshake::caller::{
	AppLookupError, CallerRejected, CallerVerifier, CertificateFingerprint, MemoryAppRegistry,
	PackageName, TrustedCaller, TrustedCallerRegistry, certificate_fingerprint,
};

const REQUESTER_CERT_DER: &[u8] = include_bytes!("fixtures/requester.der");
const IMPOSTOR_CERT_DER: &[u8] = include_bytes!("fixtures/impostor.der");
const REQUESTER_PACKAGE: &str = "com.example.requester";

fn requester_package() -> PackageName {
	PackageName::new(REQUESTER_PACKAGE)
		.expect("Requester package fixture should be considered valid.")
}

fn registry_trusting(fingerprint: CertificateFingerprint) -> TrustedCallerRegistry {
	TrustedCallerRegistry::new(TrustedCaller { package: requester_package(), fingerprint })
}

fn registry_trusting_requester() -> TrustedCallerRegistry {
	let fingerprint = certificate_fingerprint(REQUESTER_CERT_DER)
		.expect("Requester certificate fixture should fingerprint.");

	registry_trusting(fingerprint)
}

fn apps_with_requester_installed() -> Arc<MemoryAppRegistry> {
	Arc::new(MemoryAppRegistry::default().install(requester_package(), REQUESTER_CERT_DER))
}

#[test]
fn absent_caller_never_verifies() {
	let verifier =
		CallerVerifier::new(&registry_trusting_requester(), apps_with_requester_installed());

	assert!(!verifier.verify(None), "An unidentified caller must be rejected.");
	assert_eq!(verifier.evaluate(None), Err(CallerRejected::Absent));
}

#[test]
fn both_package_and_fingerprint_must_match() {
	let verifier =
		CallerVerifier::new(&registry_trusting_requester(), apps_with_requester_installed());

	assert!(verifier.verify(Some(REQUESTER_PACKAGE)));
	assert!(verifier.verify(Some("COM.EXAMPLE.REQUESTER")), "Comparison must ignore case.");
	assert!(!verifier.verify(Some("com.example.other")));
}

#[test]
fn fingerprint_mismatch_rejects_a_matching_package() {
	// Scenario: the caller presents the trusted package name, but the installed application is
	// signed with a different certificate.
	let apps =
		Arc::new(MemoryAppRegistry::default().install(requester_package(), IMPOSTOR_CERT_DER));
	let verifier = CallerVerifier::new(&registry_trusting_requester(), apps);
	let rejection = verifier
		.evaluate(Some(REQUESTER_PACKAGE))
		.expect_err("A mismatched certificate must be rejected.");

	assert!(matches!(rejection, CallerRejected::FingerprintMismatch { .. }));
	assert!(!verifier.verify(Some(REQUESTER_PACKAGE)));
}

#[test]
fn case_differences_in_the_configured_fingerprint_are_ignored() {
	let canonical = certificate_fingerprint(REQUESTER_CERT_DER)
		.expect("Requester certificate fixture should fingerprint.");
	let lowered = canonical
		.as_ref()
		.to_ascii_lowercase()
		.parse::<CertificateFingerprint>()
		.expect("Lowercase fingerprint should parse.");
	let verifier =
		CallerVerifier::new(&registry_trusting(lowered), apps_with_requester_installed());

	assert!(verifier.verify(Some(REQUESTER_PACKAGE)));
}

#[test]
fn uninstalled_caller_is_rejected_not_thrown() {
	let verifier =
		CallerVerifier::new(&registry_trusting_requester(), Arc::new(MemoryAppRegistry::default()));
	let rejection = verifier
		.evaluate(Some(REQUESTER_PACKAGE))
		.expect_err("A package missing from the application registry must be rejected.");

	assert!(matches!(rejection, CallerRejected::Lookup(AppLookupError::NotInstalled { .. })));
	assert!(!verifier.verify(Some(REQUESTER_PACKAGE)));
}

#[test]
fn verification_is_deterministic_across_repeated_calls() {
	let verifier =
		CallerVerifier::new(&registry_trusting_requester(), apps_with_requester_installed());

	for _ in 0..3 {
		assert!(verifier.verify(Some(REQUESTER_PACKAGE)));
		assert!(!verifier.verify(None));
	}
}
