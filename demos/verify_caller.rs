//! Demonstrates the caller-verification chain, including the rejection taxonomy an operator
//! sees when the invoking application is not the configured counterpart.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use appflip_handshake::caller::{
	CallerVerifier, MemoryAppRegistry, PackageName, TrustedCaller, TrustedCallerRegistry,
	certificate_fingerprint,
};

const REQUESTER_CERT_DER: &[u8] = include_bytes!("../tests/fixtures/requester.der");
const IMPOSTOR_CERT_DER: &[u8] = include_bytes!("../tests/fixtures/impostor.der");

fn main() -> Result<()> {
	color_eyre::install()?;

	let package = PackageName::new("com.example.requester")?;
	let fingerprint = certificate_fingerprint(REQUESTER_CERT_DER)?;
	let registry = TrustedCallerRegistry::new(TrustedCaller {
		package: package.clone(),
		fingerprint,
	});

	// The genuine requester is installed with the expected certificate.
	let apps =
		Arc::new(MemoryAppRegistry::default().install(package.clone(), REQUESTER_CERT_DER));
	let verifier = CallerVerifier::new(&registry, apps);

	println!("Genuine caller verified: {}.", verifier.verify(Some("com.example.requester")));
	println!("Unidentified caller verified: {}.", verifier.verify(None));
	println!("Wrong package verified: {}.", verifier.verify(Some("com.example.other")));

	// Same package name, different signing certificate.
	let spoofed = Arc::new(MemoryAppRegistry::default().install(package, IMPOSTOR_CERT_DER));
	let verifier = CallerVerifier::new(&registry, spoofed);

	match verifier.evaluate(Some("com.example.requester")) {
		Ok(()) => println!("Spoofed caller unexpectedly verified."),
		Err(rejection) => println!("Spoofed caller rejected: {rejection}"),
	}

	Ok(())
}
