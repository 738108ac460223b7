//! Walks one complete handshake: configure the trusted caller, verify the invoking
//! application, decode the inbound payload, and encode an operator-selected response.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use appflip_handshake::{
	caller::{MemoryAppRegistry, PackageName, TrustedCaller, TrustedCallerRegistry, certificate_fingerprint},
	handshake::Handshake,
	protocol::{Extras, codec},
	selector::OutcomeChoice,
};

const REQUESTER_CERT_DER: &[u8] = include_bytes!("../tests/fixtures/requester.der");

fn main() -> Result<()> {
	color_eyre::install()?;

	let package = PackageName::new("com.example.requester")?;
	let fingerprint = certificate_fingerprint(REQUESTER_CERT_DER)?;

	println!("Trusting {package} with fingerprint {fingerprint}.");

	let registry =
		TrustedCallerRegistry::new(TrustedCaller { package: package.clone(), fingerprint });
	let apps = Arc::new(MemoryAppRegistry::default().install(package, REQUESTER_CERT_DER));
	let handshake = Handshake::new(&registry, apps);
	let extras = Extras::new()
		.with(codec::CLIENT_ID, "demo-client")
		.with(codec::SCOPE, "email profile")
		.with(codec::REDIRECT_URI, "app://callback");
	let request = handshake.accept(Some("com.example.requester"), &extras)?;

	println!("Accepted request from client `{}` for scopes `{}`.", request.client_id, request.scopes);

	// The operator approves; in the hosting shell this discriminant comes from the UI.
	let delivery = handshake.respond(Some(OutcomeChoice::SuccessWithCode), "")?;

	println!("Delivering status {} with payload:", delivery.status_code());

	for (key, value) in delivery.extras.iter() {
		println!("  {key} = {value:?}");
	}

	Ok(())
}
