//! Rust’s turnkey app-flip handshake core—verify the one trusted caller, decode OAuth hand-off
//! payloads, and shape protocol outcomes in one crate built for production.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod caller;
pub mod error;
pub mod handshake;
pub mod obs;
pub mod protocol;
pub mod selector;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience fixtures and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		caller::{
			CertificateFingerprint, MemoryAppRegistry, PackageName, TrustedCaller,
			TrustedCallerRegistry,
		},
		handshake::Handshake,
		protocol::{Extras, codec},
	};

	/// DER bytes of the self-signed certificate the trusted requester fixture is signed with.
	pub const REQUESTER_CERT_DER: &[u8] = include_bytes!("../tests/fixtures/requester.der");
	/// Canonical fingerprint of [`REQUESTER_CERT_DER`].
	pub const REQUESTER_FINGERPRINT: &str = "EF:46:0B:1D:39:68:FB:D2:EF:3F:65:2E:57:53:BA:3C:31:CC:DB:09:24:26:B1:1C:86:BC:58:67:83:07:F3:C5";
	/// Package name the trusted requester fixture is installed under.
	pub const REQUESTER_PACKAGE: &str = "com.example.requester";
	/// DER bytes of an unrelated self-signed certificate used for mismatch cases.
	pub const IMPOSTOR_CERT_DER: &[u8] = include_bytes!("../tests/fixtures/impostor.der");

	/// Package name fixture for the trusted requester.
	pub fn requester_package() -> PackageName {
		PackageName::new(REQUESTER_PACKAGE).expect("Requester package fixture should be valid.")
	}

	/// Registry fixture trusting the requester package + certificate pair.
	pub fn test_registry() -> TrustedCallerRegistry {
		let fingerprint = REQUESTER_FINGERPRINT
			.parse::<CertificateFingerprint>()
			.expect("Requester fingerprint fixture should parse.");

		TrustedCallerRegistry::new(TrustedCaller { package: requester_package(), fingerprint })
	}

	/// Application registry fixture with the trusted requester installed.
	pub fn test_app_registry() -> Arc<MemoryAppRegistry> {
		Arc::new(MemoryAppRegistry::default().install(requester_package(), REQUESTER_CERT_DER))
	}

	/// Handshake facade wired against the registry and application-registry fixtures.
	pub fn test_handshake() -> Handshake {
		Handshake::new(&test_registry(), test_app_registry())
	}

	/// Inbound payload fixture carrying the three OAuth fields.
	pub fn inbound_extras(client_id: &str, scope: &str, redirect_uri: &str) -> Extras {
		Extras::new()
			.with(codec::CLIENT_ID, client_id)
			.with(codec::SCOPE, scope)
			.with(codec::REDIRECT_URI, redirect_uri)
	}
}

mod _prelude {
	pub use std::{
		borrow::Borrow,
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		ops::Deref,
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
