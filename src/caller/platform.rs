//! Host application-registry abstraction supplying installed signing certificates.

// std
use std::collections::HashMap;
// self
use crate::{_prelude::*, caller::identity::PackageName};

/// Lookup failures reported by [`AppRegistry`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AppLookupError {
	/// No application with the requested package name is installed.
	///
	/// Also covers packages uninstalled between resolution steps; the verifier treats both the
	/// same way and fails closed.
	#[error("No installed application matches package `{package}`.")]
	NotInstalled {
		/// Package name that failed to resolve.
		package: String,
	},
	/// Backend-level failure in the host registry.
	#[error("Application registry backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Read-side contract over the host operating system's application registry.
///
/// Implementations resolve an installed application and return the raw DER bytes of its
/// *primary* signing certificate. Packages signed by multiple certificates are not supported:
/// only the first certificate is consulted, a known limitation of the handshake. The lookup is
/// the one blocking external call a verification performs; it is expected to complete quickly
/// and is not cancellable mid-flight.
pub trait AppRegistry
where
	Self: Send + Sync,
{
	/// Returns the DER-encoded primary signing certificate of the installed application.
	fn primary_signing_certificate(&self, package: &PackageName)
	-> Result<Vec<u8>, AppLookupError>;
}

/// In-process [`AppRegistry`] for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryAppRegistry(HashMap<PackageName, Vec<u8>>);
impl MemoryAppRegistry {
	/// Registers a package with its signing-certificate DER bytes.
	pub fn install(mut self, package: PackageName, certificate_der: impl Into<Vec<u8>>) -> Self {
		self.0.insert(package, certificate_der.into());

		self
	}
}
impl AppRegistry for MemoryAppRegistry {
	fn primary_signing_certificate(
		&self,
		package: &PackageName,
	) -> Result<Vec<u8>, AppLookupError> {
		self.0
			.get(package)
			.cloned()
			.ok_or_else(|| AppLookupError::NotInstalled { package: package.to_string() })
	}
}
