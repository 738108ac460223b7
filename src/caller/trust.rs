//! Trusted-caller configuration resolved once at process start.

// std
use std::{fs::File, io::Read, path::Path};
// self
use crate::{
	_prelude::*,
	caller::identity::{CertificateFingerprint, PackageName},
	error::ConfigError,
};

/// Immutable description of the one application allowed to invoke the handshake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedCaller {
	/// Package name the invoking application must present.
	pub package: PackageName,
	/// Fingerprint its installed signing certificate must hash to.
	pub fingerprint: CertificateFingerprint,
}

/// Write-once registry holding the single trusted counterpart.
///
/// Populated from external configuration before the first verification and never mutated
/// afterwards, so shared references can be read from any number of concurrent verifications
/// without synchronization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedCallerRegistry {
	expected: TrustedCaller,
}
impl TrustedCallerRegistry {
	/// Creates a registry around an already-validated trusted caller.
	pub fn new(expected: TrustedCaller) -> Self {
		Self { expected }
	}

	/// The configured counterpart every invocation is checked against.
	pub fn expected(&self) -> &TrustedCaller {
		&self.expected
	}

	/// Parses a registry from its JSON configuration payload.
	///
	/// The payload is an object with `package` and `fingerprint` string fields; both are
	/// validated during deserialization and parse failures name the offending JSON path.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(raw);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::Parse { source })
	}

	/// Reads a registry from any reader yielding the JSON configuration payload.
	pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_reader(reader);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::Parse { source })
	}

	/// Loads the registry from a JSON configuration file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let file = File::open(path)
			.map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;

		Self::from_reader(file)
	}
}
