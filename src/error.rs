//! Handshake-level error types shared across verification, the codec, and outcome selection.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical handshake error exposed by public APIs.
///
/// Every variant is recovered locally: the handshake aborts (no response payload is returned to
/// the caller) or the operator re-drives the interaction. No error crosses the process boundary
/// as a panic.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller verification failed; the handshake aborted before the payload was read.
	#[error(transparent)]
	Rejected(#[from] crate::caller::CallerRejected),
	/// The inbound payload is malformed.
	#[error(transparent)]
	Codec(#[from] crate::protocol::CodecError),
	/// Operator outcome selection failed; no response was emitted.
	#[error(transparent)]
	Selection(#[from] crate::selector::SelectionError),
	/// Trusted-caller configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration failures raised while loading the trusted-caller registry.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration file could not be read.
	#[error("Trusted-caller configuration could not be read from `{path}`.")]
	Io {
		/// Path of the file that failed to open or read.
		path: String,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// Configuration payload could not be parsed.
	#[error("Trusted-caller configuration is malformed at `{}`.", .source.path())]
	Parse {
		/// Structured parsing failure carrying the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
