//! Outcome taxonomy and response model for the return channel.

// self
use crate::_prelude::*;

/// Error code reserved by the protocol for "user denied third-party consent".
///
/// Carried under [`ErrorKind::Unrecoverable`]; the meaning of every other code is defined by
/// the caller.
pub const USER_DENIED_CONSENT_CODE: i32 = 13;

/// Error categories understood by the requester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	/// The requester may retry the handshake.
	Recoverable,
	/// The requester must not retry.
	Unrecoverable,
	/// The inbound request itself was invalid.
	InvalidRequest,
}
impl ErrorKind {
	/// Integer tag carried on the wire.
	pub const fn as_i32(self) -> i32 {
		match self {
			ErrorKind::Recoverable => 1,
			ErrorKind::Unrecoverable => 2,
			ErrorKind::InvalidRequest => 3,
		}
	}

	/// Reverses [`as_i32`](Self::as_i32).
	pub const fn from_i32(tag: i32) -> Option<Self> {
		match tag {
			1 => Some(ErrorKind::Recoverable),
			2 => Some(ErrorKind::Unrecoverable),
			3 => Some(ErrorKind::InvalidRequest),
			_ => None,
		}
	}

	/// Stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorKind::Recoverable => "recoverable",
			ErrorKind::Unrecoverable => "unrecoverable",
			ErrorKind::InvalidRequest => "invalid_request",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Result of one operator-driven handshake: success or a categorized error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
	/// The operator granted authorization.
	Success {
		/// Authorization code handed back to the requester; may be empty.
		authorization_code: String,
	},
	/// The operator (or the handshake itself) rejected the request.
	Error {
		/// Error category.
		kind: ErrorKind,
		/// Error code; caller-defined except for [`USER_DENIED_CONSENT_CODE`].
		code: i32,
		/// Optional human-readable description.
		description: Option<String>,
	},
}
impl Outcome {
	/// The reserved denied-consent protocol error.
	pub fn user_denied_consent() -> Self {
		Self::Error {
			kind: ErrorKind::Unrecoverable,
			code: USER_DENIED_CONSENT_CODE,
			description: None,
		}
	}
}

/// Top-level status of an invocation response, distinct from the [`Outcome`] it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
	/// Maps to the platform's generic "succeeded" status.
	Ok,
	/// Maps to the reserved app-flip error status.
	Failed,
}
impl Disposition {
	/// Platform status integer for this disposition.
	///
	/// `Ok` uses the platform's generic success value (`-1`). `Failed` reserves `-2`, outside
	/// the normal success/generic-failure (`0`) range, so the requester can distinguish
	/// protocol-level errors from a plain negative result.
	pub const fn status_code(self) -> i32 {
		match self {
			Disposition::Ok => -1,
			Disposition::Failed => -2,
		}
	}
}
impl Display for Disposition {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Disposition::Ok => f.write_str("ok"),
			Disposition::Failed => f.write_str("failed"),
		}
	}
}

/// Response handed to the platform return channel, wrapping exactly one [`Outcome`].
///
/// Created once per invocation in response to exactly one selected outcome, delivered, then
/// discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeResponse {
	/// The selected outcome.
	pub outcome: Outcome,
}
impl HandshakeResponse {
	/// Wraps a selected outcome.
	pub fn new(outcome: Outcome) -> Self {
		Self { outcome }
	}

	/// Overall disposition derived from the outcome variant.
	pub fn disposition(&self) -> Disposition {
		match self.outcome {
			Outcome::Success { .. } => Disposition::Ok,
			Outcome::Error { .. } => Disposition::Failed,
		}
	}
}
impl From<Outcome> for HandshakeResponse {
	fn from(outcome: Outcome) -> Self {
		Self::new(outcome)
	}
}
