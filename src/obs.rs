//! Optional observability helpers for handshake stages.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `appflip_handshake.stage` with the `stage`
//!   and `site` (call site) fields, plus rejection diagnostics.
//! - Enable `metrics` to increment the `appflip_handshake_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Handshake stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandshakeStage {
	/// Caller verification against the trusted-caller registry.
	Verify,
	/// Inbound payload decoding.
	Decode,
	/// Outcome selection + response encoding.
	Respond,
}
impl HandshakeStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandshakeStage::Verify => "verify",
			HandshakeStage::Decode => "decode",
			HandshakeStage::Respond => "respond",
		}
	}
}
impl Display for HandshakeStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a handshake stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure surfaced to the operator.
	Failure,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
