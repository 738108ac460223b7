//! Operator-driven outcome selection.
//!
//! The hosting UI presents a finite set of outcome choices plus one integer text field; this
//! module is the pure core behind it. [`OutcomeChoice::code_field`] replaces a stateful
//! checked-change listener and [`select`] replaces a submit listener, so selection logic stays
//! decoupled from any UI framework and holds no per-invocation state.

// self
use crate::{
	_prelude::*,
	protocol::response::{ErrorKind, Outcome},
};

/// Authorization code issued when the operator approves with a code.
///
/// Fixed demo value; the handshake does not mint real authorization codes.
pub const DEMO_AUTHORIZATION_CODE: &str = "authcode_from_AppFlipSampleApp";

/// Selection failures surfaced to the operator.
///
/// Neither variant emits a response; the operator simply re-drives the interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum SelectionError {
	/// No outcome discriminant was selected.
	#[error("No outcome was selected.")]
	NothingSelected,
	/// The operator-supplied error code is not a base-10 integer.
	#[error("`{text}` is not a valid base-10 error code.")]
	InvalidErrorCode {
		/// The rejected input text.
		text: String,
	},
}

/// Visibility of the operator's integer error-code field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeField {
	/// The field is hidden and its content ignored on submit.
	Hidden,
	/// The field is shown and must parse as a base-10 integer on submit.
	Editable,
}

/// The finite outcome choices offered to the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeChoice {
	/// Approve and return the demo authorization code.
	SuccessWithCode,
	/// Approve but return an empty authorization code.
	SuccessEmptyCode,
	/// Reject with the reserved denied-consent protocol error.
	UserDeniedConsent,
	/// Reject with a recoverable error and an operator-supplied code.
	Recoverable,
	/// Reject with an unrecoverable error and an operator-supplied code.
	Unrecoverable,
	/// Report the inbound request as invalid, with an operator-supplied code.
	InvalidRequest,
}
impl OutcomeChoice {
	/// Whether the integer code field applies to this choice.
	///
	/// The hosting UI calls this on every discriminant change and shows or hides the field
	/// accordingly; [`select`] honors the same mapping on submit.
	pub const fn code_field(self) -> CodeField {
		match self {
			OutcomeChoice::Recoverable
			| OutcomeChoice::Unrecoverable
			| OutcomeChoice::InvalidRequest => CodeField::Editable,
			OutcomeChoice::SuccessWithCode
			| OutcomeChoice::SuccessEmptyCode
			| OutcomeChoice::UserDeniedConsent => CodeField::Hidden,
		}
	}
}

/// Maps the operator's choice (plus the code field's text) to exactly one [`Outcome`].
///
/// Choices with a hidden code field ignore `code_text` entirely; the rest require it to parse
/// as a base-10 `i32`.
pub fn select(choice: Option<OutcomeChoice>, code_text: &str) -> Result<Outcome, SelectionError> {
	let choice = choice.ok_or(SelectionError::NothingSelected)?;
	let kind = match choice {
		OutcomeChoice::SuccessWithCode =>
			return Ok(Outcome::Success { authorization_code: DEMO_AUTHORIZATION_CODE.into() }),
		OutcomeChoice::SuccessEmptyCode =>
			return Ok(Outcome::Success { authorization_code: String::new() }),
		OutcomeChoice::UserDeniedConsent => return Ok(Outcome::user_denied_consent()),
		OutcomeChoice::Recoverable => ErrorKind::Recoverable,
		OutcomeChoice::Unrecoverable => ErrorKind::Unrecoverable,
		OutcomeChoice::InvalidRequest => ErrorKind::InvalidRequest,
	};
	let code = code_text
		.parse::<i32>()
		.map_err(|_| SelectionError::InvalidErrorCode { text: code_text.to_owned() })?;

	Ok(Outcome::Error { kind, code, description: None })
}
