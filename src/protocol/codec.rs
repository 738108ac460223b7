//! Bidirectional mapping between the handshake model and the extras payload.

// self
use crate::{
	_prelude::*,
	protocol::{
		extras::Extras,
		request::HandshakeRequest,
		response::{Disposition, HandshakeResponse, Outcome},
	},
};

/// Extras key carrying the requester's OAuth client identifier.
pub const CLIENT_ID: &str = "CLIENT_ID";
/// Extras key carrying the requested scopes.
pub const SCOPE: &str = "SCOPE";
/// Extras key carrying the requester's redirect URI.
pub const REDIRECT_URI: &str = "REDIRECT_URI";
/// Extras key carrying the issued authorization code.
pub const AUTHORIZATION_CODE: &str = "AUTHORIZATION_CODE";
/// Extras key carrying the integer error-category tag.
pub const ERROR_TYPE: &str = "ERROR_TYPE";
/// Extras key carrying the error code.
pub const ERROR_CODE: &str = "ERROR_CODE";
/// Extras key carrying the optional error description.
pub const ERROR_DESCRIPTION: &str = "ERROR_DESCRIPTION";

/// Decode failures for inbound payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum CodecError {
	/// A field the protocol requires is absent from the payload.
	#[error("Inbound payload is missing the required `{field}` field.")]
	MissingRequiredField {
		/// Extras key that was expected.
		field: &'static str,
	},
}

/// Encoded response ready for the platform return channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
	/// Top-level status handed to the platform.
	pub disposition: Disposition,
	/// Response payload handed to the platform.
	pub extras: Extras,
}
impl Delivery {
	/// Platform status integer for this delivery.
	pub fn status_code(&self) -> i32 {
		self.disposition.status_code()
	}
}

/// Decodes an inbound invocation payload into a [`HandshakeRequest`].
///
/// `CLIENT_ID` is required; a payload without it (or with a non-string value under it) fails
/// with [`CodecError::MissingRequiredField`]. `SCOPE` and `REDIRECT_URI` default to the empty
/// string when absent—the legacy wire contract tolerates their omission even though a request
/// is arguably meaningless without them.
pub fn decode_request(extras: &Extras) -> Result<HandshakeRequest, CodecError> {
	let client_id = extras
		.get_str(CLIENT_ID)
		.ok_or(CodecError::MissingRequiredField { field: CLIENT_ID })?;
	let scopes = extras.get_str(SCOPE).unwrap_or_default();
	let redirect_uri = extras.get_str(REDIRECT_URI).unwrap_or_default();

	Ok(HandshakeRequest::new(client_id, scopes, redirect_uri))
}

/// Encodes a request as an inbound payload; the requester-side direction of the codec.
///
/// Empty optional fields are omitted so a decoded request re-encodes to the payload it came
/// from.
pub fn encode_request(request: &HandshakeRequest) -> Extras {
	let mut extras = Extras::new();

	extras.insert(CLIENT_ID, request.client_id.as_str());

	if !request.scopes.is_empty() {
		extras.insert(SCOPE, request.scopes.as_str());
	}
	if !request.redirect_uri.is_empty() {
		extras.insert(REDIRECT_URI, request.redirect_uri.as_str());
	}

	extras
}

/// Encodes a response for the platform return channel.
///
/// Never fails: the model is well-formed by construction. Success outcomes set
/// [`AUTHORIZATION_CODE`] (possibly empty) under disposition [`Disposition::Ok`]; error
/// outcomes set [`ERROR_TYPE`]/[`ERROR_CODE`] (plus [`ERROR_DESCRIPTION`] when present) under
/// disposition [`Disposition::Failed`].
pub fn encode_response(response: &HandshakeResponse) -> Delivery {
	let mut extras = Extras::new();

	match &response.outcome {
		Outcome::Success { authorization_code } =>
			extras.insert(AUTHORIZATION_CODE, authorization_code.as_str()),
		Outcome::Error { kind, code, description } => {
			extras.insert(ERROR_TYPE, kind.as_i32());
			extras.insert(ERROR_CODE, *code);

			if let Some(description) = description {
				extras.insert(ERROR_DESCRIPTION, description.as_str());
			}
		},
	}

	Delivery { disposition: response.disposition(), extras }
}
