//! Inbound handshake request model.

// self
use crate::_prelude::*;

/// OAuth parameters carried by one inbound invocation.
///
/// Created once per invocation by the codec, read, then discarded; nothing persists across
/// invocations. `scopes` and `redirect_uri` may be empty because the wire contract treats them
/// as optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeRequest {
	/// OAuth client identifier of the requester. Required on the wire.
	pub client_id: String,
	/// Space-delimited scope list as sent by the requester. Optional on the wire.
	pub scopes: String,
	/// Redirect URI from the requester's OAuth configuration. Optional on the wire.
	pub redirect_uri: String,
}
impl HandshakeRequest {
	/// Creates a request from its three wire fields.
	pub fn new(
		client_id: impl Into<String>,
		scopes: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self { client_id: client_id.into(), scopes: scopes.into(), redirect_uri: redirect_uri.into() }
	}

	/// Parses the redirect URI, treating the empty string as absent.
	pub fn redirect_url(&self) -> Result<Option<Url>, url::ParseError> {
		if self.redirect_uri.is_empty() {
			return Ok(None);
		}

		Url::parse(&self.redirect_uri).map(Some)
	}
}
