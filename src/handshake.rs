//! Invocation-level orchestration: verify the caller, decode the request, respond.

// self
use crate::{
	_prelude::*,
	caller::{AppRegistry, CallerVerifier, TrustedCallerRegistry},
	obs::{self, HandshakeStage, StageOutcome, StageSpan},
	protocol::{Delivery, Extras, HandshakeRequest, HandshakeResponse, codec},
	selector::{self, OutcomeChoice},
};

/// Coordinates one authorization handshake between the requester and the operator.
///
/// The facade owns the verifier (trusted-caller registry + platform application registry) so
/// the hosting shell only threads invocation data through [`accept`](Self::accept) and
/// [`respond`](Self::respond). Every invocation is independent and the facade holds no mutable
/// state, so one instance can serve concurrent invocations.
#[derive(Clone, Debug)]
pub struct Handshake {
	/// Verifier applied to every inbound invocation.
	pub verifier: CallerVerifier,
}
impl Handshake {
	/// Creates a handshake bound to the configured registry and platform application registry.
	pub fn new(registry: &TrustedCallerRegistry, apps: Arc<dyn AppRegistry>) -> Self {
		Self { verifier: CallerVerifier::new(registry, apps) }
	}

	/// Verifies the invoking application, then decodes the inbound payload—in that order.
	///
	/// A rejected caller aborts before the payload is read; no response is owed to an
	/// unverified caller. A verified caller with a malformed payload also aborts, surfacing
	/// [`Error::Codec`](crate::error::Error::Codec) to the operator.
	pub fn accept(&self, caller: Option<&str>, extras: &Extras) -> Result<HandshakeRequest> {
		self.verifier.evaluate(caller)?;

		let _guard = StageSpan::new(HandshakeStage::Decode, "accept").entered();

		obs::record_stage_outcome(HandshakeStage::Decode, StageOutcome::Attempt);

		match codec::decode_request(extras) {
			Ok(request) => {
				#[cfg(feature = "tracing")]
				tracing::debug!(client_id = %request.client_id, "Inbound request decoded.");

				obs::record_stage_outcome(HandshakeStage::Decode, StageOutcome::Success);

				Ok(request)
			},
			Err(error) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(%error, "Inbound request rejected as malformed.");

				obs::record_stage_outcome(HandshakeStage::Decode, StageOutcome::Failure);

				Err(error.into())
			},
		}
	}

	/// Maps the operator's selection to a response and encodes it for the return channel.
	///
	/// Selection failures produce no delivery; the operator re-drives the interaction and the
	/// requester keeps waiting.
	pub fn respond(&self, choice: Option<OutcomeChoice>, code_text: &str) -> Result<Delivery> {
		let _guard = StageSpan::new(HandshakeStage::Respond, "respond").entered();

		obs::record_stage_outcome(HandshakeStage::Respond, StageOutcome::Attempt);

		match selector::select(choice, code_text) {
			Ok(outcome) => {
				let delivery = codec::encode_response(&HandshakeResponse::new(outcome));

				obs::record_stage_outcome(HandshakeStage::Respond, StageOutcome::Success);

				Ok(delivery)
			},
			Err(error) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(%error, "Outcome selection failed.");

				obs::record_stage_outcome(HandshakeStage::Respond, StageOutcome::Failure);

				Err(error.into())
			},
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, caller::CallerRejected, protocol::codec::CLIENT_ID, selector::SelectionError};

	#[test]
	fn accept_rejects_before_reading_the_payload() {
		let handshake = test_handshake();
		// A payload that would decode fine; the absent caller must still win.
		let extras = inbound_extras("abc", "email", "app://cb");
		let error = handshake.accept(None, &extras).expect_err("Absent caller must be rejected.");

		assert!(matches!(error, Error::Rejected(CallerRejected::Absent)));
	}

	#[test]
	fn accept_decodes_for_a_verified_caller() {
		let handshake = test_handshake();
		let extras = inbound_extras("abc", "email", "app://cb");
		let request = handshake
			.accept(Some(REQUESTER_PACKAGE), &extras)
			.expect("Verified caller with a well-formed payload should be accepted.");

		assert_eq!(request, HandshakeRequest::new("abc", "email", "app://cb"));
	}

	#[test]
	fn accept_surfaces_malformed_payloads() {
		let handshake = test_handshake();
		let extras = Extras::new().with("SCOPE", "email");
		let error = handshake
			.accept(Some(REQUESTER_PACKAGE), &extras)
			.expect_err("Payload without a client id must be rejected.");

		assert!(matches!(
			error,
			Error::Codec(codec::CodecError::MissingRequiredField { field: CLIENT_ID })
		));
	}

	#[test]
	fn respond_encodes_the_selected_outcome() {
		let handshake = test_handshake();
		let delivery = handshake
			.respond(Some(OutcomeChoice::SuccessWithCode), "")
			.expect("Success selection should produce a delivery.");

		assert_eq!(delivery.status_code(), -1);
		assert_eq!(
			delivery.extras.get_str(codec::AUTHORIZATION_CODE),
			Some("authcode_from_AppFlipSampleApp")
		);
	}

	#[test]
	fn respond_produces_no_delivery_on_selection_failure() {
		let handshake = test_handshake();
		let error = handshake
			.respond(Some(OutcomeChoice::Recoverable), "abc")
			.expect_err("Invalid code text must not produce a delivery.");

		assert!(matches!(
			error,
			Error::Selection(SelectionError::InvalidErrorCode { .. })
		));
	}
}
