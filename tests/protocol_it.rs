// self
use appflip_handshake::{
	protocol::{
		Disposition, ErrorKind, Extras, HandshakeRequest, HandshakeResponse, Outcome, codec,
	},
	selector::{self, OutcomeChoice},
};

fn inbound(client_id: &str, scope: &str, redirect_uri: &str) -> Extras {
	Extras::new()
		.with(codec::CLIENT_ID, client_id)
		.with(codec::SCOPE, scope)
		.with(codec::REDIRECT_URI, redirect_uri)
}

#[test]
fn scenario_success_with_code() {
	// Inbound {CLIENT_ID: "abc", SCOPE: "email", REDIRECT_URI: "app://cb"}, operator approves
	// with a code.
	let extras = inbound("abc", "email", "app://cb");
	let request = codec::decode_request(&extras).expect("Scenario payload should decode.");

	assert_eq!(request, HandshakeRequest::new("abc", "email", "app://cb"));

	let outcome = selector::select(Some(OutcomeChoice::SuccessWithCode), "")
		.expect("Success selection should map to an outcome.");
	let delivery = codec::encode_response(&outcome.into());

	assert_eq!(delivery.disposition, Disposition::Ok);
	assert_eq!(
		delivery.extras.get_str(codec::AUTHORIZATION_CODE),
		Some("authcode_from_AppFlipSampleApp")
	);
}

#[test]
fn scenario_recoverable_error_with_code_text() {
	// Operator picks the recoverable error with code text "42".
	let outcome = selector::select(Some(OutcomeChoice::Recoverable), "42")
		.expect("Numeric code text should parse.");
	let delivery = codec::encode_response(&outcome.into());

	assert_eq!(delivery.disposition, Disposition::Failed);
	assert_eq!(delivery.status_code(), -2);
	assert_eq!(delivery.extras.get_int(codec::ERROR_TYPE), Some(1));
	assert_eq!(delivery.extras.get_int(codec::ERROR_CODE), Some(42));
	assert!(!delivery.extras.contains(codec::ERROR_DESCRIPTION));
}

#[test]
fn scenario_invalid_code_text_emits_nothing() {
	// Operator picks the recoverable error with non-numeric code text; selection fails and no
	// response exists to encode.
	let result = selector::select(Some(OutcomeChoice::Recoverable), "abc");

	assert!(matches!(result, Err(selector::SelectionError::InvalidErrorCode { .. })));
}

#[test]
fn scenario_missing_client_id_is_malformed() {
	let extras = Extras::new().with(codec::SCOPE, "email").with(codec::REDIRECT_URI, "app://cb");

	assert_eq!(
		codec::decode_request(&extras),
		Err(codec::CodecError::MissingRequiredField { field: codec::CLIENT_ID })
	);
}

#[test]
fn well_formed_requests_round_trip() {
	let requests = [
		HandshakeRequest::new("abc", "email", "app://cb"),
		HandshakeRequest::new("client-1", "email profile", "https://cb.example.com/done"),
	];

	for request in requests {
		let decoded = codec::decode_request(&codec::encode_request(&request))
			.expect("Round-tripped payload should decode.");

		assert_eq!(decoded, request);
	}
}

#[test]
fn every_error_kind_encodes_with_the_reserved_status() {
	for (kind, tag) in [
		(ErrorKind::Recoverable, 1),
		(ErrorKind::Unrecoverable, 2),
		(ErrorKind::InvalidRequest, 3),
	] {
		let response =
			HandshakeResponse::new(Outcome::Error { kind, code: 9, description: None });
		let delivery = codec::encode_response(&response);

		assert_eq!(delivery.extras.get_int(codec::ERROR_TYPE), Some(tag));
		assert_eq!(delivery.status_code(), -2);
		assert_ne!(delivery.status_code(), 0, "Reserved status must differ from generic failure.");
	}
}

#[test]
fn denied_consent_ignores_the_disabled_code_field() {
	for text in ["", "42", "abc"] {
		let outcome = selector::select(Some(OutcomeChoice::UserDeniedConsent), text)
			.expect("Denied consent should never consult the code field.");
		let delivery = codec::encode_response(&outcome.into());

		assert_eq!(delivery.extras.get_int(codec::ERROR_TYPE), Some(2));
		assert_eq!(delivery.extras.get_int(codec::ERROR_CODE), Some(13));
		assert_eq!(delivery.disposition, Disposition::Failed);
	}
}
