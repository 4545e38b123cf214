// crates.io
use serde_json::json;
// self
use auth_session_client::{
	_preludet::*,
	browser::SessionOutcome,
	config::{ClientId, Network, SdkConfig},
	error::{ConfigError, Error},
	flows::AuthSessionClient,
	fragment::{self, FragmentError},
	request::{MergedPayload, SessionParams},
};

fn url(value: &str) -> Url {
	Url::parse(value).expect("URL fixture should parse successfully.")
}

fn return_url_with_state(state: &serde_json::Value) -> Url {
	let encoded = fragment::encode_payload(state).expect("State fixture should encode.");

	url(&format!("app://cb#{encoded}"))
}

#[tokio::test]
async fn login_decodes_the_returned_session_state() {
	let state = json!({ "sessionId": "abc" });
	let (client, _opener) = build_scripted_client(SessionOutcome::Success {
		url: Some(return_url_with_state(&state)),
	});
	let decoded = client
		.login(SessionParams::new().with_redirect_url(url("app://cb")))
		.await
		.expect("Login should decode the returned state.");

	assert_eq!(decoded.into_inner(), state);
}

#[tokio::test]
async fn login_envelope_round_trips_through_the_opened_url() {
	let state = json!({ "sessionId": "abc" });
	let (client, opener) = build_scripted_client(SessionOutcome::Success {
		url: Some(return_url_with_state(&state)),
	});

	client
		.login(
			SessionParams::new()
				.with_redirect_url(url("app://cb"))
				.with_param("loginProvider", "google"),
		)
		.await
		.expect("Login should succeed for the envelope inspection.");

	let opened = opener.opened();

	assert_eq!(opened.len(), 1, "Exactly one session must be opened per call.");

	// Path composition is additive over the configured `/v1/` base.
	assert_eq!(opened[0].url.path(), "/v1/login");
	assert_eq!(opened[0].url.host_str(), Some("sdk.example.com"));
	assert_eq!(opened[0].return_url, url("app://cb"));

	let envelope: MergedPayload = fragment::decode_fragment(&opened[0].url)
		.expect("Opened URL fragment should decode into the envelope.");

	assert_eq!(envelope.init, test_config());
	assert_eq!(envelope.params.redirect_url, url("app://cb"));
	assert_eq!(envelope.params.extra.get("loginProvider"), Some(&json!("google")));
}

#[tokio::test]
async fn call_redirect_wins_over_the_configuration_default() {
	let state = json!({ "sessionId": "abc" });
	let config = SdkConfig::builder(
		ClientId::new("client-test").expect("Client identifier fixture should be valid."),
		Network::Testnet,
	)
	.sdk_url("https://sdk.example.com/v1/")
	.redirect_url(url("app://a"))
	.build()
	.expect("Configuration fixture should build successfully.");
	let opener = Arc::new(ScriptedOpener::new(SessionOutcome::Success {
		url: Some(return_url_with_state(&state)),
	}));
	let client: AuthSessionClient<ScriptedOpener> = AuthSessionClient::new(config, opener.clone());

	client
		.login(SessionParams::new().with_redirect_url(url("app://b")))
		.await
		.expect("Login should succeed with the explicit redirect.");

	let envelope: MergedPayload = fragment::decode_fragment(&opener.opened()[0].url)
		.expect("Opened URL fragment should decode into the envelope.");

	assert_eq!(envelope.params.redirect_url, url("app://b"));
	assert_eq!(envelope.init.redirect_url, Some(url("app://a")));
	assert_eq!(opener.opened()[0].return_url, url("app://b"));
}

#[tokio::test]
async fn missing_redirect_everywhere_fails_before_opening_a_session() {
	let (client, opener) = build_scripted_client(SessionOutcome::Cancel);
	let err = client
		.login(SessionParams::new())
		.await
		.expect_err("Login without any redirect URL should fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingRedirectUrl)));
	assert!(opener.opened().is_empty(), "No session may be opened without a redirect URL.");
}

#[tokio::test]
async fn cancelled_sessions_reject_with_their_classification() {
	let (client, _opener) = build_scripted_client(SessionOutcome::Cancel);
	let err = client
		.login(SessionParams::new().with_redirect_url(url("app://cb")))
		.await
		.expect_err("Cancelled login should be rejected.");

	let Error::Flow(flow) = err else {
		panic!("Cancelled login should surface a flow failure.");
	};

	assert_eq!(flow.classification, "cancel");
	assert!(flow.to_string().contains("cancel"));
}

#[tokio::test]
async fn success_without_a_return_url_is_a_flow_failure() {
	let (client, _opener) = build_scripted_client(SessionOutcome::Success { url: None });
	let err = client
		.login(SessionParams::new().with_redirect_url(url("app://cb")))
		.await
		.expect_err("Success without a URL should be rejected.");

	let Error::Flow(flow) = err else {
		panic!("Missing return URL should surface a flow failure.");
	};

	assert_eq!(flow.classification, "success");
}

#[tokio::test]
async fn absent_fragment_on_login_is_a_decode_failure_not_a_flow_failure() {
	let (client, _opener) =
		build_scripted_client(SessionOutcome::Success { url: Some(url("app://cb")) });
	let err = client
		.login(SessionParams::new().with_redirect_url(url("app://cb")))
		.await
		.expect_err("Login without a fragment should fail to decode.");

	assert!(matches!(err, Error::Fragment(FragmentError::Missing)));
}

#[tokio::test]
async fn malformed_fragment_on_login_is_a_decode_failure() {
	let (client, _opener) = build_scripted_client(SessionOutcome::Success {
		url: Some(url("app://cb#@@not-base64@@")),
	});
	let err = client
		.login(SessionParams::new().with_redirect_url(url("app://cb")))
		.await
		.expect_err("Login with a malformed fragment should fail to decode.");

	assert!(matches!(err, Error::Fragment(FragmentError::Base64(_))));
}
