//! Runs a full login round trip against a scripted browser-session capability, standing in
//! for the interactive redirect a real host would perform.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use serde_json::json;
use url::Url;
// self
use auth_session_client::{
	_preludet::ScriptedOpener,
	browser::SessionOutcome,
	config::{ClientId, Network, SdkConfig},
	flows::AuthSessionClient,
	fragment,
	request::SessionParams,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	// The state the identity service would hand back in the redirect fragment.
	let state = json!({ "sessionId": "demo-session", "user": { "name": "demo" } });
	let encoded = fragment::encode_payload(&state)?;
	let return_url = Url::parse(&format!("app://demo/callback#{encoded}"))?;
	let opener =
		Arc::new(ScriptedOpener::new(SessionOutcome::Success { url: Some(return_url) }));
	let config = SdkConfig::builder(ClientId::new("demo-client")?, Network::Testnet).build()?;
	let client: AuthSessionClient<ScriptedOpener> = AuthSessionClient::new(config, opener.clone());
	let session = client
		.login(SessionParams::new().with_redirect_url(Url::parse("app://demo/callback")?))
		.await?;

	println!("Opened {} session(s).", opener.opened().len());
	println!("Recovered session state:");
	println!("{}", serde_json::to_string_pretty(&session)?);

	Ok(())
}
