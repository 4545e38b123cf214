//! Walks through merging configuration with per-call parameters and inspecting the outbound
//! request URL the identity service would receive.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use auth_session_client::{
	config::{ClientId, Network, SdkConfig},
	fragment,
	request::{self, MergedPayload, Route, SessionParams},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = SdkConfig::builder(ClientId::new("demo-client")?, Network::Testnet)
		.redirect_url(Url::parse("app://demo/default")?)
		.build()?;
	let params = SessionParams::new()
		.with_redirect_url(Url::parse("app://demo/callback")?)
		.with_param("loginProvider", "google");
	let payload = request::merge_payload(&config, params)?;
	let url = request::build_request_url(&config, Route::Login, &payload)?;

	println!("Send your user to {url}.");

	// The service decodes the fragment exactly the way this client encoded it.
	let echoed: MergedPayload = fragment::decode_fragment(&url)?;

	println!("The service will see:");
	println!("{}", serde_json::to_string_pretty(&echoed)?);

	Ok(())
}
