// self
use crate::{
	_prelude::*,
	config::{ClientId, DEFAULT_SDK_URL, Network, SdkConfig},
	error::ConfigError,
};

/// Builder for [`SdkConfig`] values.
///
/// The base URL is parsed and validated in [`build`](SdkConfigBuilder::build) so malformed
/// input fails fast with a [`ConfigError`] instead of surfacing mid-flow.
#[derive(Clone, Debug)]
pub struct SdkConfigBuilder {
	/// Client identifier registered with the identity service.
	pub client_id: ClientId,
	/// Network the identity service resolves the client against.
	pub network: Network,
	/// Optional base URL override (defaults to [`DEFAULT_SDK_URL`]).
	pub sdk_url: Option<String>,
	/// Optional default redirect URL applied when a call supplies none.
	pub redirect_url: Option<Url>,
}
impl SdkConfigBuilder {
	/// Creates a new builder seeded with the required fields.
	pub fn new(client_id: ClientId, network: Network) -> Self {
		Self { client_id, network, sdk_url: None, redirect_url: None }
	}

	/// Overrides the identity-service base URL.
	pub fn sdk_url(mut self, url: impl Into<String>) -> Self {
		self.sdk_url = Some(url.into());

		self
	}

	/// Sets the default redirect URL applied when a call supplies none.
	pub fn redirect_url(mut self, url: Url) -> Self {
		self.redirect_url = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<SdkConfig, ConfigError> {
		let raw = self.sdk_url.as_deref().unwrap_or(DEFAULT_SDK_URL);
		let sdk_url = Url::parse(raw).map_err(|source| ConfigError::InvalidSdkUrl { source })?;

		if sdk_url.scheme() != "https" {
			return Err(ConfigError::InsecureSdkUrl { url: sdk_url.to_string() });
		}

		Ok(SdkConfig {
			sdk_url,
			client_id: self.client_id,
			network: self.network,
			redirect_url: self.redirect_url,
		})
	}
}
