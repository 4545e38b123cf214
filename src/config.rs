//! Immutable client configuration and its strongly typed fields.

/// Builder API for assembling configurations.
pub mod builder;

pub use builder::*;

// std
use std::{borrow::Borrow, ops::Deref, str::FromStr};
// self
use crate::_prelude::*;

/// Default identity-service endpoint applied when the builder receives no base URL.
pub const DEFAULT_SDK_URL: &str = "https://sdk.openlogin.com";

const CLIENT_ID_MAX_LEN: usize = 128;

/// Error returned when client identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Client identifier cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Client identifier contains whitespace.")]
	ContainsWhitespace,
	/// The identifier exceeded the allowed character count.
	#[error("Client identifier exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Project identifier issued to the client by the identity service.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);
impl ClientId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_client_id(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for ClientId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ClientId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<ClientId> for String {
	fn from(value: ClientId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ClientId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_client_id(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for ClientId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ClientId({})", self.0)
	}
}
impl Display for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ClientId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

/// Identity-service network the client resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	/// Production network.
	Mainnet,
	/// Development network.
	Testnet,
	/// Cyan production cluster.
	Cyan,
	/// Aqua production cluster.
	Aqua,
	/// Celeste production cluster.
	Celeste,
}
impl Network {
	/// Returns the stable label the identity service expects.
	pub const fn as_str(self) -> &'static str {
		match self {
			Network::Mainnet => "mainnet",
			Network::Testnet => "testnet",
			Network::Cyan => "cyan",
			Network::Aqua => "aqua",
			Network::Celeste => "celeste",
		}
	}
}
impl Display for Network {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable configuration merged into every request envelope.
///
/// Created once at client construction and read-only thereafter. The serialized form is the
/// `init` view of the request envelope; an absent default redirect URL serializes as no key at
/// all, never as an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
	/// Base identity-service URL that request routes are appended to.
	pub sdk_url: Url,
	/// Client identifier registered with the identity service.
	pub client_id: ClientId,
	/// Network the identity service resolves the client against.
	pub network: Network,
	/// Default redirect URL applied when a call supplies none.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub redirect_url: Option<Url>,
}
impl SdkConfig {
	/// Creates a new builder for the provided client identifier and network.
	pub fn builder(client_id: ClientId, network: Network) -> SdkConfigBuilder {
		SdkConfigBuilder::new(client_id, network)
	}
}

fn validate_client_id(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace);
	}
	if view.len() > CLIENT_ID_MAX_LEN {
		return Err(IdentifierError::TooLong { max: CLIENT_ID_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn client_id_rejects_empty_whitespace_and_oversized_input() {
		assert_eq!(
			ClientId::new("").expect_err("Empty input must be rejected."),
			IdentifierError::Empty
		);
		assert!(ClientId::new("client id").is_err(), "Inner whitespace must be rejected.");
		assert!(ClientId::new(" client-id").is_err(), "Leading whitespace must be rejected.");

		let exact = "a".repeat(CLIENT_ID_MAX_LEN);

		ClientId::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(CLIENT_ID_MAX_LEN + 1);

		assert!(ClientId::new(&too_long).is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: ClientId = serde_json::from_str("\"client-42\"")
			.expect("Client identifier should deserialize successfully.");

		assert_eq!(id.as_ref(), "client-42");
		assert!(serde_json::from_str::<ClientId>("\"with space\"").is_err());
		assert!(serde_json::from_str::<ClientId>("\"\"").is_err());
	}

	#[test]
	fn network_labels_match_their_serialized_form() {
		for network in [
			Network::Mainnet,
			Network::Testnet,
			Network::Cyan,
			Network::Aqua,
			Network::Celeste,
		] {
			let serialized = serde_json::to_string(&network)
				.expect("Network should serialize successfully.");

			assert_eq!(serialized, format!("\"{}\"", network.as_str()));
		}
	}

	#[test]
	fn absent_default_redirect_serializes_as_no_key() {
		let config = SdkConfig::builder(
			ClientId::new("client-42").expect("Client identifier fixture should be valid."),
			Network::Mainnet,
		)
		.build()
		.expect("Configuration fixture should build successfully.");
		let serialized =
			serde_json::to_value(&config).expect("Configuration should serialize successfully.");

		assert!(serialized.get("redirectUrl").is_none());
		// `Url` normalizes the authority-only default with a trailing slash.
		assert_eq!(serialized["sdkUrl"], format!("{DEFAULT_SDK_URL}/"));
		assert_eq!(serialized["clientId"], "client-42");
		assert_eq!(serialized["network"], "mainnet");
	}
}
