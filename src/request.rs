//! Request construction: parameter merging, envelope encoding, and URL composition.
//!
//! The module turns the immutable [`SdkConfig`] plus one [`SessionParams`] record into the
//! outbound URL `<sdk_url><route>#<encoded envelope>`. Merging follows an explicit precedence
//! rule (the per-call redirect URL wins over the configuration default) and the resulting
//! [`MergedPayload`] guarantees a redirect URL by type. Pure data transformation; no network
//! I/O happens here.

// self
use crate::{_prelude::*, config::SdkConfig, error::ConfigError, fragment, obs::FlowKind};

/// Path segment addressed on the identity service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
	/// Interactive login flow.
	Login,
	/// Interactive logout flow.
	Logout,
}
impl Route {
	/// Returns the path segment appended to the base URL.
	pub const fn as_str(self) -> &'static str {
		match self {
			Route::Login => "login",
			Route::Logout => "logout",
		}
	}

	/// Returns the observability label for the route.
	pub const fn kind(self) -> FlowKind {
		match self {
			Route::Login => FlowKind::Login,
			Route::Logout => FlowKind::Logout,
		}
	}
}
impl Display for Route {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Per-call parameters for a single login or logout invocation.
///
/// Constructed per call and discarded once the call completes. Everything in `extra` is
/// forwarded to the identity service verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionParams {
	/// Explicit redirect URL; wins over the configuration default.
	pub redirect_url: Option<Url>,
	/// Additional key/value pairs forwarded to the identity service.
	pub extra: BTreeMap<String, JsonValue>,
}
impl SessionParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the explicit redirect URL for this call.
	pub fn with_redirect_url(mut self, url: Url) -> Self {
		self.redirect_url = Some(url);

		self
	}

	/// Adds one extra key/value pair forwarded to the identity service.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.extra.insert(key.into(), value.into());

		self
	}
}

/// Envelope shipped to the identity service in the request fragment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedPayload {
	/// Configuration view shared by every call.
	pub init: SdkConfig,
	/// Parameters for this specific call.
	pub params: ParamsPayload,
}

/// Call-parameter view with the redirect URL guaranteed present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsPayload {
	/// Effective redirect URL for this call.
	pub redirect_url: Url,
	/// Extra key/value pairs forwarded verbatim.
	#[serde(flatten)]
	pub extra: BTreeMap<String, JsonValue>,
}

/// Merges the configuration with per-call parameters into the request envelope.
///
/// The explicit per-call redirect URL wins over the configuration default; when neither is
/// present the merge fails instead of emitting an envelope without one. A `redirectUrl` key
/// smuggled into the extras map is dropped; the typed field is the only channel.
pub fn merge_payload(
	config: &SdkConfig,
	params: SessionParams,
) -> Result<MergedPayload, ConfigError> {
	let SessionParams { redirect_url, mut extra } = params;

	extra.remove("redirectUrl");

	let redirect_url = redirect_url
		.or_else(|| config.redirect_url.clone())
		.ok_or(ConfigError::MissingRedirectUrl)?;

	Ok(MergedPayload { init: config.clone(), params: ParamsPayload { redirect_url, extra } })
}

/// Builds the outbound request URL `<sdk_url><route>#<encoded envelope>`.
///
/// The route is appended to the base URL's existing path segment without overwriting it, and
/// the encoded envelope rides in the fragment.
pub fn build_request_url(config: &SdkConfig, route: Route, payload: &MergedPayload) -> Result<Url> {
	let encoded = fragment::encode_payload(payload)?;
	let mut url = config.sdk_url.clone();
	let path = format!("{}{}", url.path(), route.as_str());

	url.set_path(&path);
	url.set_fragment(Some(&encoded));

	Ok(url)
}
