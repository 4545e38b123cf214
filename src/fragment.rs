//! URL-fragment codec for the request and response envelopes.
//!
//! Payloads travel in the fragment of the request URL as URL-safe, padding-free base64 of
//! their JSON serialization; successful login redirects carry the session state back the same
//! way. The codec is strict in both directions: absent or malformed fragments surface as
//! [`FragmentError`], deliberately not classified any further.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::de::DeserializeOwned;
// self
use crate::_prelude::*;

/// Codec failure raised while encoding or decoding fragment payloads.
#[derive(Debug, ThisError)]
pub enum FragmentError {
	/// The URL carries no fragment.
	#[error("URL carries no fragment.")]
	Missing,
	/// The fragment is not valid URL-safe base64.
	#[error("Fragment is not valid URL-safe base64.")]
	Base64(#[from] base64::DecodeError),
	/// The decoded fragment is not valid JSON for the expected shape.
	#[error("Fragment payload is malformed JSON.")]
	Json(#[from] serde_path_to_error::Error<serde_json::Error>),
}

/// Serializes `payload` to JSON and encodes it for placement in a URL fragment.
pub fn encode_payload<T>(payload: &T) -> Result<String, FragmentError>
where
	T: ?Sized + Serialize,
{
	let mut buf = Vec::new();
	let mut serializer = serde_json::Serializer::new(&mut buf);

	serde_path_to_error::serialize(payload, &mut serializer)?;

	Ok(URL_SAFE_NO_PAD.encode(buf))
}

/// Decodes the fragment of `url` and parses it as a `T`.
pub fn decode_fragment<T>(url: &Url) -> Result<T, FragmentError>
where
	T: DeserializeOwned,
{
	let fragment =
		url.fragment().filter(|fragment| !fragment.is_empty()).ok_or(FragmentError::Missing)?;
	let bytes = URL_SAFE_NO_PAD.decode(fragment)?;
	let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

	Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}
