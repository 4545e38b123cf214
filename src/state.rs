//! Session state issued by the identity service.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Service-issued session state recovered from a successful login redirect.
///
/// The shape of the object is owned by the identity service and passed through verbatim;
/// callers inspect it as JSON or deserialize it into their own types via
/// [`into_inner`](SessionState::into_inner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionState(JsonValue);
impl SessionState {
	/// Wraps a raw JSON state object.
	pub fn new(value: JsonValue) -> Self {
		Self(value)
	}

	/// Returns the raw JSON state object.
	pub fn into_inner(self) -> JsonValue {
		self.0
	}
}
impl Deref for SessionState {
	type Target = JsonValue;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<JsonValue> for SessionState {
	fn as_ref(&self) -> &JsonValue {
		&self.0
	}
}
impl From<JsonValue> for SessionState {
	fn from(value: JsonValue) -> Self {
		Self(value)
	}
}
