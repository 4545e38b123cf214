//! Client-level error types shared across configuration, flows, and the fragment codec.

// self
use crate::{_prelude::*, obs::FlowKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Interactive session terminated without a usable redirect.
	#[error(transparent)]
	Flow(#[from] FlowError),
	/// Return-URL fragment could not be decoded.
	#[error(transparent)]
	Fragment(#[from] crate::fragment::FragmentError),
}

/// Configuration and validation failures raised while building requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Identity-service base URL cannot be parsed.
	#[error("Identity-service base URL is invalid.")]
	InvalidSdkUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Identity-service base URL must use HTTPS.
	#[error("Identity-service base URL must use HTTPS: {url}.")]
	InsecureSdkUrl {
		/// URL that failed validation.
		url: String,
	},
	/// Neither the call nor the configuration supplied a redirect URL.
	#[error("No redirect URL was supplied by the call or the configuration.")]
	MissingRedirectUrl,
}

/// Failure of one interactive flow, classified by its terminal session outcome.
///
/// Raised when the browser session ends with anything but a success carrying a return URL.
/// The classification string is the capability's own label (`cancel`, `dismiss`, a
/// host-specific tag, or `success` for a success that lacked a URL).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{kind} flow failed with outcome classification `{classification}`.")]
pub struct FlowError {
	/// Flow the failure belongs to.
	pub kind: FlowKind,
	/// Classification label reported by the session capability.
	pub classification: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn flow_error_display_references_the_classification() {
		let err = FlowError { kind: FlowKind::Login, classification: "cancel".into() };

		assert_eq!(err.to_string(), "login flow failed with outcome classification `cancel`.");
	}
}
