//! Shared helpers for flow implementations (request primitive, outcome classification).

// self
use crate::{
	_prelude::*,
	browser::{AuthSessionOpener, SessionOutcome},
	error::FlowError,
	flows::AuthSessionClient,
	obs::{self, FlowKind},
	request::{self, Route, SessionParams},
};

impl<B> AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	/// Builds the request envelope for `route` and drives one interactive session.
	///
	/// This is the sole suspension point of every flow: the future resolves when the end user
	/// completes the session, cancels it, or the host dismisses it. One attempt per call; no
	/// retries.
	pub(crate) async fn request(
		&self,
		route: Route,
		params: SessionParams,
	) -> Result<SessionOutcome> {
		let payload = request::merge_payload(&self.config, params)?;

		obs::record_merged_payload(route.kind(), &payload);

		let url = request::build_request_url(&self.config, route, &payload)?;
		let return_url = payload.params.redirect_url.clone();

		obs::record_session_open(route.kind(), &url, &return_url);

		Ok(self.opener.open_auth_session(url, return_url).await)
	}
}

/// Classifies a session outcome, logging and rejecting anything but a success with a URL.
pub(crate) fn expect_success(kind: FlowKind, outcome: SessionOutcome) -> Result<Url, FlowError> {
	match outcome {
		SessionOutcome::Success { url: Some(url) } => Ok(url),
		other => {
			let classification = other.classification().to_owned();

			obs::record_flow_failure(kind, &classification);

			Err(FlowError { kind, classification })
		},
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn success_with_url_passes_through() {
		let url = Url::parse("app://cb#ZnJhZ21lbnQ")
			.expect("Return URL fixture should parse successfully.");
		let passed = expect_success(FlowKind::Login, SessionOutcome::Success {
			url: Some(url.clone()),
		})
		.expect("Success with a URL should pass through.");

		assert_eq!(passed, url);
	}

	#[test]
	fn non_success_outcomes_carry_their_classification() {
		let err = expect_success(FlowKind::Login, SessionOutcome::Cancel)
			.expect_err("Cancel should be rejected.");

		assert_eq!(err, FlowError { kind: FlowKind::Login, classification: "cancel".into() });
	}

	#[test]
	fn success_without_url_is_still_a_failure() {
		let err = expect_success(FlowKind::Logout, SessionOutcome::Success { url: None })
			.expect_err("Success without a URL should be rejected.");

		assert_eq!(err.classification, "success");
		assert_eq!(err.kind, FlowKind::Logout);
	}
}
