//! Interactive logout flow: drive the browser session and discard the returning URL.

// self
use crate::{
	_prelude::*,
	browser::AuthSessionOpener,
	flows::{AuthSessionClient, common},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::{Route, SessionParams},
};

impl<B> AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	/// Performs the interactive logout flow.
	///
	/// Symmetric to [`login`](AuthSessionClient::login), but the returning URL is not decoded;
	/// a success with a return URL resolves with no value. Any non-success outcome, or a
	/// success without a return URL, is surfaced as [`FlowError`](crate::error::FlowError)
	/// carrying the outcome's classification.
	pub async fn logout(&self, params: SessionParams) -> Result<()> {
		const KIND: FlowKind = FlowKind::Logout;

		let span = FlowSpan::new(KIND, "logout");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let outcome = self.request(Route::Logout, params).await?;

				common::expect_success(KIND, outcome)?;

				Ok(())
			})
			.await;

		match &result {
			Ok(()) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
