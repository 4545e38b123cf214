//! Interactive login flow: drive the browser session and decode the returning state.

// self
use crate::{
	_prelude::*,
	browser::AuthSessionOpener,
	flows::{AuthSessionClient, common},
	fragment,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::{Route, SessionParams},
	state::SessionState,
};

impl<B> AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	/// Performs the interactive login flow and returns the decoded session state.
	///
	/// Builds the `login` request envelope, suspends on the browser session, and decodes the
	/// fragment of the returning URL into a [`SessionState`]. Any non-success outcome, or a
	/// success without a return URL, is surfaced as [`FlowError`](crate::error::FlowError)
	/// carrying the outcome's classification. An absent or malformed fragment surfaces as
	/// [`FragmentError`](crate::fragment::FragmentError) instead.
	pub async fn login(&self, params: SessionParams) -> Result<SessionState> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let outcome = self.request(Route::Login, params).await?;
				let url = common::expect_success(KIND, outcome)?;
				let state = fragment::decode_fragment::<SessionState>(&url)?;

				Ok(state)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
