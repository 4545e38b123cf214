//! Interactive browser-session capability consumed by the client.
//!
//! The module exposes [`AuthSessionOpener`] alongside [`SessionOutcome`] so hosts can plug in
//! whichever interactive-session mechanism their platform provides (a system browser tab, an
//! in-app auth session, a headless harness in tests). The client never opens URLs itself; the
//! capability is its only dependency on a host browser stack.

// self
use crate::_prelude::*;

/// Boxed future resolving to the terminal [`SessionOutcome`] of one interactive session.
pub type SessionFuture<'a> = Pin<Box<dyn Future<Output = SessionOutcome> + 'a + Send>>;
/// Boxed future resolving once an in-flight session has been dismissed.
pub type DismissFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a + Send>>;

/// Host capability that performs the interactive redirect leg of a flow.
///
/// Implementations open `url` in a browser session, watch for a terminal redirect whose prefix
/// matches `return_url`, and resolve with exactly one outcome per invocation. The client issues
/// a single attempt per call and performs no retries or timeouts of its own; queuing or
/// rejection of overlapping sessions is the host's business. Implementations must be
/// `Send + Sync + 'static` so one capability instance can be shared behind `Arc` across calls.
pub trait AuthSessionOpener
where
	Self: 'static + Send + Sync,
{
	/// Opens `url` interactively and resolves once the end user completes the flow, cancels
	/// it, or the host environment dismisses it.
	fn open_auth_session(&self, url: Url, return_url: Url) -> SessionFuture<'_>;

	/// Aborts the in-flight session, if any.
	///
	/// Exposed for callers that need caller-driven cancellation; no flow invokes it
	/// internally.
	fn dismiss_auth_session(&self) -> DismissFuture<'_>;
}

/// Terminal result of one browser-session attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
	/// The session reached a terminal redirect.
	Success {
		/// Return URL captured by the host, when it observed one.
		url: Option<Url>,
	},
	/// The end user cancelled the session.
	Cancel,
	/// The host environment dismissed the session.
	Dismiss,
	/// Host-specific classification outside the standard set.
	Other(String),
}
impl SessionOutcome {
	/// Returns the stable classification label for the outcome.
	pub fn classification(&self) -> &str {
		match self {
			SessionOutcome::Success { .. } => "success",
			SessionOutcome::Cancel => "cancel",
			SessionOutcome::Dismiss => "dismiss",
			SessionOutcome::Other(label) => label,
		}
	}
}
impl Display for SessionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.classification())
	}
}
