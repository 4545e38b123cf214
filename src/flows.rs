//! High-level login/logout flows driven through the injected browser capability.

mod common;
mod login;
mod logout;

// self
use crate::{_prelude::*, browser::AuthSessionOpener, config::SdkConfig};

/// Drives redirect-based authentication flows against one identity service.
///
/// The client owns the immutable configuration and the injected browser-session capability so
/// the individual flows can focus on envelope construction and response decoding. Calls share
/// nothing mutable; overlapping flows each open their own session and observe the capability's
/// own queuing or rejection behavior.
pub struct AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	/// Immutable configuration merged into every request envelope.
	pub config: SdkConfig,
	/// Browser-session capability invoked once per call.
	pub opener: Arc<B>,
}
impl<B> AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	/// Creates a client for the provided configuration and session capability.
	pub fn new(config: SdkConfig, opener: impl Into<Arc<B>>) -> Self {
		Self { config, opener: opener.into() }
	}

	/// Asks the capability to abort the in-flight session, if any.
	///
	/// Passthrough for caller-driven cancellation; no flow invokes it internally.
	pub async fn dismiss(&self) {
		self.opener.dismiss_auth_session().await;
	}
}
impl<B> Clone for AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), opener: self.opener.clone() }
	}
}
impl<B> Debug for AuthSessionClient<B>
where
	B: ?Sized + AuthSessionOpener,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthSessionClient").field("config", &self.config).finish()
	}
}
