//! Client-side adapter for redirect-based authentication handshakes: build fragment-encoded
//! requests, hand them to a system browser session, and decode the returning session state.

#![deny(clippy::all, missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod browser;
pub mod config;
pub mod error;
pub mod flows;
pub mod fragment;
pub mod obs;
pub mod request;
pub mod state;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use parking_lot::Mutex;
	// self
	use crate::{
		browser::{AuthSessionOpener, DismissFuture, SessionFuture, SessionOutcome},
		config::{ClientId, Network, SdkConfig},
		flows::AuthSessionClient,
	};

	/// Client type alias used by scripted integration tests.
	pub type ScriptedTestClient = AuthSessionClient<ScriptedOpener>;

	/// Arguments captured from a single `open_auth_session` invocation.
	#[derive(Clone, Debug)]
	pub struct OpenedSession {
		/// Request URL handed to the capability.
		pub url: Url,
		/// Expected return URL handed to the capability.
		pub return_url: Url,
	}

	/// Browser-session capability that replays a scripted outcome and records every invocation.
	#[derive(Debug)]
	pub struct ScriptedOpener {
		outcome: SessionOutcome,
		opened: Mutex<Vec<OpenedSession>>,
		dismissed: Mutex<bool>,
	}
	impl ScriptedOpener {
		/// Creates an opener that resolves every session with a clone of `outcome`.
		pub fn new(outcome: SessionOutcome) -> Self {
			Self { outcome, opened: Mutex::new(Vec::new()), dismissed: Mutex::new(false) }
		}

		/// Returns the sessions opened so far.
		pub fn opened(&self) -> Vec<OpenedSession> {
			self.opened.lock().clone()
		}

		/// Whether `dismiss_auth_session` has been invoked.
		pub fn dismissed(&self) -> bool {
			*self.dismissed.lock()
		}
	}
	impl AuthSessionOpener for ScriptedOpener {
		fn open_auth_session(&self, url: Url, return_url: Url) -> SessionFuture<'_> {
			self.opened.lock().push(OpenedSession { url, return_url });

			let outcome = self.outcome.clone();

			Box::pin(async move { outcome })
		}

		fn dismiss_auth_session(&self) -> DismissFuture<'_> {
			*self.dismissed.lock() = true;

			Box::pin(async {})
		}
	}

	/// Configuration fixture shared across scripted tests.
	pub fn test_config() -> SdkConfig {
		SdkConfig::builder(
			ClientId::new("client-test").expect("Client identifier fixture should be valid."),
			Network::Testnet,
		)
		.sdk_url("https://sdk.example.com/v1/")
		.build()
		.expect("Configuration fixture should build successfully.")
	}

	/// Builds an [`AuthSessionClient`] wired to a [`ScriptedOpener`] replaying `outcome`.
	pub fn build_scripted_client(
		outcome: SessionOutcome,
	) -> (ScriptedTestClient, Arc<ScriptedOpener>) {
		let opener = Arc::new(ScriptedOpener::new(outcome));
		let client = AuthSessionClient::new(test_config(), opener.clone());

		(client, opener)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, tokio as _};
