// self
use crate::{_prelude::*, obs::FlowKind, request::MergedPayload};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used by client flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("auth_session.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> FlowSpanGuard {
		#[cfg(feature = "tracing")]
		{
			FlowSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			FlowSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`FlowSpan::entered`].
pub struct FlowSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for FlowSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FlowSpanGuard(..)")
	}
}

/// Emits a debug event carrying the merged envelope computed for a request.
pub fn record_merged_payload(kind: FlowKind, payload: &MergedPayload) {
	#[cfg(feature = "tracing")]
	tracing::debug!(flow = kind.as_str(), payload = ?payload, "Merged request payload.");

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, payload);
	}
}

/// Emits an info event for the session about to open.
pub fn record_session_open(kind: FlowKind, url: &Url, return_url: &Url) {
	#[cfg(feature = "tracing")]
	tracing::info!(
		flow = kind.as_str(),
		url = %url,
		return_url = %return_url,
		"Opening interactive session in browser."
	);

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, url, return_url);
	}
}

/// Emits an error event before a flow failure is surfaced to the caller.
pub fn record_flow_failure(kind: FlowKind, classification: &str) {
	#[cfg(feature = "tracing")]
	tracing::error!(flow = kind.as_str(), classification, "Flow failed with non-success outcome.");

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, classification);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn flow_span_noop_without_tracing() {
		let _guard = FlowSpan::new(FlowKind::Login, "test").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = FlowSpan::new(FlowKind::Logout, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
