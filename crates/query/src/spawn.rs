use std::future::Future;
use std::sync::OnceLock;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::TaskClass;

/// Runtime that runs source fetches.
///
/// Services issued from inside tokio share the caller's runtime. Hosts that
/// drive the editor from their own loop get one lazily built fetch thread.
fn fetch_runtime() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static FETCH_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	FETCH_RT
		.get_or_init(|| {
			tokio::runtime::Builder::new_multi_thread()
				.enable_all()
				.worker_threads(1)
				.thread_name("stickyard-fetch")
				.build()
				.expect("query fetch runtime must start")
		})
		.handle()
		.clone()
}

/// Runs one source fetch for `service`'s request `seq`.
///
/// The fetch is wrapped in a `query.fetch` span so source logs carry the
/// request they answer.
pub fn spawn_fetch<F>(class: TaskClass, service: &'static str, seq: u64, fetch: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	let span = tracing::trace_span!("query.fetch", service, seq, class = class.label());
	fetch_runtime().spawn(
		async move {
			if class.yields_first() {
				tokio::task::yield_now().await;
			}
			fetch.await
		}
		.instrument(span),
	)
}
