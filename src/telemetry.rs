//! Tracing initialisation for the service.
//!
//! Morale is a small single-route service, but every request crosses a
//! network boundary, so structured logs with an environment-controlled
//! filter are worth the setup.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber.
///
/// Respects `RUST_LOG` when set and defaults to `info` otherwise. A second
/// installation attempt is ignored, which keeps tests that assemble the
/// stack repeatedly from panicking.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    let _ignored = tracing::subscriber::set_global_default(subscriber);
}
