//! Telemetry helpers for hosts embedding `chart-interaction`.
//!
//! Events emitted by this crate, all under the `chart_interaction` target:
//! - `trace`: every `SelectionMode::resolve` (fields `mode`, `hits`) and
//!   nearest-element ties broken by area (fields `tied`, `distance`).
//! - `debug`: dataset pushes and visibility changes on `ChartModel`, mode
//!   registration and removal on `ModeRegistry`.
//! - `warn`: rejected mode registrations, unknown mode names, datasets whose
//!   elements carry a foreign dataset index, unparsable interaction config.
//!
//! Resolution runs on every pointer move, so `trace` is off under the default
//! filter.

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "chart_interaction=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
