//! Tracing setup for hosts embedding `chart-layout`.
//!
//! Layout passes emit `debug!`/`trace!` events; hosts either call
//! `init_default_tracing` or install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,chart_layout=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is on.
///
/// Returns `false` when the feature is off or the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
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
