//! Log output for hosts that do not bring their own `tracing` subscriber.
//!
//! The engine emits these events under the `cartesian_plane` target:
//!
//! - `warn`: a layout was requested for an empty surface, or a spacing is so
//!   dense that one axis would exceed `MAX_LINES_PER_AXIS` lines and the
//!   category is skipped.
//! - `debug`: segment totals per layout pass, primitive totals per built frame,
//!   and profile edits being applied or reset.
//! - `trace`: per-category line counts, categories skipped for lack of a
//!   usable spacing, and tic label counts.

/// Filter used when `RUST_LOG` is unset: only layout problems are reported.
pub const DEFAULT_LOG_FILTER: &str = "cartesian_plane=warn";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
