//! Logging facilities for the Vela FAB crates.
//!
//! Instrumentation goes through the `tracing` crate. The library never
//! installs a subscriber; to see logs, install one in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`span_names`] and [`targets`] match the literal target
//! strings used at call sites throughout the workspace, so hosts can filter
//! by subsystem with `tracing` directives such as
//! `vela_fab_core::ticker=trace`.

/// Span names used throughout the Vela FAB crates for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "vela_fab::signal";
    /// Frame clock advancement span.
    pub const TICKER: &str = "vela_fab::ticker";
    /// Pose transition evaluation span.
    pub const TRANSITION: &str = "vela_fab::transition";
    /// Button state machine span.
    pub const BUTTON: &str = "vela_fab::button";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "vela_fab_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "vela_fab_core::signal";
    /// Frame clock target.
    pub const TICKER: &str = "vela_fab_core::ticker";
    /// Widget crate target.
    pub const WIDGET: &str = "vela_fab";
    /// Button state machine target.
    pub const BUTTON: &str = "vela_fab::button";
    /// Pose transition target.
    pub const TRANSITION: &str = "vela_fab::transition";
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "vela_fab::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
