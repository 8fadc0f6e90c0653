//! Core primitives for the Vela floating action button.
//!
//! This crate provides the foundations the widget crate builds on:
//!
//! - **Signal/Slot System**: Type-safe notification for widget events
//! - **Frame Clocks**: Host-driven progress clocks for animations
//! - **Logging**: `tracing` target conventions and profiling helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use vela_fab_core::Signal;
//!
//! // Create a signal that notifies when a tap lands
//! let pressed = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = pressed.connect(|_| {
//!     println!("pressed!");
//! });
//!
//! // Emit the signal
//! pressed.emit(());
//!
//! // Disconnect when done
//! pressed.disconnect(conn_id);
//! ```
//!
//! # Frame Clock Example
//!
//! ```
//! use std::time::Duration;
//! use vela_fab_core::TickerHandle;
//!
//! let ticker = TickerHandle::new();
//! let clock = ticker.register(Duration::from_millis(250));
//!
//! // Kick off a forward run and drive it frame by frame.
//! ticker.restart(clock).unwrap();
//! while ticker.is_running(clock) {
//!     ticker.advance(Duration::from_millis(16));
//! }
//! assert_eq!(ticker.progress(clock), 1.0);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod ticker;

pub use error::{Result, TickerError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use ticker::{ClockId, FrameTicker, TickerHandle};
