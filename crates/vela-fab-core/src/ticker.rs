//! Frame clocks for the Vela FAB animations.
//!
//! The widget animates by reading normalized progress values from
//! fixed-duration clocks. The host drives the clocks by calling
//! [`TickerHandle::advance`] once per frame with the elapsed wall time; the
//! widget reads [`TickerHandle::progress`] lazily when it renders. Clocks
//! only move forward; the single way to rewind one is an explicit
//! [`TickerHandle::restart`], which begins a fresh forward run from zero.
//!
//! A clock that reaches its duration stops and stays idle at progress 1.0
//! until it is restarted. Newly registered clocks are born idle at 1.0, so
//! an animator that has never been triggered reads as settled at its end
//! value.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vela_fab_core::TickerHandle;
//!
//! let ticker = TickerHandle::new();
//! let clock = ticker.register(Duration::from_millis(250));
//!
//! ticker.restart(clock).unwrap();
//! ticker.advance(Duration::from_millis(125));
//! assert!((ticker.progress(clock) - 0.5).abs() < 1e-6);
//!
//! ticker.advance(Duration::from_millis(500));
//! assert_eq!(ticker.progress(clock), 1.0);
//! assert!(!ticker.is_running(clock));
//!
//! ticker.release(clock).unwrap();
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TickerError};
use crate::signal::Signal;

new_key_type! {
    /// A unique identifier for a frame clock.
    pub struct ClockId;
}

/// Internal clock data.
#[derive(Debug)]
struct ClockData {
    /// Total run length of one forward pass.
    duration: Duration,
    /// Time accumulated since the last restart, clamped to `duration`.
    elapsed: Duration,
    /// Whether this clock is currently advancing.
    running: bool,
}

impl ClockData {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }
}

/// Manages a set of fixed-duration progress clocks.
///
/// This is the single-owner form; widgets and hosts share one through a
/// [`TickerHandle`].
pub struct FrameTicker {
    /// All registered clocks.
    clocks: SlotMap<ClockId, ClockData>,
}

impl FrameTicker {
    /// Create a new ticker with no clocks.
    pub fn new() -> Self {
        Self {
            clocks: SlotMap::with_key(),
        }
    }

    /// Register a clock with the given duration.
    ///
    /// The clock is born idle at progress 1.0; call [`restart`](Self::restart)
    /// to begin its first forward run.
    pub fn register(&mut self, duration: Duration) -> ClockId {
        let id = self.clocks.insert(ClockData {
            duration,
            elapsed: duration,
            running: false,
        });
        tracing::trace!(target: "vela_fab_core::ticker", ?id, ?duration, "clock registered");
        id
    }

    /// Release a clock, removing it from the ticker.
    ///
    /// Returns an error if the ID is unknown or already released.
    pub fn release(&mut self, id: ClockId) -> Result<()> {
        if self.clocks.remove(id).is_some() {
            tracing::trace!(target: "vela_fab_core::ticker", ?id, "clock released");
            Ok(())
        } else {
            Err(TickerError::InvalidClockId)
        }
    }

    /// Rewind a clock to zero and start a fresh forward run.
    ///
    /// This is the only operation that moves a clock backward.
    pub fn restart(&mut self, id: ClockId) -> Result<()> {
        let Some(clock) = self.clocks.get_mut(id) else {
            return Err(TickerError::InvalidClockId);
        };
        clock.elapsed = Duration::ZERO;
        // Zero-duration clocks are always settled.
        clock.running = !clock.duration.is_zero();
        Ok(())
    }

    /// Normalized progress of a clock in `[0.0, 1.0]`.
    ///
    /// Released or unknown clocks read 1.0 (at rest), so render paths never
    /// have to handle a missing clock.
    pub fn progress(&self, id: ClockId) -> f32 {
        match self.clocks.get(id) {
            Some(clock) => clock.progress(),
            None => 1.0,
        }
    }

    /// Whether a clock is currently advancing.
    pub fn is_running(&self, id: ClockId) -> bool {
        self.clocks.get(id).is_some_and(|clock| clock.running)
    }

    /// Advance every running clock by `dt`.
    ///
    /// Clocks clamp at their duration and stop there, idle until the next
    /// restart. Returns `true` if any clock was running when this was
    /// called (i.e. an animation frame happened).
    #[tracing::instrument(skip(self), target = "vela_fab_core::ticker", level = "trace")]
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut any_running = false;

        for (id, clock) in self.clocks.iter_mut() {
            if !clock.running {
                continue;
            }
            any_running = true;

            clock.elapsed = (clock.elapsed + dt).min(clock.duration);
            if clock.elapsed >= clock.duration {
                clock.running = false;
                tracing::trace!(target: "vela_fab_core::ticker", ?id, "clock finished");
            }
        }

        any_running
    }

    /// Total number of registered clocks.
    pub fn clock_count(&self) -> usize {
        self.clocks.len()
    }

    /// Number of clocks currently advancing.
    pub fn running_count(&self) -> usize {
        self.clocks.values().filter(|clock| clock.running).count()
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state behind a [`TickerHandle`].
struct TickerShared {
    inner: Mutex<FrameTicker>,
    /// Emitted after each `advance` call that moved at least one clock.
    ticked: Signal<()>,
}

/// A cheaply cloneable shared handle to a [`FrameTicker`].
///
/// The widget keeps one clone to read clock progress; the host keeps
/// another and calls [`advance`](Self::advance) once per frame. The
/// [`ticked`](Self::ticked) signal fires on every frame in which some clock
/// moved, which is the host's cue to re-render.
#[derive(Clone)]
pub struct TickerHandle {
    shared: Arc<TickerShared>,
}

impl TickerHandle {
    /// Create a handle owning a fresh, empty ticker.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(TickerShared {
                inner: Mutex::new(FrameTicker::new()),
                ticked: Signal::new(),
            }),
        }
    }

    /// Register a clock with the given duration. See [`FrameTicker::register`].
    pub fn register(&self, duration: Duration) -> ClockId {
        self.shared.inner.lock().register(duration)
    }

    /// Release a clock. See [`FrameTicker::release`].
    pub fn release(&self, id: ClockId) -> Result<()> {
        self.shared.inner.lock().release(id)
    }

    /// Rewind a clock to zero and start it. See [`FrameTicker::restart`].
    pub fn restart(&self, id: ClockId) -> Result<()> {
        self.shared.inner.lock().restart(id)
    }

    /// Normalized progress of a clock. See [`FrameTicker::progress`].
    pub fn progress(&self, id: ClockId) -> f32 {
        self.shared.inner.lock().progress(id)
    }

    /// Whether a clock is currently advancing.
    pub fn is_running(&self, id: ClockId) -> bool {
        self.shared.inner.lock().is_running(id)
    }

    /// Advance every running clock by `dt`, then emit
    /// [`ticked`](Self::ticked) if anything moved.
    pub fn advance(&self, dt: Duration) -> bool {
        // Emit outside the lock so slots may call back into the ticker.
        let any_running = self.shared.inner.lock().advance(dt);
        if any_running {
            self.shared.ticked.emit(());
        }
        any_running
    }

    /// The per-frame notification signal.
    pub fn ticked(&self) -> &Signal<()> {
        &self.shared.ticked
    }

    /// Total number of registered clocks.
    pub fn clock_count(&self) -> usize {
        self.shared.inner.lock().clock_count()
    }

    /// Number of clocks currently advancing.
    pub fn running_count(&self) -> usize {
        self.shared.inner.lock().running_count()
    }
}

impl Default for TickerHandle {
    fn default() -> Self {
        Self::new()
    }
}
