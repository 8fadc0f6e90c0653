//! Shadow depth animation, independent of the pose transition.

use std::time::Duration;

use vela_fab_core::{ClockId, TickerHandle};

use crate::animation::{Easing, Tween};

/// Animates a single elevation value toward a target.
///
/// The animator owns one clock on the shared ticker. It is born settled at
/// its initial value; [`retarget`](Self::retarget) captures the currently
/// rendered value as the new starting point and rewinds the clock, so a
/// target change mid-flight continues smoothly from wherever the shadow is
/// instead of snapping back to the old endpoint.
pub struct ElevationAnimator {
    ticker: TickerHandle,
    clock: ClockId,
    tween: Tween,
}

impl ElevationAnimator {
    /// Creates an animator settled at `initial`.
    pub fn new(ticker: TickerHandle, duration: Duration, initial: f32) -> Self {
        let clock = ticker.register(duration);
        Self {
            ticker,
            clock,
            tween: Tween::constant(initial),
        }
    }

    /// The value the animator is heading toward (or resting at).
    #[inline]
    pub fn target(&self) -> f32 {
        self.tween.end
    }

    /// The value to draw this frame, sampled with `easing`.
    pub fn rendered(&self, easing: Easing) -> f32 {
        self.tween.evaluate(easing, self.ticker.progress(self.clock))
    }

    /// Whether the animator has reached its target.
    pub fn is_settled(&self) -> bool {
        !self.ticker.is_running(self.clock)
    }

    /// Starts animating toward `target` from the value currently rendered
    /// with `easing`.
    ///
    /// Retargeting to the value already being headed toward is a no-op, so
    /// an in-flight animation is never rewound by a repeated set.
    pub fn retarget(&mut self, target: f32, easing: Easing) {
        if target == self.tween.end {
            return;
        }
        let rendered = self.rendered(easing);
        tracing::trace!(
            target: "vela_fab::elevation",
            from = rendered,
            to = target,
            "elevation retargeted"
        );
        self.tween = Tween::new(rendered, target);
        // The clock is registered in new and released only on drop, so it
        // is always valid here.
        let _ = self.ticker.restart(self.clock);
    }
}

impl Drop for ElevationAnimator {
    fn drop(&mut self) {
        let _ = self.ticker.release(self.clock);
    }
}
