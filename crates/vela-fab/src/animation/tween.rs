//! Scalar tweens with exact endpoints.
//!
//! Every animated output of the button is driven by a [`Tween`]: a begin
//! value, an end value, and an evaluation rule
//! `begin + (end - begin) * ease(t)`. Two details matter more than the
//! arithmetic:
//!
//! - **Exact endpoints.** At `t <= 0.0` the tween returns `begin` and at
//!   `t >= 1.0` it returns `end`, bitwise, with no interpolation. Steady
//!   poses must compare exactly equal to transition endpoints, so float
//!   error is not allowed to creep in at rest.
//! - **Unbounded endpoints.** Constraint maxima use `f32::INFINITY` for
//!   "unconstrained". Naive interpolation against an infinity produces
//!   NaN (`inf - inf`, `0 * inf`); instead, a tween with exactly one
//!   infinite endpoint stays at that infinity for all intermediate
//!   progress and takes the finite value only at rest.

use crate::animation::easing::{Easing, ease};

/// A begin/end pair evaluated along an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub begin: f32,
    pub end: f32,
}

impl Tween {
    /// Create a tween between two values.
    #[inline]
    pub const fn new(begin: f32, end: f32) -> Self {
        Self { begin, end }
    }

    /// A tween that holds one value.
    #[inline]
    pub const fn constant(value: f32) -> Self {
        Self {
            begin: value,
            end: value,
        }
    }

    /// Whether both endpoints are the same value.
    ///
    /// Constant tweens skip interpolation entirely, which keeps outputs
    /// whose steady values agree exactly equal across a whole transition
    /// (equal infinities included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.begin == self.end
    }

    /// Evaluate the tween at raw progress `t` under `easing`.
    pub fn evaluate(&self, easing: Easing, t: f32) -> f32 {
        if self.is_constant() {
            return self.begin;
        }
        if t <= 0.0 {
            return self.begin;
        }
        if t >= 1.0 {
            return self.end;
        }

        // A bound animating to or from "unconstrained" stays unconstrained
        // mid-flight; the finite endpoint applies only at rest.
        if self.begin.is_infinite() {
            return self.begin;
        }
        if self.end.is_infinite() {
            return self.end;
        }

        self.begin + (self.end - self.begin) * ease(easing, t)
    }
}
