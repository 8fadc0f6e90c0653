//! Animation primitives for the floating action button.
//!
//! This module provides the easing curves and the scalar tween used by the
//! pose-transition table and the elevation animator.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use vela_fab::animation::{Easing, Tween, ease};
//!
//! let progress = 0.5;
//! let eased = ease(Easing::FastOutSlowIn, progress);
//! assert!(eased > 0.7);
//!
//! let width = Tween::new(56.0, 48.0);
//! assert_eq!(width.evaluate(Easing::FastOutSlowIn, 0.0), 56.0);
//! ```

mod easing;
mod tween;

pub use easing::{Easing, ease, lerp_eased};
pub use tween::Tween;
