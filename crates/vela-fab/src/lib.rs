//! An animated floating action button.
//!
//! The button moves between named poses (icon, mini icon, label, icon and
//! label) by interpolating every visual parameter of the two layouts, and
//! raises its shadow while touched. This crate is the interpolation engine
//! and state machine only; rendering, gesture recognition, and text
//! measurement belong to the embedding application, which drives the
//! animation through a shared frame ticker.
//!
//! # Architecture
//!
//! - [`FabPose`]: the named steady configurations and their geometry
//! - [`PoseTransition`]: a pure map from progress to an in-between frame
//! - [`ElevationAnimator`]: shadow depth, animated independently of pose
//! - [`FloatingActionButton`]: the state machine tying it all together
//! - [`FabLayout`]: positioned boxes ready to paint
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vela_fab::{FabIcon, FabLabel, FabPose, FloatingActionButton, Size};
//! use vela_fab_core::TickerHandle;
//!
//! let ticker = TickerHandle::new();
//! let mut fab = FloatingActionButton::builder()
//!     .icon(FabIcon::default())
//!     .label(FabLabel::new("Compose", Size::new(64.0, 20.0)))
//!     .pose(FabPose::Icon)
//!     .build(&ticker)
//!     .unwrap();
//!
//! // Expand to the full pill shape, driven one frame at a time.
//! fab.set_pose(FabPose::IconAndLabel).unwrap();
//! while fab.is_animating() {
//!     ticker.advance(Duration::from_millis(16));
//!     let layout = fab.layout();
//!     // ... paint layout.icon / layout.label ...
//!     # let _ = layout;
//! }
//! assert_eq!(fab.pose(), FabPose::IconAndLabel);
//! ```

pub mod animation;
pub mod button;
pub mod color;
pub mod elevation;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod pose;
pub mod theme;
pub mod transition;

pub use animation::{ease, lerp_eased, Easing, Tween};
pub use button::{
    FabButtonBuilder, FabIcon, FabLabel, FloatingActionButton, DEFAULT_ELEVATION,
    DEFAULT_RAISED_ELEVATION, ELEVATION_TRANSITION_DURATION, POSE_TRANSITION_DURATION,
};
pub use color::Color;
pub use elevation::ElevationAnimator;
pub use error::{Error, Result};
pub use frame::FabFrame;
pub use geometry::{BoxConstraints, Point, Rect, Size};
pub use layout::{FabLayout, GroupLayout};
pub use pose::{FabPose, SHOWN_POSES};
pub use theme::FabTheme;
pub use transition::{transition_frame, PoseTransition};
