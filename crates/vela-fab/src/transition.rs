//! Interpolation between two steady poses.
//!
//! A [`PoseTransition`] is built once per pose change and then sampled as a
//! pure function of progress. Construction resolves both endpoint poses to
//! their steady frames and precomputes one [`Tween`] per animated quantity;
//! sampling never allocates and never fails.
//!
//! Each visibility group (icon, label) is driven by a single tween shared
//! between its width factor and its opacity, so the two can never drift
//! apart no matter what easing is applied.

use crate::animation::{Easing, Tween};
use crate::error::{Error, Result};
use crate::frame::FabFrame;
use crate::geometry::BoxConstraints;
use crate::pose::FabPose;

/// A precomputed interpolation between the steady frames of two poses.
///
/// Built by [`PoseTransition::new`], which rejects any pair involving
/// [`FabPose::Hidden`]. Once built, [`frame`](Self::frame) maps a progress
/// value to a complete [`FabFrame`] and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTransition {
    from: FabPose,
    to: FabPose,
    // One visibility tween per group drives both the width factor and the
    // opacity of that group.
    icon_visibility: Tween,
    label_visibility: Tween,
    icon_leading: Tween,
    icon_trailing: Tween,
    label_leading: Tween,
    label_trailing: Tween,
    min_width: Tween,
    max_width: Tween,
    min_height: Tween,
    max_height: Tween,
}

impl PoseTransition {
    /// Builds the transition from `from` to `to`.
    ///
    /// Both poses must have steady geometry; any pair involving
    /// [`FabPose::Hidden`] returns [`Error::UnhandledTransition`] naming
    /// the offending pair. `from == to` is valid and yields an identity
    /// transition whose tweens are all constant.
    pub fn new(from: FabPose, to: FabPose) -> Result<Self> {
        if !from.is_shown() || !to.is_shown() {
            return Err(Error::unhandled_transition(from, to));
        }
        // is_shown above is the only gate; steady_frame only fails for
        // Hidden, so these cannot error here.
        let begin = from.steady_frame()?;
        let end = to.steady_frame()?;

        tracing::trace!(
            target: "vela_fab::transition",
            ?from,
            ?to,
            "pose transition built"
        );

        Ok(Self {
            from,
            to,
            icon_visibility: Tween::new(begin.icon_width_factor, end.icon_width_factor),
            label_visibility: Tween::new(begin.label_width_factor, end.label_width_factor),
            icon_leading: Tween::new(begin.icon_leading, end.icon_leading),
            icon_trailing: Tween::new(begin.icon_trailing, end.icon_trailing),
            label_leading: Tween::new(begin.label_leading, end.label_leading),
            label_trailing: Tween::new(begin.label_trailing, end.label_trailing),
            min_width: Tween::new(begin.constraints.min_width, end.constraints.min_width),
            max_width: Tween::new(begin.constraints.max_width, end.constraints.max_width),
            min_height: Tween::new(begin.constraints.min_height, end.constraints.min_height),
            max_height: Tween::new(begin.constraints.max_height, end.constraints.max_height),
        })
    }

    /// The pose this transition starts from.
    #[inline]
    pub fn from_pose(&self) -> FabPose {
        self.from
    }

    /// The pose this transition ends at.
    #[inline]
    pub fn to_pose(&self) -> FabPose {
        self.to
    }

    /// Whether both endpoints are the same pose.
    ///
    /// An identity transition renders the steady frame of its pose at every
    /// progress value.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Samples the transition at `progress` with `easing`.
    ///
    /// `progress <= 0.0` yields exactly the steady frame of the start pose
    /// and `progress >= 1.0` exactly that of the end pose; quantities equal
    /// at both endpoints hold their value at every progress. Unbounded
    /// constraint edges stay infinite throughout rather than passing
    /// through finite intermediate values.
    pub fn frame(&self, progress: f32, easing: Easing) -> FabFrame {
        let icon_visibility = self.icon_visibility.evaluate(easing, progress);
        let label_visibility = self.label_visibility.evaluate(easing, progress);
        FabFrame {
            icon_width_factor: icon_visibility,
            icon_opacity: icon_visibility,
            label_width_factor: label_visibility,
            label_opacity: label_visibility,
            icon_leading: self.icon_leading.evaluate(easing, progress),
            icon_trailing: self.icon_trailing.evaluate(easing, progress),
            label_leading: self.label_leading.evaluate(easing, progress),
            label_trailing: self.label_trailing.evaluate(easing, progress),
            constraints: BoxConstraints::new(
                self.min_width.evaluate(easing, progress),
                self.max_width.evaluate(easing, progress),
                self.min_height.evaluate(easing, progress),
                self.max_height.evaluate(easing, progress),
            ),
        }
    }
}

/// Builds the transition and samples it in one call.
///
/// Convenience for callers that do not retain the transition across frames.
pub fn transition_frame(
    from: FabPose,
    to: FabPose,
    progress: f32,
    easing: Easing,
) -> Result<FabFrame> {
    Ok(PoseTransition::new(from, to)?.frame(progress, easing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::SHOWN_POSES;

    #[test]
    fn test_hidden_endpoints_are_rejected() {
        for shown in SHOWN_POSES {
            assert_eq!(
                PoseTransition::new(FabPose::Hidden, shown),
                Err(Error::unhandled_transition(FabPose::Hidden, shown))
            );
            assert_eq!(
                PoseTransition::new(shown, FabPose::Hidden),
                Err(Error::unhandled_transition(shown, FabPose::Hidden))
            );
        }
        assert!(PoseTransition::new(FabPose::Hidden, FabPose::Hidden).is_err());
    }

    #[test]
    fn test_endpoints_reproduce_steady_frames_exactly() {
        for from in SHOWN_POSES {
            for to in SHOWN_POSES {
                let transition = PoseTransition::new(from, to).unwrap();
                assert_eq!(
                    transition.frame(0.0, Easing::FastOutSlowIn),
                    from.steady_frame().unwrap(),
                    "{from:?} -> {to:?} at 0"
                );
                assert_eq!(
                    transition.frame(1.0, Easing::FastOutSlowIn),
                    to.steady_frame().unwrap(),
                    "{from:?} -> {to:?} at 1"
                );
            }
        }
    }

    #[test]
    fn test_progress_is_clamped_outside_unit_interval() {
        let transition = PoseTransition::new(FabPose::Icon, FabPose::Label).unwrap();
        assert_eq!(
            transition.frame(-0.5, Easing::FastOutSlowIn),
            FabPose::Icon.steady_frame().unwrap()
        );
        assert_eq!(
            transition.frame(1.5, Easing::FastOutSlowIn),
            FabPose::Label.steady_frame().unwrap()
        );
    }

    #[test]
    fn test_identity_transition_holds_steady_frame_at_every_progress() {
        for pose in SHOWN_POSES {
            let transition = PoseTransition::new(pose, pose).unwrap();
            assert!(transition.is_identity());
            let steady = pose.steady_frame().unwrap();
            for step in 0..=10 {
                let progress = step as f32 / 10.0;
                assert_eq!(transition.frame(progress, Easing::FastOutSlowIn), steady);
            }
        }
    }

    #[test]
    fn test_visibility_factors_stay_locked_mid_flight() {
        for from in SHOWN_POSES {
            for to in SHOWN_POSES {
                let transition = PoseTransition::new(from, to).unwrap();
                for step in 0..=20 {
                    let frame = transition.frame(step as f32 / 20.0, Easing::FastOutSlowIn);
                    assert_eq!(frame.icon_width_factor, frame.icon_opacity);
                    assert_eq!(frame.label_width_factor, frame.label_opacity);
                }
            }
        }
    }

    #[test]
    fn test_quantities_equal_at_both_ends_never_move() {
        // Label and IconAndLabel share every constraint edge, so the
        // constraints must hold perfectly still while paddings animate.
        let transition = PoseTransition::new(FabPose::Label, FabPose::IconAndLabel).unwrap();
        let steady = FabPose::Label.steady_frame().unwrap();
        for step in 0..=10 {
            let frame = transition.frame(step as f32 / 10.0, Easing::FastOutSlowIn);
            assert_eq!(frame.constraints, steady.constraints);
        }
    }

    #[test]
    fn test_unbounded_width_stays_infinite_mid_flight() {
        let transition = PoseTransition::new(FabPose::Icon, FabPose::IconAndLabel).unwrap();
        let frame = transition.frame(0.5, Easing::FastOutSlowIn);
        assert_eq!(frame.constraints.max_width, f32::INFINITY);
        assert!(!frame.constraints.min_width.is_nan());
    }

    #[test]
    fn test_icon_to_label_midpoint_height() {
        // Icon is 56 tall, Label 48; the standard curve sits at ~0.7756 at
        // the midpoint, giving 56 + (48 - 56) * 0.7756 = ~49.7955.
        let transition = PoseTransition::new(FabPose::Icon, FabPose::Label).unwrap();
        let frame = transition.frame(0.5, Easing::FastOutSlowIn);
        assert!((frame.constraints.min_height - 49.7955).abs() < 1e-3);
        assert_eq!(frame.constraints.min_height, frame.constraints.max_height);
    }

    #[test]
    fn test_linear_midpoint_between_icon_sizes() {
        let transition = PoseTransition::new(FabPose::Icon, FabPose::MiniIcon).unwrap();
        let frame = transition.frame(0.5, Easing::Linear);
        assert_eq!(frame.constraints.min_width, 48.0);
        assert_eq!(frame.icon_leading, 12.0);
        assert_eq!(frame.icon_trailing, 12.0);
    }

    #[test]
    fn test_transition_frame_convenience() {
        let frame = transition_frame(FabPose::Icon, FabPose::Icon, 0.3, Easing::Linear).unwrap();
        assert_eq!(frame, FabPose::Icon.steady_frame().unwrap());
        assert!(transition_frame(FabPose::Hidden, FabPose::Icon, 0.0, Easing::Linear).is_err());
    }

    #[test]
    fn test_accessors() {
        let transition = PoseTransition::new(FabPose::MiniIcon, FabPose::Label).unwrap();
        assert_eq!(transition.from_pose(), FabPose::MiniIcon);
        assert_eq!(transition.to_pose(), FabPose::Label);
        assert!(!transition.is_identity());
    }
}
