//! The resolved per-frame output of the pose-transition table.

use crate::geometry::BoxConstraints;

/// Every visual parameter the button needs for one rendered frame.
///
/// A `FabFrame` is produced either directly from a pose's steady state or
/// by evaluating a [`PoseTransition`](crate::transition::PoseTransition) at
/// some progress. Frames compare exactly: outputs whose steady values agree
/// across a transition are held constant rather than re-interpolated, so
/// `==` against a steady frame is reliable at the endpoints.
///
/// The icon and label "visibility" pairs are coupled by construction: the
/// width factor and the opacity of a group always carry the same value,
/// because both are driven by one shared tween. A half-collapsed group is
/// exactly half-faded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabFrame {
    /// Horizontal collapse factor of the icon group, 0.0 (gone) to 1.0.
    pub icon_width_factor: f32,
    /// Opacity of the icon group, always equal to `icon_width_factor`.
    pub icon_opacity: f32,
    /// Horizontal collapse factor of the label group.
    pub label_width_factor: f32,
    /// Opacity of the label group, always equal to `label_width_factor`.
    pub label_opacity: f32,

    /// Padding before the icon (padding A).
    pub icon_leading: f32,
    /// Padding after the icon (padding B).
    pub icon_trailing: f32,
    /// Padding before the label (padding C).
    pub label_leading: f32,
    /// Padding after the label (padding D).
    pub label_trailing: f32,

    /// The box bounds the assembled button must satisfy.
    pub constraints: BoxConstraints,
}
