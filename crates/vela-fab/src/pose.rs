//! The named steady configurations of the button.

use crate::error::{Error, Result};
use crate::frame::FabFrame;
use crate::geometry::BoxConstraints;

/// A named steady visual configuration of the button.
///
/// Every shown pose resolves to an exact steady-state [`FabFrame`] via
/// [`steady_frame`](Self::steady_frame). `Hidden` is the exception: it has
/// no geometry at all, and the transition table defines no entries touching
/// it, so requesting it anywhere fails loudly instead of producing a
/// zero-sized box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FabPose {
    /// Not visible. No steady geometry; transitions to or from this pose
    /// are undefined.
    Hidden,
    /// Circular button showing only the icon in a tight 56 x 56 box.
    #[default]
    Icon,
    /// Smaller circular button showing only the icon in a 40 x 40 box.
    MiniIcon,
    /// Extended button showing only the label; width is unconstrained.
    Label,
    /// Extended button showing the icon followed by the label; width is
    /// unconstrained.
    IconAndLabel,
}

/// The four poses with defined geometry, in declaration order.
pub const SHOWN_POSES: [FabPose; 4] = [
    FabPose::Icon,
    FabPose::MiniIcon,
    FabPose::Label,
    FabPose::IconAndLabel,
];

impl FabPose {
    /// Whether this pose has steady geometry.
    #[inline]
    pub fn is_shown(self) -> bool {
        self != FabPose::Hidden
    }

    /// The steady-state output vector for this pose.
    ///
    /// Errors with [`Error::UnhandledTransition`] for `Hidden`, which has
    /// no entry in the geometry table.
    pub fn steady_frame(self) -> Result<FabFrame> {
        match self {
            FabPose::Hidden => Err(Error::unhandled_transition(self, self)),
            FabPose::Icon => Ok(FabFrame {
                icon_width_factor: 1.0,
                icon_opacity: 1.0,
                label_width_factor: 0.0,
                label_opacity: 0.0,
                icon_leading: 16.0,
                icon_trailing: 16.0,
                label_leading: 0.0,
                label_trailing: 0.0,
                constraints: BoxConstraints::new(56.0, 56.0, 56.0, 56.0),
            }),
            FabPose::MiniIcon => Ok(FabFrame {
                icon_width_factor: 1.0,
                icon_opacity: 1.0,
                label_width_factor: 0.0,
                label_opacity: 0.0,
                icon_leading: 8.0,
                icon_trailing: 8.0,
                label_leading: 0.0,
                label_trailing: 0.0,
                constraints: BoxConstraints::new(40.0, 40.0, 40.0, 40.0),
            }),
            FabPose::Label => Ok(FabFrame {
                icon_width_factor: 0.0,
                icon_opacity: 0.0,
                label_width_factor: 1.0,
                label_opacity: 1.0,
                icon_leading: 0.0,
                icon_trailing: 0.0,
                label_leading: 20.0,
                label_trailing: 20.0,
                constraints: BoxConstraints::new(48.0, f32::INFINITY, 48.0, 48.0),
            }),
            FabPose::IconAndLabel => Ok(FabFrame {
                icon_width_factor: 1.0,
                icon_opacity: 1.0,
                label_width_factor: 1.0,
                label_opacity: 1.0,
                icon_leading: 12.0,
                icon_trailing: 6.0,
                label_leading: 6.0,
                label_trailing: 20.0,
                constraints: BoxConstraints::new(48.0, f32::INFINITY, 48.0, 48.0),
            }),
        }
    }
}
