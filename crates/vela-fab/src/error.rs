//! Error types for the floating action button.

use crate::pose::FabPose;

/// Result type alias for FAB operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The button was configured with neither an icon nor a label.
    #[error("one of icon and label must be non-null")]
    MissingContent,

    /// The pose-transition table has no entry for this pair of poses.
    ///
    /// `Hidden` has no geometry, so any transition touching it is
    /// undefined. The error is surfaced synchronously at the call that
    /// requested the pair; it never reaches per-frame evaluation.
    #[error("no transition defined between pose {from:?} and pose {to:?}")]
    UnhandledTransition { from: FabPose, to: FabPose },
}

impl Error {
    /// Create an unhandled-transition error.
    pub fn unhandled_transition(from: FabPose, to: FabPose) -> Self {
        Self::UnhandledTransition { from, to }
    }
}
