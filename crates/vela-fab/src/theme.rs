//! Resolved color roles for the button.
//!
//! Theme resolution happens in the host; the button only sees the two
//! color roles it actually paints with. Explicit background/foreground
//! overrides on the builder take precedence over these.

use crate::color::Color;

/// The color roles a floating action button consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabTheme {
    /// Fill color of the button surface.
    pub accent: Color,
    /// Text/icon color for content on the accent color.
    pub on_accent: Color,
}

impl FabTheme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            accent: Color::from_rgb8(0x62, 0x00, 0xEE),
            on_accent: Color::WHITE,
        }
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            accent: Color::from_rgb8(0xBB, 0x86, 0xFC),
            on_accent: Color::BLACK,
        }
    }
}

impl Default for FabTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(FabTheme::default(), FabTheme::light());
    }

    #[test]
    fn test_light_and_dark_differ() {
        assert_ne!(FabTheme::light().accent, FabTheme::dark().accent);
    }
}
