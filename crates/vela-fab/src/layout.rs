//! Assembles a sampled frame into positioned boxes.
//!
//! The button row is two horizontally concatenated groups, icon then label.
//! Each group is a padded slot that collapses to a fraction of its natural
//! width while its content keeps natural size, overflowing the slot when it
//! narrows. The caller clips and blends; this module only does arithmetic.

use crate::frame::FabFrame;
use crate::geometry::{Rect, Size};

/// One collapsing group of the button row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLayout {
    /// The slot the group occupies in the outer box. Its width is the
    /// natural padded width times the group's width factor.
    pub bounds: Rect,
    /// Where to draw the content, always at natural size. Overflows
    /// `bounds` horizontally whenever the slot has collapsed below the
    /// content width.
    pub content: Rect,
    /// Blend opacity for everything inside `bounds`.
    pub opacity: f32,
}

/// The positioned output for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabLayout {
    /// Outer box size after applying the frame's constraints.
    pub size: Size,
    pub icon: GroupLayout,
    pub label: GroupLayout,
}

impl FabLayout {
    /// Positions `icon_size` and `label_size` content under `frame`.
    ///
    /// An absent content entry contributes a zero-width group; its paddings
    /// do not apply. The two groups are concatenated and the strip centered
    /// inside the outer box, which is the constrained strip size. Height is
    /// the tallest content present.
    pub fn compute(frame: &FabFrame, icon_size: Option<Size>, label_size: Option<Size>) -> Self {
        let icon_natural = natural_width(icon_size, frame.icon_leading, frame.icon_trailing);
        let label_natural = natural_width(label_size, frame.label_leading, frame.label_trailing);

        let icon_width = icon_natural * frame.icon_width_factor;
        let label_width = label_natural * frame.label_width_factor;
        let strip_width = icon_width + label_width;
        let content_height = icon_size
            .map_or(0.0, |s| s.height)
            .max(label_size.map_or(0.0, |s| s.height));

        let size = frame
            .constraints
            .constrain(Size::new(strip_width, content_height));

        // Constraints may stretch the box beyond the strip; keep the strip
        // centered in that case.
        let strip_left = (size.width - strip_width) / 2.0;
        let icon_bounds = Rect::new(strip_left, 0.0, icon_width, size.height);
        let label_bounds = Rect::new(strip_left + icon_width, 0.0, label_width, size.height);

        Self {
            size,
            icon: GroupLayout {
                bounds: icon_bounds,
                content: place_content(
                    icon_bounds,
                    icon_size,
                    icon_natural,
                    frame.icon_leading,
                    size.height,
                ),
                opacity: frame.icon_opacity,
            },
            label: GroupLayout {
                bounds: label_bounds,
                content: place_content(
                    label_bounds,
                    label_size,
                    label_natural,
                    frame.label_leading,
                    size.height,
                ),
                opacity: frame.label_opacity,
            },
        }
    }

    /// Whether the groups must be drawn through real blend layers.
    ///
    /// Always true. A renderer that skips blending for fully opaque or
    /// fully transparent children makes the content pop the instant an
    /// opacity crosses 0 or 1, so the shortcut is disallowed even in
    /// steady state.
    pub fn requires_compositing(&self) -> bool {
        true
    }
}

fn natural_width(content: Option<Size>, leading: f32, trailing: f32) -> f32 {
    match content {
        Some(size) => leading + size.width + trailing,
        None => 0.0,
    }
}

/// Centers the natural padded slot in the collapsed bounds and offsets the
/// content by its leading padding within that slot.
fn place_content(
    bounds: Rect,
    content: Option<Size>,
    natural: f32,
    leading: f32,
    outer_height: f32,
) -> Rect {
    match content {
        Some(size) => {
            let slot_left = bounds.center().x - natural / 2.0;
            Rect::new(
                slot_left + leading,
                (outer_height - size.height) / 2.0,
                size.width,
                size.height,
            )
        }
        None => Rect::new(bounds.left(), bounds.top(), 0.0, 0.0),
    }
}
