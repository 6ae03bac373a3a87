#![forbid(unsafe_code)]

//! The external render adapter.
//!
//! The engine computes bounds, rotations, and styles; the host rasterizes
//! them with whatever canvas it owns.

use crate::{LabelStyle, Style};
use seatmap_core::Rect;

/// Horizontal text alignment inside a label box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align to the left edge.
    Left,
    /// Center within the box.
    Center,
    /// Align to the right edge.
    Right,
}

/// Drawing primitives the host supplies.
///
/// Rotations are degrees, clockwise, about the center of `bounds`. A
/// rotation of zero must be a plain axis-aligned draw.
pub trait Surface {
    /// Draw the stage/core region.
    fn draw_stage(&mut self, bounds: Rect, style: Style);

    /// Draw one seat sprite.
    fn draw_seat(&mut self, bounds: Rect, rotation: f32, style: Style);

    /// Draw a text run inside `bounds`.
    fn draw_label(&mut self, text: &str, bounds: Rect, align: Align, rotation: f32, style: LabelStyle);
}
