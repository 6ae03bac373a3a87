#![forbid(unsafe_code)]

//! Styling for the seatmap engine.
//!
//! The engine never rasterizes anything itself; it hands a [`Surface`] a
//! [`Style`] per seat and a [`LabelStyle`] per text run and lets the host
//! map those onto its own paint objects. [`SeatTheme`] bundles one style
//! per seat state plus the label and stage styles, with a builder for
//! overriding individual slots.

pub mod color;
pub mod surface;
pub mod theme;

pub use color::Rgb;
pub use surface::{Align, Surface};
pub use theme::{SeatTheme, SeatThemeBuilder};

use seatmap_core::SeatState;
use serde::{Deserialize, Serialize};

/// Paint parameters for a seat sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Tint applied to the seat sprite.
    pub tint: Rgb,
}

impl Style {
    /// Create a style with the given tint.
    #[inline]
    pub const fn tinted(tint: Rgb) -> Self {
        Self { tint }
    }
}

/// Paint parameters for a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Text color.
    pub color: Rgb,
    /// Text size in pixels.
    pub size: i32,
}

impl LabelStyle {
    /// Create a label style.
    #[inline]
    pub const fn new(color: Rgb, size: i32) -> Self {
        Self { color, size }
    }

    /// The same style at a different size.
    #[must_use]
    pub const fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }
}

/// Look up the seat style for a state within a theme.
///
/// `Empty` cells have no visual and return `None`, mirroring the fact that
/// they are never drawn.
#[must_use]
pub fn style_for(theme: &SeatTheme, state: SeatState) -> Option<Style> {
    match state {
        SeatState::Empty => None,
        SeatState::Free => Some(theme.free),
        SeatState::Booked => Some(theme.booked),
        SeatState::Selected => Some(theme.selected),
    }
}
