#![forbid(unsafe_code)]

//! Per-state theme with a builder.
//!
//! One style slot per seat state plus the stage region and the two text
//! runs (selected-seat numbers, row-margin numbers). Label sizes here are
//! starting values; the widget rescales them against the fitted item size.

use crate::color::Rgb;
use crate::{LabelStyle, Style};
use serde::{Deserialize, Serialize};

/// Default selected-seat number size in pixels.
pub const DEFAULT_SELECTED_TEXT_SIZE: i32 = 40;
/// Default row-margin number size in pixels.
pub const DEFAULT_ROW_TEXT_SIZE: i32 = 20;

/// Styles for every visual slot of a seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatTheme {
    /// Free seats.
    pub free: Style,
    /// Seats booked by someone else.
    pub booked: Style,
    /// Seats picked by the user.
    pub selected: Style,
    /// The stage/core region.
    pub stage: Style,
    /// Seat-number text on selected seats.
    pub selected_text: LabelStyle,
    /// Row-number text at the row margins.
    pub row_label: LabelStyle,
}

impl Default for SeatTheme {
    fn default() -> Self {
        Self {
            free: Style::tinted(Rgb::GRAY),
            booked: Style::tinted(Rgb::RED),
            selected: Style::tinted(Rgb::GREEN),
            stage: Style::tinted(Rgb::BLACK),
            selected_text: LabelStyle::new(Rgb::BLACK, DEFAULT_SELECTED_TEXT_SIZE),
            row_label: LabelStyle::new(Rgb::BLACK, DEFAULT_ROW_TEXT_SIZE),
        }
    }
}

impl SeatTheme {
    /// Start building a theme from the defaults.
    #[must_use]
    pub fn builder() -> SeatThemeBuilder {
        SeatThemeBuilder::default()
    }
}

/// Builder for [`SeatTheme`].
///
/// # Example
/// ```
/// use seatmap_style::{Rgb, SeatTheme};
///
/// let theme = SeatTheme::builder()
///     .selected(Rgb::new(0, 200, 120))
///     .row_label_color(Rgb::WHITE)
///     .build();
/// assert_eq!(theme.selected.tint, Rgb::new(0, 200, 120));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatThemeBuilder {
    theme: Option<SeatTheme>,
}

impl SeatThemeBuilder {
    fn theme_mut(&mut self) -> &mut SeatTheme {
        self.theme.get_or_insert_with(SeatTheme::default)
    }

    /// Set the free-seat tint.
    #[must_use]
    pub fn free(mut self, tint: Rgb) -> Self {
        self.theme_mut().free = Style::tinted(tint);
        self
    }

    /// Set the booked-seat tint.
    #[must_use]
    pub fn booked(mut self, tint: Rgb) -> Self {
        self.theme_mut().booked = Style::tinted(tint);
        self
    }

    /// Set the selected-seat tint.
    #[must_use]
    pub fn selected(mut self, tint: Rgb) -> Self {
        self.theme_mut().selected = Style::tinted(tint);
        self
    }

    /// Set the stage tint.
    #[must_use]
    pub fn stage(mut self, tint: Rgb) -> Self {
        self.theme_mut().stage = Style::tinted(tint);
        self
    }

    /// Set the selected-seat text color.
    #[must_use]
    pub fn selected_text_color(mut self, color: Rgb) -> Self {
        self.theme_mut().selected_text.color = color;
        self
    }

    /// Set the row-margin text color.
    #[must_use]
    pub fn row_label_color(mut self, color: Rgb) -> Self {
        self.theme_mut().row_label.color = color;
        self
    }

    /// Finish the theme.
    #[must_use]
    pub fn build(self) -> SeatTheme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ROW_TEXT_SIZE, SeatTheme};
    use crate::color::Rgb;

    #[test]
    fn default_theme_uses_stock_colors() {
        let theme = SeatTheme::default();
        assert_eq!(theme.free.tint, Rgb::GRAY);
        assert_eq!(theme.booked.tint, Rgb::RED);
        assert_eq!(theme.selected.tint, Rgb::GREEN);
        assert_eq!(theme.row_label.size, DEFAULT_ROW_TEXT_SIZE);
    }

    #[test]
    fn builder_overrides_single_slot() {
        let theme = SeatTheme::builder().booked(Rgb::new(200, 0, 50)).build();
        assert_eq!(theme.booked.tint, Rgb::new(200, 0, 50));
        // Untouched slots keep the default
        assert_eq!(theme.free.tint, Rgb::GRAY);
    }

    #[test]
    fn builder_without_overrides_is_default() {
        assert_eq!(SeatTheme::builder().build(), SeatTheme::default());
    }

    #[test]
    fn theme_serde_round_trip() {
        let theme = SeatTheme::builder().selected_text_color(Rgb::WHITE).build();
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(serde_json::from_str::<SeatTheme>(&json).unwrap(), theme);
    }
}
