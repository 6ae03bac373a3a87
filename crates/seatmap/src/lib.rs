#![forbid(unsafe_code)]

//! Seatmap public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use seatmap::prelude::*;
//! use seatmap::SeatState::{Booked, Free};
//!
//! let mut widget = SeatMap::new(LayoutKind::Rect);
//! widget.update_map(SeatGrid::from_rows(vec![
//!     vec![Free, Free, Booked],
//!     vec![Free, Free, Free],
//! ]));
//! widget.set_click_listener(|state, row, seat| {
//!     println!("row {row} seat {seat} is now {state:?}");
//! });
//!
//! let size = widget.measure(MeasureSpec::at_most(1280), MeasureSpec::at_most(720));
//! assert!(size.width > 0 && size.height > 0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use seatmap_core::event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use seatmap_core::geometry::{Point, Rect, Size};
pub use seatmap_core::grid::{SeatGrid, SeatIndex};
pub use seatmap_core::state::SeatState;

// --- Layout re-exports -----------------------------------------------------

pub use seatmap_layout::{
    ArcLayout, LayoutKind, LayoutStrategy, PlaceDisplay, RectLayout, RowDisplay, SeatMetrics,
    SizingResolver,
};

// --- Style re-exports ------------------------------------------------------

pub use seatmap_style::{LabelStyle, Rgb, SeatTheme, SeatThemeBuilder, Style};

// --- Widget re-exports -----------------------------------------------------

pub use seatmap_widgets::{Align, MeasureMode, MeasureSpec, SeatMap, Surface};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        LayoutKind, MeasureSpec, Point, PointerEvent, Rect, SeatGrid, SeatMap, SeatMetrics,
        SeatState, SeatTheme, Size, Surface,
    };

    pub use crate::{core, layout, style, widgets};
}

pub use seatmap_core as core;
pub use seatmap_layout as layout;
pub use seatmap_style as style;
pub use seatmap_widgets as widgets;
