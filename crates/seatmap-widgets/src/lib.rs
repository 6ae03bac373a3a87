#![forbid(unsafe_code)]

//! The interactive seat-map widget.
//!
//! [`SeatMap`] glues the layout engine to a host UI toolkit. The host
//! feeds it measurement passes and pointer events and hands the render
//! pass a [`Surface`]; the widget owns the grid, the active layout
//! strategy, and the theme, and reports seat toggles through a click
//! listener.
//!
//! The widget never claims a pointer event: [`SeatMap::handle_event`]
//! always answers `false` so the host's normal event propagation is
//! unaffected.

pub mod measure;
pub mod seat_map;

pub use measure::{MeasureMode, MeasureSpec};
pub use seat_map::SeatMap;
pub use seatmap_style::{Align, Surface};
