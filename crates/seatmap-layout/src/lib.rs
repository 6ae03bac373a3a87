#![forbid(unsafe_code)]

//! Layout solvers and hit testing for seat maps.
//!
//! This crate turns a [`SeatGrid`] into screen geometry and back:
//!
//! - [`SeatMetrics`] - the geometry configuration record
//! - [`LayoutStrategy`] - the contract both layouts implement
//! - [`RectLayout`] - orthogonal rows below the stage
//! - [`ArcLayout`] - concentric half-circle rows around the stage
//! - [`SizingResolver`] - fits item size and spacing to a viewport
//! - [`display`] - the per-row/per-seat display tree
//!
//! The two layouts are independent implementations of one trait; each owns
//! its own metrics record instead of sharing a mutable config object, so a
//! strategy swap can never leak geometry between variants.
//!
//! # Example
//!
//! ```
//! use seatmap_core::{SeatGrid, SeatIndex, SeatState::Free};
//! use seatmap_layout::{LayoutStrategy, RectLayout, SeatMetrics};
//!
//! let grid = SeatGrid::from_rows(vec![vec![Free, Free]]);
//! let mut layout = RectLayout::new(SeatMetrics::default());
//! layout.prepare(&grid);
//!
//! let rect = layout.rows()[0].as_ref().unwrap().place(0).unwrap().rect();
//! assert_eq!(layout.resolve(&grid, rect.center()), Some(SeatIndex::new(0, 0)));
//! ```

pub mod arc;
pub mod display;
pub mod rect;
pub mod sizing;

pub use arc::ArcLayout;
pub use display::{PlaceDisplay, RowDisplay};
pub use rect::RectLayout;
pub use sizing::{FitPlan, RowCap, SizingResolver};

use seatmap_core::{Point, SeatGrid, SeatIndex, Size};
use seatmap_style::{SeatTheme, Surface};
use serde::{Deserialize, Serialize};

/// Default seat sprite side in pixels.
pub const DEFAULT_ITEM_SIZE: i32 = 200;
/// Default spacing between seats in a row.
pub const DEFAULT_ITEM_SPACING: i32 = 10;
/// Default spacing between rows.
pub const DEFAULT_LINE_SPACING: i32 = 10;
/// Default padding from the widget edge to the first seat.
pub const DEFAULT_SIDE_PADDING: i32 = 100;
/// Default inset of the row-number labels from the widget edge.
pub const DEFAULT_LABEL_PADDING: i32 = 20;
/// Default stage height.
pub const DEFAULT_CORE_HEIGHT: i32 = 100;

/// Which layout geometry backs a seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Orthogonal rows below the stage.
    #[default]
    Rect,
    /// Concentric half-circle rows around the stage.
    Arc,
}

/// Geometry configuration for a layout.
///
/// All values are pixels. `width`/`height` hold the fitted viewport and are
/// written by the measurement pass; the rest are host configuration. A
/// `core_width` of zero means "match the viewport width" when the stage is
/// drawn, and a zero-size core for the arc radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMetrics {
    /// Fitted viewport width.
    pub width: i32,
    /// Fitted viewport height.
    pub height: i32,
    /// Seat sprite side; seats are square.
    pub item_size: i32,
    /// Spacing between adjacent seats in a row.
    pub item_spacing: i32,
    /// Spacing between adjacent rows.
    pub line_spacing: i32,
    /// Padding from the widget edge to the first seat column.
    pub side_padding: i32,
    /// Inset of the row-number labels from the widget edge.
    pub label_padding: i32,
    /// Stage width; zero means the full viewport width.
    pub core_width: i32,
    /// Stage height.
    pub core_height: i32,
}

impl Default for SeatMetrics {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            item_size: DEFAULT_ITEM_SIZE,
            item_spacing: DEFAULT_ITEM_SPACING,
            line_spacing: DEFAULT_LINE_SPACING,
            side_padding: DEFAULT_SIDE_PADDING,
            label_padding: DEFAULT_LABEL_PADDING,
            core_width: 0,
            core_height: DEFAULT_CORE_HEIGHT,
        }
    }
}

impl SeatMetrics {
    /// Radius of the circle circumscribing the core region.
    ///
    /// This is where the innermost arc row sits.
    #[must_use]
    pub fn core_radius(&self) -> f32 {
        (self.core_width as f32 / 2.0).hypot(self.core_height as f32 / 2.0)
    }
}

/// The contract every layout geometry implements.
///
/// A strategy owns its [`SeatMetrics`] and the display tree built from the
/// last [`prepare`](Self::prepare). The grid itself stays with the caller
/// and is passed in wherever shape or state is needed, so a strategy can
/// never hold a stale copy of it.
///
/// After [`set_metrics`](Self::set_metrics) the stored positions are stale
/// until the next [`refresh`](Self::refresh) or [`prepare`](Self::prepare);
/// callers mutate and rebuild in one step, never observe the gap.
pub trait LayoutStrategy {
    /// Which geometry this is.
    fn kind(&self) -> LayoutKind;

    /// The current geometry configuration.
    fn metrics(&self) -> &SeatMetrics;

    /// Replace the geometry configuration, invalidating stored positions.
    fn set_metrics(&mut self, metrics: SeatMetrics);

    /// Minimal bounding width for the grid at the current metrics.
    fn required_width(&self, grid: &SeatGrid) -> i32;

    /// Minimal bounding height for the grid at the current metrics.
    fn required_height(&self, grid: &SeatGrid) -> i32;

    /// Both required dimensions at once.
    fn required_size(&self, grid: &SeatGrid) -> Size {
        Size::new(self.required_width(grid), self.required_height(grid))
    }

    /// Rebuild the display tree from scratch: dense numbering, positions,
    /// bounds. Called when the grid is replaced.
    fn prepare(&mut self, grid: &SeatGrid);

    /// Recompute positions and offsets in place after a geometry-only
    /// change. Produces the same tree as a fresh [`prepare`](Self::prepare)
    /// on the same inputs, without reallocating it.
    fn refresh(&mut self, grid: &SeatGrid);

    /// Map a screen point back to a grid index, or `None` when the point
    /// hits no seat cell.
    fn resolve(&self, grid: &SeatGrid, point: Point) -> Option<SeatIndex>;

    /// Walk the display tree in row order and delegate every draw to the
    /// surface: seats in their per-state style, selected-seat numbers,
    /// and whatever row chrome the geometry carries.
    fn render(&self, surface: &mut dyn Surface, theme: &SeatTheme);

    /// The display tree, one entry per grid row; `None` for rows with no
    /// seats.
    fn rows(&self) -> &[Option<RowDisplay>];

    /// Mutable display tree, for the click path.
    fn rows_mut(&mut self) -> &mut [Option<RowDisplay>];

    /// Budget numbers for the sizing resolver (axis budgets, unit count,
    /// and the arc circumference cap where one applies).
    fn fit_plan(&self, grid: &SeatGrid, viewport: Size) -> FitPlan;
}
