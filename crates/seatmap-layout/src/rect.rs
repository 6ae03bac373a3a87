#![forbid(unsafe_code)]

//! Orthogonal grid layout.
//!
//! Rows run left to right below the stage region. Seat `(row, col)` sits at
//! `x = side_padding + col * (item_size + item_spacing)`,
//! `y = core_height + row * (item_size + line_spacing)`. Hit testing is the
//! inverse integer division, confirmed against the seat's stored bounds so
//! a press in the spacing gutter is a miss.

use crate::display::{RowDisplay, build_rows, refresh_rows};
use crate::sizing::FitPlan;
use crate::{LayoutKind, LayoutStrategy, SeatMetrics};
use seatmap_core::{Point, Rect, SeatGrid, SeatIndex, SeatState, Size};
use seatmap_style::{Align, SeatTheme, Surface, style_for};

/// The orthogonal layout strategy.
#[derive(Debug, Clone, Default)]
pub struct RectLayout {
    metrics: SeatMetrics,
    rows: Vec<Option<RowDisplay>>,
}

impl RectLayout {
    /// Create a rect layout with the given metrics.
    #[must_use]
    pub fn new(metrics: SeatMetrics) -> Self {
        Self {
            metrics,
            rows: Vec::new(),
        }
    }

    fn x_position(&self, col: usize) -> i32 {
        let m = &self.metrics;
        m.side_padding + col as i32 * (m.item_size + m.item_spacing)
    }

    fn y_position(&self, row: usize) -> i32 {
        let m = &self.metrics;
        m.core_height + row as i32 * (m.item_size + m.line_spacing)
    }

    fn draw_row_numbers(&self, surface: &mut dyn Surface, theme: &SeatTheme, row: &RowDisplay) {
        let m = &self.metrics;
        let box_width = m.side_padding - m.label_padding;
        if box_width <= 0 {
            return;
        }
        let text = row.row_number().to_string();
        let left = Rect::new(m.label_padding, row.offset(), box_width, m.item_size);
        let right = Rect::new(m.width - m.side_padding, row.offset(), box_width, m.item_size);
        surface.draw_label(&text, left, Align::Left, 0.0, theme.row_label);
        surface.draw_label(&text, right, Align::Right, 0.0, theme.row_label);
    }
}

impl LayoutStrategy for RectLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Rect
    }

    fn metrics(&self) -> &SeatMetrics {
        &self.metrics
    }

    fn set_metrics(&mut self, metrics: SeatMetrics) {
        self.metrics = metrics;
    }

    fn required_width(&self, grid: &SeatGrid) -> i32 {
        let max_len = grid.max_row_len() as i32;
        if max_len == 0 {
            return 0;
        }
        let m = &self.metrics;
        (m.item_size + m.line_spacing) * max_len - m.item_spacing
            + 2 * (m.label_padding + m.side_padding)
    }

    fn required_height(&self, grid: &SeatGrid) -> i32 {
        let rows = grid.row_count() as i32;
        if rows == 0 {
            return 0;
        }
        let m = &self.metrics;
        (m.item_size + m.item_spacing) * rows - m.line_spacing + m.core_height
    }

    fn prepare(&mut self, grid: &SeatGrid) {
        let rows = build_rows(
            grid,
            self.metrics.item_size,
            |row| self.y_position(row),
            |row, col, _len| (Point::new(self.x_position(col), self.y_position(row)), 0.0),
        );
        self.rows = rows;
    }

    fn refresh(&mut self, _grid: &SeatGrid) {
        let m = self.metrics;
        let x = move |col: usize| m.side_padding + col as i32 * (m.item_size + m.item_spacing);
        let y = move |row: usize| m.core_height + row as i32 * (m.item_size + m.line_spacing);
        refresh_rows(&mut self.rows, m.item_size, y, move |row, col, _len| {
            (Point::new(x(col), y(row)), 0.0)
        });
    }

    fn resolve(&self, grid: &SeatGrid, point: Point) -> Option<SeatIndex> {
        let m = &self.metrics;
        let step_x = m.item_size + m.item_spacing;
        let step_y = m.item_size + m.line_spacing;
        if step_x <= 0 || step_y <= 0 {
            return None;
        }
        let dx = point.x - m.side_padding;
        let dy = point.y - m.core_height;
        if dx < 0 || dy < 0 {
            return None;
        }
        let col = (dx / step_x) as usize;
        let row = (dy / step_y) as usize;
        if row >= grid.row_count() || col >= grid.row(row)?.len() {
            return None;
        }
        // A press between seats lands in the division bucket of the seat to
        // its left; the bounds check turns it back into a miss.
        let place = self.rows.get(row)?.as_ref()?.place(col)?;
        place.contains(point).then_some(SeatIndex::new(row, col))
    }

    fn render(&self, surface: &mut dyn Surface, theme: &SeatTheme) {
        for row in self.rows.iter().flatten() {
            self.draw_row_numbers(surface, theme, row);
            for place in row.places().iter().flatten() {
                let Some(style) = style_for(theme, place.state()) else {
                    continue;
                };
                surface.draw_seat(place.rect(), 0.0, style);
                if place.state() == SeatState::Selected {
                    surface.draw_label(
                        &place.seat_number().to_string(),
                        place.rect(),
                        Align::Center,
                        0.0,
                        theme.selected_text,
                    );
                }
            }
        }
    }

    fn rows(&self) -> &[Option<RowDisplay>] {
        &self.rows
    }

    fn rows_mut(&mut self) -> &mut [Option<RowDisplay>] {
        &mut self.rows
    }

    fn fit_plan(&self, grid: &SeatGrid, viewport: Size) -> FitPlan {
        let m = &self.metrics;
        FitPlan {
            width_budget: viewport.width - 2 * (m.label_padding + m.side_padding),
            height_budget: viewport.height - m.core_height,
            unit_count: grid.row_count().max(grid.max_row_len()) as i32,
            weighted_units: true,
            row_cap: None,
        }
    }
}
