#![forbid(unsafe_code)]

//! Concentric-arc ("stadium") layout.
//!
//! Rows are half circles around the center of the core region, each seat
//! rotated to face it. Row `r` sits at radial distance
//! `core_radius + (item_size + line_spacing) * r + item_size / 2`; seat `i`
//! of `n` sits at `180 / (n - 1) * i` degrees along the sweep. A one-seat
//! row pins the angle to 0 instead of dividing by zero.
//!
//! Hit testing converts the pointer to polar coordinates around the same
//! center (angle from the positive x axis via dot product and `acos`,
//! distance as the Euclidean norm) and inverts both formulas with
//! round-to-nearest.

use crate::display::{RowDisplay, build_rows, refresh_rows};
use crate::sizing::{FitPlan, RowCap};
use crate::{LayoutKind, LayoutStrategy, SeatMetrics};
use seatmap_core::geometry::{deg_to_rad, rad_to_deg};
use seatmap_core::{Point, SeatGrid, SeatIndex, SeatState, Size};
use seatmap_style::{Align, SeatTheme, Surface, style_for};

/// The arc layout strategy.
#[derive(Debug, Clone, Default)]
pub struct ArcLayout {
    metrics: SeatMetrics,
    rows: Vec<Option<RowDisplay>>,
}

impl ArcLayout {
    /// Create an arc layout with the given metrics.
    #[must_use]
    pub fn new(metrics: SeatMetrics) -> Self {
        Self {
            metrics,
            rows: Vec::new(),
        }
    }

    /// Angular position of seat `col` in a row of `row_len` cells, in
    /// degrees within `[0, 180]`.
    #[must_use]
    pub fn angle_for(col: usize, row_len: usize) -> f32 {
        if row_len <= 1 {
            return 0.0;
        }
        180.0 / (row_len - 1) as f32 * col as f32
    }

    fn col_by_angle(angle: f32, row_len: usize) -> usize {
        if row_len <= 1 {
            return 0;
        }
        (angle * (row_len - 1) as f32 / 180.0).round() as usize
    }

    fn arc_center(m: &SeatMetrics) -> Point {
        Point::new(m.width / 2, m.core_height / 2)
    }

    fn distance_for(m: &SeatMetrics, row: usize) -> i32 {
        let steps = (m.item_size + m.line_spacing) * row as i32 + m.item_size / 2;
        (m.core_radius() + steps as f32) as i32
    }

    fn row_by_distance(m: &SeatMetrics, distance: f32) -> Option<i32> {
        let step = m.item_size + m.line_spacing;
        if step <= 0 {
            return None;
        }
        let offset = distance - m.core_radius() - (m.item_size / 2) as f32;
        Some((offset / step as f32).round() as i32)
    }

    fn position_for(m: &SeatMetrics, row: usize, col: usize, row_len: usize) -> (Point, f32) {
        let angle = Self::angle_for(col, row_len);
        let radian = deg_to_rad(angle);
        let distance = Self::distance_for(m, row) as f32;
        let center = Self::arc_center(m);
        let position = Point::new(
            center.x + (radian.cos() * distance) as i32 - m.item_size / 2,
            center.y + (radian.sin() * distance) as i32 - m.item_size,
        );
        (position, angle)
    }
}

impl LayoutStrategy for ArcLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Arc
    }

    fn metrics(&self) -> &SeatMetrics {
        &self.metrics
    }

    fn set_metrics(&mut self, metrics: SeatMetrics) {
        self.metrics = metrics;
    }

    fn required_width(&self, grid: &SeatGrid) -> i32 {
        if grid.row_count() == 0 {
            return 0;
        }
        let m = &self.metrics;
        (Self::distance_for(m, grid.row_count() - 1) + m.item_size) * 2
    }

    fn required_height(&self, grid: &SeatGrid) -> i32 {
        if grid.row_count() == 0 {
            return 0;
        }
        let m = &self.metrics;
        Self::distance_for(m, grid.row_count() - 1) + m.core_height / 2
    }

    fn prepare(&mut self, grid: &SeatGrid) {
        let m = self.metrics;
        let rows = build_rows(
            grid,
            m.item_size,
            |row| Self::distance_for(&m, row),
            |row, col, len| Self::position_for(&m, row, col, len),
        );
        self.rows = rows;
    }

    fn refresh(&mut self, _grid: &SeatGrid) {
        let m = self.metrics;
        refresh_rows(
            &mut self.rows,
            m.item_size,
            |row| Self::distance_for(&m, row),
            |row, col, len| Self::position_for(&m, row, col, len),
        );
    }

    fn resolve(&self, grid: &SeatGrid, point: Point) -> Option<SeatIndex> {
        let m = &self.metrics;
        let center = Self::arc_center(m);
        // Flip y so the angle opens over the seating half-plane.
        let rel = Point::new(point.x - center.x, -(point.y - center.y));
        let angle = rad_to_deg(rel.axis_angle());
        let distance = point.distance_to(center).trunc();

        let row = Self::row_by_distance(m, distance)?;
        if row < 0 || row as usize >= grid.row_count() {
            return None;
        }
        let row = row as usize;
        let row_len = grid.row(row)?.len();
        if row_len == 0 {
            return None;
        }
        let col = Self::col_by_angle(angle, row_len);
        if col >= row_len {
            return None;
        }
        Some(SeatIndex::new(row, col))
    }

    fn render(&self, surface: &mut dyn Surface, theme: &SeatTheme) {
        for row in self.rows.iter().flatten() {
            for place in row.places().iter().flatten() {
                let Some(style) = style_for(theme, place.state()) else {
                    continue;
                };
                surface.draw_seat(place.rect(), place.rotation(), style);
                if place.state() == SeatState::Selected {
                    // Counter-rotate so the number reads along the row's
                    // tangent instead of pointing at the stage.
                    surface.draw_label(
                        &place.seat_number().to_string(),
                        place.rect(),
                        Align::Center,
                        place.rotation() - 90.0,
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
        let core_radius = m.core_radius() as i32;
        FitPlan {
            width_budget: viewport.width / 2 - core_radius,
            height_budget: viewport.height - core_radius - m.core_height / 2,
            unit_count: grid.row_count() as i32,
            weighted_units: false,
            // The innermost semicircle bounds how wide a row can get.
            row_cap: Some(RowCap {
                circumference: std::f32::consts::PI * m.core_radius(),
                seat_count: grid.max_row_len() as i32,
            }),
        }
    }
}
