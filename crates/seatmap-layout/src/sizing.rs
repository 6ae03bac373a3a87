#![forbid(unsafe_code)]

//! Fits item geometry to a viewport.
//!
//! When a strategy's required size disagrees with the space the host
//! offers, the resolver rederives `item_size`/`item_spacing` from the
//! tighter axis budget and pushes the result back into the strategy. The
//! split between item and spacing uses a fixed ratio of the per-unit
//! budget; the arc layout additionally caps item size so its widest row
//! still fits the innermost semicircle.
//!
//! Resolution is idempotent: a second call with unchanged inputs computes
//! the same geometry, sees it already applied, and reports "no change", so
//! a measure pass can never oscillate.

use crate::{LayoutKind, LayoutStrategy, SeatMetrics};
use rustc_hash::FxHashMap;
use seatmap_core::{SeatGrid, Size};

/// Share of the per-unit budget that goes to the item; the rest is
/// spacing.
pub const ITEM_SPACE_RATIO: f32 = 0.8;

/// Budget numbers a strategy hands the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPlan {
    /// Raw size budget derived from the width axis.
    pub width_budget: i32,
    /// Raw size budget derived from the height axis.
    pub height_budget: i32,
    /// How many item units divide the budget.
    pub unit_count: i32,
    /// Whether spacing units weigh into the divisor (`ratio * n +
    /// (1 - ratio) * (n - 1)`) or the budget divides by `unit_count`
    /// plainly.
    pub weighted_units: bool,
    /// Circumference cap for arc layouts; `None` for rect.
    pub row_cap: Option<RowCap>,
}

/// The innermost-arc circumference constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCap {
    /// Half-circle length of the innermost arc, in pixels.
    pub circumference: f32,
    /// Seat count of the widest row.
    pub seat_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FitKey {
    kind: LayoutKind,
    viewport: Size,
    row_count: usize,
    max_row_len: usize,
    side_padding: i32,
    label_padding: i32,
    core_width: i32,
    core_height: i32,
}

impl FitKey {
    fn new(kind: LayoutKind, metrics: &SeatMetrics, grid: &SeatGrid, viewport: Size) -> Self {
        Self {
            kind,
            viewport,
            row_count: grid.row_count(),
            max_row_len: grid.max_row_len(),
            side_padding: metrics.side_padding,
            label_padding: metrics.label_padding,
            core_width: metrics.core_width,
            core_height: metrics.core_height,
        }
    }
}

/// Fits a strategy's item geometry to a viewport.
///
/// Keeps a small memo of resolved splits keyed by viewport and grid shape;
/// hosts re-measure freely (some platforms run several measure passes per
/// frame) without paying for the arithmetic twice.
#[derive(Debug)]
pub struct SizingResolver {
    ratio: f32,
    cache: FxHashMap<FitKey, (i32, i32)>,
}

impl Default for SizingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SizingResolver {
    /// Create a resolver with the stock item/spacing ratio.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ratio(ITEM_SPACE_RATIO)
    }

    /// Create a resolver with a custom item share in `(0, 1]`.
    #[must_use]
    pub fn with_ratio(ratio: f32) -> Self {
        debug_assert!(ratio > 0.0 && ratio <= 1.0);
        Self {
            ratio,
            cache: FxHashMap::default(),
        }
    }

    /// Fit the strategy's geometry to `viewport`.
    ///
    /// Returns `true` when the metrics changed (positions have been
    /// refreshed), `false` when the current geometry already matches.
    pub fn fit(
        &mut self,
        strategy: &mut dyn LayoutStrategy,
        grid: &SeatGrid,
        viewport: Size,
    ) -> bool {
        let required = strategy.required_size(grid);
        let width_differs = required.width != viewport.width;
        let height_differs = required.height != viewport.height;
        if !width_differs && !height_differs {
            return false;
        }

        let plan = strategy.fit_plan(grid, viewport);
        if plan.unit_count <= 0 {
            return false;
        }

        // The memo pins the resolution for a given viewport and grid
        // shape. After a refit the required sizes move, which would flip
        // the axis flags on the next call and re-derive a different
        // budget; the cache hit short-circuits that cascade and keeps
        // resolution idempotent.
        let key = FitKey::new(strategy.kind(), strategy.metrics(), grid, viewport);
        let (item_size, item_spacing) = match self.cache.get(&key) {
            Some(&split) => split,
            None => {
                // When both axes disagree, the tighter budget wins so one
                // recompute satisfies both instead of two passes fighting.
                let budget = match (width_differs, height_differs) {
                    (true, true) => plan.width_budget.min(plan.height_budget),
                    (_, true) => plan.height_budget,
                    _ => plan.width_budget,
                };
                let split = self.split(budget, &plan);
                self.cache.insert(key, split);
                split
            }
        };

        let mut metrics = *strategy.metrics();
        metrics.item_size = item_size;
        metrics.item_spacing = item_spacing;
        metrics.line_spacing = item_spacing;
        if metrics == *strategy.metrics() {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(item_size, item_spacing, "refit seat geometry");

        strategy.set_metrics(metrics);
        strategy.refresh(grid);
        true
    }

    fn split(&self, budget: i32, plan: &FitPlan) -> (i32, i32) {
        let budget = budget.max(0) as f32;
        let units = plan.unit_count as f32;
        let divisor = if plan.weighted_units {
            self.ratio * units + (1.0 - self.ratio) * (units - 1.0)
        } else {
            units
        };
        let raw = if divisor > 0.0 { budget / divisor } else { 0.0 };
        let mut item = (raw * self.ratio).round() as i32;
        let mut spacing = (raw * (1.0 - self.ratio)).round() as i32;

        if let Some(cap) = &plan.row_cap
            && cap.seat_count > 1
            && (item * (cap.seat_count - 1)) as f32 > cap.circumference
        {
            item = (cap.circumference / cap.seat_count as f32) as i32;
            spacing = ((item as f32 / self.ratio) * (1.0 - self.ratio)).round() as i32;
        }

        (item.max(0), spacing.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::SizingResolver;
    use crate::arc::ArcLayout;
    use crate::rect::RectLayout;
    use crate::{LayoutStrategy, SeatMetrics};
    use seatmap_core::SeatState::Free;
    use seatmap_core::{SeatGrid, Size};

    fn bare_metrics() -> SeatMetrics {
        SeatMetrics {
            side_padding: 0,
            label_padding: 0,
            core_width: 0,
            core_height: 0,
            ..SeatMetrics::default()
        }
    }

    // --- Axis selection ---

    #[test]
    fn both_axes_differ_takes_the_tighter_budget() {
        // 2x4 grid: unit count 4, weighted divisor 0.8*4 + 0.2*3 = 3.8.
        let grid = SeatGrid::from_rows(vec![vec![Free; 4], vec![Free; 4]]);
        let mut layout = RectLayout::new(bare_metrics());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();

        assert!(resolver.fit(&mut layout, &grid, Size::new(380, 1000)));
        assert_eq!(layout.metrics().item_size, 80);
        assert_eq!(layout.metrics().item_spacing, 20);
        assert_eq!(layout.metrics().line_spacing, 20);
    }

    #[test]
    fn height_only_mismatch_uses_the_height_budget() {
        let grid = SeatGrid::from_rows(vec![vec![Free; 4], vec![Free; 4]]);
        let mut layout = RectLayout::new(bare_metrics());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();

        // Width 830 equals the required width at the default metrics, so
        // only the height axis triggers.
        assert_eq!(layout.required_width(&grid), 830);
        assert!(resolver.fit(&mut layout, &grid, Size::new(830, 390)));
        assert_eq!(layout.metrics().item_size, 82);
        assert_eq!(layout.metrics().item_spacing, 21);
    }

    #[test]
    fn matching_viewport_is_a_no_op() {
        let grid = SeatGrid::from_rows(vec![vec![Free; 2], vec![Free; 2]]);
        let mut layout = RectLayout::new(SeatMetrics::default());
        layout.prepare(&grid);
        let viewport = layout.required_size(&grid);
        let before = *layout.metrics();

        let mut resolver = SizingResolver::new();
        assert!(!resolver.fit(&mut layout, &grid, viewport));
        assert_eq!(*layout.metrics(), before);
    }

    // --- Idempotence ---

    #[test]
    fn second_fit_with_same_inputs_changes_nothing() {
        let grid = SeatGrid::from_rows(vec![vec![Free; 4], vec![Free; 4]]);
        let mut layout = RectLayout::new(bare_metrics());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();
        let viewport = Size::new(380, 1000);

        assert!(resolver.fit(&mut layout, &grid, viewport));
        let fitted = *layout.metrics();
        assert!(!resolver.fit(&mut layout, &grid, viewport));
        assert_eq!(*layout.metrics(), fitted);
    }

    #[test]
    fn fit_refreshes_positions() {
        let grid = SeatGrid::from_rows(vec![vec![Free; 4], vec![Free; 4]]);
        let mut layout = RectLayout::new(bare_metrics());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();
        resolver.fit(&mut layout, &grid, Size::new(380, 1000));

        let mut fresh = RectLayout::new(*layout.metrics());
        fresh.prepare(&grid);
        assert_eq!(layout.rows(), fresh.rows());
    }

    // --- Arc clamp ---

    #[test]
    fn arc_clamps_item_to_innermost_circumference() {
        // Core 60x80: radius 50, semicircle length PI * 50 ~ 157. Ten
        // seats at the unclamped size would need far more than that.
        let metrics = SeatMetrics {
            side_padding: 0,
            label_padding: 0,
            core_width: 60,
            core_height: 80,
            ..SeatMetrics::default()
        };
        let grid = SeatGrid::from_rows(vec![vec![Free; 10]]);
        let mut layout = ArcLayout::new(metrics);
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();

        assert!(resolver.fit(&mut layout, &grid, Size::new(400, 400)));
        assert_eq!(layout.metrics().item_size, 15);
        assert_eq!(layout.metrics().item_spacing, 4);
    }

    // --- Degenerate inputs ---

    #[test]
    fn empty_grid_never_refits() {
        let grid = SeatGrid::default();
        let mut layout = RectLayout::new(SeatMetrics::default());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();
        assert!(!resolver.fit(&mut layout, &grid, Size::new(100, 100)));
    }

    #[test]
    fn zero_viewport_floors_geometry_at_zero() {
        let grid = SeatGrid::from_rows(vec![vec![Free; 4]]);
        let mut layout = RectLayout::new(bare_metrics());
        layout.prepare(&grid);
        let mut resolver = SizingResolver::new();
        resolver.fit(&mut layout, &grid, Size::new(0, 0));
        assert!(layout.metrics().item_size >= 0);
        assert!(layout.metrics().item_spacing >= 0);
    }
}
