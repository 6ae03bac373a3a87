#![forbid(unsafe_code)]

//! The seat-map widget.

use crate::Surface;
use crate::measure::MeasureSpec;
use seatmap_core::{Point, PointerEvent, Rect, SeatGrid, SeatState, Size};
use seatmap_layout::{
    ArcLayout, LayoutKind, LayoutStrategy, RectLayout, SeatMetrics, SizingResolver,
};
use seatmap_style::{LabelStyle, SeatTheme, Style};

/// Selected-seat number size as a share of the fitted item size.
const SELECTED_TEXT_RATIO: f32 = 0.8;
/// Row-margin number size as a share of the fitted item size.
const ROW_TEXT_RATIO: f32 = 0.6;

/// Callback invoked once per resolved seat toggle with the new state and
/// the visible row and seat numbers.
pub type ClickListener = Box<dyn FnMut(SeatState, u32, u32)>;

/// An interactive seating map.
///
/// Owns the grid, the active [`LayoutStrategy`], the theme, and an
/// optional click listener. All mutation is synchronous: replacing the
/// grid or touching geometry rebuilds the display tree before the call
/// returns, so a caller never observes a half-updated widget.
pub struct SeatMap {
    grid: SeatGrid,
    strategy: Box<dyn LayoutStrategy>,
    resolver: SizingResolver,
    theme: SeatTheme,
    on_click: Option<ClickListener>,
}

fn strategy_for(kind: LayoutKind, metrics: SeatMetrics) -> Box<dyn LayoutStrategy> {
    match kind {
        LayoutKind::Rect => Box::new(RectLayout::new(metrics)),
        LayoutKind::Arc => Box::new(ArcLayout::new(metrics)),
    }
}

impl SeatMap {
    /// Create a widget with default metrics and theme.
    #[must_use]
    pub fn new(kind: LayoutKind) -> Self {
        Self::with_metrics(kind, SeatMetrics::default())
    }

    /// Create a widget with explicit metrics.
    #[must_use]
    pub fn with_metrics(kind: LayoutKind, metrics: SeatMetrics) -> Self {
        Self {
            grid: SeatGrid::default(),
            strategy: strategy_for(kind, metrics),
            resolver: SizingResolver::new(),
            theme: SeatTheme::default(),
            on_click: None,
        }
    }

    // --- Grid ---------------------------------------------------------

    /// Replace the hall map, rebuilding the display tree wholesale.
    ///
    /// Dense row/seat numbering is recomputed here; the host should
    /// re-measure and redraw afterwards.
    pub fn update_map(&mut self, grid: SeatGrid) {
        self.grid = grid;
        self.strategy.prepare(&self.grid);
    }

    /// The backing grid.
    #[inline]
    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    // --- Listener -----------------------------------------------------

    /// Install the click listener, replacing any previous one.
    pub fn set_click_listener(&mut self, listener: impl FnMut(SeatState, u32, u32) + 'static) {
        self.on_click = Some(Box::new(listener));
    }

    /// Remove the click listener.
    pub fn clear_click_listener(&mut self) {
        self.on_click = None;
    }

    // --- Geometry -----------------------------------------------------

    /// The active layout geometry.
    #[inline]
    pub fn layout_kind(&self) -> LayoutKind {
        self.strategy.kind()
    }

    /// Swap the layout geometry, carrying the current metrics over.
    pub fn select_strategy(&mut self, kind: LayoutKind) {
        if kind == self.strategy.kind() {
            return;
        }
        self.strategy = strategy_for(kind, *self.strategy.metrics());
        self.strategy.prepare(&self.grid);
    }

    /// The current geometry configuration.
    #[inline]
    pub fn metrics(&self) -> &SeatMetrics {
        self.strategy.metrics()
    }

    /// Set the seat sprite side.
    pub fn set_item_size(&mut self, item_size: i32) {
        self.update_metrics(|m| m.item_size = item_size);
    }

    /// Set the spacing between seats in a row.
    pub fn set_item_spacing(&mut self, item_spacing: i32) {
        self.update_metrics(|m| m.item_spacing = item_spacing);
    }

    /// Set the spacing between rows.
    pub fn set_line_spacing(&mut self, line_spacing: i32) {
        self.update_metrics(|m| m.line_spacing = line_spacing);
    }

    /// Set the stage width. Zero means the full viewport width.
    pub fn set_core_width(&mut self, core_width: i32) {
        self.update_metrics(|m| m.core_width = core_width);
    }

    /// Set the stage height.
    pub fn set_core_height(&mut self, core_height: i32) {
        self.update_metrics(|m| m.core_height = core_height);
    }

    /// Set the padding from the widget edge to the first seat.
    pub fn set_side_padding(&mut self, side_padding: i32) {
        self.update_metrics(|m| m.side_padding = side_padding);
    }

    /// Set the row-label inset from the widget edge.
    pub fn set_label_padding(&mut self, label_padding: i32) {
        self.update_metrics(|m| m.label_padding = label_padding);
    }

    fn update_metrics(&mut self, mutate: impl FnOnce(&mut SeatMetrics)) {
        let mut metrics = *self.strategy.metrics();
        mutate(&mut metrics);
        if metrics != *self.strategy.metrics() {
            self.strategy.set_metrics(metrics);
            self.strategy.refresh(&self.grid);
        }
    }

    // --- Theme --------------------------------------------------------

    /// The current theme.
    #[inline]
    pub fn theme(&self) -> &SeatTheme {
        &self.theme
    }

    /// Replace the whole theme.
    pub fn set_theme(&mut self, theme: SeatTheme) {
        self.theme = theme;
    }

    /// Set the free-seat style.
    pub fn set_free_style(&mut self, style: Style) {
        self.theme.free = style;
    }

    /// Set the booked-seat style.
    pub fn set_booked_style(&mut self, style: Style) {
        self.theme.booked = style;
    }

    /// Set the selected-seat style.
    pub fn set_selected_style(&mut self, style: Style) {
        self.theme.selected = style;
    }

    /// Set the stage style.
    pub fn set_stage_style(&mut self, style: Style) {
        self.theme.stage = style;
    }

    /// Set the selected-seat number style.
    pub fn set_selected_text_style(&mut self, style: LabelStyle) {
        self.theme.selected_text = style;
    }

    /// Set the row-margin number style.
    pub fn set_row_label_style(&mut self, style: LabelStyle) {
        self.theme.row_label = style;
    }

    // --- Measurement --------------------------------------------------

    /// Run one measurement pass and return the concrete widget size.
    ///
    /// When the offered space disagrees with the required size, the
    /// sizing resolver refits item geometry, label sizes are rescaled
    /// against the new item size, and the requirements are re-read before
    /// answering. The final size is stored in the metrics so arc
    /// centering and the right-hand label margin track the viewport.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let required = self.strategy.required_size(&self.grid);
        let mut width = width_spec.resolve(required.width);
        let mut height = height_spec.resolve(required.height);

        if self
            .resolver
            .fit(self.strategy.as_mut(), &self.grid, Size::new(width, height))
        {
            let refitted = self.strategy.required_size(&self.grid);
            width = width_spec.resolve(refitted.width);
            height = height_spec.resolve(refitted.height);
            self.rescale_labels();
        }

        let mut metrics = *self.strategy.metrics();
        if metrics.width != width || metrics.height != height {
            metrics.width = width;
            metrics.height = height;
            self.strategy.set_metrics(metrics);
            self.strategy.refresh(&self.grid);
        }
        Size::new(width, height)
    }

    fn rescale_labels(&mut self) {
        let item = self.strategy.metrics().item_size;
        self.theme.selected_text.size = (item as f32 * SELECTED_TEXT_RATIO) as i32;
        self.theme.row_label.size = (item as f32 * ROW_TEXT_RATIO) as i32;
    }

    // --- Input --------------------------------------------------------

    /// Feed a pointer event through the click controller.
    ///
    /// Always returns `false`: the widget reacts to presses but never
    /// claims the gesture, leaving host propagation untouched.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        if event.is_primary_down() {
            self.press(event.position());
        }
        false
    }

    fn press(&mut self, point: Point) {
        let Some(index) = self.strategy.resolve(&self.grid, point) else {
            return;
        };
        let Some(row) = self
            .strategy
            .rows_mut()
            .get_mut(index.row)
            .and_then(Option::as_mut)
        else {
            return;
        };
        let row_number = row.row_number();
        let Some(place) = row.place_mut(index.col) else {
            return;
        };
        if !place.state().is_interactive() {
            return;
        }

        let new_state = place.toggle();
        let seat_number = place.seat_number();
        self.grid.toggle(index);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            row = index.row,
            col = index.col,
            state = ?new_state,
            "seat toggled"
        );

        if let Some(listener) = self.on_click.as_mut() {
            listener(new_state, row_number, seat_number);
        }
    }

    // --- Rendering ----------------------------------------------------

    /// Draw the widget onto a surface: the stage first, then the active
    /// strategy's row-by-row pass.
    pub fn render(&self, surface: &mut dyn Surface) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_render", widget = "SeatMap").entered();

        let metrics = self.strategy.metrics();
        let stage_width = if metrics.core_width > 0 {
            metrics.core_width
        } else {
            metrics.width
        };
        let stage = Rect::new(
            (metrics.width - stage_width) / 2,
            0,
            stage_width,
            metrics.core_height,
        );
        if !stage.is_empty() {
            surface.draw_stage(stage, self.theme.stage);
        }

        self.strategy.render(surface, &self.theme);
    }
}
