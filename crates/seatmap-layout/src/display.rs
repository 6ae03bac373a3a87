#![forbid(unsafe_code)]

//! The display tree: what a layout strategy computes and a render pass
//! walks.
//!
//! One [`RowDisplay`] per visible grid row, one [`PlaceDisplay`] per seat.
//! `Empty` cells keep a `None` slot so the tree stays index-aligned with
//! the underlying grid row. The tree is rebuilt wholesale when the grid is
//! replaced and rewritten in place when only geometry changed.

use seatmap_core::{Point, Rect, SeatGrid, SeatState};

/// Display record for a single seat.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDisplay {
    state: SeatState,
    seat_number: u32,
    position: Point,
    rect: Rect,
    rotation: f32,
}

impl PlaceDisplay {
    /// Create a seat display at a position.
    #[must_use]
    pub fn new(
        state: SeatState,
        seat_number: u32,
        position: Point,
        item_size: i32,
        rotation: f32,
    ) -> Self {
        Self {
            state,
            seat_number,
            position,
            rect: Rect::square(position, item_size),
            rotation,
        }
    }

    /// Current seat state.
    #[inline]
    pub fn state(&self) -> SeatState {
        self.state
    }

    /// Dense 1-based seat number within the row.
    #[inline]
    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    /// Top-left position.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Bounding rectangle (position + item size).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rotation about the seat center when drawn, in degrees.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Toggle through the seat state machine, returning the new state.
    pub fn toggle(&mut self) -> SeatState {
        self.state = self.state.toggled();
        self.state
    }

    /// Move the seat, rewriting its bounds and rotation in place.
    pub fn relocate(&mut self, position: Point, item_size: i32, rotation: f32) {
        self.position = position;
        self.rect = Rect::square(position, item_size);
        self.rotation = rotation;
    }

    /// Whether a point falls inside the seat bounds.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// Display record for a visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDisplay {
    row_number: u32,
    offset: i32,
    places: Vec<Option<PlaceDisplay>>,
}

impl RowDisplay {
    /// Create a row display.
    #[must_use]
    pub fn new(row_number: u32, offset: i32, places: Vec<Option<PlaceDisplay>>) -> Self {
        Self {
            row_number,
            offset,
            places,
        }
    }

    /// Dense 1-based row number.
    #[inline]
    pub fn row_number(&self) -> u32 {
        self.row_number
    }

    /// Position scalar: the y offset for a rect layout, the radial
    /// distance for an arc layout.
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Rewrite the position scalar.
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// All seat slots, index-aligned with the grid row.
    #[inline]
    pub fn places(&self) -> &[Option<PlaceDisplay>] {
        &self.places
    }

    /// Mutable seat slots.
    #[inline]
    pub fn places_mut(&mut self) -> &mut [Option<PlaceDisplay>] {
        &mut self.places
    }

    /// The seat at a column, if that cell holds one.
    pub fn place(&self, col: usize) -> Option<&PlaceDisplay> {
        self.places.get(col)?.as_ref()
    }

    /// Mutable access to the seat at a column.
    pub fn place_mut(&mut self, col: usize) -> Option<&mut PlaceDisplay> {
        self.places.get_mut(col)?.as_mut()
    }
}

/// Build a display tree from a grid.
///
/// `row_offset` yields the row's position scalar; `place_at` yields a
/// seat's position and rotation from `(row, col, row_len)`. Row and seat
/// numbers are assigned densely: the counter advances only past rows and
/// cells that actually hold seats.
pub(crate) fn build_rows(
    grid: &SeatGrid,
    item_size: i32,
    mut row_offset: impl FnMut(usize) -> i32,
    mut place_at: impl FnMut(usize, usize, usize) -> (Point, f32),
) -> Vec<Option<RowDisplay>> {
    let mut row_number = 0u32;
    grid.rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            if !row.iter().any(|state| state.is_seat()) {
                return None;
            }
            row_number += 1;
            let mut seat_number = 0u32;
            let places = row
                .iter()
                .enumerate()
                .map(|(col, &state)| {
                    if !state.is_seat() {
                        return None;
                    }
                    seat_number += 1;
                    let (position, rotation) = place_at(row_idx, col, row.len());
                    Some(PlaceDisplay::new(
                        state,
                        seat_number,
                        position,
                        item_size,
                        rotation,
                    ))
                })
                .collect();
            Some(RowDisplay::new(row_number, row_offset(row_idx), places))
        })
        .collect()
}

/// Rewrite positions, bounds, and offsets of an existing tree in place.
///
/// States and numbers are untouched; the result matches what
/// [`build_rows`] would produce for the same grid and closures.
pub(crate) fn refresh_rows(
    rows: &mut [Option<RowDisplay>],
    item_size: i32,
    mut row_offset: impl FnMut(usize) -> i32,
    mut place_at: impl FnMut(usize, usize, usize) -> (Point, f32),
) {
    for (row_idx, slot) in rows.iter_mut().enumerate() {
        let Some(row) = slot.as_mut() else { continue };
        row.set_offset(row_offset(row_idx));
        let row_len = row.places.len();
        for (col, place) in row.places.iter_mut().enumerate() {
            if let Some(place) = place.as_mut() {
                let (position, rotation) = place_at(row_idx, col, row_len);
                place.relocate(position, item_size, rotation);
            }
        }
    }
}
