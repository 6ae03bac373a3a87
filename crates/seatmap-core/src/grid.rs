#![forbid(unsafe_code)]

//! The seat grid: an ordered sequence of rows of [`SeatState`].
//!
//! Rows may have different lengths; jagged grids are valid and represent
//! curved or irregular halls. The only way to change a cell after
//! construction is [`SeatGrid::toggle`], the click path. Everything else is
//! read-only, so a display tree built from a grid can only drift from it
//! through that one operation.

use crate::state::SeatState;

/// A `(row, column)` index into a [`SeatGrid`].
///
/// Both components are raw grid indices, counting `Empty` cells. Visible
/// seat numbering is a display concern and lives with the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatIndex {
    /// Row index into the grid.
    pub row: usize,
    /// Column index into the row.
    pub col: usize,
}

impl SeatIndex {
    /// Create a new index.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A hall map: rows of seat states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatGrid {
    rows: Vec<Vec<SeatState>>,
}

impl SeatGrid {
    /// Build a grid from rows. Any shape is accepted, including no rows at
    /// all and rows of length zero.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<SeatState>>) -> Self {
        Self { rows }
    }

    /// All rows, in order.
    #[inline]
    pub fn rows(&self) -> &[Vec<SeatState>] {
        &self.rows
    }

    /// A single row, or `None` when out of range.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[SeatState]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows, counting all-`Empty` ones.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The state at an index, or `None` when out of range.
    pub fn get(&self, index: SeatIndex) -> Option<SeatState> {
        self.rows.get(index.row)?.get(index.col).copied()
    }

    /// Number of actual seats (non-`Empty` cells).
    pub fn seat_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|s| s.is_seat()).count())
            .sum()
    }

    /// Whether the grid contains no seats at all.
    pub fn is_blank(&self) -> bool {
        self.seat_count() == 0
    }

    /// Toggle the cell at `index` through the seat state machine.
    ///
    /// Returns the new state when the cell exists and is interactive.
    /// Out-of-range indices and `Booked`/`Empty` cells return `None` and
    /// leave the grid untouched; a miss is a valid no-op, not an error.
    pub fn toggle(&mut self, index: SeatIndex) -> Option<SeatState> {
        let cell = self.rows.get_mut(index.row)?.get_mut(index.col)?;
        if !cell.is_interactive() {
            return None;
        }
        *cell = cell.toggled();
        Some(*cell)
    }
}

#[cfg(test)]
mod tests {
    use super::{SeatGrid, SeatIndex};
    use crate::state::SeatState::{Booked, Empty, Free, Selected};

    fn jagged() -> SeatGrid {
        SeatGrid::from_rows(vec![
            vec![Empty, Free, Booked],
            vec![Free],
            vec![Selected, Free, Free, Free],
        ])
    }

    // --- Shape ---

    #[test]
    fn shape_of_jagged_grid() {
        let grid = jagged();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.max_row_len(), 4);
        assert_eq!(grid.seat_count(), 7);
        assert!(!grid.is_blank());
    }

    #[test]
    fn empty_grid_shape() {
        let grid = SeatGrid::default();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.max_row_len(), 0);
        assert!(grid.is_blank());
    }

    #[test]
    fn all_empty_grid_is_blank() {
        let grid = SeatGrid::from_rows(vec![vec![Empty, Empty], vec![]]);
        assert!(grid.is_blank());
    }

    #[test]
    fn get_in_and_out_of_range() {
        let grid = jagged();
        assert_eq!(grid.get(SeatIndex::new(0, 2)), Some(Booked));
        assert_eq!(grid.get(SeatIndex::new(1, 1)), None);
        assert_eq!(grid.get(SeatIndex::new(9, 0)), None);
    }

    // --- Toggle ---

    #[test]
    fn toggle_free_selects() {
        let mut grid = jagged();
        assert_eq!(grid.toggle(SeatIndex::new(0, 1)), Some(Selected));
        assert_eq!(grid.get(SeatIndex::new(0, 1)), Some(Selected));
    }

    #[test]
    fn toggle_twice_restores() {
        let mut grid = jagged();
        let idx = SeatIndex::new(2, 1);
        grid.toggle(idx);
        grid.toggle(idx);
        assert_eq!(grid.get(idx), Some(Free));
    }

    #[test]
    fn toggle_booked_and_empty_is_noop() {
        let mut grid = jagged();
        let before = grid.clone();
        assert_eq!(grid.toggle(SeatIndex::new(0, 2)), None);
        assert_eq!(grid.toggle(SeatIndex::new(0, 0)), None);
        assert_eq!(grid.toggle(SeatIndex::new(7, 7)), None);
        assert_eq!(grid, before);
    }

    // --- Properties ---

    mod properties {
        use super::super::{SeatGrid, SeatIndex};
        use crate::state::SeatState;
        use proptest::prelude::*;

        fn grid_strategy() -> impl Strategy<Value = SeatGrid> {
            let state = prop_oneof![
                Just(SeatState::Empty),
                Just(SeatState::Free),
                Just(SeatState::Booked),
                Just(SeatState::Selected),
            ];
            proptest::collection::vec(proptest::collection::vec(state, 0..10), 0..8)
                .prop_map(SeatGrid::from_rows)
        }

        proptest! {
            #[test]
            fn double_toggle_restores_the_grid(
                grid in grid_strategy(),
                row in 0usize..10,
                col in 0usize..12,
            ) {
                let mut toggled = grid.clone();
                let index = SeatIndex::new(row, col);
                toggled.toggle(index);
                toggled.toggle(index);
                prop_assert_eq!(toggled, grid);
            }

            #[test]
            fn toggle_touches_at_most_one_cell(
                grid in grid_strategy(),
                row in 0usize..10,
                col in 0usize..12,
            ) {
                let mut after = grid.clone();
                after.toggle(SeatIndex::new(row, col));
                let mut diffs = 0;
                for (r, row_states) in grid.rows().iter().enumerate() {
                    for (c, state) in row_states.iter().enumerate() {
                        if after.get(SeatIndex::new(r, c)) != Some(*state) {
                            diffs += 1;
                        }
                    }
                }
                prop_assert!(diffs <= 1);
            }
        }
    }
}
