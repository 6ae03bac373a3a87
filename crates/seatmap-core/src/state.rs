#![forbid(unsafe_code)]

//! The per-seat state machine.

/// The state of a single cell in a seat grid.
///
/// `Empty` marks a non-seat placeholder that keeps row and column alignment
/// without occupying a drawable slot. `Booked` seats belong to someone else
/// and never react to input. Only `Free` and `Selected` toggle under a
/// click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatState {
    /// A placeholder cell: not a seat, never drawn, never numbered.
    #[default]
    Empty,
    /// A seat available for selection.
    Free,
    /// A seat reserved by someone else; inert under input.
    Booked,
    /// A seat the user has picked.
    Selected,
}

impl SeatState {
    /// Stable numeric code for hosts that persist or transmit maps.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Selected => 1,
            Self::Booked => 2,
            Self::Free => 3,
        }
    }

    /// Decode a numeric code. Unknown codes return `None`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Selected),
            2 => Some(Self::Booked),
            3 => Some(Self::Free),
            _ => None,
        }
    }

    /// Whether this cell is an actual seat (anything but `Empty`).
    #[inline]
    #[must_use]
    pub const fn is_seat(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Whether a click may change this cell.
    #[inline]
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Free | Self::Selected)
    }

    /// The state after a click.
    ///
    /// `Free` and `Selected` swap; `Booked` and `Empty` are absorbing.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Free => Self::Selected,
            Self::Selected => Self::Free,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SeatState;

    #[test]
    fn toggle_swaps_free_and_selected() {
        assert_eq!(SeatState::Free.toggled(), SeatState::Selected);
        assert_eq!(SeatState::Selected.toggled(), SeatState::Free);
    }

    #[test]
    fn toggle_is_involutive() {
        for state in [
            SeatState::Empty,
            SeatState::Free,
            SeatState::Booked,
            SeatState::Selected,
        ] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn booked_and_empty_are_absorbing() {
        assert_eq!(SeatState::Booked.toggled(), SeatState::Booked);
        assert_eq!(SeatState::Empty.toggled(), SeatState::Empty);
    }

    #[test]
    fn interactive_states() {
        assert!(SeatState::Free.is_interactive());
        assert!(SeatState::Selected.is_interactive());
        assert!(!SeatState::Booked.is_interactive());
        assert!(!SeatState::Empty.is_interactive());
    }

    #[test]
    fn codes_round_trip() {
        for state in [
            SeatState::Empty,
            SeatState::Free,
            SeatState::Booked,
            SeatState::Selected,
        ] {
            assert_eq!(SeatState::from_code(state.code()), Some(state));
        }
        assert_eq!(SeatState::from_code(4), None);
    }
}
