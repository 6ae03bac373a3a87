#![forbid(unsafe_code)]

//! Pointer events delivered by the host.
//!
//! The engine never talks to a windowing system; the host translates its
//! native input into [`PointerEvent`] values and feeds them in.

use crate::geometry::Point;
use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CONTROL = 1 << 1;
        /// Alt/Option key.
        const ALT = 1 << 2;
    }
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self::empty();
}

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (left mouse button, single touch).
    Primary,
    /// The secondary button (right mouse button).
    Secondary,
    /// The middle button.
    Middle,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down. Seat toggling happens on this edge.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved with no button held.
    Moved,
}

/// A pointer event in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of event.
    pub kind: PointerEventKind,
    /// X coordinate in pixels, relative to the widget origin.
    pub x: i32,
    /// Y coordinate in pixels, relative to the widget origin.
    pub y: i32,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The event position as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is a primary-button press.
    #[must_use]
    pub const fn is_primary_down(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(PointerButton::Primary))
    }
}
