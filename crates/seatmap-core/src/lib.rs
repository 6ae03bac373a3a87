#![forbid(unsafe_code)]

//! Core types for the seatmap engine.
//!
//! This crate holds everything the layout and widget crates agree on:
//!
//! - [`geometry`] - points, sizes, rectangles, and angular helpers
//! - [`state`] - the per-seat state machine
//! - [`grid`] - the seat grid and its single mutation path
//! - [`event`] - pointer events delivered by the host
//! - [`logging`] - tracing macros (no-ops unless the `tracing` feature is on)
//!
//! Coordinates are integer pixels with the origin at the top-left; angular
//! math for the arc layout runs in `f32` and converts back at the edges.

pub mod event;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod state;

pub use event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect, Size};
pub use grid::{SeatGrid, SeatIndex};
pub use state::SeatState;
