//! Tank simulation engine.
//!
//! This module implements the character board, the animals living on it and
//! the tick loop that moves, feeds and ages them.

pub mod animal;
pub mod board;
pub mod events;
pub mod render;
pub mod tank;

pub use animal::{Animal, AnimalSummary, DeathCause};
pub use board::{Anchor, Board, Drawable, Footprint};
pub use events::TankEvent;
pub use render::{display_lines, hunger_bar, DisplayLine};
pub use tank::Tank;
