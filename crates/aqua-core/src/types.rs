//! Core type definitions for the aquarium.

use crate::error::Error;
use crate::geometry::{
    MOLY_HEIGHT, MOLY_WIDTH, OCYPODE_HEIGHT, OCYPODE_WIDTH, SCALAR_HEIGHT, SCALAR_WIDTH,
    SHRIMP_HEIGHT, SHRIMP_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Board glyphs
pub mod glyph {
    pub const ANIMAL: char = '*';
    pub const EMPTY: char = ' ';
    pub const WALL: char = '|';
    pub const WATER: char = '~';
    pub const FLOOR: char = '_';
    pub const FLOOR_LEFT: char = '\\';
    pub const FLOOR_RIGHT: char = '/';
}

/// Unique identifier for an animal (names are not unique)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub Uuid);

impl AnimalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnimalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell position on the board (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Horizontal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    pub fn reversed(self) -> Self {
        match self {
            HorizontalDirection::Left => HorizontalDirection::Right,
            HorizontalDirection::Right => HorizontalDirection::Left,
        }
    }

    pub fn to_delta(self) -> i32 {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }
}

/// Vertical heading, only fish have one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    pub fn reversed(self) -> Self {
        match self {
            VerticalDirection::Up => VerticalDirection::Down,
            VerticalDirection::Down => VerticalDirection::Up,
        }
    }

    pub fn to_delta(self) -> i32 {
        match self {
            VerticalDirection::Up => -1,
            VerticalDirection::Down => 1,
        }
    }
}

/// Behaviour category shared by several species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Swims freely between the waterline and the crab zone
    Fish,
    /// Walks along the floor, collides with other crabs
    Crab,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fish => write!(f, "fish"),
            Category::Crab => write!(f, "crab"),
        }
    }
}

const SCALAR_SPRITE: [&str; 5] = [
    "******  ",
    "    *** ",
    "  ******",
    "    *** ",
    "******  ",
];

const MOLY_SPRITE: [&str; 3] = ["*   *** ", "********", "*   *** "];

const OCYPODE_SPRITE: [&str; 4] = [" *   * ", "  ***  ", "*******", "*     *"];

const SHRIMP_SPRITE: [&str; 3] = ["    * *", "****** ", "  * *  "];

/// Every species the tank knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Scalar,
    Moly,
    Ocypode,
    Shrimp,
}

impl Species {
    pub fn all() -> [Species; 4] {
        [
            Species::Scalar,
            Species::Moly,
            Species::Ocypode,
            Species::Shrimp,
        ]
    }

    pub fn category(self) -> Category {
        match self {
            Species::Scalar | Species::Moly => Category::Fish,
            Species::Ocypode | Species::Shrimp => Category::Crab,
        }
    }

    /// Short code used by menus and scripts
    pub fn code(self) -> &'static str {
        match self {
            Species::Scalar => "sc",
            Species::Moly => "mo",
            Species::Ocypode => "oc",
            Species::Shrimp => "sh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Scalar => "Scalar",
            Species::Moly => "Moly",
            Species::Ocypode => "Ocypode",
            Species::Shrimp => "Shrimp",
        }
    }

    /// Footprint as (width, height)
    pub fn size(self) -> (i32, i32) {
        match self {
            Species::Scalar => (SCALAR_WIDTH, SCALAR_HEIGHT),
            Species::Moly => (MOLY_WIDTH, MOLY_HEIGHT),
            Species::Ocypode => (OCYPODE_WIDTH, OCYPODE_HEIGHT),
            Species::Shrimp => (SHRIMP_WIDTH, SHRIMP_HEIGHT),
        }
    }

    /// Sprite rows, authored facing right
    pub fn sprite(self) -> &'static [&'static str] {
        match self {
            Species::Scalar => &SCALAR_SPRITE,
            Species::Moly => &MOLY_SPRITE,
            Species::Ocypode => &OCYPODE_SPRITE,
            Species::Shrimp => &SHRIMP_SPRITE,
        }
    }

    /// Sprite rows for the given heading. Left-facing rows are mirrored.
    pub fn glyph_rows(self, facing: HorizontalDirection) -> Vec<String> {
        self.sprite()
            .iter()
            .map(|row| match facing {
                HorizontalDirection::Right => row.to_string(),
                HorizontalDirection::Left => row.chars().rev().collect(),
            })
            .collect()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = Error;

    /// Accepts either the short code or the label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::all()
            .into_iter()
            .find(|species| {
                species.code().eq_ignore_ascii_case(wanted)
                    || species.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownSpecies(s.to_string()))
    }
}
