//! Animal state and lifecycle.

use crate::board::{Anchor, Drawable};
use aqua_core::{AnimalId, Category, HorizontalDirection, Position, Species, VerticalDirection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an animal left the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Starvation,
    OldAge,
}

/// A fish or crab in the tank
#[derive(Debug, Clone)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: Species,
    /// Top-left of the sprite footprint
    pub position: Position,
    pub age: u32,
    pub food: i32,
    pub horizontal: HorizontalDirection,
    /// Only fish move vertically
    pub vertical: Option<VerticalDirection>,
    alive: bool,
}

impl Animal {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        species: Species,
        position: Position,
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        food: i32,
    ) -> Self {
        let vertical = match species.category() {
            Category::Fish => Some(vertical),
            Category::Crab => None,
        };

        Self {
            id: AnimalId::new(),
            name: name.into(),
            species,
            position,
            age,
            food,
            horizontal,
            vertical,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn category(&self) -> Category {
        self.species.category()
    }

    pub fn is_crab(&self) -> bool {
        self.category() == Category::Crab
    }

    pub fn width(&self) -> i32 {
        self.species.size().0
    }

    pub fn height(&self) -> i32 {
        self.species.size().1
    }

    /// Lose one unit of food. Starves on reaching zero.
    pub fn dec_food(&mut self) -> Option<DeathCause> {
        self.food = self.food.saturating_sub(1);
        if self.food <= 0 {
            self.alive = false;
            return Some(DeathCause::Starvation);
        }
        None
    }

    /// Grow one year older. Dies on reaching `max_age`; does nothing once dead.
    pub fn inc_age(&mut self, max_age: u32) -> Option<DeathCause> {
        if !self.alive {
            return None;
        }
        self.age = self.age.saturating_add(1);
        if self.age >= max_age {
            self.alive = false;
            return Some(DeathCause::OldAge);
        }
        None
    }

    pub fn feed(&mut self, amount: i32) {
        self.food = self.food.saturating_add(amount);
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = self.position.add(dx, dy);
    }

    pub fn turn_around(&mut self) {
        self.horizontal = self.horizontal.reversed();
    }
}

impl Drawable for Animal {
    fn position(&self) -> Position {
        self.position
    }

    fn set_x(&mut self, x: i32) {
        self.position.x = x;
    }

    fn size(&self) -> (i32, i32) {
        self.species.size()
    }

    fn anchor(&self) -> Anchor {
        match self.category() {
            Category::Fish => Anchor::Top,
            Category::Crab => Anchor::Floor,
        }
    }

    fn glyph_rows(&self) -> Vec<String> {
        self.species.glyph_rows(self.horizontal)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} {} ({}) is {} years old and has {} food",
            self.category(),
            self.name,
            self.species,
            self.age,
            self.food
        )
    }
}

/// Read-only view of an animal for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalSummary {
    pub id: AnimalId,
    pub name: String,
    pub species: Species,
    pub age: u32,
    pub food: i32,
    pub alive: bool,
    pub position: Position,
}

impl From<&Animal> for AnimalSummary {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id,
            name: animal.name.clone(),
            species: animal.species,
            age: animal.age,
            food: animal.food,
            alive: animal.alive,
            position: animal.position,
        }
    }
}
