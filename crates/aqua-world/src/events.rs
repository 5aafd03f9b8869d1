//! Lifecycle notifications raised while the tank runs.

use aqua_core::{AnimalId, Position, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something worth telling the caller about. Deaths are events, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TankEvent {
    Added {
        turn: u64,
        id: AnimalId,
        name: String,
        species: Species,
        position: Position,
    },
    Starved {
        turn: u64,
        id: AnimalId,
        name: String,
        species: Species,
        age: u32,
    },
    DiedOfOldAge {
        turn: u64,
        id: AnimalId,
        name: String,
        species: Species,
        age: u32,
    },
    Aged {
        turn: u64,
        id: AnimalId,
        name: String,
        age: u32,
    },
    CrabsCollided {
        turn: u64,
        mover: AnimalId,
        other: AnimalId,
    },
}

impl TankEvent {
    pub fn turn(&self) -> u64 {
        match self {
            TankEvent::Added { turn, .. }
            | TankEvent::Starved { turn, .. }
            | TankEvent::DiedOfOldAge { turn, .. }
            | TankEvent::Aged { turn, .. }
            | TankEvent::CrabsCollided { turn, .. } => *turn,
        }
    }

    /// Id of the animal that left the tank, if this event is a death
    pub fn died(&self) -> Option<AnimalId> {
        match self {
            TankEvent::Starved { id, .. } | TankEvent::DiedOfOldAge { id, .. } => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for TankEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TankEvent::Added {
                name,
                species,
                position,
                ..
            } => write!(
                f,
                "{} the {} joined the tank at ({}, {})",
                name, species, position.x, position.y
            ),
            TankEvent::Starved {
                name, species, age, ..
            } => write!(
                f,
                "the {} {} died at the age of {} years because it ran out of food",
                species.category(),
                name,
                age
            ),
            TankEvent::DiedOfOldAge { name, .. } => write!(f, "{} died in good health", name),
            TankEvent::Aged { name, age, .. } => write!(f, "{} is now {} years old!", name, age),
            TankEvent::CrabsCollided { mover, other, .. } => {
                write!(f, "crabs {} and {} bumped into each other", mover, other)
            }
        }
    }
}
