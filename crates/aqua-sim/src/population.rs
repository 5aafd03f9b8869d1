//! Random starting population for the demo.

use aqua_core::geometry::{crab_row_index, fish_lowest_y, max_sprite_x, WATERLINE_ROW};
use aqua_core::{Category, HorizontalDirection, Position, Species, VerticalDirection};
use aqua_world::Tank;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

const NAMES: &[&str] = &[
    "Nemo", "Bubbles", "Finley", "Coral", "Shelly", "Claw", "Moti", "Nami", "Splash", "Finn",
    "Pearl", "Shadow", "Crabby", "Pincher", "Skipper", "Dory",
];

/// Placement attempts per requested animal
const ATTEMPTS_PER_ANIMAL: usize = 3;

/// Unique names drawn from a fixed pool, with numbered fallbacks
struct NamePicker {
    used: HashSet<String>,
}

impl NamePicker {
    fn new() -> Self {
        Self {
            used: HashSet::new(),
        }
    }

    fn pick<R: Rng>(&mut self, rng: &mut R) -> String {
        for _ in 0..20 {
            let base = NAMES.choose(rng).copied().unwrap_or("Animal");
            if self.used.insert(base.to_string()) {
                return base.to_string();
            }
            let numbered = format!("{}{}", base, rng.gen_range(1..=99));
            if self.used.insert(numbered.clone()) {
                return numbered;
            }
        }
        let fallback = format!("Animal{}", rng.gen_range(1..=999));
        self.used.insert(fallback.clone());
        fallback
    }
}

/// Fill the tank with between `min` and `max` random animals.
///
/// Occupied spots are retried a few times; the number actually placed is
/// returned and may fall short of the target.
pub fn populate<R: Rng>(tank: &mut Tank, rng: &mut R, min: usize, max: usize) -> usize {
    let target = rng.gen_range(min..=max.max(min));
    let fish_bottom = fish_lowest_y(tank.height());
    let mut names = NamePicker::new();
    let mut added = 0;

    for _ in 0..target * ATTEMPTS_PER_ANIMAL {
        if added >= target {
            break;
        }

        let species = *Species::all().choose(rng).unwrap_or(&Species::Scalar);
        let name = names.pick(rng);
        let age = rng.gen_range(1..=20);
        let horizontal = if rng.gen_bool(0.5) {
            HorizontalDirection::Right
        } else {
            HorizontalDirection::Left
        };
        let vertical = if species.category() == Category::Fish && rng.gen_bool(0.5) {
            VerticalDirection::Up
        } else {
            VerticalDirection::Down
        };
        let (width, height) = species.size();
        let x = rng.gen_range(1..=max_sprite_x(tank.width(), width).max(1));
        let y = match species.category() {
            Category::Fish => {
                rng.gen_range(WATERLINE_ROW..=(fish_bottom - height).max(WATERLINE_ROW))
            }
            Category::Crab => crab_row_index(tank.height(), height, 0),
        };

        match tank.add_animal(
            &name,
            age,
            Position::new(x, y),
            horizontal,
            vertical,
            species.code(),
        ) {
            Ok(_) => added += 1,
            Err(e) if e.is_recoverable() => {
                debug!(name = %name, error = %e, "Random placement rejected")
            }
            Err(e) => {
                warn!(error = %e, "Giving up on the demo population");
                break;
            }
        }
    }

    info!(event = "population_ready", target, added, "Demo population placed");
    added
}
