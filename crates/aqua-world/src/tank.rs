//! Tank orchestration: placement, ticking, feeding.

use crate::animal::{Animal, AnimalSummary, DeathCause};
use crate::board::{Board, Footprint};
use crate::events::TankEvent;
use aqua_core::geometry::{
    crab_row_index, crab_zone_top_row, fish_lowest_y, max_sprite_x, WATERLINE_ROW,
};
use aqua_core::{
    AnimalId, Category, Error, HorizontalDirection, Position, Result, Species, TankConfig,
    VerticalDirection,
};
use tracing::{debug, info, instrument, trace};

pub struct Tank {
    config: TankConfig,
    board: Board,
    animals: Vec<Animal>,
    turn: u64,
    events: Vec<TankEvent>,
}

impl Tank {
    /// Create an empty tank with the default rules
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_config(TankConfig::new(width, height))
    }

    pub fn with_config(config: TankConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::build(config.width, config.height)?;

        debug!(
            width = config.width,
            height = config.height,
            "Tank created"
        );

        Ok(Self {
            config,
            board,
            animals: Vec::new(),
            turn: 0,
            events: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.config.width
    }

    pub fn height(&self) -> i32 {
        self.config.height
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Live animals in insertion order
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    /// Place a new animal.
    ///
    /// Fish are clamped between the side walls and between the waterline and
    /// the crab zone. Crabs are clamped horizontally and always stand on the
    /// floor, so the requested y is ignored for them.
    pub fn add_animal(
        &mut self,
        name: &str,
        age: u32,
        position: Position,
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        species_code: &str,
    ) -> Result<AnimalId> {
        let species: Species = species_code.parse()?;
        let (width, height) = species.size();

        let x = position.x.min(max_sprite_x(self.width(), width)).max(1);
        let y = match species.category() {
            Category::Fish => position
                .y
                .min(fish_lowest_y(self.height()) - height)
                .max(WATERLINE_ROW),
            Category::Crab => crab_row_index(self.height(), height, 0),
        };

        let footprint = Footprint {
            x,
            y,
            width,
            height,
        };
        if !self.board.is_free(x, y, width, height) || self.overlaps_animal(None, &footprint) {
            debug!(
                name,
                species = %species,
                x,
                y,
                "Placement unavailable"
            );
            return Err(Error::PlacementUnavailable {
                x,
                y,
                width,
                height,
            });
        }

        let mut animal = Animal::new(
            name,
            age,
            species,
            Position::new(x, y),
            horizontal,
            vertical,
            self.config.lifecycle.starting_food,
        );
        self.board.draw(&mut animal);

        let id = animal.id;
        info!(
            event = "animal_added",
            animal_id = %id,
            name,
            species = %species,
            x,
            y,
            "Animal added"
        );
        self.events.push(TankEvent::Added {
            turn: self.turn,
            id,
            name: animal.name.clone(),
            species,
            position: animal.position,
        });
        self.animals.push(animal);

        Ok(id)
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) {
        // Iterate over a snapshot so removals do not disturb the order
        let ids: Vec<AnimalId> = self.animals.iter().map(|a| a.id).collect();

        for id in ids {
            let Some(idx) = self.index_of(id) else {
                continue;
            };

            if self.apply_metabolism(idx) {
                continue;
            }

            self.move_vertically(idx);
            self.move_horizontally(idx);
        }

        self.repair();

        trace!(turn = self.turn, animals = self.animals.len(), "Tick complete");
        self.turn += 1;
    }

    /// Run several ticks in a row
    #[instrument(skip(self), fields(start_turn = self.turn))]
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.tick();
        }
        debug!(turn = self.turn, animals = self.animals.len(), "Run finished");
    }

    pub fn feed_all(&mut self, amount: i32) {
        for animal in &mut self.animals {
            animal.feed(amount);
        }
        debug!(amount, animals = self.animals.len(), "Fed all animals");
    }

    pub fn list_animals(&self) -> Vec<AnimalSummary> {
        self.animals.iter().map(AnimalSummary::from).collect()
    }

    /// Board rows, top to bottom, one glyph per cell
    pub fn render_rows(&self) -> Vec<String> {
        self.board.rows()
    }

    /// Remove every animal and redraw an empty tank
    pub fn reset(&mut self) {
        self.animals.clear();
        self.board = Board::blank(self.config.width, self.config.height);
        info!(event = "tank_reset", turn = self.turn, "Tank reset");
    }

    /// Take the lifecycle events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<TankEvent> {
        std::mem::take(&mut self.events)
    }

    fn index_of(&self, id: AnimalId) -> Option<usize> {
        self.animals.iter().position(|a| a.id == id)
    }

    /// Food and age bookkeeping. Returns true if the animal died and was removed.
    fn apply_metabolism(&mut self, idx: usize) -> bool {
        let lifecycle = &self.config.lifecycle;
        if self.turn % lifecycle.food_interval != 0 {
            return false;
        }

        let animal = &mut self.animals[idx];
        let mut death = animal.dec_food();

        if self.turn % lifecycle.age_interval == 0 {
            let old_age = animal.age;
            if let Some(cause) = animal.inc_age(lifecycle.max_age) {
                death = Some(cause);
            } else if animal.is_alive() && animal.age != old_age {
                debug!(name = %animal.name, age = animal.age, "Birthday");
                self.events.push(TankEvent::Aged {
                    turn: self.turn,
                    id: animal.id,
                    name: animal.name.clone(),
                    age: animal.age,
                });
            }
        }

        let Some(cause) = death else {
            return false;
        };

        let animal = self.animals.remove(idx);
        self.board.erase(&animal);

        info!(
            event = "animal_death",
            animal_id = %animal.id,
            name = %animal.name,
            species = %animal.species,
            age = animal.age,
            cause = ?cause,
            turn = self.turn,
            "Animal died"
        );

        let event = match cause {
            DeathCause::Starvation => TankEvent::Starved {
                turn: self.turn,
                id: animal.id,
                name: animal.name,
                species: animal.species,
                age: animal.age,
            },
            DeathCause::OldAge => TankEvent::DiedOfOldAge {
                turn: self.turn,
                id: animal.id,
                name: animal.name,
                species: animal.species,
                age: animal.age,
            },
        };
        self.events.push(event);
        true
    }

    /// Fish bob between the waterline and the crab zone; crabs have no vertical heading
    fn move_vertically(&mut self, idx: usize) {
        let lowest = fish_lowest_y(self.height());
        let animal = &self.animals[idx];
        let Some(vertical) = animal.vertical else {
            return;
        };

        let at_edge = match vertical {
            VerticalDirection::Up => animal.position.y <= WATERLINE_ROW,
            VerticalDirection::Down => animal.position.y + animal.height() >= lowest,
        };
        let blocked = at_edge || self.step_blocked(idx, 0, vertical.to_delta());

        let animal = &mut self.animals[idx];
        self.board.erase(animal);
        if blocked {
            animal.vertical = Some(vertical.reversed());
        } else {
            animal.move_by(0, vertical.to_delta());
        }
        self.board.draw(animal);
    }

    fn move_horizontally(&mut self, idx: usize) {
        let animal = &self.animals[idx];
        let Position { x, y } = animal.position;
        let direction = animal.horizontal;

        let next_column = match direction {
            HorizontalDirection::Right => x + animal.width(),
            HorizontalDirection::Left => x - 1,
        };

        if self.board.is_wall(next_column, y) {
            self.turn_in_place(idx);
            return;
        }

        if animal.is_crab() && self.resolve_crab_collision(idx) {
            return;
        }

        if self.step_blocked(idx, direction.to_delta(), 0) {
            trace!(name = %self.animals[idx].name, "Blocked by another animal");
            self.turn_in_place(idx);
            return;
        }

        let animal = &mut self.animals[idx];
        self.board.erase(animal);
        animal.move_by(direction.to_delta(), 0);
        self.board.draw(animal);
    }

    /// Reverse the horizontal heading without moving
    fn turn_in_place(&mut self, idx: usize) {
        let animal = &mut self.animals[idx];
        self.board.erase(animal);
        animal.turn_around();
        self.board.draw(animal);
    }

    /// Whether shifting the animal at `idx` by (dx, dy) would cover another animal
    fn step_blocked(&self, idx: usize, dx: i32, dy: i32) -> bool {
        let current = self.board.footprint(&self.animals[idx]);
        let shifted = Footprint {
            x: current.x + dx,
            y: current.y + dy,
            ..current
        };
        self.overlaps_animal(Some(idx), &shifted)
    }

    /// Whether the rectangle overlaps any animal other than `skip`
    fn overlaps_animal(&self, skip: Option<usize>, footprint: &Footprint) -> bool {
        self.animals.iter().enumerate().any(|(j, other)| {
            Some(j) != skip && self.board.footprint(other).overlaps(footprint)
        })
    }

    /// Bounce a crab off the crab directly ahead of it.
    ///
    /// Returns true when a collision was handled, in which case the mover
    /// takes no normal step this tick.
    fn resolve_crab_collision(&mut self, idx: usize) -> bool {
        let mover = &self.animals[idx];
        let mover_id = mover.id;
        let mover_x = mover.position.x;
        let mover_right = mover_x + mover.width();
        let direction = mover.horizontal;

        let hit = self.animals.iter().enumerate().position(|(j, other)| {
            j != idx
                && other.is_crab()
                && match direction {
                    HorizontalDirection::Right => other.position.x == mover_right,
                    HorizontalDirection::Left => other.position.x + other.width() == mover_x,
                }
        });
        let Some(other_idx) = hit else {
            return false;
        };

        let other = &mut self.animals[other_idx];
        let other_id = other.id;
        self.board.erase(other);
        other.turn_around();
        self.board.draw(other);

        self.board.erase(&self.animals[idx]);

        let backward = mover_x - direction.to_delta();
        let forward = mover_x + direction.to_delta();
        let step = [backward, forward]
            .into_iter()
            .find(|&candidate| self.crab_step_available(idx, candidate));

        let mover = &mut self.animals[idx];
        if let Some(new_x) = step {
            mover.position.x = new_x;
        }
        mover.turn_around();
        self.board.draw(mover);

        debug!(
            event = "crab_collision",
            mover = %mover_id,
            other = %other_id,
            stepped = step.is_some(),
            turn = self.turn,
            "Crabs collided"
        );
        self.events.push(TankEvent::CrabsCollided {
            turn: self.turn,
            mover: mover_id,
            other: other_id,
        });
        true
    }

    /// Whether the crab at `idx` (already erased) may shift to `new_x`.
    ///
    /// The newly covered column is probed on the two top rows of the crab
    /// zone; off-board probes count as blocked. The shifted footprint must
    /// also stay clear of every other animal.
    fn crab_step_available(&self, idx: usize, new_x: i32) -> bool {
        let crab = &self.animals[idx];
        let width = crab.width();
        let probe_column = if new_x < crab.position.x {
            new_x
        } else {
            new_x + width - 1
        };

        let zone_top = crab_zone_top_row(self.height());
        if (zone_top..zone_top + 2).any(|row| self.board.is_obstacle(probe_column, row)) {
            return false;
        }

        let current = self.board.footprint(crab);
        let shifted = Footprint {
            x: new_x,
            ..current
        };
        !self.overlaps_animal(Some(idx), &shifted)
    }

    /// Erase and redraw everyone so no half-overwritten sprites survive the tick
    fn repair(&mut self) {
        for animal in &mut self.animals {
            self.board.erase(animal);
            self.board.draw(animal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Drawable;
    use aqua_core::geometry::content_bottom_row;

    fn fish_tank() -> Tank {
        Tank::new(50, 30).unwrap()
    }

    fn add(
        tank: &mut Tank,
        name: &str,
        x: i32,
        y: i32,
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        code: &str,
    ) -> AnimalId {
        tank.add_animal(name, 4, Position::new(x, y), horizontal, vertical, code)
            .unwrap()
    }

    fn sprite_cells_drawn(tank: &Tank, animal: &Animal) -> bool {
        let footprint = tank.board().footprint(animal);
        animal.glyph_rows().iter().enumerate().all(|(dy, row)| {
            row.chars().enumerate().all(|(dx, cell)| {
                cell != '*'
                    || tank
                        .board()
                        .get(footprint.x + dx as i32, footprint.y + dy as i32)
                        == Some('*')
            })
        })
    }

    #[test]
    fn test_tank_creation() {
        let tank = fish_tank();
        assert_eq!(tank.turn(), 0);
        assert_eq!(tank.render_rows().len(), 30);
        assert!(tank.list_animals().is_empty());

        assert!(matches!(
            Tank::new(20, 30),
            Err(Error::InvalidDimensions { width: 20, .. })
        ));
    }

    #[test]
    fn test_first_tick_moves_fish_right() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "A",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "Scalar",
        );

        tank.tick();
        let fish = tank.animal(id).unwrap();
        assert_eq!(fish.position.x, 11);
        assert_eq!(fish.position.y, 11);
        assert_eq!(tank.turn(), 1);
        assert!(sprite_cells_drawn(&tank, fish));
    }

    #[test]
    fn test_add_animal_draws_sprite() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Bubbles",
            12,
            8,
            HorizontalDirection::Left,
            VerticalDirection::Up,
            "mo",
        );
        let moly = tank.animal(id).unwrap();
        assert_eq!(moly.position, Position::new(12, 8));
        assert!(sprite_cells_drawn(&tank, moly));
    }

    #[test]
    fn test_add_animal_rejects_occupied_space() {
        let mut tank = fish_tank();
        add(
            &mut tank,
            "Nemo",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );
        let before = tank.render_rows();

        let result = tank.add_animal(
            "Dory",
            3,
            Position::new(12, 11),
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        assert!(matches!(result, Err(Error::PlacementUnavailable { .. })));
        assert_eq!(tank.render_rows(), before);
        assert_eq!(tank.animals().len(), 1);
    }

    #[test]
    fn test_add_animal_rejects_unknown_species() {
        let mut tank = fish_tank();
        let result = tank.add_animal(
            "",
            1,
            Position::new(0, 0),
            HorizontalDirection::Left,
            VerticalDirection::Down,
            "xx",
        );
        assert!(matches!(result, Err(Error::UnknownSpecies(_))));
        assert!(tank.list_animals().is_empty());
        assert!(tank.drain_events().is_empty());
    }

    #[test]
    fn test_fish_placement_is_clamped() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Deep",
            48,
            27,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );
        let fish = tank.animal(id).unwrap();
        // 50 - 8 - 1 and 25 - 5
        assert_eq!(fish.position, Position::new(41, 20));

        let id = add(
            &mut tank,
            "High",
            5,
            0,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        assert_eq!(tank.animal(id).unwrap().position, Position::new(5, WATERLINE_ROW));
    }

    #[test]
    fn test_crabs_stand_on_the_floor() {
        let mut tank = fish_tank();
        let shrimp = add(
            &mut tank,
            "Pincher",
            5,
            2,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sh",
        );
        let ocypode = add(
            &mut tank,
            "Crabby",
            20,
            2,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "oc",
        );

        let baseline = content_bottom_row(30);
        let shrimp = tank.animal(shrimp).unwrap();
        let ocypode = tank.animal(ocypode).unwrap();
        assert_eq!(shrimp.position.y, baseline - 2);
        assert_eq!(ocypode.position.y, baseline - 3);
        assert_eq!(shrimp.vertical, None);
        assert!(sprite_cells_drawn(&tank, shrimp));
        assert!(sprite_cells_drawn(&tank, ocypode));
    }

    #[test]
    fn test_fish_reverses_at_waterline() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Splash",
            10,
            WATERLINE_ROW + 1,
            HorizontalDirection::Right,
            VerticalDirection::Up,
            "mo",
        );

        tank.tick();
        assert_eq!(tank.animal(id).unwrap().position.y, WATERLINE_ROW);
        assert_eq!(tank.animal(id).unwrap().vertical, Some(VerticalDirection::Up));

        tank.tick();
        let fish = tank.animal(id).unwrap();
        assert_eq!(fish.position.y, WATERLINE_ROW);
        assert_eq!(fish.vertical, Some(VerticalDirection::Down));

        tank.tick();
        assert_eq!(tank.animal(id).unwrap().position.y, WATERLINE_ROW + 1);
    }

    #[test]
    fn test_waterline_survives_fish_passing_through() {
        let mut tank = fish_tank();
        add(
            &mut tank,
            "Surface",
            10,
            WATERLINE_ROW,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );
        tank.run(3);

        let waterline = &tank.render_rows()[WATERLINE_ROW as usize];
        assert_eq!(*waterline, format!("|{}|", "~".repeat(48)));
    }

    #[test]
    fn test_fish_reverses_above_crab_zone() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Bottom",
            10,
            22,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );

        tank.tick();
        let fish = tank.animal(id).unwrap();
        assert_eq!(fish.position.y, 22);
        assert_eq!(fish.vertical, Some(VerticalDirection::Up));
    }

    #[test]
    fn test_bounce_off_wall() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Edge",
            41,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );

        tank.tick();
        let fish = tank.animal(id).unwrap();
        assert_eq!(fish.position.x, 41);
        assert_eq!(fish.horizontal, HorizontalDirection::Left);

        tank.tick();
        assert_eq!(tank.animal(id).unwrap().position.x, 40);
    }

    #[test]
    fn test_food_drops_once_per_interval() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Finley",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );

        tank.run(10);
        assert_eq!(tank.animal(id).unwrap().food, 4);
        tank.run(10);
        assert_eq!(tank.animal(id).unwrap().food, 3);
    }

    #[test]
    fn test_starvation_removes_animal() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Hungry",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        tank.drain_events();

        // Food 5 drops on turns 0, 10, 20, 30 and hits zero on turn 40
        tank.run(40);
        assert_eq!(tank.animal(id).unwrap().food, 1);

        tank.tick();
        assert!(tank.list_animals().is_empty());
        assert!(tank.render_rows().iter().all(|row| !row.contains('*')));

        let events = tank.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, TankEvent::Starved { turn: 40, .. })));
    }

    #[test]
    fn test_feeding_delays_starvation() {
        let mut tank = fish_tank();
        let id = add(
            &mut tank,
            "Fed",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        tank.feed_all(10);
        assert_eq!(tank.animal(id).unwrap().food, 15);

        tank.run(41);
        assert_eq!(tank.animal(id).unwrap().food, 10);
    }

    #[test]
    fn test_old_age_is_not_starvation() {
        let mut tank = fish_tank();
        let old = tank
            .add_animal(
                "Elder",
                119,
                Position::new(10, 10),
                HorizontalDirection::Right,
                VerticalDirection::Down,
                "sc",
            )
            .unwrap();
        let young = add(
            &mut tank,
            "Young",
            30,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        tank.drain_events();

        tank.tick();
        assert!(tank.animal(old).is_none());
        assert_eq!(tank.animal(young).unwrap().age, 5);

        let events = tank.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, TankEvent::DiedOfOldAge { id, age: 120, .. } if *id == old)));
        assert!(events
            .iter()
            .any(|e| matches!(e, TankEvent::Aged { id, age: 5, .. } if *id == young)));
        assert!(!events.iter().any(|e| matches!(e, TankEvent::Starved { .. })));
    }

    #[test]
    fn test_crabs_bounce_apart() {
        let mut tank = fish_tank();
        let left = add(
            &mut tank,
            "Lefty",
            10,
            0,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "oc",
        );
        let right = add(
            &mut tank,
            "Righty",
            20,
            0,
            HorizontalDirection::Left,
            VerticalDirection::Down,
            "sh",
        );
        tank.drain_events();

        // Gap of three cells closes to zero after one tick each way
        tank.tick();
        assert_eq!(tank.animal(left).unwrap().position.x, 11);
        assert_eq!(tank.animal(right).unwrap().position.x, 19);

        tank.tick();
        let a = tank.animal(left).unwrap();
        let b = tank.animal(right).unwrap();
        assert_eq!(a.horizontal, HorizontalDirection::Left);
        assert_eq!(b.horizontal, HorizontalDirection::Right);
        assert_eq!(a.position.x, 12);
        assert_eq!(b.position.x, 20);
        assert!(!tank.board().footprint(a).overlaps(&tank.board().footprint(b)));
        assert!(sprite_cells_drawn(&tank, a));
        assert!(sprite_cells_drawn(&tank, b));

        let events = tank.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            TankEvent::CrabsCollided { mover, other, .. } if *mover == right && *other == left
        )));

        tank.tick();
        assert_eq!(tank.animal(left).unwrap().position.x, 11);
        assert_eq!(tank.animal(right).unwrap().position.x, 21);
    }

    #[test]
    fn test_crab_pinned_against_wall_stays_put() {
        let mut tank = fish_tank();
        // Shrimp against the left wall, ocypode touching it from the right
        let pinned = add(
            &mut tank,
            "Pinned",
            1,
            0,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sh",
        );
        let pusher = add(
            &mut tank,
            "Pusher",
            8,
            0,
            HorizontalDirection::Left,
            VerticalDirection::Down,
            "oc",
        );

        tank.tick();
        let a = tank.animal(pinned).unwrap();
        let b = tank.animal(pusher).unwrap();
        // The shrimp bumped first: the ocypode turns, the shrimp cannot back
        // into the wall or push forward, so it only turns around
        assert_eq!(a.position.x, 1);
        assert_eq!(a.horizontal, HorizontalDirection::Left);
        assert!(!tank.board().footprint(a).overlaps(&tank.board().footprint(b)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tank = fish_tank();
        add(
            &mut tank,
            "Gone",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );
        tank.tick();
        tank.reset();

        assert!(tank.animals().is_empty());
        assert_eq!(tank.board(), &Board::build(50, 30).unwrap());
        assert_eq!(tank.turn(), 1);
    }

    #[test]
    fn test_snapshot_order_survives_removal() {
        let mut tank = fish_tank();
        let doomed = tank
            .add_animal(
                "Doomed",
                119,
                Position::new(5, 10),
                HorizontalDirection::Right,
                VerticalDirection::Down,
                "sc",
            )
            .unwrap();
        let survivor = add(
            &mut tank,
            "Survivor",
            30,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );

        tank.tick();
        // The first animal left mid-tick; the second still took its step
        assert!(tank.animal(doomed).is_none());
        assert_eq!(tank.animal(survivor).unwrap().position, Position::new(31, 11));
    }

    #[test]
    fn test_fish_turn_instead_of_swimming_through() {
        let mut tank = fish_tank();
        let a = add(
            &mut tank,
            "Moti",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        let b = add(
            &mut tank,
            "Nami",
            19,
            10,
            HorizontalDirection::Left,
            VerticalDirection::Down,
            "mo",
        );

        // A closes the gap, then B would step into it and turns instead
        tank.tick();
        assert_eq!(tank.animal(a).unwrap().position, Position::new(11, 11));
        let fish_b = tank.animal(b).unwrap();
        assert_eq!(fish_b.position, Position::new(19, 11));
        assert_eq!(fish_b.horizontal, HorizontalDirection::Right);

        tank.tick();
        let fish_a = tank.animal(a).unwrap();
        assert_eq!(fish_a.position, Position::new(11, 12));
        assert_eq!(fish_a.horizontal, HorizontalDirection::Left);
        assert_eq!(tank.animal(b).unwrap().position, Position::new(20, 12));

        for _ in 0..4 {
            tank.tick();
            let fish_a = tank.animal(a).unwrap();
            let fish_b = tank.animal(b).unwrap();
            assert!(!tank
                .board()
                .footprint(fish_a)
                .overlaps(&tank.board().footprint(fish_b)));
            assert!(sprite_cells_drawn(&tank, fish_a));
            assert!(sprite_cells_drawn(&tank, fish_b));
        }
    }

    #[test]
    fn test_fish_stop_short_vertically() {
        let mut tank = fish_tank();
        let upper = add(
            &mut tank,
            "Upper",
            10,
            10,
            HorizontalDirection::Left,
            VerticalDirection::Down,
            "mo",
        );
        // Directly below, heading away so only the vertical step matters
        add(
            &mut tank,
            "Lower",
            10,
            13,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );

        tank.tick();
        let fish = tank.animal(upper).unwrap();
        assert_eq!(fish.position.y, 10);
        assert_eq!(fish.vertical, Some(VerticalDirection::Up));
    }

    #[test]
    fn test_add_animal_rejects_overlapping_blank_corner() {
        let mut tank = fish_tank();
        add(
            &mut tank,
            "Corner",
            10,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "sc",
        );

        // Only cell (17, 10) is shared, and it is blank in the scalar sprite
        assert_eq!(tank.board().get(17, 10), Some(' '));
        let result = tank.add_animal(
            "Overlap",
            1,
            Position::new(17, 8),
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );
        assert!(matches!(result, Err(Error::PlacementUnavailable { .. })));
        assert_eq!(tank.animals().len(), 1);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let mut tank = fish_tank();
        let id = tank
            .add_animal(
                "Ancient",
                u32::MAX,
                Position::new(10, 10),
                HorizontalDirection::Right,
                VerticalDirection::Down,
                "sc",
            )
            .unwrap();
        let fed = add(
            &mut tank,
            "Stuffed",
            30,
            10,
            HorizontalDirection::Right,
            VerticalDirection::Down,
            "mo",
        );

        tank.feed_all(i32::MAX);
        tank.feed_all(1);
        assert_eq!(tank.animal(fed).unwrap().food, i32::MAX);

        tank.tick();
        assert!(tank.animal(id).is_none());
        assert_eq!(tank.animal(fed).unwrap().food, i32::MAX - 1);

        assert!(matches!(
            Tank::new(70_000, 40_000),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
