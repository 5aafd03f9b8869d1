//! Configuration types for the aquarium.

use crate::error::{Error, Result};
use crate::geometry::check_dimensions;
use serde::{Deserialize, Serialize};

/// Turn-based feeding and ageing rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Every N turns each animal loses one food
    pub food_interval: u64,
    /// Every N turns each animal ages one year; must be a multiple of `food_interval`
    pub age_interval: u64,
    /// Age in years at which an animal dies
    pub max_age: u32,
    /// Food every animal starts with
    pub starting_food: i32,
    /// Food added to each animal by one feeding
    pub feed_amount: i32,
    /// Segments in the hunger bar shown above each animal
    pub hunger_bar_length: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            food_interval: 10,
            age_interval: 100,
            max_age: 120,
            starting_food: 5,
            feed_amount: 10,
            hunger_bar_length: 5,
        }
    }
}

/// Tank dimensions and rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfig {
    /// Width of the tank in cells, walls included
    pub width: i32,
    /// Height of the tank in cells, floor included
    pub height: i32,
    pub lifecycle: LifecycleConfig,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 30,
            lifecycle: LifecycleConfig::default(),
        }
    }
}

impl TankConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Check dimensions and intervals before a tank is built
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        if self.lifecycle.food_interval == 0 || self.lifecycle.age_interval == 0 {
            return Err(Error::Config(
                "food_interval and age_interval must be positive".to_string(),
            ));
        }
        // Ageing is only checked on food turns
        if self.lifecycle.age_interval % self.lifecycle.food_interval != 0 {
            return Err(Error::Config(format!(
                "age_interval ({}) must be a multiple of food_interval ({})",
                self.lifecycle.age_interval, self.lifecycle.food_interval
            )));
        }
        Ok(())
    }
}

/// Settings for the non-interactive demo runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub tank: TankConfig,
    /// Number of ticks to run
    pub steps: u64,
    /// Feed every animal every N steps (0 disables feeding)
    pub feed_every: u64,
    /// Random seed for the starting population
    pub seed: u64,
    pub min_animals: usize,
    pub max_animals: usize,
    /// Pause between printed frames (milliseconds)
    pub delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tank: TankConfig::default(),
            steps: 120,
            feed_every: 50,
            seed: 0,
            min_animals: 2,
            max_animals: 6,
            delay_ms: 500,
        }
    }
}

impl DemoConfig {
    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(json)?;
        if config.min_animals > config.max_animals {
            return Err(Error::Config(format!(
                "min_animals ({}) exceeds max_animals ({})",
                config.min_animals, config.max_animals
            )));
        }
        Ok(config)
    }
}
