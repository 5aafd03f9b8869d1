//! Non-interactive aquarium demo runner.

mod population;
mod telemetry;

use anyhow::{Context, Result};
use aqua_core::DemoConfig;
use aqua_world::{display_lines, AnimalSummary, Tank, TankEvent};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "aqua-sim")]
#[command(about = "Text-grid aquarium simulation with a random starting population", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tank width in cells (minimum 40)
    #[arg(long)]
    width: Option<i32>,

    /// Tank height in cells (minimum 25)
    #[arg(long)]
    height: Option<i32>,

    /// Number of ticks to run
    #[arg(long)]
    steps: Option<u64>,

    /// Feed everyone every N steps, 0 disables feeding
    #[arg(long)]
    feed_every: Option<u64>,

    /// Seed for the random population
    #[arg(long)]
    seed: Option<u64>,

    /// Exact number of animals to try to place
    #[arg(long)]
    animals: Option<usize>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print a JSON report instead of frames
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Only print the final listing
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

impl Args {
    fn load_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                DemoConfig::from_json(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => DemoConfig::default(),
        };

        if let Some(width) = self.width {
            config.tank.width = width;
        }
        if let Some(height) = self.height {
            config.tank.height = height;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(feed_every) = self.feed_every {
            config.feed_every = feed_every;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(animals) = self.animals {
            config.min_animals = animals;
            config.max_animals = animals;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        Ok(config)
    }
}

/// Final state written with `--json`
#[derive(Debug, Serialize)]
struct RunReport {
    turns: u64,
    seed: u64,
    animals: Vec<AnimalSummary>,
    events: Vec<TankEvent>,
}

fn print_frame(tank: &Tank, events: &[TankEvent]) {
    for line in display_lines(tank) {
        println!("{}", line.text);
    }
    for event in events {
        println!("[turn {}] {}", event.turn(), event);
    }
    println!();
}

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init_telemetry(args.json)?;

    let config = args.load_config()?;
    let mut tank = Tank::with_config(config.tank.clone())?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    info!(
        width = config.tank.width,
        height = config.tank.height,
        steps = config.steps,
        seed = config.seed,
        "Starting aquarium demo"
    );

    population::populate(&mut tank, &mut rng, config.min_animals, config.max_animals);

    let show_frames = !args.json && !args.quiet;
    let mut history = tank.drain_events();
    if show_frames {
        print_frame(&tank, &history);
    }

    let feed_amount = config.tank.lifecycle.feed_amount;
    for step in 0..config.steps {
        if config.feed_every > 0 && step % config.feed_every == 0 {
            tank.feed_all(feed_amount);
        }
        tank.tick();

        let events = tank.drain_events();
        if show_frames {
            print_frame(&tank, &events);
            if config.delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.delay_ms));
            }
        }
        history.extend(events);
    }

    let deaths = history.iter().filter_map(TankEvent::died).count();

    if args.json {
        let report = RunReport {
            turns: tank.turn(),
            seed: config.seed,
            animals: tank.list_animals(),
            events: history,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("After {} turns:", tank.turn());
        for animal in tank.animals() {
            println!("{}", animal);
        }
    }

    info!(
        turn = tank.turn(),
        survivors = tank.animals().len(),
        deaths,
        "Demo finished"
    );
    Ok(())
}
