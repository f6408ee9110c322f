//! headless: runs every steering strategy in a toy toroidal arena.
//!
//! Flockers school, dodge obstacles and chase lights; predators hunt them
//! with the configured pursuit mode; two grazer herds patrol the coloured
//! lights, one reactively and one from memory.
//!
//! ```text
//! cargo run -p headless -- [config.json]
//! RUST_LOG=debug cargo run -p headless --features parallel
//! ```

mod world;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;

use st_config::{SteeringConfig, load_config};
use st_flock::FlockingStrategy;
use st_patrol::{MemoryPatrol, ReactivePatrol};
use st_pursuit::Pursuer;
use st_sim::{DecisionTally, PopulationBuilder};

use world::{Arena, Contacts};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64   = 42;
const TICKS:            u64   = 500;
const REPORT_INTERVAL:  u64   = 100;

const ARENA_SIZE:       f64   = 1_200.0;
const PERCEPTION_RANGE: f64   = 300.0;

const FLOCKERS:         usize = 60;
const PREDATORS:        usize = 3;
const GRAZERS_PER_HERD: usize = 4;
const OBSTACLES:        usize = 8;
const OBSTACLE_RADIUS:  f64   = 20.0;
const LIGHTS_PER_HUE:   usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))
            .with_context(|| format!("loading steering config from {path}"))?,
        None => SteeringConfig::default(),
    };
    info!(pursuit = %config.pursuit, threshold = config.patrol.threshold, "configuration ready");

    // ── World ─────────────────────────────────────────────────────────────
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut arena = Arena::new(ARENA_SIZE, ARENA_SIZE, PERCEPTION_RANGE);
    let flock_group    = arena.spawn(config.profiles.flocker, FLOCKERS, &mut rng);
    let predator_group = arena.spawn(config.profiles.predator, PREDATORS, &mut rng);
    let reactive_group = arena.spawn(config.profiles.grazer, GRAZERS_PER_HERD, &mut rng);
    let memory_group   = arena.spawn(config.profiles.grazer, GRAZERS_PER_HERD, &mut rng);
    arena.scatter_obstacles(OBSTACLES, OBSTACLE_RADIUS, &mut rng);
    arena.scatter_lights(LIGHTS_PER_HUE, &mut rng);

    // ── Populations ───────────────────────────────────────────────────────
    let mut flock = PopulationBuilder::new()
        .uniform(FlockingStrategy::new(config.flocker, config.profiles.flocker), FLOCKERS)
        .build()?;
    let mut predators = PopulationBuilder::new()
        .uniform(Pursuer::new(config.pursuit, config.profiles.predator), PREDATORS)
        .build()?;
    let mut reactive = PopulationBuilder::new()
        .uniform(ReactivePatrol::new(config.patrol, config.profiles.grazer), GRAZERS_PER_HERD)
        .build()?;
    let mut memory = PopulationBuilder::new()
        .uniform(MemoryPatrol::new(config.patrol, config.profiles.grazer), GRAZERS_PER_HERD)
        .strict(true)
        .build()?;

    // ── Run ───────────────────────────────────────────────────────────────
    let mut tally = DecisionTally::default();
    let mut contacts = Contacts::default();
    let started = Instant::now();

    for tick in 0..TICKS {
        // Every population decides on the same snapshot before anyone moves.
        let flock_intents    = flock.decide(&arena.percepts(flock_group), &mut tally)?;
        let predator_intents = predators.decide(&arena.percepts(predator_group), &mut tally)?;
        let reactive_intents = reactive.decide(&arena.percepts(reactive_group), &mut tally)?;
        let memory_intents   = memory.decide(&arena.percepts(memory_group), &mut tally)?;

        arena.apply(flock_group, &flock_intents);
        arena.apply(predator_group, &predator_intents);
        arena.apply(reactive_group, &reactive_intents);
        arena.apply(memory_group, &memory_intents);
        contacts += arena.resolve_contacts(&mut rng);

        if (tick + 1) % REPORT_INTERVAL == 0 {
            let seeking: Vec<String> = memory
                .states()
                .iter()
                .map(|s| s.target_color().map_or("-", |h| h.as_str()).to_owned())
                .collect();
            info!(
                tick = tick + 1,
                flockers_alive = arena.alive(flock_group),
                polarization = arena.polarization(flock_group),
                kills = contacts.kills,
                lights_eaten = contacts.lights_eaten,
                grazers_seeking = ?seeking,
                "progress",
            );
        }
    }

    let elapsed = started.elapsed();
    info!(
        batches = tally.ticks,
        steered = tally.steered,
        idle = tally.idle,
        kills = contacts.kills,
        lights_eaten = contacts.lights_eaten,
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete",
    );
    println!(
        "{} ticks, {} of {} flockers survived, {} decisions in {:.2?}",
        TICKS,
        arena.alive(flock_group),
        FLOCKERS,
        tally.steered + tally.idle,
        elapsed,
    );
    Ok(())
}
