//! `st-sim`: drives one steering decision per agent per tick.
//!
//! # Decision tick
//!
//! ```text
//! decide(percepts_per_agent):
//!   ① Validate: batch length must equal the agent count
//!               (strict mode also rejects non-finite percepts).
//!   ② Decide:   compute_intent for every agent, each with exclusive
//!               access to its own state (parallel with the `parallel`
//!               feature; no locks, no shared mutable data).
//!   ③ Report:   observer callbacks in ascending AgentId order.
//!   ④ Advance:  tick += 1.
//! ```
//!
//! Percept construction and motion integration belong to the host; this
//! crate only sequences the decisions between them.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decision phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_flock::{FlockerConfig, FlockingStrategy};
//! use st_sim::{NoopObserver, PopulationBuilder};
//!
//! let boid = FlockingStrategy::new(FlockerConfig::default(), profile);
//! let mut flock = PopulationBuilder::new().uniform(boid, 200).build()?;
//! let intents = flock.decide(&percepts, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod population;


pub use builder::PopulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{DecisionObserver, DecisionTally, NoopObserver};
pub use population::Population;
