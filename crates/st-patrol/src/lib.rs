//! `st-patrol`: grazers that visit lights in palette order
//! (red → green → blue → red).
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`config`]   | `PatrolConfig`: arrival threshold                       |
//! | [`reactive`] | `ReactivePatrol`: stateless, decides from percepts only |
//! | [`memory`]   | `MemoryPatrol`, `PatrolState`: remembers target colour  |

pub mod config;
pub mod memory;
pub mod reactive;


pub use config::PatrolConfig;
pub use memory::{MemoryPatrol, PatrolState};
pub use reactive::{ReactivePatrol, STRAIGHT_AHEAD_TOLERANCE};
