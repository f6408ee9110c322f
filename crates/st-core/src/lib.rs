//! `st-core`: foundational types for the `rust_steer` framework.
//!
//! This crate is a dependency of every other `st-*` crate.  It intentionally
//! has no `st-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`                                               |
//! | [`time`]      | `Tick`                                                  |
//! | [`angle`]     | Canonical angle range, `normalize_angle`, `angle_diff`  |
//! | [`force`]     | `Force`: weighted polar/cartesian force accumulator    |
//! | [`percept`]   | `Percept`, `ObjectCategory`, `Hue` palette              |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod angle;
pub mod error;
pub mod force;
pub mod ids;
pub mod percept;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{angle_diff, normalize_angle};
pub use error::{CoreError, CoreResult};
pub use force::Force;
pub use ids::AgentId;
pub use percept::{Hue, ObjectCategory, Percept, MIN_DISTANCE};
pub use time::Tick;
