//! Sentinel Core - Squad Telemetry Simulation Engine
//!
//! Owns the squad state and advances it one tick at a time: environment
//! drift, role-keyed hazard injection, target-seeking vitals, risk
//! classification, and a bounded trend history per member.
//!
//! # Architecture
//!
//! - **State**: a plain owned [`engine::TeamEngine`] value holding every
//!   [`member::Member`]; no globals, no interior mutability.
//! - **Update**: [`engine::TeamEngine::tick`] applies the pure per-member
//!   transform in [`telemetry`] to the whole squad in one pass.
//! - **Inputs**: the random generator and the wall clock are both passed in
//!   by the caller, so a seeded generator reproduces an entire run exactly.
//!
//! The engine performs no I/O and spawns no tasks; an external driver
//! (timer loop, test harness) decides when ticks happen.
//!
//! # Example
//!
//! ```rust,no_run
//! use sentinel_core::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut engine = TeamEngine::new(chrono::Local::now());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // Drive at 1 Hz
//! loop {
//!     engine.tick(&mut rng, chrono::Local::now());
//! }
//! ```

pub mod alert;
pub mod archive;
pub mod drift;
pub mod engine;
pub mod member;
pub mod snapshot;
pub mod telemetry;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{RunState, TeamEngine, ViewMode};
    pub use crate::member::Member;
    pub use crate::snapshot::TeamSnapshot;
    pub use sentinel_logic::types::{Environment, MemberStatus, Role, Vitals};
}
