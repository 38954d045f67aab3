//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use collision::{bird_hits_pipe, bird_out_of_bounds};
pub use scheduler::FixedStep;
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, spawn_pipe, tick};
