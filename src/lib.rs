//! Flappy Dash - a browser gap-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scheduler, physics, collisions, game state)
//! - `render`: Canvas-2D presentation layer
//! - `audio`: Web Audio playback, procedural and fire-and-forget
//! - `score`: Best-score tracking with LocalStorage persistence
//! - `tuning`: Viewport validation and tier-based game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod score;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use score::BestScore;
pub use settings::Settings;
pub use tuning::{Tuning, Viewport};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_RATE_HZ: f64 = 60.0;

    /// Obstacle solid width. An explicit configuration constant, never
    /// derived from a rendering asset's dimensions.
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Vertical opening between an obstacle's top and bottom segments
    pub const PIPE_GAP: f32 = 170.0;
    /// Shortest allowed solid segment
    pub const MIN_PIPE_HEIGHT: f32 = 50.0;
    /// Horizontal obstacle speed (units per tick)
    pub const PIPE_SPEED: f32 = 3.0;
    /// Ticks between obstacle spawns (~2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u64 = 120;

    /// Bird bounding box
    pub const BIRD_WIDTH: f32 = 50.0;
    pub const BIRD_HEIGHT: f32 = 40.0;

    /// Visual tilt per unit of vertical velocity
    pub const TILT_PER_VELOCITY: f32 = 0.1;
    /// Tilt clamp (±45°)
    pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_4;

    /// Viewport height above which the heavier tuning tier applies
    pub const TALL_VIEWPORT_CUTOFF: f32 = 800.0;
    /// Smallest height that keeps the obstacle spawn range non-empty
    pub const MIN_VIEWPORT_HEIGHT: f32 = PIPE_GAP + 2.0 * MIN_PIPE_HEIGHT + 1.0;
    pub const MIN_VIEWPORT_WIDTH: f32 = 4.0 * PIPE_WIDTH;
}
