//! Game state and core simulation types
//!
//! Everything the tick loop reads and mutates lives here, owned by a single
//! `GameState` rather than ambient globals.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::{Tuning, Viewport};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first control pulse
    Idle,
    /// Simulation active
    Running,
    /// Run ended, waiting for the restart trigger
    Over,
}

/// Observable results of a tick, consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was cleared
    Scored { total: u32 },
    /// Terminal collision, the run is over
    RunEnded { score: u32 },
}

/// The controlled entity
#[derive(Debug, Clone)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity, positive is downward (screen coordinates)
    pub vel_y: f32,
    /// Visual tilt derived from velocity, clamped to ±45°. Presentation only.
    pub rotation: f32,
    pub size: Vec2,
}

impl Bird {
    /// Spawn at the run's start position: a quarter in from the left, mid-height
    pub fn spawn(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 4.0, viewport.height / 2.0),
            vel_y: 0.0,
            rotation: 0.0,
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        }
    }
}

/// One obstacle: a solid column with a gap between its top and bottom segments
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Leading (left) edge
    pub x: f32,
    /// Height of the top solid segment; the bottom segment starts at
    /// `top_height + gap`
    pub top_height: f32,
    pub gap: f32,
    /// Set once when the bird clears this obstacle, guards double scoring
    pub passed: bool,
}

impl Pipe {
    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }
}

/// Complete simulation state, exclusively owned by the tick loop
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub bird: Bird,
    /// Obstacles ordered oldest-first: spawned at the tail, evicted at the
    /// head. All advance at the same speed, so head-to-tail x stays sorted.
    pub pipes: VecDeque<Pipe>,
    pub score: u32,
    /// Ticks since the current run began
    pub tick_count: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game in the Idle phase with the given seed
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            tuning: Tuning::for_viewport(&viewport),
            bird: Bird::spawn(&viewport),
            viewport,
            pipes: VecDeque::new(),
            score: 0,
            tick_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Enter Running: fresh bird, empty obstacle collection, zero score
    pub fn begin_run(&mut self) {
        self.bird = Bird::spawn(&self.viewport);
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
        self.phase = GamePhase::Running;
    }

    /// Terminal collision observed
    pub(crate) fn end_run(&mut self) {
        self.phase = GamePhase::Over;
    }

    /// Restart trigger: clear the terminal state and wait for the next pulse
    pub fn reset_to_idle(&mut self) {
        if self.phase == GamePhase::Over {
            self.phase = GamePhase::Idle;
        }
    }

    /// Apply a viewport change and re-tier the tuning constants
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.tuning = Tuning::for_viewport(&viewport);
    }

    /// Uniform draw for a new obstacle's top-segment height. The range is
    /// non-empty for any `Viewport` (clamped at construction).
    pub(crate) fn roll_top_height(&mut self) -> f32 {
        let max = self.viewport.height - PIPE_GAP - MIN_PIPE_HEIGHT;
        self.rng.random_range(MIN_PIPE_HEIGHT..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn new_game_is_idle() {
        let state = GameState::new(7, viewport());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn begin_run_resets_everything() {
        let mut state = GameState::new(7, viewport());
        state.begin_run();
        state.score = 3;
        state.tick_count = 99;
        state.pipes.push_back(Pipe {
            x: 10.0,
            top_height: 100.0,
            gap: PIPE_GAP,
            passed: true,
        });
        state.end_run();
        assert_eq!(state.phase, GamePhase::Over);

        state.reset_to_idle();
        state.begin_run();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos.x, 1280.0 / 4.0);
        assert_eq!(state.bird.pos.y, 720.0 / 2.0);
        assert_eq!(state.bird.vel_y, 0.0);
    }

    #[test]
    fn reset_to_idle_requires_over() {
        let mut state = GameState::new(7, viewport());
        state.begin_run();
        state.reset_to_idle();
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn rolled_heights_stay_in_range() {
        let mut state = GameState::new(1234, viewport());
        let max = state.viewport.height - PIPE_GAP - MIN_PIPE_HEIGHT;
        for _ in 0..500 {
            let top = state.roll_top_height();
            assert!(top >= MIN_PIPE_HEIGHT && top < max);
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = GameState::new(99, viewport());
        let mut b = GameState::new(99, viewport());
        for _ in 0..32 {
            assert_eq!(a.roll_top_height(), b.roll_top_height());
        }
    }

    #[test]
    fn resize_retiers_tuning() {
        let mut state = GameState::new(7, viewport());
        assert_eq!(state.tuning.gravity, 0.4);
        state.resize(Viewport::new(1280.0, 900.0));
        assert_eq!(state.tuning.gravity, 0.5);
        assert_eq!(state.tuning.flap_impulse, -9.0);
    }
}
