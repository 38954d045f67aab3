//! Fixed timestep simulation tick
//!
//! One call advances the world by a single step: integrate the bird, spawn
//! and advance obstacles, detect collisions and passes, evict off-screen
//! obstacles, and fold any terminal collision into exactly one Over
//! transition.

use super::collision::{bird_hits_pipe, bird_out_of_bounds};
use super::state::{GameEvent, GamePhase, GameState, Pipe};
use crate::consts::*;

/// Input latched for a single tick (deterministic). One-shot flags are
/// cleared by the caller after the tick consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Control pulse: set the bird's velocity to the flap impulse this tick
    pub flap: bool,
}

/// Advance the game by one fixed step. Does nothing unless Running.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Integrate the bird: a flap replaces velocity, gravity accumulates,
    // position moves by the updated velocity (semi-implicit Euler).
    if input.flap {
        state.bird.vel_y = state.tuning.flap_impulse;
    }
    state.bird.vel_y += state.tuning.gravity;
    state.bird.pos.y += state.bird.vel_y;

    // Visual tilt follows velocity
    state.bird.rotation = (state.bird.vel_y * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT);

    // Spawn cadence counts from the first tick of the run
    if state.tick_count % state.tuning.spawn_interval == 0 {
        spawn_pipe(state);
    }

    for pipe in state.pipes.iter_mut() {
        pipe.x -= state.tuning.pipe_speed;
    }

    let mut collided = false;
    for pipe in state.pipes.iter() {
        if bird_hits_pipe(&state.bird, pipe) {
            collided = true;
        }
    }

    // Score each obstacle exactly once, when its trailing edge passes the bird
    for pipe in state.pipes.iter_mut() {
        if !pipe.passed && pipe.trailing_edge() < state.bird.pos.x {
            pipe.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored {
                total: state.score,
            });
        }
    }

    // Obstacles exit in spawn order, so eviction only ever touches the head
    while state.pipes.front().is_some_and(|p| p.trailing_edge() < 0.0) {
        state.pipes.pop_front();
    }

    if bird_out_of_bounds(&state.bird, &state.viewport) {
        collided = true;
    }

    // Simultaneous collisions collapse into a single Over transition
    if collided {
        state.end_run();
        events.push(GameEvent::RunEnded {
            score: state.score,
        });
    }

    state.tick_count += 1;
}

/// Create one obstacle at the right edge with a uniformly placed gap
pub fn spawn_pipe(state: &mut GameState) {
    let top_height = state.roll_top_height();
    state.pipes.push_back(Pipe {
        x: state.viewport.width,
        top_height,
        gap: PIPE_GAP,
        passed: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Viewport;

    fn running_state() -> GameState {
        let mut state = GameState::new(7, Viewport::new(1280.0, 720.0));
        state.begin_run();
        state
    }

    #[test]
    fn gravity_integrates_semi_implicitly() {
        let mut state = running_state();
        let y0 = state.bird.pos.y;
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), &mut events);
        // vel 0 -> 0.4, and the position moves by the updated velocity
        assert_eq!(state.bird.vel_y, 0.4);
        assert_eq!(state.bird.pos.y, y0 + 0.4);
    }

    #[test]
    fn velocity_delta_per_tick_equals_gravity() {
        let mut state = running_state();
        let mut events = Vec::new();
        for _ in 0..50 {
            let before = state.bird.vel_y;
            tick(&mut state, &TickInput::default(), &mut events);
            if state.phase != GamePhase::Running {
                break;
            }
            assert!((state.bird.vel_y - before - state.tuning.gravity).abs() < 1e-3);
        }
    }

    #[test]
    fn flap_replaces_velocity() {
        let mut state = running_state();
        let mut events = Vec::new();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &mut events);
        }
        tick(&mut state, &TickInput { flap: true }, &mut events);
        assert_eq!(
            state.bird.vel_y,
            state.tuning.flap_impulse + state.tuning.gravity
        );
        assert!(state.bird.rotation < 0.0);
    }

    #[test]
    fn tilt_is_clamped() {
        let mut state = running_state();
        state.bird.vel_y = 100.0;
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.bird.rotation, MAX_TILT);
    }

    #[test]
    fn first_tick_spawns_then_every_interval() {
        let mut state = running_state();
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, 1280.0 - PIPE_SPEED);

        // Keep the bird airborne until the next spawn tick
        for t in 1..SPAWN_INTERVAL_TICKS {
            let input = TickInput { flap: t % 20 == 0 };
            tick(&mut state, &input, &mut events);
        }
        assert_eq!(state.pipes.len(), 1);
        tick(&mut state, &TickInput { flap: true }, &mut events);
        assert_eq!(state.pipes.len(), 2);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn pipes_advance_at_fixed_speed() {
        let mut state = running_state();
        let mut events = Vec::new();
        let ticks = 40u32;
        for t in 0..ticks {
            let input = TickInput { flap: t % 20 == 0 };
            tick(&mut state, &input, &mut events);
        }
        // Spawned at the right edge on the first tick, advanced every tick since
        assert_eq!(state.pipes[0].x, 1280.0 - PIPE_SPEED * ticks as f32);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn eviction_pops_only_fully_offscreen_pipes() {
        let mut state = running_state();
        state.tick_count = 1; // past the spawn tick
        state.pipes.push_back(Pipe {
            x: -78.0,
            top_height: 100.0,
            gap: PIPE_GAP,
            passed: true,
        });
        state.pipes.push_back(Pipe {
            x: 300.0,
            top_height: 100.0,
            gap: PIPE_GAP,
            passed: false,
        });
        let mut events = Vec::new();
        tick(&mut state, &TickInput { flap: true }, &mut events);
        // -78 moved to -81: trailing edge -1 is off screen. 300 stays.
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, 297.0);
    }

    #[test]
    fn two_clean_passes_score_two_exactly_once() {
        let mut state = running_state();
        state.tick_count = 1;
        let bird_x = state.bird.pos.x;
        // Gaps centered on the bird; trailing edges cross the bird one tick apart
        let top = state.bird.pos.y - 60.0;
        for offset in [2.0, 5.0] {
            state.pipes.push_back(Pipe {
                x: bird_x - PIPE_WIDTH + offset,
                top_height: top,
                gap: PIPE_GAP,
                passed: false,
            });
        }
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.score, 1);
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.score, 2);
        // Passed flags hold: further ticks add nothing
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.score, 2);
        let scored: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .collect();
        assert_eq!(scored.len(), 2);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn simultaneous_collisions_end_the_run_once() {
        let mut state = running_state();
        state.tick_count = 1;
        // Bird below the gap of an overlapping pipe AND touching the floor
        state.pipes.push_back(Pipe {
            x: state.bird.pos.x,
            top_height: 100.0,
            gap: PIPE_GAP,
            passed: false,
        });
        state.bird.pos.y = 700.0;
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(state.phase, GamePhase::Over);
        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::RunEnded { .. }))
            .count();
        assert_eq!(ended, 1);

        // Ticking in Over is a no-op
        let tick_count = state.tick_count;
        tick(&mut state, &TickInput { flap: true }, &mut events);
        assert_eq!(state.tick_count, tick_count);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn pipes_stay_ordered_oldest_first() {
        let mut state = running_state();
        let mut events = Vec::new();
        // A hover cadence that survives long enough to cover several spawns
        for t in 0..400u64 {
            let input = TickInput { flap: t % 35 == 0 };
            tick(&mut state, &input, &mut events);
            if state.phase != GamePhase::Running {
                break;
            }
            let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
            assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        }
        assert!(state.tick_count > 2 * SPAWN_INTERVAL_TICKS);
    }
}
