//! Collision predicates for the rectangular world
//!
//! Everything is axis-aligned: the bird's bounding box against an obstacle's
//! two solid segments, and the bird against the world bounds. Pure functions,
//! no state.

use super::state::{Bird, Pipe};
use crate::consts::PIPE_WIDTH;
use crate::tuning::Viewport;

/// Axis-aligned overlap between the bird and either solid segment of an
/// obstacle. The top segment occupies `y < top_height`, the bottom segment
/// `y > top_height + gap`, both restricted to the obstacle's solid width.
///
/// A bird exactly on the gap boundary (`y == top_height`) is still inside
/// the gap; one unit past it is a hit.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let in_window = bird.pos.x < pipe.x + PIPE_WIDTH && bird.pos.x + bird.size.x > pipe.x;
    if !in_window {
        return false;
    }
    bird.pos.y < pipe.top_height || bird.pos.y + bird.size.y > pipe.top_height + pipe.gap
}

/// Floor contact (touching counts) or ceiling breach
pub fn bird_out_of_bounds(bird: &Bird, viewport: &Viewport) -> bool {
    bird.pos.y + bird.size.y >= viewport.height || bird.pos.y < 0.0
}
