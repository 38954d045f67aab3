//! Viewport validation and data-driven game balance
//!
//! Taller windows give the bird more room to fall, so they get heavier
//! gravity and a stronger flap to keep the feel consistent. The tier switch
//! is a resize-time configuration policy; nothing mid-run depends on it
//! beyond the constants changing.

use crate::consts::*;

/// Simulation coordinate bounds, validated at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build a viewport, clamping to the minimum playable size. Heights
    /// below `MIN_VIEWPORT_HEIGHT` would make the obstacle spawn range
    /// empty, so they are rejected here rather than surfacing as a
    /// generator failure.
    pub fn new(width: f32, height: f32) -> Self {
        let w = width.max(MIN_VIEWPORT_WIDTH);
        let h = height.max(MIN_VIEWPORT_HEIGHT);
        if w != width || h != height {
            log::warn!("Viewport {width}x{height} below minimum, clamped to {w}x{h}");
        }
        Self {
            width: w,
            height: h,
        }
    }
}

/// Tunable simulation constants, all in per-tick units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Downward acceleration added to the bird's velocity every tick
    pub gravity: f32,
    /// Velocity a flap sets (negative is up)
    pub flap_impulse: f32,
    /// Horizontal obstacle speed
    pub pipe_speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            flap_impulse: -7.0,
            pipe_speed: PIPE_SPEED,
            spawn_interval: SPAWN_INTERVAL_TICKS,
        }
    }
}

impl Tuning {
    /// Select the tuning tier for a viewport
    pub fn for_viewport(viewport: &Viewport) -> Self {
        if viewport.height > TALL_VIEWPORT_CUTOFF {
            Self {
                gravity: 0.5,
                flap_impulse: -9.0,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_viewports_use_the_default_tier() {
        let tuning = Tuning::for_viewport(&Viewport::new(1280.0, 720.0));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn tall_viewports_get_heavier_tuning() {
        let tuning = Tuning::for_viewport(&Viewport::new(1280.0, 1000.0));
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.flap_impulse, -9.0);
        // Obstacle cadence is not tiered
        assert_eq!(tuning.pipe_speed, PIPE_SPEED);
        assert_eq!(tuning.spawn_interval, SPAWN_INTERVAL_TICKS);
    }

    #[test]
    fn tier_cutoff_is_exclusive() {
        let at = Tuning::for_viewport(&Viewport::new(1280.0, 800.0));
        assert_eq!(at.gravity, 0.4);
        let above = Tuning::for_viewport(&Viewport::new(1280.0, 800.5));
        assert_eq!(above.gravity, 0.5);
    }

    #[test]
    fn degenerate_viewports_clamp_to_minimum() {
        let vp = Viewport::new(10.0, 10.0);
        assert_eq!(vp.width, MIN_VIEWPORT_WIDTH);
        assert_eq!(vp.height, MIN_VIEWPORT_HEIGHT);
        // The spawn range stays non-empty at the clamped minimum
        assert!(MIN_VIEWPORT_HEIGHT - PIPE_GAP - MIN_PIPE_HEIGHT > MIN_PIPE_HEIGHT);
    }

    #[test]
    fn valid_sizes_pass_through() {
        let vp = Viewport::new(1920.0, 1080.0);
        assert_eq!(vp.width, 1920.0);
        assert_eq!(vp.height, 1080.0);
    }
}
