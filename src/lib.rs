//! Silverball - an arcade pinball table simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, HUD text, and event wiring are host concerns: a host pushes
//! flags into [`sim::TickInput`] once per display frame, steps the
//! simulation, and reads ball/flipper/table state back out for display.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single integration step; long frame stalls would
    /// otherwise let the ball tunnel through thin geometry
    pub const MAX_DT: f32 = 1.0 / 30.0;
    /// Distance floor for degenerate geometry (zero-length segments,
    /// coincident centers)
    pub const EPSILON: f32 = 1e-4;

    /// Table dimensions
    pub const TABLE_WIDTH: f32 = 480.0;
    pub const TABLE_HEIGHT: f32 = 640.0;
    /// Outer wall inset from the table edge
    pub const WALL_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 11.0;
    /// Trail history length
    pub const TRAIL_LENGTH: usize = 18;

    /// Launch lane x inset from the right edge
    pub const LANE_INSET: f32 = 35.0;

    /// Flipper geometry
    pub const FLIPPER_LENGTH: f32 = 100.0;
    pub const FLIPPER_RADIUS: f32 = 14.0;
    /// Pivot inset from the side edge
    pub const FLIPPER_PIVOT_INSET: f32 = 170.0;
    /// Pivot height above the bottom edge
    pub const FLIPPER_PIVOT_RAISE: f32 = 110.0;
    /// Angular travel either side of horizontal (radians)
    pub const FLIPPER_SWEEP: f32 = 25.0 * std::f32::consts::PI / 180.0;
}

/// Perpendicular vector (counter-clockwise quarter turn)
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
