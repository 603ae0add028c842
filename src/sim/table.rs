//! Static table geometry
//!
//! Walls are line segments, bumpers are circles. A `Table` is built once at
//! startup and never mutated afterwards; the simulation and the renderer
//! both only read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{LANE_INSET, WALL_MARGIN};

/// A wall segment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
}

impl Wall {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            a: Vec2::new(x1, y1),
            b: Vec2::new(x2, y2),
        }
    }
}

/// An active kicker: on contact the ball is separated and pushed outward
/// along the contact normal, scaled by `kick`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bumper {
    pub center: Vec2,
    /// Outward push strength (px/s² while overlapping)
    pub kick: f32,
    pub radius: f32,
    /// Points awarded per contact
    pub score: u32,
}

/// Immutable table geometry and the boundaries derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Wall>,
    pub bumpers: Vec<Bumper>,
}

impl Table {
    /// The standard table: bordered on three sides, two lower ramps guiding
    /// play toward the flippers, and an open drain along the bottom. The
    /// right edge doubles as the launch lane.
    pub fn standard(width: f32, height: f32) -> Self {
        let w = width;
        let h = height;
        let m = WALL_MARGIN;
        let walls = vec![
            Wall::new(m, m, w - m, m),                        // top
            Wall::new(m, m, m, h - 140.0),                    // left
            Wall::new(w - m, m, w - m, h - m),                // right
            Wall::new(m, h - 180.0, 140.0, h - 120.0),        // lower-left ramp
            Wall::new(w - 80.0, h - 120.0, w - m, h - 160.0), // lower-right ramp
        ];
        let bumpers = vec![
            Bumper {
                center: Vec2::new(140.0, 180.0),
                radius: 24.0,
                kick: 1100.0,
                score: 80,
            },
            Bumper {
                center: Vec2::new(340.0, 200.0),
                radius: 24.0,
                kick: 1100.0,
                score: 80,
            },
            Bumper {
                center: Vec2::new(240.0, 120.0),
                radius: 28.0,
                kick: 1300.0,
                score: 120,
            },
            Bumper {
                center: Vec2::new(240.0, 300.0),
                radius: 20.0,
                kick: 1000.0,
                score: 50,
            },
        ];
        Self {
            width,
            height,
            walls,
            bumpers,
        }
    }

    /// Y past which the ball is drained
    #[inline]
    pub fn drain_y(&self) -> f32 {
        self.height - WALL_MARGIN
    }

    /// X of the launch lane, where the racked ball waits
    #[inline]
    pub fn lane_x(&self) -> f32 {
        self.width - LANE_INSET
    }

    /// Resting y of the racked ball
    #[inline]
    pub fn lane_rest_y(&self) -> f32 {
        self.height - 120.0
    }

    /// Upper y bound of the racked ball's travel in the lane
    #[inline]
    pub fn lane_top_y(&self) -> f32 {
        self.height - 200.0
    }
}
