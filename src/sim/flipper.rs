//! Flipper capsules and their press control
//!
//! A flipper is a capsule (pivot-to-tip segment thickened by a radius)
//! rotating about its pivot. A proportional-derivative controller drives
//! the angle toward the press target; the angle is hard-clamped to its
//! travel range, and angular velocity is zeroed when pushing into a stop.
//!
//! Screen coordinates have +y pointing down: a flipper rests at the raised
//! stop and a press sweeps it down across the ball path, with the
//! press-edge kick supplying the upward impulse.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::table::Table;
use crate::consts::{
    FLIPPER_LENGTH, FLIPPER_PIVOT_INSET, FLIPPER_PIVOT_RAISE, FLIPPER_RADIUS, FLIPPER_SWEEP,
};

/// Which side of the table a flipper sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipperSide {
    Left,
    Right,
}

/// A rotating capsule driven by a press/release flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flipper {
    pub side: FlipperSide,
    pub pivot: Vec2,
    pub length: f32,
    /// Capsule radius around the pivot-to-tip segment
    pub radius: f32,
    /// Angular travel limits (radians)
    pub min_angle: f32,
    pub max_angle: f32,
    pub angle: f32,
    pub angular_vel: f32,
    /// Press flag, written from `TickInput` once per step
    pub pressed: bool,
}

impl Flipper {
    pub fn new(side: FlipperSide, pivot: Vec2) -> Self {
        Self {
            side,
            pivot,
            length: FLIPPER_LENGTH,
            radius: FLIPPER_RADIUS,
            min_angle: -FLIPPER_SWEEP,
            max_angle: FLIPPER_SWEEP,
            angle: -FLIPPER_SWEEP,
            angular_vel: 0.0,
            pressed: false,
        }
    }

    /// Left flipper at its standard position on `table`
    pub fn left(table: &Table) -> Self {
        Self::new(
            FlipperSide::Left,
            Vec2::new(FLIPPER_PIVOT_INSET, table.height - FLIPPER_PIVOT_RAISE),
        )
    }

    /// Right flipper at its standard position on `table`
    pub fn right(table: &Table) -> Self {
        Self::new(
            FlipperSide::Right,
            Vec2::new(table.width - FLIPPER_PIVOT_INSET, table.height - FLIPPER_PIVOT_RAISE),
        )
    }

    /// Tip of the capsule segment at the current angle
    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.pivot + Vec2::new(self.angle.cos(), self.angle.sin()) * self.length
    }

    /// Angle the controller is driving toward
    #[inline]
    pub fn target_angle(&self) -> f32 {
        if self.pressed { self.max_angle } else { self.min_angle }
    }

    /// Advance the PD controller by `dt`:
    /// `accel = speed·(target − angle) − damping·angular_vel`, integrated
    /// semi-implicitly, then clamped to the travel range. Angular velocity
    /// is zeroed only while it is still pushing into the active stop.
    pub fn update(&mut self, speed: f32, damping: f32, dt: f32) {
        let accel = speed * (self.target_angle() - self.angle) - damping * self.angular_vel;
        self.angular_vel += accel * dt;
        self.angle += self.angular_vel * dt;
        if self.angle > self.max_angle {
            self.angle = self.max_angle;
            if self.angular_vel > 0.0 {
                self.angular_vel = 0.0;
            }
        }
        if self.angle < self.min_angle {
            self.angle = self.min_angle;
            if self.angular_vel < 0.0 {
                self.angular_vel = 0.0;
            }
        }
    }

    /// Back to rest: released, at the resting stop, motionless
    pub fn reset(&mut self) {
        self.pressed = false;
        self.angle = self.min_angle;
        self.angular_vel = 0.0;
    }
}
