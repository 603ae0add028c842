//! Data-driven game balance
//!
//! Everything that shapes the arcade feel lives here. The defaults are the
//! tuned table; hosts may override any subset of fields from a JSON file.

use serde::{Deserialize, Serialize};

/// Balance values consumed by the simulation step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity (px/s²)
    pub gravity: f32,
    /// Wall restitution, energy non-increasing (≤ 1)
    pub restitution: f32,
    /// Per-step multiplicative velocity damping
    pub friction: f32,
    /// Flipper restitution, deliberately > 1: flippers inject energy into
    /// play instead of conserving it
    pub flipper_restitution: f32,
    /// Proportional gain driving the flipper toward its target
    pub flipper_speed: f32,
    /// Damping on flipper angular velocity
    pub flipper_damping: f32,
    /// Impulse applied on a press edge when the ball is in capture range
    pub kick_impulse: f32,
    /// Extra reach beyond the capsule surface for the press kick
    pub capture_margin: f32,
    /// Base launch speed (px/s, upward)
    pub launch_speed: f32,
    /// Maximum random addition to the launch speed
    pub launch_jitter: f32,
    /// Balls per game
    pub initial_balls: u8,
    /// Points for a resolved flipper hit
    pub flipper_hit_score: u32,
    /// Points for a press-edge kick
    pub kick_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1900.0,
            restitution: 0.95,
            friction: 0.997,
            flipper_restitution: 1.05,
            flipper_speed: 22.0,
            flipper_damping: 20.0,
            kick_impulse: 1400.0,
            capture_margin: 16.0,
            launch_speed: 1100.0,
            launch_jitter: 250.0,
            initial_balls: 3,
            flipper_hit_score: 1,
            kick_score: 2,
        }
    }
}

impl Tuning {
    /// Parse a tuning override; fields missing from the JSON keep their
    /// default values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
