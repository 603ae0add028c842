//! Game state and core simulation types
//!
//! Everything the step function touches is owned by [`GameState`]; two
//! states never share anything, so independent simulations can run side by
//! side (the tests rely on this).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flipper::{Flipper, FlipperSide};
use super::table::Table;
use super::tick::TickInput;
use crate::consts::{BALL_RADIUS, TABLE_HEIGHT, TABLE_WIDTH, TRAIL_LENGTH};
use crate::tuning::Tuning;

/// Current phase of gameplay, derived from ball and ball-count state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball racked in the launch lane, waiting for launch input
    Ready,
    /// Ball live on the table
    Playing,
    /// All balls drained
    GameOver,
}

/// The single dynamic body on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// False while racked in the launch lane
    pub in_play: bool,
    /// Recent positions for rendering (newest last)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

impl Ball {
    /// A ball racked in `table`'s launch lane
    pub fn racked(table: &Table) -> Self {
        Self {
            pos: Vec2::new(table.lane_x(), table.lane_rest_y()),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            in_play: false,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record the current position to the trail (call each tick when live)
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }

    /// Re-rack after a drain
    pub fn reset_to_lane(&mut self, table: &Table) {
        self.pos = Vec2::new(table.lane_x(), table.lane_rest_y());
        self.vel = Vec2::ZERO;
        self.in_play = false;
        self.trail.clear();
    }
}

/// One complete simulation: static table, dynamic bodies, score and ball
/// accounting, buffered input flags, and the seeded RNG for launch jitter
#[derive(Debug, Clone)]
pub struct GameState {
    pub table: Table,
    pub ball: Ball,
    pub flippers: [Flipper; 2],
    /// Monotonically non-decreasing
    pub score: u64,
    /// Balls not yet lost, including the racked one
    pub balls_remaining: u8,
    pub tuning: Tuning,
    /// Input flags written by the host, consumed once per step
    pub input: TickInput,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let table = Table::standard(TABLE_WIDTH, TABLE_HEIGHT);
        let ball = Ball::racked(&table);
        let flippers = [Flipper::left(&table), Flipper::right(&table)];
        let balls_remaining = tuning.initial_balls;
        Self {
            table,
            ball,
            flippers,
            score: 0,
            balls_remaining,
            tuning,
            input: TickInput::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Write a flipper press flag; the edge is consumed by the next step
    pub fn set_flipper_pressed(&mut self, side: FlipperSide, pressed: bool) {
        match side {
            FlipperSide::Left => self.input.left_pressed = pressed,
            FlipperSide::Right => self.input.right_pressed = pressed,
        }
    }

    /// Put the racked ball into play with an upward, jittered velocity.
    ///
    /// A no-op when the ball is already live or no balls remain.
    pub fn launch(&mut self) {
        if self.ball.in_play || self.balls_remaining == 0 {
            return;
        }
        let jitter = self.rng.random::<f32>() * self.tuning.launch_jitter;
        self.ball.vel = Vec2::new(0.0, -(self.tuning.launch_speed + jitter));
        self.ball.in_play = true;
        log::info!("ball launched at {:.0} px/s", -self.ball.vel.y);
    }

    /// Derived phase for the HUD
    pub fn phase(&self) -> GamePhase {
        if self.ball.in_play {
            GamePhase::Playing
        } else if self.balls_remaining == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Ready
        }
    }

    /// Full reinitialization: score, ball count, ball, flippers. Calling it
    /// twice in a row is the same as calling it once.
    pub fn reset(&mut self) {
        self.score = 0;
        self.balls_remaining = self.tuning.initial_balls;
        self.ball.reset_to_lane(&self.table);
        for flipper in &mut self.flippers {
            flipper.reset();
        }
        self.input = TickInput::default();
        log::info!("game reset");
    }
}
