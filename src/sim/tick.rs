//! Per-frame simulation step
//!
//! One `tick` per display frame: flipper control, ball integration, then
//! collision resolution in fixed order (walls, bumpers, flippers), then the
//! drain check. The step duration is clamped so long frame stalls cannot
//! tunnel the ball through thin geometry.

use crate::consts::MAX_DT;
use crate::tuning::Tuning;

use super::collision::{circle_segment_contact, resolve_bumper, resolve_flipper, resolve_wall};
use super::flipper::Flipper;
use super::state::{Ball, GameState};

/// Input flags for a single tick.
///
/// Hosts write these from their event callbacks; the step function reads
/// them exactly once, so flag writes and stepping never interleave.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left_pressed: bool,
    pub right_pressed: bool,
    /// One-shot: cleared after the step that consumes it
    pub launch: bool,
}

/// Advance the simulation by one clamped time step
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_DT);

    if input.launch {
        state.launch();
    }

    // Flipper control; a rising press edge also fires the capture kick
    let pressed = [input.left_pressed, input.right_pressed];
    for i in 0..2 {
        let was_pressed = state.flippers[i].pressed;
        state.flippers[i].pressed = pressed[i];
        if pressed[i]
            && !was_pressed
            && press_kick(&mut state.ball, &state.flippers[i], &state.tuning)
        {
            state.score += state.tuning.kick_score as u64;
            log::debug!("press kick on {:?} flipper", state.flippers[i].side);
        }
        state.flippers[i].update(state.tuning.flipper_speed, state.tuning.flipper_damping, dt);
    }

    // Ball integration: semi-implicit Euler with multiplicative damping
    // while live, pinned to the launch lane while racked
    if state.ball.in_play {
        state.ball.vel.y += state.tuning.gravity * dt;
        let vel = state.ball.vel;
        state.ball.pos += vel * dt;
        state.ball.vel *= state.tuning.friction;
        state.ball.record_trail();
    } else {
        state.ball.pos.x = state.table.lane_x();
        state.ball.pos.y = state
            .ball
            .pos
            .y
            .clamp(state.table.lane_top_y(), state.table.lane_rest_y());
    }

    // Fixed resolution order: walls, then bumpers, then flippers
    for wall in &state.table.walls {
        resolve_wall(&mut state.ball, wall, state.tuning.restitution);
    }

    for bumper in &state.table.bumpers {
        if resolve_bumper(&mut state.ball, bumper, dt) {
            state.score += bumper.score as u64;
            log::debug!("bumper at {} kicked, +{}", bumper.center, bumper.score);
        }
    }

    for i in 0..2 {
        if resolve_flipper(&mut state.ball, &state.flippers[i], state.tuning.flipper_restitution) {
            state.score += state.tuning.flipper_hit_score as u64;
        }
    }

    // Drain: past the bottom boundary the ball's life ends and it re-racks
    if state.ball.pos.y + state.ball.radius > state.table.drain_y() {
        if state.ball.in_play {
            state.balls_remaining = state.balls_remaining.saturating_sub(1);
            if state.balls_remaining == 0 {
                log::info!("game over, final score {}", state.score);
            } else {
                log::info!("ball drained, {} remaining", state.balls_remaining);
            }
        }
        state.ball.reset_to_lane(&state.table);
    }
}

/// Rising-edge press kick.
///
/// A single low-frequency step can miss contact at the instant of a fast
/// press, so the edge itself checks an enlarged capture radius around the
/// flipper segment and applies an immediate impulse along the contact
/// normal, forcing the ball into play.
fn press_kick(ball: &mut Ball, flipper: &Flipper, tuning: &Tuning) -> bool {
    let capture = ball.radius + flipper.radius + tuning.capture_margin;
    let contact = circle_segment_contact(ball.pos, capture, flipper.pivot, flipper.tip());
    if !contact.hit {
        return false;
    }
    ball.vel += contact.normal * tuning.kick_impulse;
    ball.in_play = true;
    true
}

impl GameState {
    /// Step using the internally buffered input flags (the
    /// [`set_flipper_pressed`](GameState::set_flipper_pressed) /
    /// [`launch`](GameState::launch) surface). One-shot flags are cleared
    /// once consumed.
    pub fn step(&mut self, dt: f32) {
        let input = self.input.clone();
        tick(self, &input, dt);
        self.input.launch = false;
    }
}
