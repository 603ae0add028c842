//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic
//! for a given seed and input sequence:
//! - Seeded RNG only (launch jitter)
//! - No rendering or platform dependencies
//! - One `tick` per display frame, variable dt clamped to `MAX_DT`

pub mod collision;
pub mod flipper;
pub mod state;
pub mod table;
pub mod tick;

pub use collision::{
    Contact, circle_circle_contact, circle_segment_contact, resolve_bumper, resolve_flipper,
    resolve_wall,
};
pub use flipper::{Flipper, FlipperSide};
pub use state::{Ball, GamePhase, GameState};
pub use table::{Bumper, Table, Wall};
pub use tick::{TickInput, tick};
