//! Collision detection and response
//!
//! The tricky part of the table: closed-form contact queries between the
//! ball and segments, circles, and rotating capsules, and the impulse
//! responses for each. Every query returns a [`Contact`] with a unit normal
//! pointing toward the ball and a penetration depth for positional
//! correction.

use glam::Vec2;

use super::flipper::Flipper;
use super::state::Ball;
use super::table::{Bumper, Wall};
use crate::consts::EPSILON;
use crate::perp;

/// Result of a contact query
#[derive(Debug, Clone)]
pub struct Contact {
    /// Whether the shapes overlap
    pub hit: bool,
    /// Nearest point on the tested shape (if hit)
    pub point: Vec2,
    /// Unit normal pointing from the shape toward the ball center
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

impl Contact {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Contact between a circle and a segment.
///
/// Projects the center onto the segment, clamps the parameter to [0, 1],
/// and tests the nearest point. A zero-length segment degrades to a point
/// test; a center sitting exactly on the segment resolves to a miss rather
/// than a divide-by-zero normal.
pub fn circle_segment_contact(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> Contact {
    let ab = b - a;
    let len_sq = ab.length_squared().max(EPSILON);
    let t = ((center - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let point = a + ab * t;
    let delta = center - point;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius || dist_sq < EPSILON * EPSILON {
        return Contact::miss();
    }
    let dist = dist_sq.sqrt();
    Contact {
        hit: true,
        point,
        normal: delta / dist,
        penetration: radius - dist,
    }
}

/// Contact between two circles; the normal points from `other` toward
/// `center`
pub fn circle_circle_contact(center: Vec2, radius: f32, other: Vec2, other_radius: f32) -> Contact {
    let r_sum = radius + other_radius;
    let delta = center - other;
    let dist_sq = delta.length_squared();
    if dist_sq >= r_sum * r_sum || dist_sq < EPSILON * EPSILON {
        return Contact::miss();
    }
    let dist = dist_sq.sqrt();
    let normal = delta / dist;
    Contact {
        hit: true,
        point: other + normal * other_radius,
        normal,
        penetration: r_sum - dist,
    }
}

/// Resolve the ball against a wall segment.
///
/// Pushes the ball out along the normal by the penetration depth and
/// reflects the normal velocity component with `v' = v - (1 + e)(v·n)n`,
/// only while the ball is moving into the surface. Returns whether a
/// contact was resolved.
pub fn resolve_wall(ball: &mut Ball, wall: &Wall, restitution: f32) -> bool {
    let contact = circle_segment_contact(ball.pos, ball.radius, wall.a, wall.b);
    if !contact.hit {
        return false;
    }
    ball.pos += contact.normal * contact.penetration;
    let vn = ball.vel.dot(contact.normal);
    if vn < 0.0 {
        ball.vel -= contact.normal * ((1.0 + restitution) * vn);
    }
    true
}

/// Resolve the ball against a bumper.
///
/// Bumpers are active kickers, not passive elastic bodies: alongside the
/// positional separation they add an outward push scaled by the step
/// duration. Scoring is the caller's side effect.
pub fn resolve_bumper(ball: &mut Ball, bumper: &Bumper, dt: f32) -> bool {
    let contact = circle_circle_contact(ball.pos, ball.radius, bumper.center, bumper.radius);
    if !contact.hit {
        return false;
    }
    ball.vel += contact.normal * (bumper.kick * dt);
    ball.pos += contact.normal * contact.penetration;
    true
}

/// Resolve the ball against a flipper capsule.
///
/// The capsule is the pivot-to-tip segment thickened by the flipper radius,
/// so the query is the segment test with an enlarged circle. The contact
/// point's own velocity (`ω × r_arm`, perpendicular formula) is subtracted
/// before the impulse and added back after, so a swinging flipper transfers
/// real momentum to the ball. Returns true when an impulse was applied;
/// a separating contact still gets positional correction.
pub fn resolve_flipper(ball: &mut Ball, flipper: &Flipper, restitution: f32) -> bool {
    let contact = circle_segment_contact(
        ball.pos,
        ball.radius + flipper.radius,
        flipper.pivot,
        flipper.tip(),
    );
    if !contact.hit {
        return false;
    }
    ball.pos += contact.normal * contact.penetration;

    let arm = contact.point - flipper.pivot;
    let contact_vel = perp(arm) * flipper.angular_vel;
    let rel = ball.vel - contact_vel;
    let vn = rel.dot(contact.normal);
    if vn >= 0.0 {
        return false;
    }
    let j = -(1.0 + restitution) * vn;
    ball.vel = rel + contact.normal * j + contact_vel;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FLIPPER_SWEEP;
    use crate::sim::flipper::FlipperSide;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 11.0,
            in_play: true,
            trail: Vec::new(),
        }
    }

    fn flipper_at(pivot: Vec2, angle: f32, angular_vel: f32) -> Flipper {
        Flipper {
            side: FlipperSide::Left,
            pivot,
            length: 100.0,
            radius: 14.0,
            min_angle: -FLIPPER_SWEEP,
            max_angle: FLIPPER_SWEEP,
            angle,
            angular_vel,
            pressed: false,
        }
    }

    #[test]
    fn test_segment_contact_face_hit() {
        let contact =
            circle_segment_contact(Vec2::new(50.0, 105.0), 11.0, Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0));
        assert!(contact.hit);
        assert!((contact.normal - Vec2::new(0.0, 1.0)).length() < 1e-5);
        assert!((contact.penetration - 6.0).abs() < 1e-4);
        assert_eq!(contact.point, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_segment_contact_endpoint_clamp() {
        // Center beyond the b endpoint: nearest point clamps to b
        let contact =
            circle_segment_contact(Vec2::new(108.0, 100.0), 11.0, Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0));
        assert!(contact.hit);
        assert_eq!(contact.point, Vec2::new(100.0, 100.0));
        assert!((contact.normal - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_segment_contact_miss() {
        let contact =
            circle_segment_contact(Vec2::new(50.0, 120.0), 11.0, Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0));
        assert!(!contact.hit);
    }

    #[test]
    fn test_zero_length_segment_degrades_to_point() {
        let p = Vec2::new(10.0, 10.0);
        let contact = circle_segment_contact(Vec2::new(15.0, 10.0), 11.0, p, p);
        assert!(contact.hit);
        assert!((contact.normal - Vec2::new(1.0, 0.0)).length() < 1e-5);
        assert!((contact.penetration - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_center_on_segment_is_a_miss() {
        // Degenerate: no meaningful normal, so no impulse either
        let contact =
            circle_segment_contact(Vec2::new(50.0, 100.0), 11.0, Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0));
        assert!(!contact.hit);
    }

    #[test]
    fn test_wall_reflection_scales_by_restitution() {
        let wall = Wall::new(0.0, 100.0, 100.0, 100.0);
        // Approaching the wall from above (normal will point -y)
        let mut ball = ball_at(50.0, 95.0, 0.0, 100.0);
        let resolved = resolve_wall(&mut ball, &wall, 0.95);
        assert!(resolved);
        // v' = v - (1 + e)(v·n)n with v·n = -100
        assert!((ball.vel.y - (-95.0)).abs() < 1e-3);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_wall_resolution_separates_ball() {
        let wall = Wall::new(0.0, 100.0, 100.0, 100.0);
        let mut ball = ball_at(50.0, 95.0, 0.0, 100.0);
        resolve_wall(&mut ball, &wall, 0.95);
        let contact = circle_segment_contact(ball.pos, ball.radius, wall.a, wall.b);
        // Post-resolution distance to the wall is at least the radius
        assert!(!contact.hit || contact.penetration < 1e-3);
    }

    #[test]
    fn test_wall_no_reflection_when_separating() {
        let wall = Wall::new(0.0, 100.0, 100.0, 100.0);
        // Overlapping but already moving away from the wall
        let mut ball = ball_at(50.0, 105.0, 30.0, 40.0);
        let resolved = resolve_wall(&mut ball, &wall, 0.95);
        assert!(resolved);
        assert_eq!(ball.vel, Vec2::new(30.0, 40.0));
        // Position still corrected
        assert!((ball.pos.y - 111.0).abs() < 1e-4);
    }

    #[test]
    fn test_bumper_separates_to_exact_radius_sum() {
        let bumper = Bumper {
            center: Vec2::new(100.0, 100.0),
            radius: 24.0,
            kick: 1100.0,
            score: 80,
        };
        // Overlapping by 3 px: center distance 32, radius sum 35
        let mut ball = ball_at(132.0, 100.0, 0.0, 0.0);
        let resolved = resolve_bumper(&mut ball, &bumper, 1.0 / 60.0);
        assert!(resolved);
        let separation = (ball.pos - bumper.center).length();
        assert!((separation - 35.0).abs() < 1e-4);
        // Kick impulse scaled by dt, directed outward
        assert!((ball.vel.x - 1100.0 / 60.0).abs() < 1e-3);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_bumper_miss_outside_radius_sum() {
        let bumper = Bumper {
            center: Vec2::new(100.0, 100.0),
            radius: 24.0,
            kick: 1100.0,
            score: 80,
        };
        let mut ball = ball_at(140.0, 100.0, 0.0, 0.0);
        assert!(!resolve_bumper(&mut ball, &bumper, 1.0 / 60.0));
        assert_eq!(ball.pos, Vec2::new(140.0, 100.0));
    }

    #[test]
    fn test_swinging_flipper_imparts_momentum() {
        // Horizontal flipper, tip swinging downward, resting ball above it
        let flipper = flipper_at(Vec2::ZERO, 0.0, 10.0);
        let mut ball = ball_at(50.0, 20.0, 0.0, 0.0);
        let resolved = resolve_flipper(&mut ball, &flipper, 1.05);
        assert!(resolved);
        // Contact point at (50, 0) moves at ω × r = (0, 500); the resting
        // ball is flung along the normal faster than the surface itself
        assert!(ball.vel.y > 500.0);
        assert!((ball.vel.y - 1025.0).abs() < 1.0);
    }

    #[test]
    fn test_static_flipper_amplifies_by_restitution() {
        let flipper = flipper_at(Vec2::ZERO, 0.0, 0.0);
        let mut ball = ball_at(50.0, 20.0, 0.0, -200.0);
        let resolved = resolve_flipper(&mut ball, &flipper, 1.05);
        assert!(resolved);
        assert!((ball.vel.y - 210.0).abs() < 1e-2);
    }

    #[test]
    fn test_separating_flipper_contact_applies_no_impulse() {
        let flipper = flipper_at(Vec2::ZERO, 0.0, 0.0);
        // Overlapping the capsule but moving away
        let mut ball = ball_at(50.0, 20.0, 0.0, 150.0);
        let resolved = resolve_flipper(&mut ball, &flipper, 1.05);
        assert!(!resolved);
        assert_eq!(ball.vel, Vec2::new(0.0, 150.0));
        // Separation still happened: effective radius is 11 + 14
        assert!((ball.pos.y - 25.0).abs() < 1e-4);
    }
}
