//! Body vs container wall response
//!
//! A body violates the wall when its center is `R - r` or further from the
//! container center. Violations reflect the velocity about the outward normal
//! with the body's own restitution and, when the engine asks for it, project
//! the body back onto the wall.

use super::engine::Engine;
use super::states::{Body, Container};
use super::vector::{distance, dot};

/// Outcome of one wall check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Clear, // inside the allowed disc
    Degenerate, // violation with the center exactly on the container center
    Touching, // violation, velocity already pointing inward
    Bounced, // violation, velocity reflected
}

/// Check and resolve one body against the wall.
///
/// Idempotent: a second call on the result only re-projects onto the same
/// point and never reflects again, because the velocity now points inward.
pub fn resolve_boundary(body: &mut Body, container: &Container, engine: &Engine) -> WallContact {
    let limit = container.radius - body.radius();
    let d = distance(&body.position, &container.center);

    if !engine.boundary_test.violated(d, limit) {
        return WallContact::Clear;
    }

    // Outward normal; zero when the body sits on the center (only possible
    // here when r == R). No correction in that case.
    let n = container.outward_normal(&body.position);
    if n.x == 0.0 && n.y == 0.0 {
        return WallContact::Degenerate;
    }

    if engine.correct_penetration {
        body.position = container.center + n * limit;
    }

    // v <- v - (1 + e)(v.n) n, only while moving outward
    let v_dot_n = dot(&body.velocity, &n);
    if v_dot_n <= 0.0 {
        return WallContact::Touching;
    }
    body.velocity -= (1.0 + body.restitution) * v_dot_n * n;

    WallContact::Bounced
}

/// Run the wall check over every body, returning how many bounced
pub fn resolve_boundaries(bodies: &mut [Body], container: &Container, engine: &Engine) -> usize {
    let mut bounced = 0;
    for b in bodies.iter_mut() {
        if resolve_boundary(b, container, engine) == WallContact::Bounced {
            bounced += 1;
        }
    }
    bounced
}
