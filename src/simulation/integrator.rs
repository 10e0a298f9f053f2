//! Fixed-step motion integrator
//!
//! Explicit Euler, one step per tick, no sub-stepping. Velocities are in
//! position units per tick, so there is no `dt` factor.

use super::engine::Engine;
use super::states::Body;

/// Advance every body by one tick
///
/// Order per body: gravity into `vy`, then damping on the whole velocity,
/// then position from the already-updated velocity
pub fn euler_integrator(bodies: &mut [Body], engine: &Engine) {
    for b in bodies.iter_mut() {
        integrate_body(b, engine);
    }
}

fn integrate_body(b: &mut Body, engine: &Engine) {
    // v_y += g (downward is +y in container coordinates)
    if let Some(g) = engine.gravity {
        b.velocity.y += g;
    }

    // v *= damping
    if engine.damping != 1.0 {
        b.velocity *= engine.damping;
    }

    // x_n+1 = x_n + v_n+1
    b.position += b.velocity;
}
