//! One simulation tick: integrate, then walls, then pairs.
//!
//! The order is fixed. Wall bounces see the freshly integrated positions and
//! pair collisions see the post-bounce state.

use tracing::trace;

use super::boundary::resolve_boundaries;
use super::collisions::{resolve_pairs, ImpulseEvent};
use super::engine::Engine;
use super::integrator::euler_integrator;
use super::states::World;

/// What happened during a tick, for cosmetic consumers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub impulses: Vec<ImpulseEvent>,
    pub wall_bounces: usize,
}

pub fn step(world: &mut World, engine: &Engine) -> StepReport {
    let container = world.container;
    let bodies = world.bodies_mut();

    euler_integrator(bodies, engine);

    let wall_bounces = resolve_boundaries(bodies, &container, engine);

    let mut impulses = Vec::new();
    resolve_pairs(bodies, |event| impulses.push(event));

    world.tick += 1;
    trace!(tick = world.tick, bodies = world.len(), wall_bounces, impulses = impulses.len(), "step");

    StepReport {
        impulses,
        wall_bounces,
    }
}
