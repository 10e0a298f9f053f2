//! Build a fully-initialized sandbox from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine switches (`Engine`)
//! - container and timing (`Parameters`)
//! - the body list (`World`)
//! - the spawn panel state (`SpawnControls`)
//! - the RNG used for spawn positions
//!
//! The scenario is inserted into Bevy as a `Resource`; requests from the
//! input layer are applied here, between ticks, never during a step.

use std::f64::consts::TAU;

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::controls::input::{Request, SpawnControls, SpawnSettings};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, Container, NVec2, SpawnRequest, World};
use crate::simulation::step::{step, StepReport};

/// Uniform-by-area point inside the disc of radius `R - r`
///
/// angle ~ U[0, 2pi), distance = sqrt(U[0, 1)) * (R - r)
pub fn random_position<R: Rng>(rng: &mut R, container: &Container, radius: f64) -> NVec2 {
    let angle = rng.gen_range(0.0..TAU);
    let reach = (container.radius - radius).max(0.0);
    let dist = rng.gen::<f64>().sqrt() * reach;
    container.center + NVec2::new(dist * angle.cos(), dist * angle.sin())
}

/// Bevy resource holding the whole sandbox
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
    pub controls: SpawnControls,
    pub decorations: bool, // viewer draws trails and flashes
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            center: NVec2::new(p_cfg.center[0], p_cfg.center[1]),
            container_radius: p_cfg.container_radius,
            tick_rate: p_cfg.tick_rate,
            seed: p_cfg.seed,
        };

        let engine = cfg.engine.to_engine();

        let rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Bodies: map `BodyConfig` -> runtime `Body` through the normal spawn path
        let mut world = World::new(parameters.container());
        for bc in &cfg.bodies {
            world.spawn(body_request(bc));
        }

        info!(
            bodies = world.len(),
            container_radius = parameters.container_radius,
            gravity = ?engine.gravity,
            damping = engine.damping,
            correct_penetration = engine.correct_penetration,
            "scenario built"
        );

        Self {
            engine,
            parameters,
            world,
            controls: SpawnControls::new(cfg.controls.max_bounciness),
            decorations: cfg.engine.decorations,
            rng,
        }
    }

    /// Run one fixed tick
    pub fn step(&mut self) -> StepReport {
        step(&mut self.world, &self.engine)
    }

    /// Spawn at a random position with the given settings
    pub fn spawn_random(&mut self, settings: SpawnSettings) -> Option<BodyId> {
        let position = random_position(&mut self.rng, &self.world.container, settings.radius);
        self.world.spawn(SpawnRequest {
            position,
            velocity: settings.velocity,
            radius: settings.radius,
            color: settings.color,
            restitution: settings.restitution,
        })
    }

    /// Spawn using the current slider values and selected color
    pub fn spawn_from_controls(&mut self) -> Option<BodyId> {
        let settings = self.controls.settings();
        self.spawn_random(settings)
    }

    /// Apply one UI request between ticks
    pub fn apply(&mut self, request: Request) {
        match request {
            Request::Spawn(settings) => {
                self.spawn_random(settings);
            }
            Request::Remove(req) => {
                self.world.remove_at(req);
            }
            Request::Clear => {
                info!(removed = self.world.len(), "cleared all bodies");
                self.world.clear();
            }
        }
    }
}

fn body_request(bc: &BodyConfig) -> SpawnRequest {
    SpawnRequest {
        position: NVec2::new(bc.x[0], bc.x[1]),
        velocity: NVec2::new(bc.v[0], bc.v[1]),
        radius: bc.radius,
        color: bc.color,
        restitution: bc.restitution,
    }
}
