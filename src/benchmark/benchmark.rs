use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyColor, NVec2, SpawnRequest, World};
use crate::simulation::step::step;

/// Helper to build a World of size `n` packed inside the default container
fn make_world(n: usize) -> World {
    let params = Parameters::default();
    let mut world = World::new(params.container());

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions on a sunflower spiral, no rand needed
        let dist = (i_f / n.max(1) as f64).sqrt() * (params.container_radius - 10.0);
        let angle = i_f * 2.399_963;
        let position = params.center + NVec2::new(dist * angle.cos(), dist * angle.sin());
        let velocity = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);

        world.spawn(SpawnRequest {
            position,
            velocity,
            radius: 3.0,
            color: BodyColor::WHITE,
            restitution: 0.95,
        });
    }

    world
}

/// Time the full step (integrate, walls, all pairs) for a few body counts
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 60; // one second of simulation per size

    for n in ns {
        let mut classic = make_world(n);
        let mut arcade = classic.clone();
        let engine_classic = Engine::classic();
        let engine_arcade = Engine::arcade();

        // Warm up
        step(&mut classic, &engine_classic);
        step(&mut arcade, &engine_arcade);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut classic, &engine_classic);
        }
        let classic_ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            step(&mut arcade, &engine_arcade);
        }
        let arcade_ms = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("N = {n:4}, classic step = {classic_ms:8.4} ms, arcade step = {arcade_ms:8.4} ms");
    }
}

/// Per-step cost for n = 25..=1000 as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let engine = Engine::classic();
    for n in (25..=1000).step_by(25) {
        // Large n: fewer steps to keep the sweep short
        let steps = if n <= 300 { 30 } else { 5 };
        let mut world = make_world(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut world, &engine);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
