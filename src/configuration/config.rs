//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – physics switches (gravity, damping, wall correction)
//! - [`ParametersConfig`] – container geometry, tick rate, seed
//! - [`ControlsConfig`]   – spawn panel limits
//! - [`BodyConfig`]       – optional bodies present at startup
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional; missing values fall back to the plain sandbox.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   gravity: 0.2            # omit or null for no gravity
//!   damping: 0.999          # velocity multiplier per tick
//!   correct_penetration: true
//!   boundary_test: "tolerant"   # or "strict"
//!   decorations: true       # trails and collision flashes in the viewer
//!
//! parameters:
//!   center: [400.0, 300.0]
//!   container_radius: 290.0
//!   tick_rate: 60.0
//!   seed: 7                 # omit for a random seed
//!
//! controls:
//!   max_bounciness: 1.01
//!
//! bodies:
//!   - x: [300.0, 300.0]
//!     v: [5.0, 0.0]
//!     radius: 10.0
//!     color: [255, 0, 0]
//!     restitution: 0.9
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::controls::input::DEFAULT_MAX_BOUNCINESS;
use crate::simulation::engine::{BoundaryTest, Engine};
use crate::simulation::params::{DEFAULT_CENTER, DEFAULT_CONTAINER_RADIUS, DEFAULT_TICK_RATE};
use crate::simulation::states::BodyColor;

/// Physics switches; defaults reproduce the plain bouncing sandbox
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub gravity: Option<f64>, // downward acceleration per tick^2
    pub damping: f64, // (0, 1], 1 = no friction
    pub correct_penetration: bool, // project bodies back onto the wall
    pub boundary_test: BoundaryTest, // strict (>) or tolerant (>=)
    pub decorations: bool, // viewer trails and flashes
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: None,
            damping: 1.0,
            correct_penetration: false,
            boundary_test: BoundaryTest::Tolerant,
            decorations: false,
        }
    }
}

impl EngineConfig {
    pub fn to_engine(&self) -> Engine {
        Engine {
            gravity: self.gravity,
            damping: self.damping,
            correct_penetration: self.correct_penetration,
            boundary_test: self.boundary_test,
        }
    }
}

/// Container geometry and timing
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub center: [f64; 2], // container center in window pixels
    pub container_radius: f64, // container radius
    pub tick_rate: f64, // physics steps per second
    pub seed: Option<u64>, // deterministic spawn positions when set
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            container_radius: DEFAULT_CONTAINER_RADIUS,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub max_bounciness: f64, // upper end of the bounciness slider
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            max_bounciness: DEFAULT_MAX_BOUNCINESS,
        }
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 2], // position
    #[serde(default)]
    pub v: [f64; 2], // velocity per tick
    pub radius: f64, // radius, mass is radius^2
    #[serde(default = "default_color")]
    pub color: BodyColor, // display color
    #[serde(default = "default_restitution")]
    pub restitution: f64, // coefficient of elasticity
}

fn default_color() -> BodyColor {
    BodyColor::RED
}

fn default_restitution() -> f64 {
    0.9
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub controls: ControlsConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).context("invalid scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid scenario {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(
            p.container_radius.is_finite() && p.container_radius > 0.0,
            "container_radius must be positive, got {}",
            p.container_radius
        );
        ensure!(p.center.iter().all(|c| c.is_finite()), "center must be finite");
        ensure!(
            p.tick_rate.is_finite() && p.tick_rate > 0.0,
            "tick_rate must be positive, got {}",
            p.tick_rate
        );

        let e = &self.engine;
        ensure!(
            e.damping > 0.0 && e.damping <= 1.0,
            "damping must be in (0, 1], got {}",
            e.damping
        );
        if let Some(g) = e.gravity {
            ensure!(g.is_finite(), "gravity must be finite");
        }

        ensure!(
            self.controls.max_bounciness.is_finite() && self.controls.max_bounciness >= 0.8,
            "max_bounciness must be at least 0.8, got {}",
            self.controls.max_bounciness
        );

        for (i, b) in self.bodies.iter().enumerate() {
            ensure!(
                b.radius.is_finite() && b.radius > 0.0,
                "body {i}: radius must be positive, got {}",
                b.radius
            );
            ensure!(
                b.radius <= p.container_radius,
                "body {i}: radius {} exceeds container radius {}",
                b.radius,
                p.container_radius
            );
            ensure!(
                b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()),
                "body {i}: position and velocity must be finite"
            );
            ensure!(
                b.restitution.is_finite() && b.restitution >= 0.0,
                "body {i}: restitution must be non-negative, got {}",
                b.restitution
            );
        }

        Ok(())
    }
}
