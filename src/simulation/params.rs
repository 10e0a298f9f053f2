//! Runtime parameters fixed at startup
//!
//! `Parameters` holds:
//! - container center and radius,
//! - fixed tick rate (steps per second),
//! - optional RNG seed for spawn positions

use super::states::{Container, NVec2};

pub const DEFAULT_CENTER: [f64; 2] = [400.0, 300.0];
pub const DEFAULT_CONTAINER_RADIUS: f64 = 290.0;
pub const DEFAULT_TICK_RATE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub center: NVec2, // container center
    pub container_radius: f64, // container radius
    pub tick_rate: f64, // steps per second
    pub seed: Option<u64>, // None = seed from entropy
}

impl Parameters {
    pub fn container(&self) -> Container {
        Container::new(self.center, self.container_radius)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            center: NVec2::new(DEFAULT_CENTER[0], DEFAULT_CENTER[1]),
            container_radius: DEFAULT_CONTAINER_RADIUS,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}
