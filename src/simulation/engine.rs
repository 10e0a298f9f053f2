//! High-level runtime engine settings
//!
//! One engine covers both behaviours of the sandbox: the plain bouncing
//! container (`classic`) and the gravity/damping/wall-correction flavour
//! (`arcade`). Everything that differs between them is a field here.

use serde::Deserialize;

/// How a boundary violation is detected
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryTest {
    #[serde(rename = "strict")] // d > R - r
    Strict,

    #[default]
    #[serde(rename = "tolerant")] // d >= R - r, exact contact counts as a hit
    Tolerant,
}

impl BoundaryTest {
    pub fn violated(self, dist: f64, limit: f64) -> bool {
        match self {
            BoundaryTest::Strict => dist > limit,
            BoundaryTest::Tolerant => dist >= limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub gravity: Option<f64>, // downward acceleration added to vy each tick
    pub damping: f64, // velocity multiplier per tick, 1.0 = no friction
    pub correct_penetration: bool, // project bodies back onto the wall
    pub boundary_test: BoundaryTest,
}

impl Engine {
    /// No gravity, no friction, no wall correction
    pub fn classic() -> Self {
        Self {
            gravity: None,
            damping: 1.0,
            correct_penetration: false,
            boundary_test: BoundaryTest::Tolerant,
        }
    }

    /// Gravity, light friction and wall correction
    pub fn arcade() -> Self {
        Self {
            gravity: Some(0.2),
            damping: 0.999,
            correct_penetration: true,
            boundary_test: BoundaryTest::Tolerant,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::classic()
    }
}
