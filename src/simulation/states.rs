//! Core state types for the collision sandbox.
//!
//! - `Body`      one circular body (position, velocity, fixed radius, restitution)
//! - `Container` the circular arena every body lives in
//! - `World`     the body list plus container, the only mutable simulation state
//!
//! Mass is never stored: `Body::mass()` is always `radius²`, and the radius is
//! private so it cannot change after the body is created.

use nalgebra::Vector2;
use tracing::{debug, warn};

use super::vector::{distance, normalize_or_zero};

pub type NVec2 = Vector2<f64>;

/// Stable identifier handed out by `World::spawn`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Opaque display tag (sRGB bytes), ignored by the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct BodyColor(pub [u8; 3]);

impl BodyColor {
    pub const RED: BodyColor = BodyColor([255, 0, 0]);
    pub const GREEN: BodyColor = BodyColor([0, 255, 0]);
    pub const BLUE: BodyColor = BodyColor([0, 0, 255]);
    pub const WHITE: BodyColor = BodyColor([255, 255, 255]);
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    pub position: NVec2, // container-local position
    pub velocity: NVec2, // position delta per tick
    radius: f64,
    pub restitution: f64, // coefficient of elasticity, [0, ~1.01]
    pub color: BodyColor,
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass law of the sandbox: heavier by radius squared
    pub fn mass(&self) -> f64 {
        self.radius * self.radius
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.norm_squared()
    }

    pub fn momentum(&self) -> NVec2 {
        self.mass() * self.velocity
    }

    /// Point hit-test used by removal requests (strictly inside the disc)
    pub fn contains(&self, point: &NVec2) -> bool {
        distance(point, &self.position) < self.radius
    }
}

/// Circular arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub center: NVec2,
    pub radius: f64,
}

impl Container {
    pub fn new(center: NVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Outward unit normal at `point`, zero when `point` is the center
    pub fn outward_normal(&self, point: &NVec2) -> NVec2 {
        normalize_or_zero(&(*point - self.center))
    }
}

/// Everything needed to create a body; position must already lie inside the
/// container (the next boundary pass corrects it otherwise)
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub position: NVec2,
    pub velocity: NVec2,
    pub radius: f64,
    pub color: BodyColor,
    pub restitution: f64,
}

/// Remove the first body whose disc contains `point`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemoveRequest {
    pub point: NVec2,
}

#[derive(Debug, Clone)]
pub struct World {
    pub container: Container,
    bodies: Vec<Body>,
    next_id: u64,
    pub tick: u64, // completed steps
}

impl World {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            bodies: Vec::new(),
            next_id: 0,
            tick: 0,
        }
    }

    /// Read-only view for drawing and diagnostics
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for the resolvers. Radius stays private, so the mass
    /// law holds whatever a caller does with this slice.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Append a body. Rejects radii that are non-finite, non-positive or
    /// larger than the container.
    pub fn spawn(&mut self, req: SpawnRequest) -> Option<BodyId> {
        let r = req.radius;
        if !r.is_finite() || r <= 0.0 || r > self.container.radius {
            warn!(radius = r, container = self.container.radius, "rejected spawn request");
            return None;
        }
        if !req.position.iter().all(|c| c.is_finite()) || !req.velocity.iter().all(|c| c.is_finite()) {
            warn!(position = ?req.position, velocity = ?req.velocity, "rejected spawn request with non-finite state");
            return None;
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;

        self.bodies.push(Body {
            id,
            position: req.position,
            velocity: req.velocity,
            radius: r,
            restitution: req.restitution,
            color: req.color,
        });
        debug!(id = id.0, x = req.position.x, y = req.position.y, radius = r, "spawned body");

        Some(id)
    }

    /// Remove the first body (in list order) that contains the point
    pub fn remove_at(&mut self, req: RemoveRequest) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.contains(&req.point))?;
        let body = self.bodies.remove(idx);
        debug!(id = body.id.0, "removed body");
        Some(body)
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }
}
