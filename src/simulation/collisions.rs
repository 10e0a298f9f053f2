//! Pairwise body vs body collision response
//!
//! Direct all-pairs O(n^2) sweep, single pass, pairs visited in increasing
//! `(i, j)` order. Impulses are applied sequentially, so a body touching
//! several neighbours in one tick takes them one after another. Overlap is
//! never corrected positionally; bodies may sit inside each other for a few
//! ticks while they separate.

use super::states::{Body, BodyId, NVec2};
use super::vector::{dot, normalize_or};

/// Below this separation two centers count as coincident
pub const COINCIDENT_EPS: f64 = 1e-9;

/// Floor for the combined inverse mass in the impulse denominator
pub const INV_MASS_FLOOR: f64 = 1e-12;

/// Normal used when two centers coincide: +x
pub fn default_normal() -> NVec2 {
    NVec2::new(1.0, 0.0)
}

/// One applied impulse, reported to whoever draws the bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseEvent {
    pub a: BodyId, // lower index in the pair
    pub b: BodyId, // higher index in the pair
    pub normal: NVec2, // unit vector from a to b
    pub impulse: f64, // J, negative for an approaching pair
}

/// Resolve one pair. Returns the event when an impulse was applied,
/// `None` when the bodies do not touch or are not approaching.
pub fn resolve_pair(bi: &mut Body, bj: &mut Body) -> Option<ImpulseEvent> {
    // Delta from i to j
    let delta = bj.position - bi.position;
    let dist = delta.norm();

    if dist > bi.radius() + bj.radius() {
        return None;
    }

    let n = normalize_or(&delta, default_normal(), COINCIDENT_EPS);

    // Relative normal velocity; >= 0 means resting or separating
    let v_rel_n = dot(&(bj.velocity - bi.velocity), &n);
    if v_rel_n >= 0.0 {
        return None;
    }

    let mi = bi.mass();
    let mj = bj.mass();

    // Mean restitution of the pair
    let e = 0.5 * (bi.restitution + bj.restitution);

    // J = (1 + e) v_rel.n / (1/m_i + 1/m_j)
    let inv_mass = (1.0 / mi + 1.0 / mj).max(INV_MASS_FLOOR);
    let j = (1.0 + e) * v_rel_n / inv_mass;

    bi.velocity += (j / mi) * n;
    bj.velocity -= (j / mj) * n;

    Some(ImpulseEvent {
        a: bi.id(),
        b: bj.id(),
        normal: n,
        impulse: j,
    })
}

/// Sweep every unordered pair once, calling `on_impulse` per applied impulse
pub fn resolve_pairs<F>(bodies: &mut [Body], mut on_impulse: F)
where
    F: FnMut(ImpulseEvent),
{
    let n = bodies.len();

    for i in 0..n {
        // Split so body i and every j > i can be borrowed mutably together
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];

        for bj in tail.iter_mut() {
            if let Some(event) = resolve_pair(bi, bj) {
                on_impulse(event);
            }
        }
    }
}
