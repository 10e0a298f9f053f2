//! Display-only readouts
//!
//! Values here are for text on screen. Non-finite speeds (runaway
//! restitution feedback) show as zero; the bodies themselves are untouched.

use crate::simulation::states::{Body, NVec2};

pub fn display_speed(v: &NVec2) -> f64 {
    let s = v.norm();
    if s.is_finite() {
        s
    } else {
        0.0
    }
}

pub fn max_display_speed(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| display_speed(&b.velocity))
        .fold(0.0, f64::max)
}

pub fn status_line(bodies: &[Body], kinetic_energy: f64, tick: u64) -> String {
    let energy = if kinetic_energy.is_finite() { kinetic_energy } else { 0.0 };
    format!(
        "Balls: {}   Energy: {:.1}   Max speed: {:.2}   Tick: {}",
        bodies.len(),
        energy,
        max_display_speed(bodies),
        tick
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_speed_reads_zero() {
        assert_eq!(display_speed(&NVec2::new(f64::NAN, 1.0)), 0.0);
        assert_eq!(display_speed(&NVec2::new(f64::INFINITY, 0.0)), 0.0);
    }

    #[test]
    fn finite_speed_is_norm() {
        assert!((display_speed(&NVec2::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    }
}
