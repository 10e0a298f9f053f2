//! Cosmetic per-body state owned by the viewer
//!
//! Trails (bounded history of recent positions) and hit flashes (a countdown
//! that overrides the display color while positive). Both are driven by the
//! step report and never feed back into the physics.

use std::collections::{HashMap, VecDeque};

use bevy::prelude::Resource;

use crate::simulation::states::{Body, BodyColor, BodyId, NVec2};
use crate::simulation::step::StepReport;

pub const TRAIL_CAP: usize = 20;
pub const FLASH_TICKS: u32 = 10;
pub const FLASH_COLOR: BodyColor = BodyColor([255, 255, 160]);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoration {
    trail: VecDeque<NVec2>,
    flash: u32, // ticks left
}

impl Decoration {
    /// Push a position, evicting the oldest once over `cap`
    pub fn record(&mut self, position: NVec2, cap: usize) {
        self.trail.push_back(position);
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }

    pub fn trigger_flash(&mut self, ticks: u32) {
        self.flash = ticks;
    }

    pub fn tick_flash(&mut self) {
        self.flash = self.flash.saturating_sub(1);
    }

    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }

    pub fn flash_remaining(&self) -> u32 {
        self.flash
    }

    pub fn display_color(&self, base: BodyColor) -> BodyColor {
        if self.is_flashing() {
            FLASH_COLOR
        } else {
            base
        }
    }

    /// Oldest first
    pub fn trail(&self) -> impl Iterator<Item = &NVec2> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Decorations {
    pub enabled: bool,
    pub trail_cap: usize,
    pub flash_ticks: u32,
    by_body: HashMap<BodyId, Decoration>,
}

impl Decorations {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            trail_cap: TRAIL_CAP,
            flash_ticks: FLASH_TICKS,
            by_body: HashMap::new(),
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&Decoration> {
        self.by_body.get(&id)
    }

    /// Fold one tick into the decorations: age flashes, flash every body
    /// that took an impulse, extend trails, forget removed bodies
    pub fn on_step(&mut self, bodies: &[Body], report: &StepReport) {
        if !self.enabled {
            return;
        }

        for deco in self.by_body.values_mut() {
            deco.tick_flash();
        }

        for event in &report.impulses {
            for id in [event.a, event.b] {
                self.by_body.entry(id).or_default().trigger_flash(self.flash_ticks);
            }
        }

        for b in bodies {
            self.by_body.entry(b.id()).or_default().record(b.position, self.trail_cap);
        }

        self.by_body.retain(|id, _| bodies.iter().any(|b| b.id() == *id));
    }

    /// Color to draw `body` with this frame
    pub fn display_color(&self, body: &Body) -> BodyColor {
        match self.by_body.get(&body.id()) {
            Some(deco) if self.enabled => deco.display_color(body.color),
            _ => body.color,
        }
    }

    pub fn clear(&mut self) {
        self.by_body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_evicts_oldest() {
        let mut d = Decoration::default();
        for i in 0..5 {
            d.record(NVec2::new(i as f64, 0.0), 3);
        }
        let xs: Vec<f64> = d.trail().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn flash_counts_down_to_base_color() {
        let mut d = Decoration::default();
        d.trigger_flash(2);
        assert_eq!(d.display_color(BodyColor::RED), FLASH_COLOR);
        d.tick_flash();
        assert!(d.is_flashing());
        d.tick_flash();
        assert!(!d.is_flashing());
        d.tick_flash();
        assert_eq!(d.flash_remaining(), 0);
        assert_eq!(d.display_color(BodyColor::RED), BodyColor::RED);
    }
}
