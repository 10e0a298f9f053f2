//! Input events and the handler that turns them into world requests
//!
//! The window layer translates raw mouse/keyboard state into `InputEvent`s;
//! `InputHandler` owns the drag state and emits `Request`s, which are the
//! only way the UI touches the body list.

use tracing::debug;

use crate::simulation::states::{BodyColor, NVec2, RemoveRequest};

use super::slider::{Rect, Slider};

/// Bounciness slider upper bound for the plain sandbox
pub const DEFAULT_MAX_BOUNCINESS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(NVec2),
    PointerMove(NVec2),
    PointerUp,
    SelectColor(usize),
    SpawnPressed,
    Reset,
}

/// Spawn parameters taken from the controls; the position is picked later
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSettings {
    pub radius: f64,
    pub velocity: NVec2,
    pub color: BodyColor,
    pub restitution: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Spawn(SpawnSettings),
    Remove(RemoveRequest),
    Clear,
}

/// Slider order inside `SpawnControls::sliders`
pub const RADIUS: usize = 0;
pub const VX: usize = 1;
pub const VY: usize = 2;
pub const BOUNCINESS: usize = 3;

/// The control panel: four sliders, a colour palette and the add button
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnControls {
    pub sliders: [Slider; 4],
    pub palette: Vec<BodyColor>,
    pub swatches: Vec<Rect>,
    pub selected: usize,
    pub add_button: Rect,
}

impl SpawnControls {
    pub fn new(max_bounciness: f64) -> Self {
        let track = |y: f64| Rect::new(10.0, y, 200.0, 10.0);
        let palette = vec![BodyColor::RED, BodyColor::GREEN, BodyColor::BLUE];
        let swatches = (0..palette.len())
            .map(|i| Rect::new(10.0 + 40.0 * i as f64, 170.0, 30.0, 30.0))
            .collect();

        Self {
            sliders: [
                Slider::new("Radius:", track(10.0), 1.0, 25.0, 10.0),
                Slider::new("Vx:", track(50.0), -30.0, 30.0, 0.0),
                Slider::new("Vy:", track(90.0), -30.0, 30.0, 0.0),
                Slider::new("Bounciness:", track(130.0), 0.8, max_bounciness.max(0.8), 0.9),
            ],
            palette,
            swatches,
            selected: 0,
            add_button: Rect::new(10.0, 210.0, 100.0, 30.0),
        }
    }

    pub fn selected_color(&self) -> BodyColor {
        self.palette.get(self.selected).copied().unwrap_or(BodyColor::WHITE)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.palette.len() {
            self.selected = index;
        }
    }

    pub fn settings(&self) -> SpawnSettings {
        SpawnSettings {
            radius: self.sliders[RADIUS].value(),
            velocity: NVec2::new(self.sliders[VX].value(), self.sliders[VY].value()),
            color: self.selected_color(),
            restitution: self.sliders[BOUNCINESS].value(),
        }
    }
}

impl Default for SpawnControls {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BOUNCINESS)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputHandler {
    dragging: Option<usize>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn handle(&mut self, event: InputEvent, controls: &mut SpawnControls) -> Option<Request> {
        match event {
            InputEvent::PointerDown(p) => self.pointer_down(p, controls),
            InputEvent::PointerMove(p) => {
                if let Some(i) = self.dragging {
                    controls.sliders[i].drag_to(p.x);
                }
                None
            }
            InputEvent::PointerUp => {
                self.dragging = None;
                None
            }
            InputEvent::SelectColor(i) => {
                controls.select(i);
                None
            }
            InputEvent::SpawnPressed => Some(Request::Spawn(controls.settings())),
            InputEvent::Reset => Some(Request::Clear),
        }
    }

    // Slider handles first, then swatches, then the add button; anything
    // else is a removal click
    fn pointer_down(&mut self, p: NVec2, controls: &mut SpawnControls) -> Option<Request> {
        if let Some(i) = controls.sliders.iter().position(|s| s.handle().contains(&p)) {
            debug!(slider = controls.sliders[i].label, "slider drag started");
            self.dragging = Some(i);
            return None;
        }

        if let Some(i) = controls.swatches.iter().position(|r| r.contains(&p)) {
            controls.select(i);
            return None;
        }

        if controls.add_button.contains(&p) {
            return Some(Request::Spawn(controls.settings()));
        }

        Some(Request::Remove(RemoveRequest { point: p }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel() {
        let c = SpawnControls::default();
        let s = c.settings();
        assert!((s.radius - 10.0).abs() < 1e-12);
        assert!(s.velocity.norm() < 1e-12);
        assert!((s.restitution - 0.9).abs() < 1e-12);
        assert_eq!(s.color, BodyColor::RED);
    }

    #[test]
    fn add_button_requests_spawn() {
        let mut c = SpawnControls::default();
        let mut h = InputHandler::new();
        let req = h.handle(InputEvent::PointerDown(NVec2::new(20.0, 220.0)), &mut c);
        assert!(matches!(req, Some(Request::Spawn(_))));
    }

    #[test]
    fn swatch_click_selects_color() {
        let mut c = SpawnControls::default();
        let mut h = InputHandler::new();
        let req = h.handle(InputEvent::PointerDown(NVec2::new(95.0, 180.0)), &mut c);
        assert!(req.is_none());
        assert_eq!(c.selected_color(), BodyColor::BLUE);
    }

    #[test]
    fn click_elsewhere_requests_removal() {
        let mut c = SpawnControls::default();
        let mut h = InputHandler::new();
        let p = NVec2::new(400.0, 300.0);
        let req = h.handle(InputEvent::PointerDown(p), &mut c);
        assert_eq!(req, Some(Request::Remove(RemoveRequest { point: p })));
    }

    #[test]
    fn drag_updates_slider_until_release() {
        let mut c = SpawnControls::default();
        let mut h = InputHandler::new();

        let handle = c.sliders[VX].handle().center();
        assert!(h.handle(InputEvent::PointerDown(handle), &mut c).is_none());
        assert_eq!(h.dragging(), Some(VX));

        h.handle(InputEvent::PointerMove(NVec2::new(1000.0, handle.y)), &mut c);
        assert!((c.sliders[VX].value() - 30.0).abs() < 1e-9);

        h.handle(InputEvent::PointerUp, &mut c);
        h.handle(InputEvent::PointerMove(NVec2::new(0.0, handle.y)), &mut c);
        assert!((c.sliders[VX].value() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_color_is_ignored() {
        let mut c = SpawnControls::default();
        let mut h = InputHandler::new();
        h.handle(InputEvent::SelectColor(1), &mut c);
        h.handle(InputEvent::SelectColor(7), &mut c);
        assert_eq!(c.selected_color(), BodyColor::GREEN);
    }

    #[test]
    fn bounciness_range_follows_engine_cap() {
        let c = SpawnControls::new(1.01);
        assert!((c.sliders[BOUNCINESS].max - 1.01).abs() < 1e-12);
    }
}
