//! Horizontal value slider and the axis-aligned rects used for hit-testing.
//!
//! Coordinates are window pixels with y pointing down, the same space the
//! container lives in.

use crate::simulation::states::NVec2;

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open on the right and bottom edges
    pub fn contains(&self, p: &NVec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.x + 0.5 * self.w, self.y + 0.5 * self.h)
    }
}

/// Handle is this wide and sticks out this far above and below the track
pub const HANDLE_WIDTH: f64 = 10.0;
pub const HANDLE_OVERHANG: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    value: f64,
    pub track: Rect,
}

impl Slider {
    pub fn new(label: &'static str, track: Rect, min: f64, max: f64, initial: f64) -> Self {
        let mut slider = Self {
            label,
            min,
            max,
            value: min,
            track,
        };
        slider.set_value(initial);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the value inside `[min, max]`, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }

    pub fn set_fraction(&mut self, f: f64) {
        let f = if f.is_finite() { f.clamp(0.0, 1.0) } else { 0.0 };
        self.value = self.min + f * (self.max - self.min);
    }

    pub fn set_value(&mut self, v: f64) {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        self.value = if v.is_finite() { v.clamp(lo, hi) } else { self.min };
    }

    /// Distance the handle can travel along the track
    fn travel(&self) -> f64 {
        (self.track.w - HANDLE_WIDTH).max(0.0)
    }

    pub fn handle(&self) -> Rect {
        Rect::new(
            self.track.x + self.fraction() * self.travel(),
            self.track.y - HANDLE_OVERHANG,
            HANDLE_WIDTH,
            self.track.h + 2.0 * HANDLE_OVERHANG,
        )
    }

    /// Move the handle so it is centred on `pointer_x`, clamped to the track
    pub fn drag_to(&mut self, pointer_x: f64) {
        let travel = self.travel();
        if travel <= 0.0 {
            self.set_fraction(0.0);
            return;
        }
        let left = (pointer_x - 0.5 * HANDLE_WIDTH).clamp(self.track.x, self.track.x + travel);
        self.set_fraction((left - self.track.x) / travel);
    }
}
