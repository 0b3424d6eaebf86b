//! In-place adjustment helpers
//!
//! Every helper touches only populated fields. A missing subsystem or
//! field is skipped, so adjustments never change a setup's shape.

use crate::types::{AxleSuspension, Corner, Setup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axle {
    Front,
    Rear,
}

/// Add `delta` to a populated field.
pub fn offset(field: &mut Option<f64>, delta: f64) {
    if let Some(value) = field {
        *value += delta;
    }
}

/// Add `delta` to a populated field, never going below `floor`.
pub fn offset_floored(field: &mut Option<f64>, delta: f64, floor: f64) {
    if let Some(value) = field {
        *value = (*value + delta).max(floor);
    }
}

/// Multiply a populated field by `factor`.
pub fn scale(field: &mut Option<f64>, factor: f64) {
    if let Some(value) = field {
        *value *= factor;
    }
}

impl Setup {
    /// Call `f` for each populated axle.
    pub fn for_each_axle(&mut self, mut f: impl FnMut(Axle, &mut AxleSuspension)) {
        if let Some(suspension) = &mut self.suspension {
            if let Some(front) = &mut suspension.front {
                f(Axle::Front, front);
            }
            if let Some(rear) = &mut suspension.rear {
                f(Axle::Rear, rear);
            }
        }
    }

    pub fn scale_springs(&mut self, front: f64, rear: f64) {
        self.for_each_axle(|axle, s| scale(&mut s.spring, per_axle(axle, front, rear)));
    }

    /// Scale every damper value; bump and rebound scale independently.
    pub fn scale_dampers(&mut self, factor: f64) {
        self.for_each_axle(|_, s| {
            if let Some(damper) = &mut s.damper {
                *damper = damper.scaled(factor);
            }
        });
    }

    pub fn scale_anti_roll_bars(&mut self, front: f64, rear: f64) {
        self.for_each_axle(|axle, s| scale(&mut s.anti_roll_bar, per_axle(axle, front, rear)));
    }

    pub fn offset_anti_roll_bars(&mut self, front: f64, rear: f64) {
        self.for_each_axle(|axle, s| offset(&mut s.anti_roll_bar, per_axle(axle, front, rear)));
    }

    pub fn offset_ride_heights(&mut self, front: f64, rear: f64) {
        self.for_each_axle(|axle, s| offset(&mut s.ride_height, per_axle(axle, front, rear)));
    }

    pub fn offset_camber(&mut self, front: f64, rear: f64) {
        self.for_each_axle(|axle, s| offset(&mut s.camber, per_axle(axle, front, rear)));
    }

    /// Replace each populated tire pressure with `f(corner, pressure)`.
    pub fn map_tire_pressures(&mut self, mut f: impl FnMut(Corner, f64) -> f64) {
        if let Some(pressure) = self.tires.as_mut().and_then(|t| t.pressure.as_mut()) {
            for corner in Corner::ALL {
                let value = pressure.get_mut(corner);
                *value = f(corner, *value);
            }
        }
    }

    /// Add `delta` to all four tire pressures.
    pub fn offset_tire_pressures(&mut self, delta: f64) {
        self.map_tire_pressures(|_, p| p + delta);
    }
}

fn per_axle(axle: Axle, front: f64, rear: f64) -> f64 {
    match axle {
        Axle::Front => front,
        Axle::Rear => rear,
    }
}
