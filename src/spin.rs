///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Data, Lens};

use crate::{MAX_SPEED, MIN_SPEED, SPEED_STEP};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinDataAccess
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Access to the speed and rotation of a spinning glyph.
///
/// The provided methods hold the speed bounds, so any type embedding the
/// two values only needs the getters and setters.
pub trait SpinDataAccess {
    fn get_speed(&self) -> i32;
    fn set_speed(&mut self, speed: i32);
    fn get_rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);

    /// Advances the rotation by the current speed. One call per frame.
    fn tick(&mut self) {
        let rotation = self.get_rotation() + f64::from(self.get_speed());
        self.set_rotation(rotation);
    }

    fn increase_clockwise(&mut self) {
        let speed = (self.get_speed() + SPEED_STEP).min(MAX_SPEED);
        self.set_speed(speed);
    }

    fn increase_counter_clockwise(&mut self) {
        let speed = (self.get_speed() - SPEED_STEP).max(MIN_SPEED);
        self.set_speed(speed);
    }

    /// Text readout of the speed, e.g. `-3x`.
    fn speed_label(&self) -> String {
        format!("{}x", self.get_speed())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinData
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Data, Lens, PartialEq, Debug, Default)]
pub struct SpinData {
    /// Degrees per frame, always within `MIN_SPEED..=MAX_SPEED`.
    speed: i32,
    /// Accumulated orientation in degrees. Never wrapped.
    pub rotation: f64,
}

impl SpinData {
    pub fn new() -> Self {
        Self {
            speed: 0,
            rotation: 0.0,
        }
    }
}

impl SpinDataAccess for SpinData {
    fn get_speed(&self) -> i32 {
        self.speed
    }

    fn set_speed(&mut self, speed: i32) {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        if speed != self.speed {
            log::debug!("Speed changed: {} -> {}", self.speed, speed);
        }
        self.speed = speed;
    }

    fn get_rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }
}
