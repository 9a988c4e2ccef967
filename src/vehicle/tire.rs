use crate::constants::{
    PhysicsConstants, OPTIMAL_LOAD_RATIO, TIRE_TEMPERATURE_GAIN, TIRE_TEMPERATURE_LIMIT,
    VEHICLE_MASS,
};

const REFERENCE_PRESSURE: f64 = 2.3; // bar
const TEMPERATURE_SENSITIVITY: f64 = 100.0; // °C per unit grip loss
const PRESSURE_SENSITIVITY: f64 = 2.0; // bar per unit grip loss
const SLIP_SATURATION_ANGLE: f64 = 8.0;
const BASE_TRACK_GRIP: f64 = 0.95;
const WET_GRIP_LOSS: f64 = 0.4;
const RAIN_GRIP_LOSS: f64 = 0.3;
const MIN_LONGITUDINAL_GRIP: f64 = 0.7;
const WEAR_SPEED_SCALE: f64 = 50.0; // m/s

#[derive(Debug)]
pub struct TireGripModel<'a> {
    constants: &'a PhysicsConstants,
}

impl<'a> TireGripModel<'a> {
    pub fn new(constants: &'a PhysicsConstants) -> Self {
        TireGripModel { constants }
    }

    pub fn tire_temperature(&self) -> f64 {
        (self.constants.track_temperature * TIRE_TEMPERATURE_GAIN).min(TIRE_TEMPERATURE_LIMIT)
    }

    pub fn temperature_factor(&self) -> f64 {
        1.0 - (self.tire_temperature() - self.constants.tire_temp_optimal).abs()
            / TEMPERATURE_SENSITIVITY
    }

    pub fn pressure_factor(&self) -> f64 {
        1.0 - (self.constants.tire_pressure - REFERENCE_PRESSURE).abs() / PRESSURE_SENSITIVITY
    }

    // Not clamped, so extreme loads give a negative factor.
    pub fn load_factor(&self, normal_load: f64) -> f64 {
        let load_ratio = normal_load / (VEHICLE_MASS * self.constants.gravity);
        1.0 - (load_ratio - OPTIMAL_LOAD_RATIO).powi(2)
    }

    pub fn slip_factor(&self, slip_angle: f64) -> f64 {
        (2.0 * (slip_angle / SLIP_SATURATION_ANGLE).atan()).sin()
    }

    pub fn track_grip(&self) -> f64 {
        let wet_grip_reduction = self.constants.track_wetness * WET_GRIP_LOSS;
        let rain_effect = 1.0 - self.constants.rain_intensity * RAIN_GRIP_LOSS;
        BASE_TRACK_GRIP * (1.0 - wet_grip_reduction) * rain_effect
    }

    pub fn calculate_grip(&self, normal_load: f64, slip_angle: f64) -> f64 {
        let base_grip = self.constants.friction_coefficient
            * self.temperature_factor()
            * self.pressure_factor();

        base_grip * self.load_factor(normal_load) * self.slip_factor(slip_angle) * self.track_grip()
    }

    pub fn longitudinal_grip(&self, velocity: f64) -> f64 {
        let wear = 1.0 - self.constants.tire_wear_rate * velocity / WEAR_SPEED_SCALE;
        (self.temperature_factor() * wear).max(MIN_LONGITUDINAL_GRIP)
    }
}
