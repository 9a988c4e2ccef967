use crate::constants::{PhysicsConstants, ABSOLUTE_ZERO_OFFSET, REFERENCE_AIR_TEMPERATURE};
use crate::utils::vector2d::Vector2D;

const HUMIDITY_REFERENCE: f64 = 0.5;
const HUMIDITY_SENSITIVITY: f64 = 0.1;
const YAW_DRAG_GAIN: f64 = 0.2;
const GROUND_EFFECT_GAIN: f64 = 0.3;
const GROUND_EFFECT_SPEED_SCALE: f64 = 50.0; // m/s
const RIDE_HEIGHT_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub drag: f64,      // N
    pub downforce: f64, // N
}

#[derive(Debug)]
pub struct AeroModel<'a> {
    constants: &'a PhysicsConstants,
}

impl<'a> AeroModel<'a> {
    pub fn new(constants: &'a PhysicsConstants) -> Self {
        AeroModel { constants }
    }

    pub fn calculate_aero_forces(&self, velocity: f64) -> AeroForces {
        AeroForces {
            drag: self.calculate_drag(velocity),
            downforce: self.calculate_downforce(velocity),
        }
    }

    pub fn adjusted_air_density(&self) -> f64 {
        let temp_factor =
            REFERENCE_AIR_TEMPERATURE / (ABSOLUTE_ZERO_OFFSET + self.constants.air_temperature);
        let humidity_factor =
            1.0 + (self.constants.humidity - HUMIDITY_REFERENCE) * HUMIDITY_SENSITIVITY;
        self.constants.air_density * temp_factor * humidity_factor
    }

    pub fn relative_wind(&self, velocity: f64) -> Vector2D {
        Vector2D::new(velocity, 0.0)
            + Vector2D::from_polar(self.constants.wind_speed, self.constants.wind_direction)
    }

    pub fn calculate_drag(&self, velocity: f64) -> f64 {
        let relative_wind = self.relative_wind(velocity);
        let yaw_factor = 1.0 + YAW_DRAG_GAIN * relative_wind.angle().sin().abs();
        let drag_coefficient = self.constants.drag_coefficient * yaw_factor;

        0.5 * self.adjusted_air_density()
            * drag_coefficient
            * self.constants.frontal_area
            * relative_wind.magnitude().powi(2)
    }

    pub fn calculate_downforce(&self, velocity: f64) -> f64 {
        let ground_effect =
            1.0 + GROUND_EFFECT_GAIN * (-velocity / GROUND_EFFECT_SPEED_SCALE).exp();

        0.5 * self.adjusted_air_density()
            * self.constants.downforce_coefficient
            * self.constants.frontal_area
            * velocity.powi(2)
            * ground_effect
            * RIDE_HEIGHT_FACTOR
    }
}
