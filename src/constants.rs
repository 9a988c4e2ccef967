use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const REFERENCE_AIR_TEMPERATURE: f64 = 288.15; // K (15 °C)
pub const ABSOLUTE_ZERO_OFFSET: f64 = 273.15; // K

// Vehicle Constants
pub const VEHICLE_MASS: f64 = 1500.0; // kg, not sourced from car parameters yet
pub const DRIVETRAIN_EFFICIENCY: f64 = 0.9;
pub const MAX_TRACTION_FACTOR: f64 = 1.5; // multiple of vehicle weight
pub const ENGINE_IDLE_RPM: f64 = 1000.0; // rpm, no torque below this
pub const LAUNCH_RPM: f64 = 2000.0; // rpm, clutch slip on a standing start
pub const OPTIMAL_LOAD_RATIO: f64 = 0.25;
pub const TIRE_TEMPERATURE_LIMIT: f64 = 120.0; // °C
pub const TIRE_TEMPERATURE_GAIN: f64 = 1.2; // tire temp per unit track temp

// Lap Integration Parameters
pub const MAX_STRAIGHT_SPEED: f64 = 100.0; // m/s
pub const MIN_SEGMENT_SPEED: f64 = 0.1; // m/s
pub const BRAKING_DECEL_SCALE: f64 = 10.0; // m/s² per unit cornering performance

// Corner Solver Parameters
pub const CORNER_SPEED_LOWER_BOUND: f64 = 0.0; // m/s
pub const CORNER_SPEED_UPPER_BOUND: f64 = 100.0; // m/s
pub const CORNER_SPEED_TOLERANCE: f64 = 0.1; // m/s

pub const DEFAULT_GEAR_RATIOS: [f64; 6] = [3.23, 2.19, 1.71, 1.39, 1.16, 0.93];
pub const DEFAULT_TIRE_GRIP_CURVE: [f64; 7] = [0.85, 0.90, 0.95, 1.0, 0.98, 0.94, 0.88];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    pub gravity: f64,
    pub air_density: f64,
    pub friction_coefficient: f64,
    pub rolling_resistance: f64,
    pub fuel_consumption_rate: f64, // L/km
    pub tire_wear_rate: f64,

    // Engine
    pub max_power: f64,  // kW
    pub max_torque: f64, // N·m
    pub power_rpm: f64,
    pub torque_rpm: f64,
    pub redline: f64,
    pub gear_ratios: Vec<f64>,
    pub final_drive: f64,

    // Aerodynamics
    pub drag_coefficient: f64,
    pub frontal_area: f64, // m²
    pub downforce_coefficient: f64,

    // Tires
    pub tire_radius: f64, // m
    pub tire_width: f64,  // m
    pub tire_pressure: f64, // bar
    pub tire_temp_optimal: f64, // °C
    pub tire_grip_curve: Vec<f64>,

    // Weather and track
    pub air_temperature: f64,   // °C
    pub track_temperature: f64, // °C
    pub humidity: f64,          // 0-1
    pub rain_intensity: f64,    // 0-1
    pub track_wetness: f64,     // 0-1
    pub wind_speed: f64,        // m/s
    pub wind_direction: f64,    // degrees
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        PhysicsConstants {
            gravity: GRAVITY,
            air_density: AIR_DENSITY_SEA_LEVEL,
            friction_coefficient: 0.015,
            rolling_resistance: 0.011,
            fuel_consumption_rate: 0.03,
            tire_wear_rate: 0.001,
            max_power: 735.0,
            max_torque: 770.0,
            power_rpm: 7500.0,
            torque_rpm: 4500.0,
            redline: 8500.0,
            gear_ratios: DEFAULT_GEAR_RATIOS.to_vec(),
            final_drive: 3.42,
            drag_coefficient: 0.28,
            frontal_area: 2.0,
            downforce_coefficient: 3.0,
            tire_radius: 0.33,
            tire_width: 0.305,
            tire_pressure: 2.3,
            tire_temp_optimal: 85.0,
            tire_grip_curve: DEFAULT_TIRE_GRIP_CURVE.to_vec(),
            air_temperature: 25.0,
            track_temperature: 30.0,
            humidity: 0.6,
            rain_intensity: 0.0,
            track_wetness: 0.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
        }
    }
}

impl PhysicsConstants {
    // An explicitly empty gear or grip list falls back to the reference sequence.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut constants: PhysicsConstants =
            serde_json::from_str(json).map_err(|e| SimulationError::Config(e.to_string()))?;
        if constants.gear_ratios.is_empty() {
            constants.gear_ratios = DEFAULT_GEAR_RATIOS.to_vec();
        }
        if constants.tire_grip_curve.is_empty() {
            constants.tire_grip_curve = DEFAULT_TIRE_GRIP_CURVE.to_vec();
        }
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.torque_rpm > 0.0 && self.redline > self.torque_rpm) {
            return Err(SimulationError::invalid(
                "redline",
                format!(
                    "expected redline > torque_rpm > 0, got redline {} and torque_rpm {}",
                    self.redline, self.torque_rpm
                ),
            ));
        }
        if self.gear_ratios.is_empty() || self.gear_ratios.iter().any(|ratio| *ratio <= 0.0) {
            return Err(SimulationError::invalid(
                "gear_ratios",
                "at least one gear, every ratio positive",
            ));
        }
        for (key, value) in [
            ("gravity", self.gravity),
            ("tire_radius", self.tire_radius),
            ("final_drive", self.final_drive),
        ] {
            if value <= 0.0 {
                return Err(SimulationError::invalid(key, "must be positive"));
            }
        }
        if !(self.air_temperature > -ABSOLUTE_ZERO_OFFSET) {
            return Err(SimulationError::invalid(
                "air_temperature",
                format!("must lie above absolute zero, got {}", self.air_temperature),
            ));
        }
        for (key, value) in [
            ("humidity", self.humidity),
            ("rain_intensity", self.rain_intensity),
            ("track_wetness", self.track_wetness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::invalid(
                    key,
                    format!("must lie within 0..=1, got {}", value),
                ));
            }
        }
        Ok(())
    }
}
