use std::f64::consts::PI;

use tracing::trace;

use crate::constants::{
    PhysicsConstants, DRIVETRAIN_EFFICIENCY, GRAVITY, LAUNCH_RPM, MAX_TRACTION_FACTOR,
    VEHICLE_MASS,
};
use crate::vehicle::aerodynamics::AeroModel;
use crate::vehicle::engine::EngineModel;
use crate::vehicle::tire::TireGripModel;

#[derive(Debug)]
pub struct AccelerationModel<'a> {
    constants: &'a PhysicsConstants,
    aero: AeroModel<'a>,
    engine: EngineModel<'a>,
    tire: TireGripModel<'a>,
}

impl<'a> AccelerationModel<'a> {
    pub fn new(constants: &'a PhysicsConstants) -> Self {
        AccelerationModel {
            constants,
            aero: AeroModel::new(constants),
            engine: EngineModel::new(constants),
            tire: TireGripModel::new(constants),
        }
    }

    pub fn wheel_rpm(&self, velocity: f64) -> f64 {
        velocity * 60.0 / (2.0 * PI * self.constants.tire_radius)
    }

    pub fn engine_rpm(&self, velocity: f64, gear: usize) -> f64 {
        self.wheel_rpm(velocity) * self.gear_ratio(gear) * self.constants.final_drive
    }

    pub fn launch_speed(&self) -> f64 {
        let first_gear = self.gear_ratio(0) * self.constants.final_drive;
        if first_gear <= 0.0 {
            return 0.0;
        }
        LAUNCH_RPM * 2.0 * PI * self.constants.tire_radius / (60.0 * first_gear)
    }

    pub fn select_gear(&self, velocity: f64) -> usize {
        let top_gear = self.constants.gear_ratios.len().saturating_sub(1);
        let wheel_rpm = self.wheel_rpm(velocity);

        self.constants
            .gear_ratios
            .iter()
            .position(|ratio| {
                wheel_rpm * ratio * self.constants.final_drive <= self.constants.redline
            })
            .unwrap_or_else(|| {
                trace!(velocity, "no gear under redline, holding top gear");
                top_gear
            })
    }

    pub fn calculate_acceleration(&self, velocity: f64, gear: Option<usize>) -> f64 {
        let gear = match gear {
            Some(gear) => gear.min(self.constants.gear_ratios.len().saturating_sub(1)),
            None => self.select_gear(velocity),
        };

        let engine_torque = self.engine.calculate_torque(self.engine_rpm(velocity, gear));
        let wheel_torque = engine_torque
            * self.gear_ratio(gear)
            * self.constants.final_drive
            * DRIVETRAIN_EFFICIENCY;

        let drive_force = wheel_torque / self.constants.tire_radius;
        let drag_force = self.aero.calculate_drag(velocity);
        let rolling_resistance =
            self.constants.rolling_resistance * VEHICLE_MASS * self.constants.gravity;

        let tire_grip = self.tire.longitudinal_grip(velocity);
        let max_traction = VEHICLE_MASS * GRAVITY * MAX_TRACTION_FACTOR;

        let net_force =
            (drive_force * tire_grip).min(max_traction) - (drag_force + rolling_resistance);

        net_force / VEHICLE_MASS
    }

    fn gear_ratio(&self, gear: usize) -> f64 {
        self.constants.gear_ratios.get(gear).copied().unwrap_or(0.0)
    }
}
