use crate::constants::{
    PhysicsConstants, CORNER_SPEED_LOWER_BOUND, CORNER_SPEED_TOLERANCE, CORNER_SPEED_UPPER_BOUND,
    VEHICLE_MASS,
};
use crate::errors::{Result, SimulationError};
use crate::vehicle::aerodynamics::AeroModel;
use crate::vehicle::tire::TireGripModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig {
    lower: f64,
    upper: f64,
    tolerance: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        BisectionConfig {
            lower: CORNER_SPEED_LOWER_BOUND,
            upper: CORNER_SPEED_UPPER_BOUND,
            tolerance: CORNER_SPEED_TOLERANCE,
        }
    }
}

impl BisectionConfig {
    pub fn new(lower: f64, upper: f64, tolerance: f64) -> Result<Self> {
        if !(lower.is_finite() && upper.is_finite() && tolerance.is_finite()) {
            return Err(SimulationError::NumericDegeneracy(
                "bisection bounds must be finite".to_string(),
            ));
        }
        if upper <= lower || tolerance <= 0.0 {
            return Err(SimulationError::NumericDegeneracy(format!(
                "unresolvable bracket [{}, {}] with tolerance {}",
                lower, upper, tolerance
            )));
        }
        Ok(BisectionConfig {
            lower,
            upper,
            tolerance,
        })
    }

    pub fn iterations(&self) -> u32 {
        ((self.upper - self.lower) / self.tolerance).log2().ceil().max(0.0) as u32
    }

    pub fn resolution(&self) -> f64 {
        (self.upper - self.lower) / 2f64.powi(self.iterations() as i32)
    }
}

#[derive(Debug)]
pub struct CornerSpeedSolver<'a> {
    constants: &'a PhysicsConstants,
    aero: AeroModel<'a>,
    tire: TireGripModel<'a>,
    bisection: BisectionConfig,
}

impl<'a> CornerSpeedSolver<'a> {
    pub fn new(constants: &'a PhysicsConstants) -> Self {
        Self::with_bisection(constants, BisectionConfig::default())
    }

    pub fn with_bisection(constants: &'a PhysicsConstants, bisection: BisectionConfig) -> Self {
        CornerSpeedSolver {
            constants,
            aero: AeroModel::new(constants),
            tire: TireGripModel::new(constants),
            bisection,
        }
    }

    pub fn lateral_margin(&self, velocity: f64, radius: f64, bank_angle: f64) -> f64 {
        let bank = bank_angle.to_radians();
        let gravity_normal = self.constants.gravity * bank.cos();
        let gravity_lateral = self.constants.gravity * bank.sin();

        let downforce = self.aero.calculate_downforce(velocity);
        let normal_force = VEHICLE_MASS * gravity_normal + downforce;

        let centripetal_required =
            VEHICLE_MASS * velocity.powi(2) / radius - VEHICLE_MASS * gravity_lateral;

        let slip_angle = (velocity.powi(2) / (radius * gravity_normal)).atan();
        let grip = self.tire.calculate_grip(normal_force, slip_angle);

        normal_force * grip - centripetal_required
    }

    // Lower bracket bound: never overestimates under a monotonic margin.
    pub fn calculate_corner_speed(&self, radius: f64, bank_angle: f64) -> f64 {
        let mut v_min = self.bisection.lower;
        let mut v_max = self.bisection.upper;

        for _ in 0..self.bisection.iterations() {
            let v = (v_min + v_max) / 2.0;
            if self.lateral_margin(v, radius, bank_angle) > 0.0 {
                v_min = v;
            } else {
                v_max = v;
            }
        }

        v_min
    }
}
