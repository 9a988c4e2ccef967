use std::f64::consts::PI;

use crate::constants::{PhysicsConstants, ENGINE_IDLE_RPM};

// fraction of peak torque left at the redline
const REDLINE_TORQUE_FRACTION: f64 = 0.7;

#[derive(Debug)]
pub struct EngineModel<'a> {
    constants: &'a PhysicsConstants,
}

impl<'a> EngineModel<'a> {
    pub fn new(constants: &'a PhysicsConstants) -> Self {
        EngineModel { constants }
    }

    // Quadratic ramp up to torque_rpm, linear falloff to 70% of peak at the redline.
    pub fn calculate_torque(&self, rpm: f64) -> f64 {
        if rpm < ENGINE_IDLE_RPM || rpm > self.constants.redline {
            return 0.0;
        }

        let torque_rpm = self.constants.torque_rpm;
        let torque_factor = if rpm <= torque_rpm {
            let x = rpm / torque_rpm;
            4.0 * x - 3.0 * x * x
        } else {
            let span = self.constants.redline - torque_rpm;
            1.0 - (1.0 - REDLINE_TORQUE_FRACTION) * ((rpm - torque_rpm) / span)
        };

        self.constants.max_torque * torque_factor.max(0.0)
    }

    pub fn calculate_power(&self, rpm: f64) -> f64 {
        self.calculate_torque(rpm) * rpm * 2.0 * PI / 60_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_torque_outside_band() {
        let constants = PhysicsConstants::default();
        let engine = EngineModel::new(&constants);

        assert_eq!(engine.calculate_torque(0.0), 0.0);
        assert_eq!(engine.calculate_torque(999.9), 0.0);
        assert_eq!(engine.calculate_torque(8500.1), 0.0);
        assert_eq!(engine.calculate_power(9000.0), 0.0);
    }

    #[test]
    fn test_peak_and_redline_torque() {
        let constants = PhysicsConstants::default();
        let engine = EngineModel::new(&constants);

        assert_relative_eq!(engine.calculate_torque(4500.0), 770.0, epsilon = 1e-9);
        assert_relative_eq!(engine.calculate_torque(8500.0), 0.7 * 770.0, epsilon = 1e-9);
    }

    #[test]
    fn test_continuous_at_torque_peak() {
        let constants = PhysicsConstants::default();
        let engine = EngineModel::new(&constants);

        let below = engine.calculate_torque(4500.0 - 1e-6);
        let above = engine.calculate_torque(4500.0 + 1e-6);

        assert_relative_eq!(below, above, epsilon = 1e-3);
    }

    #[test]
    fn test_ramp_shape_below_peak() {
        let constants = PhysicsConstants::default();
        let engine = EngineModel::new(&constants);

        // x = 0.5 -> 4(0.5) - 3(0.25) = 1.25
        assert_relative_eq!(engine.calculate_torque(2250.0), 770.0 * 1.25, epsilon = 1e-9);
    }

    #[test]
    fn test_power_conversion() {
        let constants = PhysicsConstants::default();
        let engine = EngineModel::new(&constants);

        let expected = 770.0 * 4500.0 * 2.0 * PI / 60_000.0;
        assert_relative_eq!(engine.calculate_power(4500.0), expected, epsilon = 1e-9);
    }
}
