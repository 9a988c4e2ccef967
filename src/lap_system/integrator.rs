use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::{
    PhysicsConstants, BRAKING_DECEL_SCALE, MAX_STRAIGHT_SPEED, MIN_SEGMENT_SPEED,
};
use crate::errors::{Result, SimulationError};
use crate::lap_system::conditions::segment_weather_factor;
use crate::lap_system::corner::CornerSpeedSolver;
use crate::lap_system::track::{next_segment, Segment, REFERENCE_CIRCUIT};
use crate::vehicle::acceleration::AccelerationModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentTiming {
    pub segment: Segment,
    pub entry_speed: f64, // m/s
    pub exit_speed: f64,  // m/s
    pub base_time: f64,   // s, before the weather factor
    pub time: f64,        // s
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapTrace {
    pub segments: Vec<SegmentTiming>,
    pub weather_factor: f64,
    pub total_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightPhases {
    pub accel_time: f64,
    pub const_time: f64,
    pub brake_time: f64,
    pub cruise_speed: f64,
    pub exit_speed: f64,
}

impl StraightPhases {
    pub fn total_time(&self) -> f64 {
        self.accel_time + self.const_time + self.brake_time
    }
}

#[derive(Debug)]
pub struct LapTimeIntegrator<'a> {
    constants: &'a PhysicsConstants,
    acceleration: AccelerationModel<'a>,
    corner: CornerSpeedSolver<'a>,
    braking_deceleration: f64,
}

impl<'a> LapTimeIntegrator<'a> {
    pub fn new(constants: &'a PhysicsConstants, cornering_performance: f64) -> Result<Self> {
        Self::with_solver(
            constants,
            cornering_performance,
            CornerSpeedSolver::new(constants),
        )
    }

    pub fn with_solver(
        constants: &'a PhysicsConstants,
        cornering_performance: f64,
        corner: CornerSpeedSolver<'a>,
    ) -> Result<Self> {
        if !(cornering_performance > 0.0 && cornering_performance.is_finite()) {
            return Err(SimulationError::invalid(
                "viraj_performansi",
                format!("must be positive, got {}", cornering_performance),
            ));
        }

        Ok(LapTimeIntegrator {
            constants,
            acceleration: AccelerationModel::new(constants),
            corner,
            braking_deceleration: cornering_performance * BRAKING_DECEL_SCALE,
        })
    }

    pub fn calculate_lap_time(&self) -> f64 {
        self.trace(&REFERENCE_CIRCUIT).total_time
    }

    pub fn trace(&self, segments: &[Segment]) -> LapTrace {
        let weather_factor = segment_weather_factor(self.constants);
        let mut timings = Vec::with_capacity(segments.len());
        let mut current_speed = 0.0;
        let mut total_time = 0.0;

        for (index, segment) in segments.iter().enumerate() {
            let entry_speed = current_speed;
            let (base_time, exit_speed) = match *segment {
                Segment::Straight { length } => {
                    let phases =
                        self.straight_phases(length, entry_speed, next_segment(segments, index));
                    (phases.total_time(), phases.exit_speed)
                }
                Segment::Corner {
                    length,
                    radius,
                    bank_angle,
                } => {
                    let speed = self.corner_speed(radius, bank_angle);
                    (length / speed, speed)
                }
            };

            let time = base_time * weather_factor;
            debug!(
                index,
                corner = segment.is_corner(),
                entry_speed,
                exit_speed,
                time,
                "segment timed"
            );

            current_speed = exit_speed;
            total_time += time;
            timings.push(SegmentTiming {
                segment: *segment,
                entry_speed,
                exit_speed,
                base_time,
                time,
            });
        }

        LapTrace {
            segments: timings,
            weather_factor,
            total_time,
        }
    }

    // Floor keeps the transit time of an unholdable corner finite.
    pub fn corner_speed(&self, radius: f64, bank_angle: f64) -> f64 {
        let speed = self.corner.calculate_corner_speed(radius, bank_angle);
        if speed < MIN_SEGMENT_SPEED {
            warn!(radius, bank_angle, speed, "corner speed below floor");
            return MIN_SEGMENT_SPEED;
        }
        speed
    }

    pub fn straight_phases(
        &self,
        length: f64,
        entry_speed: f64,
        next: Option<&Segment>,
    ) -> StraightPhases {
        let acceleration = self.straight_acceleration(entry_speed);

        let (accel_distance, accel_time, peak_speed) = if acceleration > 0.0 {
            let distance = (length / 2.0)
                .min((MAX_STRAIGHT_SPEED.powi(2) - entry_speed.powi(2)) / (2.0 * acceleration))
                .max(0.0);
            let peak = (2.0 * acceleration * distance + entry_speed.powi(2)).sqrt();
            (distance, (peak - entry_speed) / acceleration, peak)
        } else {
            warn!(entry_speed, acceleration, "no forward acceleration, cruising");
            (0.0, 0.0, entry_speed)
        };

        let cruise_speed = peak_speed.min(MAX_STRAIGHT_SPEED).max(MIN_SEGMENT_SPEED);
        let const_distance = (length - 2.0 * accel_distance).max(0.0);
        let const_time = const_distance / cruise_speed;

        let (brake_time, exit_speed) = match next {
            Some(&Segment::Corner {
                radius, bank_angle, ..
            }) => {
                let target_speed = self.corner.calculate_corner_speed(radius, bank_angle);
                let brake_time =
                    ((cruise_speed - target_speed) / self.braking_deceleration).max(0.0);
                (brake_time, target_speed)
            }
            _ => (0.0, cruise_speed),
        };

        StraightPhases {
            accel_time,
            const_time,
            brake_time,
            cruise_speed,
            exit_speed,
        }
    }

    // No torque below idle, so a standing start is evaluated at launch speed.
    fn straight_acceleration(&self, entry_speed: f64) -> f64 {
        let acceleration = self.acceleration.calculate_acceleration(entry_speed, None);
        let launch_speed = self.acceleration.launch_speed();
        if acceleration <= 0.0 && entry_speed < launch_speed {
            debug!(entry_speed, launch_speed, "standing start");
            return self.acceleration.calculate_acceleration(launch_speed, None);
        }
        acceleration
    }
}
