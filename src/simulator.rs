use tracing::info;

use crate::constants::PhysicsConstants;
use crate::errors::Result;
use crate::input::parameters::{CarParameters, ParameterMap, TrackParameters};
use crate::lap_system::integrator::{LapTimeIntegrator, LapTrace};
use crate::lap_system::track::REFERENCE_CIRCUIT;
use crate::report_system::result::{ResultAssembler, SimulationResult};

#[derive(Debug, Clone)]
pub struct Simulator {
    pub track: TrackParameters,
    pub car: CarParameters,
    pub constants: PhysicsConstants,
}

impl Simulator {
    pub fn new(track: &ParameterMap, car: &ParameterMap) -> Result<Self> {
        Self::with_constants(track, car, PhysicsConstants::default())
    }

    pub fn with_constants(
        track: &ParameterMap,
        car: &ParameterMap,
        constants: PhysicsConstants,
    ) -> Result<Self> {
        constants.validate()?;
        Ok(Simulator {
            track: TrackParameters::from_map(track)?,
            car: CarParameters::from_map(car)?,
            constants,
        })
    }

    fn integrator(&self) -> Result<LapTimeIntegrator<'_>> {
        LapTimeIntegrator::new(&self.constants, self.car.cornering_performance)
    }

    pub fn lap_trace(&self) -> Result<LapTrace> {
        Ok(self.integrator()?.trace(&REFERENCE_CIRCUIT))
    }

    pub fn run(&self) -> Result<SimulationResult> {
        let lap_time = self.integrator()?.calculate_lap_time();
        let result = ResultAssembler::assemble(&self.track, &self.car, lap_time, &self.constants);
        info!(
            lap_time = result.lap_time,
            raw_lap_time = lap_time,
            "simulation complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;
    use crate::input::parameters::parameter_map;

    fn track() -> ParameterMap {
        parameter_map([
            ("pist_uzunlugu", 5.4),
            ("viraj_sayisi", 16.0),
            ("duz_yol_yuzdesi", 0.6),
        ])
    }

    fn car() -> ParameterMap {
        parameter_map([
            ("ortalama_hiz", 180.0),
            ("viraj_performansi", 0.8),
            ("ivmelenme", 0.7),
            ("hava_direnci", 0.3),
        ])
    }

    #[test]
    fn test_run_produces_positive_lap() {
        let simulator = Simulator::new(&track(), &car()).unwrap();

        let result = simulator.run().unwrap();

        assert!(result.lap_time.is_finite() && result.lap_time > 0.0);
        assert_eq!(simulator.lap_trace().unwrap().segments.len(), 6);
    }

    #[test]
    fn test_missing_track_key_fails_fast() {
        let mut track = track();
        track.remove("pist_uzunlugu");

        let error = Simulator::new(&track, &car()).unwrap_err();

        assert!(matches!(
            error,
            SimulationError::MissingParameter { group: "track", .. }
        ));
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let constants = PhysicsConstants {
            torque_rpm: 0.0,
            ..PhysicsConstants::default()
        };

        assert!(Simulator::with_constants(&track(), &car(), constants).is_err());
    }
}
