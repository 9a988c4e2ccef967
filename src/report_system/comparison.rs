use serde::Serialize;

use crate::constants::PhysicsConstants;
use crate::errors::Result;
use crate::input::parameters::ParameterMap;
use crate::report_system::result::{Breakdown, SimulationResult};
use crate::simulator::Simulator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: &'static str,
    pub first: f64,
    pub second: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: SimulationResult,
    pub second: SimulationResult,
    // second - first
    pub lap_time_delta: f64,
    pub metrics: Vec<MetricDelta>,
}

impl Comparison {
    pub fn from_results(first: SimulationResult, second: SimulationResult) -> Self {
        let metrics = Breakdown::PRIMARY_FIELDS
            .iter()
            .zip(first.breakdown.primary_values())
            .zip(second.breakdown.primary_values())
            .map(|((&metric, a), b)| MetricDelta {
                metric,
                first: a,
                second: b,
                difference: b - a,
            })
            .collect();

        Comparison {
            lap_time_delta: second.lap_time - first.lap_time,
            first,
            second,
            metrics,
        }
    }

    pub fn metric(&self, name: &str) -> Option<&MetricDelta> {
        self.metrics.iter().find(|delta| delta.metric == name)
    }
}

pub fn compare(
    track: &ParameterMap,
    first_car: &ParameterMap,
    second_car: &ParameterMap,
    constants: &PhysicsConstants,
) -> Result<Comparison> {
    let first = Simulator::with_constants(track, first_car, constants.clone())?.run()?;
    let second = Simulator::with_constants(track, second_car, constants.clone())?.run()?;
    Ok(Comparison::from_results(first, second))
}
