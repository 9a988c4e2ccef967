use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

pub const TRACK_LENGTH_KEY: &str = "pist_uzunlugu";
pub const CORNER_COUNT_KEY: &str = "viraj_sayisi";
pub const STRAIGHT_FRACTION_KEY: &str = "duz_yol_yuzdesi";

pub const AVERAGE_SPEED_KEY: &str = "ortalama_hiz";
pub const CORNERING_PERFORMANCE_KEY: &str = "viraj_performansi";
pub const ACCELERATION_FACTOR_KEY: &str = "ivmelenme";
pub const DRAG_FACTOR_KEY: &str = "hava_direnci";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self, key: &str) -> Result<f64> {
        let value = match self {
            ParamValue::Number(value) => *value,
            ParamValue::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                SimulationError::invalid(key, format!("'{}' is not a number", text))
            })?,
            ParamValue::Flag(flag) => {
                return Err(SimulationError::invalid(
                    key,
                    format!("expected a number, got flag {}", flag),
                ))
            }
        };
        if !value.is_finite() {
            return Err(SimulationError::invalid(key, "must be finite"));
        }
        Ok(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

pub type ParameterMap = BTreeMap<String, ParamValue>;

pub fn parameter_map<'k>(entries: impl IntoIterator<Item = (&'k str, f64)>) -> ParameterMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), ParamValue::Number(value)))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Domain {
    Positive,
    NonNegative,
    Fraction,
}

fn require(map: &ParameterMap, group: &'static str, key: &str, domain: Domain) -> Result<f64> {
    let value = map
        .get(key)
        .ok_or_else(|| SimulationError::MissingParameter {
            group,
            key: key.to_string(),
        })?
        .as_number(key)?;

    let (valid, expectation) = match domain {
        Domain::Positive => (value > 0.0, "must be greater than zero"),
        Domain::NonNegative => (value >= 0.0, "must not be negative"),
        Domain::Fraction => ((0.0..=1.0).contains(&value), "must lie within 0..=1"),
    };
    if !valid {
        return Err(SimulationError::invalid(
            key,
            format!("{}, got {}", expectation, value),
        ));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackParameters {
    pub length_km: f64,
    pub corner_count: f64,
    pub straight_fraction: f64,
}

impl TrackParameters {
    pub fn from_map(map: &ParameterMap) -> Result<Self> {
        Ok(TrackParameters {
            length_km: require(map, "track", TRACK_LENGTH_KEY, Domain::Positive)?,
            corner_count: require(map, "track", CORNER_COUNT_KEY, Domain::NonNegative)?,
            straight_fraction: require(map, "track", STRAIGHT_FRACTION_KEY, Domain::Fraction)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarParameters {
    pub average_speed: f64,
    pub cornering_performance: f64,
    pub acceleration_factor: f64,
    pub drag_factor: f64,
}

impl CarParameters {
    pub fn from_map(map: &ParameterMap) -> Result<Self> {
        Ok(CarParameters {
            average_speed: require(map, "car", AVERAGE_SPEED_KEY, Domain::Positive)?,
            cornering_performance: require(
                map,
                "car",
                CORNERING_PERFORMANCE_KEY,
                Domain::Positive,
            )?,
            acceleration_factor: require(map, "car", ACCELERATION_FACTOR_KEY, Domain::Positive)?,
            drag_factor: require(map, "car", DRAG_FACTOR_KEY, Domain::NonNegative)?,
        })
    }
}
