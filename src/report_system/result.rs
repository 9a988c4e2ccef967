use serde::Serialize;

use crate::constants::PhysicsConstants;
use crate::input::parameters::{CarParameters, TrackParameters};
use crate::lap_system::conditions::{track_condition_impact, weather_impact};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    #[serde(rename = "sicaklik")]
    pub air_temperature: f64,
    #[serde(rename = "nem")]
    pub humidity: f64,
    #[serde(rename = "yagmur")]
    pub rain_intensity: f64,
    #[serde(rename = "ruzgar_hizi")]
    pub wind_speed: f64,
    #[serde(rename = "ruzgar_yonu")]
    pub wind_direction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackConditionSnapshot {
    #[serde(rename = "sicaklik")]
    pub track_temperature: f64,
    #[serde(rename = "islaklik")]
    pub track_wetness: f64,
}

// Computed from the input parameters, not from the segment-by-segment lap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    #[serde(rename = "temel_sure")]
    pub base_time: f64,
    #[serde(rename = "viraj_etkisi")]
    pub corner_impact: f64,
    #[serde(rename = "duz_yol_etkisi")]
    pub straight_impact: f64,
    #[serde(rename = "hava_direnci")]
    pub drag_impact: f64,
    #[serde(rename = "yakit_tuketimi")]
    pub fuel_consumption: f64,
    #[serde(rename = "lastik_asinmasi")]
    pub tire_wear: f64,
    #[serde(rename = "hava_kosullari")]
    pub weather: WeatherSnapshot,
    #[serde(rename = "pist_kosullari")]
    pub track_condition: TrackConditionSnapshot,
}

impl Breakdown {
    pub const PRIMARY_FIELDS: [&'static str; 6] = [
        "temel_sure",
        "viraj_etkisi",
        "duz_yol_etkisi",
        "hava_direnci",
        "yakit_tuketimi",
        "lastik_asinmasi",
    ];

    pub fn primary_values(&self) -> [f64; 6] {
        [
            self.base_time,
            self.corner_impact,
            self.straight_impact,
            self.drag_impact,
            self.fuel_consumption,
            self.tire_wear,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    #[serde(rename = "tur_suresi")]
    pub lap_time: f64,
    #[serde(rename = "detaylar")]
    pub breakdown: Breakdown,
}

pub struct ResultAssembler;

impl ResultAssembler {
    pub fn fuel_consumption(track: &TrackParameters, constants: &PhysicsConstants) -> f64 {
        constants.fuel_consumption_rate * track.length_km
    }

    pub fn tire_wear(track: &TrackParameters, constants: &PhysicsConstants) -> f64 {
        constants.tire_wear_rate * (track.corner_count + track.length_km / 100.0)
    }

    pub fn assemble(
        track: &TrackParameters,
        car: &CarParameters,
        lap_time: f64,
        constants: &PhysicsConstants,
    ) -> SimulationResult {
        let weather = weather_impact(constants);
        let track_condition = track_condition_impact(constants);

        let breakdown = Breakdown {
            base_time: track.length_km / car.average_speed,
            corner_impact: track.corner_count / car.cornering_performance,
            straight_impact: track.straight_fraction / car.acceleration_factor,
            drag_impact: car.drag_factor * track.length_km / 1000.0,
            fuel_consumption: Self::fuel_consumption(track, constants) * weather,
            tire_wear: Self::tire_wear(track, constants) * track_condition,
            weather: WeatherSnapshot {
                air_temperature: constants.air_temperature,
                humidity: constants.humidity,
                rain_intensity: constants.rain_intensity,
                wind_speed: constants.wind_speed,
                wind_direction: constants.wind_direction,
            },
            track_condition: TrackConditionSnapshot {
                track_temperature: constants.track_temperature,
                track_wetness: constants.track_wetness,
            },
        };

        SimulationResult {
            lap_time: lap_time * weather,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_inputs() -> (TrackParameters, CarParameters) {
        (
            TrackParameters {
                length_km: 5.4,
                corner_count: 16.0,
                straight_fraction: 0.6,
            },
            CarParameters {
                average_speed: 180.0,
                cornering_performance: 0.8,
                acceleration_factor: 0.7,
                drag_factor: 0.3,
            },
        )
    }

    #[test]
    fn test_breakdown_reference_values() {
        let (track, car) = reference_inputs();
        let constants = PhysicsConstants::default();

        let result = ResultAssembler::assemble(&track, &car, 100.0, &constants);
        let breakdown = result.breakdown;

        assert_relative_eq!(result.lap_time, 100.0, epsilon = 1e-12);
        assert_relative_eq!(breakdown.base_time, 0.03, epsilon = 1e-12);
        assert_relative_eq!(breakdown.corner_impact, 20.0, epsilon = 1e-12);
        assert_relative_eq!(breakdown.straight_impact, 0.6 / 0.7, epsilon = 1e-12);
        assert_relative_eq!(breakdown.drag_impact, 0.00162, epsilon = 1e-12);
        assert_relative_eq!(breakdown.fuel_consumption, 0.162, epsilon = 1e-12);
        assert_relative_eq!(breakdown.tire_wear, 0.016054, epsilon = 1e-12);
    }

    #[test]
    fn test_weather_scales_lap_and_fuel_only() {
        let (track, car) = reference_inputs();
        let constants = PhysicsConstants {
            rain_intensity: 0.5,
            track_wetness: 0.5,
            ..PhysicsConstants::default()
        };

        let result = ResultAssembler::assemble(&track, &car, 100.0, &constants);

        assert_relative_eq!(result.lap_time, 115.0, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.fuel_consumption, 0.162 * 1.15, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.tire_wear, 0.016054 * 1.1, epsilon = 1e-12);
        assert_eq!(result.breakdown.weather.rain_intensity, 0.5);
        assert_eq!(result.breakdown.track_condition.track_wetness, 0.5);
    }

    #[test]
    fn test_serialized_keys() {
        let (track, car) = reference_inputs();
        let result = ResultAssembler::assemble(&track, &car, 90.0, &PhysicsConstants::default());

        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["tur_suresi"], 90.0);
        for key in Breakdown::PRIMARY_FIELDS {
            assert!(json["detaylar"][key].is_number(), "missing {}", key);
        }
        assert_eq!(json["detaylar"]["hava_kosullari"]["nem"], 0.6);
        assert_eq!(json["detaylar"]["pist_kosullari"]["sicaklik"], 30.0);
    }
}
