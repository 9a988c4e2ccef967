use crate::constants::PhysicsConstants;

const RAIN_TIME_PENALTY: f64 = 0.3;
const WIND_THRESHOLD: f64 = 5.0; // m/s
const WIND_TIME_PENALTY: f64 = 0.02; // per m/s above threshold
const WETNESS_TIME_PENALTY: f64 = 0.2;
const TRACK_TEMPERATURE_REFERENCE: f64 = 25.0; // °C
const TRACK_TEMPERATURE_TOLERANCE: f64 = 10.0; // °C
const TRACK_TEMPERATURE_PENALTY: f64 = 0.01; // per °C

pub fn segment_weather_factor(constants: &PhysicsConstants) -> f64 {
    1.0 + (constants.rain_intensity * RAIN_TIME_PENALTY
        + ((constants.wind_speed - WIND_THRESHOLD) * WIND_TIME_PENALTY).max(0.0)
        + constants.track_wetness * WETNESS_TIME_PENALTY)
}

pub fn weather_impact(constants: &PhysicsConstants) -> f64 {
    let mut impact = 1.0;
    if constants.rain_intensity > 0.0 {
        impact += constants.rain_intensity * RAIN_TIME_PENALTY;
    }
    if constants.wind_speed > WIND_THRESHOLD {
        impact += (constants.wind_speed - WIND_THRESHOLD) * WIND_TIME_PENALTY;
    }
    impact
}

pub fn track_condition_impact(constants: &PhysicsConstants) -> f64 {
    let mut impact = 1.0;
    if constants.track_wetness > 0.0 {
        impact += constants.track_wetness * WETNESS_TIME_PENALTY;
    }
    let temperature_offset = (constants.track_temperature - TRACK_TEMPERATURE_REFERENCE).abs();
    if temperature_offset > TRACK_TEMPERATURE_TOLERANCE {
        impact += temperature_offset * TRACK_TEMPERATURE_PENALTY;
    }
    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn conditions(rain: f64, wind: f64, wetness: f64, track_temperature: f64) -> PhysicsConstants {
        PhysicsConstants {
            rain_intensity: rain,
            wind_speed: wind,
            track_wetness: wetness,
            track_temperature,
            ..PhysicsConstants::default()
        }
    }

    #[test]
    fn test_neutral_in_default_conditions() {
        let constants = PhysicsConstants::default();
        assert_eq!(segment_weather_factor(&constants), 1.0);
        assert_eq!(weather_impact(&constants), 1.0);
        assert_eq!(track_condition_impact(&constants), 1.0);
    }

    #[test]
    fn test_segment_factor_sums_all_terms() {
        let constants = conditions(0.5, 10.0, 0.5, 30.0);
        assert_relative_eq!(
            segment_weather_factor(&constants),
            1.0 + 0.15 + 0.1 + 0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_weather_impact_ignores_wetness() {
        let constants = conditions(0.5, 10.0, 1.0, 30.0);
        assert_relative_eq!(weather_impact(&constants), 1.25, epsilon = 1e-12);
        assert!(segment_weather_factor(&constants) > weather_impact(&constants));
    }

    #[test]
    fn test_light_wind_has_no_effect() {
        let constants = conditions(0.0, 4.0, 0.0, 30.0);
        assert_eq!(segment_weather_factor(&constants), 1.0);
        assert_eq!(weather_impact(&constants), 1.0);
    }

    #[test]
    fn test_track_temperature_outside_tolerance() {
        assert_eq!(track_condition_impact(&conditions(0.0, 0.0, 0.0, 35.0)), 1.0);
        assert_relative_eq!(
            track_condition_impact(&conditions(0.0, 0.0, 0.5, 45.0)),
            1.0 + 0.1 + 0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_multipliers_never_below_one() {
        for rain in [0.0, 0.3, 1.0] {
            for wind in [0.0, 5.0, 20.0] {
                let constants = conditions(rain, wind, rain, 10.0);
                assert!(segment_weather_factor(&constants) >= 1.0);
                assert!(weather_impact(&constants) >= 1.0);
                assert!(track_condition_impact(&constants) >= 1.0);
            }
        }
    }
}
