use crate::errors::{Result, SimulationError};
use crate::input::parameters::{ParamValue, ParameterMap};

pub fn parse_parameters(input: &str) -> Result<ParameterMap> {
    let trimmed = input.trim();
    let separator = if trimmed.contains('|') { '|' } else { '\n' };

    let mut parameters = ParameterMap::new();
    for entry in trimmed.split(separator) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        match entry.split_once(':') {
            Some((key, value)) => {
                if value.contains(':') {
                    return Err(SimulationError::MalformedInput(entry.to_string()));
                }
                let key = key.trim();
                if key.is_empty() {
                    return Err(SimulationError::MalformedInput(entry.to_string()));
                }
                let value = value.trim();
                let parsed = match value.parse::<f64>() {
                    Ok(number) => ParamValue::Number(number),
                    Err(_) => ParamValue::Text(value.to_string()),
                };
                parameters.insert(key.to_string(), parsed);
            }
            None => {
                parameters.insert(entry.to_string(), ParamValue::Flag(true));
            }
        }
    }

    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_separated() {
        let input = "pist_uzunlugu: 5.4\nviraj_sayisi: 16\n\nduz_yol_yuzdesi: 0.6\n";

        let parsed = parse_parameters(input).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["pist_uzunlugu"], ParamValue::Number(5.4));
        assert_eq!(parsed["viraj_sayisi"], ParamValue::Number(16.0));
    }

    #[test]
    fn test_pipe_separated() {
        let parsed = parse_parameters("ortalama_hiz: 180 | viraj_performansi: 0.8").unwrap();

        assert_eq!(parsed["ortalama_hiz"], ParamValue::Number(180.0));
        assert_eq!(parsed["viraj_performansi"], ParamValue::Number(0.8));
    }

    #[test]
    fn test_text_and_flags() {
        let parsed = parse_parameters("isim: Monza\nyagmur_lastigi").unwrap();

        assert_eq!(parsed["isim"], ParamValue::Text("Monza".to_string()));
        assert_eq!(parsed["yagmur_lastigi"], ParamValue::Flag(true));
    }

    #[test]
    fn test_extra_colon_is_malformed() {
        let result = parse_parameters("tur: 1:32.5");

        assert_eq!(
            result,
            Err(SimulationError::MalformedInput("tur: 1:32.5".to_string()))
        );
    }

    #[test]
    fn test_missing_key_is_malformed() {
        assert!(matches!(
            parse_parameters(": 5"),
            Err(SimulationError::MalformedInput(_))
        ));
    }
}
