use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Straight {
        length: f64, // m
    },
    Corner {
        length: f64,     // m
        radius: f64,     // m
        bank_angle: f64, // degrees
    },
}

impl Segment {
    pub fn length(&self) -> f64 {
        match *self {
            Segment::Straight { length } | Segment::Corner { length, .. } => length,
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Segment::Corner { .. })
    }
}

// Every lap is timed on this circuit; track parameters only feed the breakdown.
pub const REFERENCE_CIRCUIT: [Segment; 6] = [
    // main straight
    Segment::Straight { length: 800.0 },
    Segment::Corner {
        length: 150.0,
        radius: 30.0,
        bank_angle: 5.0,
    },
    Segment::Straight { length: 400.0 },
    // banked
    Segment::Corner {
        length: 200.0,
        radius: 25.0,
        bank_angle: 8.0,
    },
    Segment::Straight { length: 300.0 },
    // final corner
    Segment::Corner {
        length: 180.0,
        radius: 40.0,
        bank_angle: 0.0,
    },
];

pub fn next_segment(segments: &[Segment], index: usize) -> Option<&Segment> {
    if segments.is_empty() {
        return None;
    }
    segments.get((index + 1) % segments.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_circuit_alternates() {
        let corners = REFERENCE_CIRCUIT.iter().filter(|s| s.is_corner()).count();
        assert_eq!(corners, 3);
        for (index, segment) in REFERENCE_CIRCUIT.iter().enumerate() {
            assert_eq!(segment.is_corner(), index % 2 == 1);
        }
    }

    #[test]
    fn test_reference_circuit_length() {
        let total: f64 = REFERENCE_CIRCUIT.iter().map(Segment::length).sum();
        assert_eq!(total, 2030.0);
    }

    #[test]
    fn test_next_segment_wraps() {
        assert_eq!(next_segment(&REFERENCE_CIRCUIT, 5), Some(&REFERENCE_CIRCUIT[0]));
        assert_eq!(next_segment(&REFERENCE_CIRCUIT, 0), Some(&REFERENCE_CIRCUIT[1]));
        assert_eq!(next_segment(&[], 0), None);
    }
}
