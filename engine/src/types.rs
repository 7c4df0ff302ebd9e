use serde::{Deserialize, Serialize};

/// One slot in a series: a known numeric value or a gap.
///
/// An explicit enum is used rather than a NaN sentinel inside a plain
/// `Vec<f64>`, so a legitimate NaN payload can never be mistaken for a
/// gap. On the wire a gap is `null` and a value is any JSON number;
/// integers deserialize as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Sample {
    Value(f64),
    Missing,
}

impl Sample {
    pub fn is_missing(&self) -> bool {
        matches!(self, Sample::Missing)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Sample::Value(v) => Some(*v),
            Sample::Missing => None,
        }
    }
}

impl From<Option<f64>> for Sample {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Sample::Value(v),
            None => Sample::Missing,
        }
    }
}

impl From<Sample> for Option<f64> {
    fn from(sample: Sample) -> Self {
        sample.value()
    }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Self {
        Sample::Value(v)
    }
}

/// An ordered run of equally spaced samples.
///
/// Positions are significant and preserved by every operation. The wire
/// form is a bare JSON array of numbers and nulls.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        Series { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of gap slots.
    pub fn missing_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_missing()).count()
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Series { samples }
    }
}
