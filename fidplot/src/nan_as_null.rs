//! Serde helpers for float data that may contain NaN, e.g. from unparsable
//! cells. JSON has no NaN, so non-finite values are stored as `null` and
//! read back as NaN.

use serde::{Deserialize, Deserializer, Serializer};

fn to_option(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn from_option(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

/// For `Vec<f64>` fields.
pub mod values {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| to_option(*value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(from_option).collect())
    }
}

/// For `Vec<[f64; 2]>` fields.
pub mod points {
    use super::*;

    pub fn serialize<S: Serializer>(points: &[[f64; 2]], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            points
                .iter()
                .map(|[x, y]| [to_option(*x), to_option(*y)]),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<[f64; 2]>, D::Error> {
        let points = Vec::<[Option<f64>; 2]>::deserialize(deserializer)?;
        Ok(points
            .into_iter()
            .map(|[x, y]| [from_option(x), from_option(y)])
            .collect())
    }
}
