//! Lenient field deserializers for alumni records.
//!
//! The dataset is produced by an upstream extraction step and optional fields are often
//! malformed (`"present"` as a year, numbers as strings, stray nulls). None of these helpers
//! fail: anything unusable deserializes as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::Job;

/// Earliest year accepted from the dataset or a filter
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted from the dataset or a filter
pub const MAX_YEAR: i32 = 2100;

/// Optional year: accepts integers, integral floats and numeric strings within
/// [`MIN_YEAR`]..=[`MAX_YEAR`]
pub fn deserialize_optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(year_from_value(&value))
}

/// Optional listing index: same accepted forms as a year, any non-negative value
pub fn deserialize_optional_index<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value).filter(|index| *index >= 0))
}

fn year_from_value(value: &Value) -> Option<i32> {
    integer_from_value(value).filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}

fn integer_from_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(f))
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Optional string: empty or whitespace-only strings and non-strings become `None`
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Boolean flag: accepts booleans and "true"/"false" strings, defaults to false
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Skill tags: keeps non-empty string entries, drops everything else
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Job list: non-object entries are skipped, a missing or non-array value is empty
pub fn deserialize_jobs<'de, D>(deserializer: D) -> Result<Vec<Job>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<Job>(item).ok())
        .collect())
}
