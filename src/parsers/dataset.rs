use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::Person;
use crate::utils::validate_file_size;

/// Parse the dataset file into raw person records.
///
/// The document is either a mapping of key to person record or an array of records.
/// Document order is kept. Records in a mapping without a `name` take the mapping key.
/// Returns an error if the file cannot be read, is not valid JSON, is neither an object nor
/// an array, or if more than 50% of records fail to parse.
pub fn parse_dataset_file(path: &Path) -> Result<Vec<Person>> {
    // Open first and validate size on the handle to avoid a TOCTOU race
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

    parse_dataset_str(&content)
        .with_context(|| format!("Failed to parse dataset file: {}", path.display()))
}

/// Parse a dataset document held in memory
pub fn parse_dataset_str(content: &str) -> Result<Vec<Person>> {
    let document: Value = serde_json::from_str(content).context("Dataset is not valid JSON")?;

    let records: Vec<(Option<String>, Value)> = match document {
        Value::Object(map) => map.into_iter().map(|(key, value)| (Some(key), value)).collect(),
        Value::Array(items) => items.into_iter().map(|value| (None, value)).collect(),
        _ => bail!("Dataset must be a JSON object or array of person records"),
    };

    let total_records = records.len();
    let mut people = Vec::with_capacity(total_records);
    let mut skipped_count = 0;

    for (position, (key, value)) in records.into_iter().enumerate() {
        let label = key.clone().unwrap_or_else(|| format!("#{}", position + 1));

        if !value.is_object() {
            warn!("Skipping record {}: expected an object", label);
            skipped_count += 1;
            continue;
        }

        match serde_json::from_value::<Person>(value) {
            Ok(mut person) => {
                if person.name.is_none() {
                    person.name = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
                }
                people.push(person);
            }
            Err(e) => {
                warn!("Skipping record {}: {}", label, e);
                skipped_count += 1;
            }
        }
    }

    if total_records > 0 {
        let failure_rate = (skipped_count as f64) / (total_records as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed records in dataset: {} of {} failed ({:.1}%)",
                skipped_count,
                total_records,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        debug!("Parsed dataset: {} records ({} skipped)", people.len(), skipped_count);
    }

    Ok(people)
}
