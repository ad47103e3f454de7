use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::models::{Alumnus, Person};
use crate::parsers::parse_dataset_file;

/// Load and normalize the dataset at `path`.
///
/// Returns the working set: every record with at least one job, in document order, each
/// with its `firstJob` attached.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, is larger than 50MB, is not a JSON
/// object or array, or if more than half of its records are malformed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use alumni_explorer::load_dataset;
///
/// let alumni = load_dataset(Path::new("structured_careers.json"))?;
/// println!("Loaded {} alumni", alumni.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_dataset(path: &Path) -> Result<Vec<Alumnus>> {
    let people = parse_dataset_file(path)?;
    let total_records = people.len();
    let alumni = normalize(people);

    info!(
        "Loaded {} alumni from {} ({} records without job history dropped)",
        alumni.len(),
        path.display(),
        total_records - alumni.len()
    );

    Ok(alumni)
}

/// Keep records with a job history and attach their `firstJob`, preserving order
pub fn normalize(people: Vec<Person>) -> Vec<Alumnus> {
    people.into_iter().filter_map(Alumnus::from_person).collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::models::Job;

    fn person(name: &str, companies: &[&str]) -> Person {
        Person {
            name: Some(name.to_string()),
            jobs: companies
                .iter()
                .map(|c| Job { comp: Some(c.to_string()), ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_drops_people_without_jobs() {
        let people = vec![person("A", &[]), person("B", &["Acme"]), person("C", &[])];
        let alumni = normalize(people);

        assert_eq!(alumni.len(), 1);
        assert_eq!(alumni[0].name(), "B");
        assert_eq!(alumni[0].first_job().comp.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_normalize_preserves_order() {
        let people = vec![person("C", &["x"]), person("A", &["y"]), person("B", &["z"])];
        let names: Vec<_> = normalize(people).iter().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_load_dataset_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("careers.json");
        fs::write(
            &path,
            r#"{"p1": {"name": "Empty", "jobs": []}, "p2": {"name": "Busy", "jobs": [{"comp": "Acme"}]}}"#,
        )
        .unwrap();

        let alumni = load_dataset(&path).unwrap();
        assert_eq!(alumni.len(), 1);
        assert_eq!(alumni[0].name(), "Busy");
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_dataset(&dir.path().join("missing.json"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to open dataset file"));
    }
}
