//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub const DATASET_FILE: &str = "structured_careers.json";

/// Builder for a dataset file inside a temp directory
pub struct DatasetBuilder {
    temp_dir: TempDir,
    people: Vec<(String, Value)>,
    as_array: bool,
}

impl DatasetBuilder {
    /// Create a new builder for an empty mapping-style dataset
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, people: Vec::new(), as_array: false }
    }

    /// Write the records as a JSON array instead of a mapping
    pub fn as_array(mut self) -> Self {
        self.as_array = true;
        self
    }

    /// Add a person under `key`
    pub fn with_person(mut self, key: &str, person: PersonBuilder) -> Self {
        self.people.push((key.to_string(), person.to_json()));
        self
    }

    /// Add a raw record value under `key`
    pub fn with_raw(mut self, key: &str, value: Value) -> Self {
        self.people.push((key.to_string(), value));
        self
    }

    /// Write the dataset file and return the directory with its path
    pub fn build(self) -> (TempDir, PathBuf) {
        let document = if self.as_array {
            Value::Array(self.people.into_iter().map(|(_, value)| value).collect())
        } else {
            Value::Object(self.people.into_iter().collect::<Map<String, Value>>())
        };

        let path = self.temp_dir.path().join(DATASET_FILE);
        let content = serde_json::to_string_pretty(&document).expect("Failed to serialize dataset");
        fs::write(&path, content).expect("Failed to write dataset");
        (self.temp_dir, path)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one person record
pub struct PersonBuilder {
    fields: Map<String, Value>,
    jobs: Vec<Value>,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(name));
        Self { fields, jobs: Vec::new() }
    }

    /// A record without a `name` field (the dataset key fills it in)
    pub fn unnamed() -> Self {
        Self { fields: Map::new(), jobs: Vec::new() }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.fields.insert("id".to_string(), json!(id));
        self
    }

    pub fn grad_yr(mut self, year: i32) -> Self {
        self.fields.insert("grad_yr".to_string(), json!(year));
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.fields.insert("link_ln".to_string(), json!(link));
        self
    }

    /// Append a job with company, title and location
    pub fn job(mut self, comp: &str, title: &str, loc: &str) -> Self {
        self.jobs.push(json!({ "comp": comp, "title": title, "loc": loc }));
        self
    }

    /// Append an arbitrary job object
    pub fn raw_job(mut self, job: Value) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn to_json(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert("jobs".to_string(), Value::Array(self.jobs.clone()));
        Value::Object(fields)
    }
}

/// Small dataset used across the integration tests
pub fn sample_dataset() -> (TempDir, PathBuf) {
    DatasetBuilder::new()
        .with_person(
            "asha",
            PersonBuilder::new("Asha Verma")
                .id("p-1")
                .grad_yr(2016)
                .link("https://www.linkedin.com/in/asha-verma")
                .raw_job(json!({
                    "comp": "Acme AI", "title": "Founder", "loc": "Bangalore",
                    "start_year": 2020, "sector": "Startup", "founder_flag": true,
                    "skill_tags": ["Machine Learning"], "job_i": 1
                }))
                .raw_job(json!({
                    "comp": "Google", "title": "Software Engineer", "loc": "Mountain View",
                    "start_year": 2016, "end_year": 2020, "sector": "Tech/Product", "job_i": 2
                })),
        )
        .with_person(
            "ravi",
            PersonBuilder::new("Ravi Kumar")
                .id("p-2")
                .grad_yr(2019)
                .raw_job(json!({
                    "comp": "Goldman Sachs", "title": "Analyst", "loc": "Mumbai",
                    "start_year": 2021, "sector": "Finance", "job_i": 1
                }))
                .raw_job(json!({
                    "comp": "Flipkart", "title": "Product Analyst", "loc": "Bangalore",
                    "start_year": 2019, "end_year": 2021, "sector": "Tech/Product", "job_i": 2
                })),
        )
        .with_person("meera", PersonBuilder::new("Meera Iyer").grad_yr(2018))
        .with_person(
            "zara",
            PersonBuilder::new("Zara Khan").grad_yr(2015).job("Globex", "Consultant", "Delhi"),
        )
        .build()
}

/// Path of the binary under test
pub fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_alumni-explorer")
}

pub fn dataset_dir(path: &Path) -> &Path {
    path.parent().expect("dataset has a parent directory")
}
