use serde::{Deserialize, Serialize};

use crate::parsers::deserializers::{
    deserialize_flag, deserialize_jobs, deserialize_lenient_string, deserialize_optional_index,
    deserialize_optional_year, deserialize_tags,
};

/// One employment entry in a person's history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub comp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub loc: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    pub start_year: Option<i32>,
    /// Absent means the job is ongoing
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    pub end_year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub sub_sector: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub seniority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub company_size: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub remote_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub founder_flag: bool,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub skill_tags: Vec<String>,
    /// Listing index from the upstream structurer (1 = most recent)
    #[serde(default, deserialize_with = "deserialize_optional_index")]
    pub job_i: Option<i32>,
}

/// A raw alumni record as it appears in the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    pub grad_yr: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub link_ln: Option<String>,
    #[serde(default, deserialize_with = "deserialize_jobs")]
    pub jobs: Vec<Job>,
}

/// A normalized person that is guaranteed to have at least one job.
///
/// Only [`Alumnus::from_person`] builds one, so [`Alumnus::first_job`] never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alumnus {
    #[serde(flatten)]
    person: Person,
    #[serde(rename = "firstJob")]
    first_job: Job,
}

impl Alumnus {
    /// Normalize a raw record, returning `None` when it has no job history
    pub fn from_person(person: Person) -> Option<Self> {
        let first_job = person.jobs.first()?.clone();
        Some(Self { person, first_job })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_job(&self) -> &Job {
        &self.first_job
    }

    pub fn jobs(&self) -> &[Job] {
        &self.person.jobs
    }

    /// Display name; empty only if the record had no name and no mapping key
    pub fn name(&self) -> &str {
        self.person.name.as_deref().unwrap_or("")
    }

    pub fn grad_yr(&self) -> Option<i32> {
        self.person.grad_yr
    }

    pub fn link_ln(&self) -> Option<&str> {
        self.person.link_ln.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.person.id.as_deref()
    }
}
