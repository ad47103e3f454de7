use std::cmp::Reverse;

use super::duration::job_duration;
use crate::models::{Alumnus, Job};

/// Jobs for the detail view, most recent first.
///
/// Ordered by start year descending. Jobs without a start year follow the dated ones in
/// their listed order.
pub fn timeline(alumnus: &Alumnus) -> Vec<&Job> {
    let mut jobs: Vec<&Job> = alumnus.jobs().iter().collect();
    jobs.sort_by_key(|job| (job.start_year.is_none(), Reverse(job.start_year)));
    jobs
}

/// "2015 - 2018", "2020 - present", "until 2018", or `None` without years
pub fn format_year_range(job: &Job) -> Option<String> {
    match (job.start_year, job.end_year) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
        (Some(start), None) => Some(format!("{} - present", start)),
        (None, Some(end)) => Some(format!("until {}", end)),
        (None, None) => None,
    }
}

/// "Title @ Company", whichever half is known, or "Untitled role"
pub fn job_heading(job: &Job) -> String {
    match (job.title.as_deref(), job.comp.as_deref()) {
        (Some(title), Some(comp)) => format!("{} @ {}", title, comp),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => "Untitled role".to_string(),
    }
}

/// Year range, duration and location, in that order, skipping unknowns
pub fn job_facts(job: &Job, current_year: i32) -> Vec<String> {
    let mut facts = Vec::new();
    if let Some(range) = format_year_range(job) {
        facts.push(range);
    }
    if let Some(duration) = job_duration(job, current_year) {
        facts.push(duration.to_string());
    }
    if let Some(loc) = &job.loc {
        facts.push(loc.clone());
    }
    facts
}

/// Descriptive tags: sector, sub-sector, seniority, employment type, company size, remote
/// type, then "Founder" when flagged
pub fn job_tags(job: &Job) -> Vec<String> {
    let mut tags: Vec<String> = [
        &job.sector,
        &job.sub_sector,
        &job.seniority,
        &job.employment_type,
        &job.company_size,
        &job.remote_type,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();

    if job.founder_flag {
        tags.push("Founder".to_string());
    }
    tags
}
