use std::collections::{BTreeSet, HashSet};

use crate::models::{AlumniStats, Alumnus};

/// Compute summary counts over the normalized list.
///
/// Companies and locations are counted from each person's `firstJob`, graduation years from
/// the person. Absent values are not counted.
pub fn compute_stats(alumni: &[Alumnus]) -> AlumniStats {
    let mut companies: HashSet<&str> = HashSet::new();
    let mut locations: HashSet<&str> = HashSet::new();
    let mut graduation_years: BTreeSet<i32> = BTreeSet::new();
    let mut total_jobs = 0;

    for alumnus in alumni {
        let first_job = alumnus.first_job();
        if let Some(comp) = first_job.comp.as_deref() {
            companies.insert(comp);
        }
        if let Some(loc) = first_job.loc.as_deref() {
            locations.insert(loc);
        }
        if let Some(year) = alumnus.grad_yr() {
            graduation_years.insert(year);
        }
        total_jobs += alumnus.jobs().len();
    }

    AlumniStats {
        total_alumni: alumni.len(),
        total_jobs,
        unique_companies: companies.len(),
        unique_locations: locations.len(),
        graduation_years: graduation_years.into_iter().collect(),
    }
}
