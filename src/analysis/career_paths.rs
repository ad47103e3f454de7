//! Sector transitions and career paths across the dataset.
//!
//! A person's jobs are put in chronological order and reduced to their sequence of sectors.
//! Every consecutive change of sector is a *transition* (`Tech/Product → Finance`); the whole
//! sequence with repeats collapsed is the person's *career path*, kept when it spans at least
//! two sectors.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Alumnus, Job};

const PATH_SEPARATOR: &str = " → ";

/// Someone who made a transition or followed a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRef {
    pub name: String,
    pub linkedin: Option<String>,
}

/// How often a transition or path occurs, and by whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCount {
    pub label: String,
    pub count: usize,
    pub people: Vec<PersonRef>,
}

impl PathCount {
    /// Percentage of `total`
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 { 0.0 } else { (self.count as f64 / total as f64) * 100.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CareerPathReport {
    pub total_transitions: usize,
    pub total_paths: usize,
    pub people_with_transitions: usize,
    /// Sorted by count, most common first; ties keep first appearance
    pub transitions: Vec<PathCount>,
    /// Sorted by count, most common first; ties keep first appearance
    pub paths: Vec<PathCount>,
}

impl CareerPathReport {
    pub fn top_transitions(&self, n: usize) -> &[PathCount] {
        &self.transitions[..n.min(self.transitions.len())]
    }

    pub fn top_paths(&self, n: usize) -> &[PathCount] {
        &self.paths[..n.min(self.paths.len())]
    }
}

/// Counts labels in first-seen order
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<PathCount>,
    total: usize,
}

impl Tally {
    fn record(&mut self, label: String, person: &PersonRef) {
        self.total += 1;
        let idx = *self.index.entry(label.clone()).or_insert_with(|| {
            self.counts.push(PathCount { label, count: 0, people: Vec::new() });
            self.counts.len() - 1
        });
        self.counts[idx].count += 1;
        self.counts[idx].people.push(person.clone());
    }

    fn into_sorted(mut self) -> (usize, Vec<PathCount>) {
        // Stable sort keeps first appearance among equal counts
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        (self.total, self.counts)
    }
}

/// Jobs oldest first: by start year, undated jobs by `9999 - job_i` (higher `job_i` is older)
pub fn chronological_jobs(jobs: &[Job]) -> Vec<&Job> {
    let mut ordered: Vec<&Job> = jobs.iter().collect();
    ordered.sort_by_key(|job| match job.start_year {
        Some(year) => i64::from(year),
        None => 9999 - i64::from(job.job_i.unwrap_or(0)),
    });
    ordered
}

/// Analyze sector transitions and career paths of everyone with two or more jobs
pub fn analyze_career_paths(alumni: &[Alumnus]) -> CareerPathReport {
    let mut transitions = Tally::default();
    let mut paths = Tally::default();
    let mut people_with_transitions = 0;

    for alumnus in alumni.iter().filter(|a| a.jobs().len() >= 2) {
        let person = PersonRef {
            name: alumnus.name().to_string(),
            linkedin: alumnus.link_ln().map(str::to_string),
        };

        let sectors: Vec<&str> = chronological_jobs(alumnus.jobs())
            .iter()
            .filter_map(|job| job.sector.as_deref())
            .collect();

        let mut made_transition = false;
        for pair in sectors.windows(2) {
            if pair[0] != pair[1] {
                transitions.record(format!("{}{}{}", pair[0], PATH_SEPARATOR, pair[1]), &person);
                made_transition = true;
            }
        }
        if made_transition {
            people_with_transitions += 1;
        }

        let mut collapsed = sectors.clone();
        collapsed.dedup();
        if collapsed.len() >= 2 {
            paths.record(collapsed.join(PATH_SEPARATOR), &person);
        }
    }

    let (total_transitions, transitions) = transitions.into_sorted();
    let (total_paths, paths) = paths.into_sorted();

    CareerPathReport { total_transitions, total_paths, people_with_transitions, transitions, paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    fn job(sector: &str, start_year: Option<i32>, job_i: Option<i32>) -> Job {
        Job { sector: Some(sector.to_string()), start_year, job_i, ..Default::default() }
    }

    fn alumnus(name: &str, jobs: Vec<Job>) -> Alumnus {
        let person = Person {
            name: Some(name.to_string()),
            link_ln: Some(format!("https://linkedin.com/in/{}", name.to_lowercase())),
            jobs,
            ..Default::default()
        };
        Alumnus::from_person(person).unwrap()
    }

    #[test]
    fn test_chronological_jobs_by_start_year() {
        let jobs = vec![job("B", Some(2020), Some(1)), job("A", Some(2015), Some(2))];
        let sectors: Vec<_> =
            chronological_jobs(&jobs).iter().map(|j| j.sector.clone().unwrap()).collect();
        assert_eq!(sectors, vec!["A", "B"]);
    }

    #[test]
    fn test_chronological_jobs_undated_fall_back_to_job_index() {
        let jobs = vec![
            job("Recent", None, Some(1)),
            job("Old", None, Some(3)),
            job("Mid", None, Some(2)),
        ];
        let sectors: Vec<_> =
            chronological_jobs(&jobs).iter().map(|j| j.sector.clone().unwrap()).collect();
        assert_eq!(sectors, vec!["Old", "Mid", "Recent"]);
    }

    #[test]
    fn test_transitions_and_paths() {
        let alumni = vec![
            alumnus(
                "Asha",
                vec![
                    job("Finance", Some(2021), None),
                    job("Tech/Product", Some(2018), None),
                    job("Tech/Product", Some(2016), None),
                ],
            ),
            alumnus(
                "Ravi",
                vec![job("Finance", Some(2019), None), job("Tech/Product", Some(2015), None)],
            ),
            alumnus(
                "Meera",
                vec![job("Consulting", Some(2020), None), job("Consulting", Some(2017), None)],
            ),
            alumnus("Solo", vec![job("Startup", Some(2020), None)]),
        ];

        let report = analyze_career_paths(&alumni);

        assert_eq!(report.total_transitions, 2);
        assert_eq!(report.people_with_transitions, 2);
        assert_eq!(report.transitions.len(), 1);
        assert_eq!(report.transitions[0].label, "Tech/Product → Finance");
        assert_eq!(report.transitions[0].count, 2);
        assert_eq!(report.transitions[0].people[0].name, "Asha");

        assert_eq!(report.total_paths, 2);
        assert_eq!(report.paths[0].label, "Tech/Product → Finance");
        assert!((report.paths[0].share(report.total_paths) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let alumni = vec![
            alumnus("A", vec![job("X", Some(2010), None), job("Y", Some(2012), None)]),
            alumnus("B", vec![job("P", Some(2010), None), job("Q", Some(2012), None)]),
            alumnus("C", vec![job("P", Some(2010), None), job("Q", Some(2012), None)]),
        ];

        let report = analyze_career_paths(&alumni);
        let labels: Vec<_> = report.transitions.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["P → Q", "X → Y"]);
        assert_eq!(report.top_transitions(1).len(), 1);
        assert_eq!(report.top_transitions(10).len(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let report = analyze_career_paths(&[]);
        assert_eq!(report, CareerPathReport::default());
        assert!(report.top_paths(5).is_empty());
    }

    #[test]
    fn test_share_of_zero_total() {
        let count = PathCount { label: "A → B".to_string(), count: 0, people: vec![] };
        assert_eq!(count.share(0), 0.0);
    }
}
