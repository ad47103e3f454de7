//! Plain-text reports printed by the CLI.
//!
//! Every dataset string passes through [`sanitize_for_terminal`] before it is formatted.

use std::fmt::Write;
use std::path::Path;

use crate::analysis::{CareerPathReport, PathCount};
use crate::models::{AlumniStats, Alumnus};
use crate::timeline::{job_facts, job_heading, job_tags, timeline};
use crate::utils::{format_path_with_tilde, sanitize_for_terminal};

/// Example people listed under each transition or path
const EXAMPLES_PER_ENTRY: usize = 5;

fn or_dash(value: Option<&str>) -> String {
    value.map(sanitize_for_terminal).unwrap_or_else(|| "-".to_string())
}

pub fn format_stats(stats: &AlumniStats, data_path: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Alumni Dataset Statistics");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out, "Total alumni: {}", stats.total_alumni);
    let _ = writeln!(out, "Total jobs: {}", stats.total_jobs);
    let _ = writeln!(out, "Unique companies: {}", stats.unique_companies);
    let _ = writeln!(out, "Unique locations: {}", stats.unique_locations);
    match stats.graduation_range() {
        Some((first, last)) => {
            let _ = writeln!(
                out,
                "Graduation years: {} - {} ({} distinct)",
                first,
                last,
                stats.unique_graduation_years()
            );
        }
        None => {
            let _ = writeln!(out, "Graduation years: none recorded");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Dataset: {}", format_path_with_tilde(data_path));
    out
}

/// One result line: `name | grad | title @ company | location`
pub fn format_search_line(alumnus: &Alumnus) -> String {
    let job = alumnus.first_job();
    format!(
        "{} | {} | {} | {}",
        sanitize_for_terminal(alumnus.name()),
        alumnus.grad_yr().map_or_else(|| "-".to_string(), |year| year.to_string()),
        sanitize_for_terminal(&job_heading(job)),
        or_dash(job.loc.as_deref()),
    )
}

/// Profile and job history, newest first
pub fn format_person(alumnus: &Alumnus, current_year: i32) -> String {
    let person = alumnus.person();
    let mut out = String::new();

    let _ = writeln!(out, "{}", sanitize_for_terminal(alumnus.name()));
    if let Some(year) = alumnus.grad_yr() {
        let _ = writeln!(out, "Graduated: {}", year);
    }
    if let Some(id) = &person.id {
        let _ = writeln!(out, "ID: {}", sanitize_for_terminal(id));
    }
    if let Some(email) = &person.email {
        let _ = writeln!(out, "Email: {}", sanitize_for_terminal(email));
    }
    let _ = writeln!(
        out,
        "LinkedIn: {}",
        alumnus.link_ln().map_or_else(|| "No LinkedIn found".to_string(), sanitize_for_terminal)
    );

    let jobs = timeline(alumnus);
    let _ = writeln!(out);
    let noun = if jobs.len() == 1 { "job" } else { "jobs" };
    let _ = writeln!(out, "Career history ({} {})", jobs.len(), noun);

    for job in jobs {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", sanitize_for_terminal(&job_heading(job)));

        let facts = job_facts(job, current_year);
        if !facts.is_empty() {
            let _ = writeln!(out, "    {}", sanitize_for_terminal(&facts.join(" · ")));
        }
        let tags = job_tags(job);
        if !tags.is_empty() {
            let _ = writeln!(out, "    {}", sanitize_for_terminal(&tags.join(" · ")));
        }
        if !job.skill_tags.is_empty() {
            let skills = sanitize_for_terminal(&job.skill_tags.join(", "));
            let _ = writeln!(out, "    Skills: {}", skills);
        }
    }

    out
}

fn write_counts(out: &mut String, heading: &str, entries: &[PathCount], total: usize) {
    let _ = writeln!(out, "{}", heading);
    if entries.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }

    for (rank, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({}, {:.1}%)",
            rank + 1,
            sanitize_for_terminal(&entry.label),
            entry.count,
            entry.share(total)
        );
        for person in entry.people.iter().take(EXAMPLES_PER_ENTRY) {
            let _ = writeln!(
                out,
                "       {} ({})",
                sanitize_for_terminal(&person.name),
                person
                    .linkedin
                    .as_deref()
                    .map_or_else(|| "No LinkedIn found".to_string(), sanitize_for_terminal)
            );
        }
    }
}

pub fn format_career_paths(report: &CareerPathReport, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Career Path Analysis");
    let _ = writeln!(out, "====================");
    let _ = writeln!(out, "People with sector transitions: {}", report.people_with_transitions);
    let _ = writeln!(out, "Total transitions: {}", report.total_transitions);
    let _ = writeln!(out, "Career paths (2+ sectors): {}", report.total_paths);
    let _ = writeln!(out);
    write_counts(
        &mut out,
        &format!("Top {} transitions", top),
        report.top_transitions(top),
        report.total_transitions,
    );
    let _ = writeln!(out);
    write_counts(
        &mut out,
        &format!("Top {} career paths", top),
        report.top_paths(top),
        report.total_paths,
    );
    out
}
