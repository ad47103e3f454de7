use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use super::parser::{parse_founder, parse_year};
use crate::models::{Alumnus, Job};

/// Keep the alumni matching `filter`, in their original order.
///
/// An empty expression keeps everyone. Operators are applied left to right.
pub fn apply_filters<'a>(alumni: &'a [Alumnus], filter: &FilterExpr) -> Vec<&'a Alumnus> {
    alumni.iter().filter(|alumnus| evaluate_filter(alumnus, filter)).collect()
}

/// Evaluate a filter expression against one person
pub fn evaluate_filter(alumnus: &Alumnus, filter: &FilterExpr) -> bool {
    let Some((first, rest)) = filter.filters.split_first() else {
        return true;
    };

    let mut result = evaluate_field_filter(alumnus, first);
    for (operator, next) in filter.operators.iter().zip(rest) {
        let next_result = evaluate_field_filter(alumnus, next);
        result = match operator {
            FilterOperator::And => result && next_result,
            FilterOperator::Or => result || next_result,
        };
    }

    result
}

fn evaluate_field_filter(alumnus: &Alumnus, filter: &FieldFilter) -> bool {
    let needle = filter.value.to_lowercase();
    let jobs = alumnus.jobs();

    match filter.field {
        FilterField::Company => any_job_field(jobs, &needle, |job| job.comp.as_deref()),
        FilterField::Title => any_job_field(jobs, &needle, |job| job.title.as_deref()),
        FilterField::Location => any_job_field(jobs, &needle, |job| job.loc.as_deref()),
        FilterField::Seniority => any_job_field(jobs, &needle, |job| job.seniority.as_deref()),
        FilterField::Remote => any_job_field(jobs, &needle, |job| job.remote_type.as_deref()),
        FilterField::Sector => {
            any_job_field(jobs, &needle, |job| job.sector.as_deref())
                || any_job_field(jobs, &needle, |job| job.sub_sector.as_deref())
        }
        FilterField::Skill => jobs
            .iter()
            .flat_map(|job| job.skill_tags.iter())
            .any(|tag| tag.to_lowercase().contains(&needle)),
        FilterField::Founder => match parse_founder(&filter.value) {
            Some(wanted) => jobs.iter().any(|job| job.founder_flag) == wanted,
            None => false,
        },
        FilterField::Grad => match (parse_year(&filter.value), alumnus.grad_yr()) {
            (Some(year), Some(grad)) => grad == year,
            _ => false,
        },
        FilterField::Since => match (parse_year(&filter.value), alumnus.grad_yr()) {
            (Some(year), Some(grad)) => grad >= year,
            _ => false,
        },
    }
}

/// Case-insensitive substring match of `needle` against one field of any job
fn any_job_field<F>(jobs: &[Job], needle: &str, field: F) -> bool
where
    F: Fn(&Job) -> Option<&str>,
{
    jobs.iter().filter_map(field).any(|value| value.to_lowercase().contains(needle))
}
