use std::fmt;

use chrono::{Datelike, Local};

use crate::models::Job;

/// How long a job lasted, in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobDuration {
    /// Both start and end year are known
    Completed { years: i32 },
    /// No end year; measured up to the current year
    Ongoing { years: i32 },
}

impl JobDuration {
    pub fn years(&self) -> i32 {
        match self {
            JobDuration::Completed { years } | JobDuration::Ongoing { years } => *years,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, JobDuration::Ongoing { .. })
    }
}

fn write_years(f: &mut fmt::Formatter<'_>, years: i32) -> fmt::Result {
    match years {
        y if y <= 0 => write!(f, "< 1 year"),
        1 => write!(f, "1 year"),
        y => write!(f, "{} years", y),
    }
}

impl fmt::Display for JobDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_years(f, self.years())?;
        if self.is_ongoing() {
            write!(f, " (ongoing)")?;
        }
        Ok(())
    }
}

/// Duration of a job relative to `current_year`.
///
/// - start and end known: `end - start`
/// - only start known: `current_year - start`, ongoing
/// - start unknown: no duration
pub fn job_duration(job: &Job, current_year: i32) -> Option<JobDuration> {
    let start = job.start_year?;
    Some(match job.end_year {
        Some(end) => JobDuration::Completed { years: end.saturating_sub(start) },
        None => JobDuration::Ongoing { years: current_year.saturating_sub(start) },
    })
}

/// [`job_duration`] measured against the local calendar year
pub fn job_duration_now(job: &Job) -> Option<JobDuration> {
    job_duration(job, current_year())
}

pub fn current_year() -> i32 {
    Local::now().year()
}
