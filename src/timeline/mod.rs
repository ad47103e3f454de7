//! Career timeline for the detail view: job ordering, year ranges and durations

pub mod duration;
pub mod history;

pub use duration::{JobDuration, current_year, job_duration, job_duration_now};
pub use history::{format_year_range, job_facts, job_heading, job_tags, timeline};
