//! Dataset-wide analysis: summary counts and career paths

pub mod aggregate;
pub mod career_paths;

pub use aggregate::compute_stats;
pub use career_paths::{CareerPathReport, PathCount, PersonRef, analyze_career_paths};
