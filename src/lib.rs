//! Alumni Explorer - search and browse an alumni career dataset
//!
//! This library loads a JSON dataset of alumni records (a graduation year and a job history
//! per person) and provides:
//!
//! - Lenient parsing and normalization into people with at least one job
//! - Aggregate statistics (alumni, jobs, distinct companies and locations)
//! - Case-insensitive substring search and `field:value` filter expressions
//! - Job durations and reverse-chronological career timelines
//! - Sector transition and career path analysis
//! - An interactive terminal browser with debounced search
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use alumni_explorer::{compute_stats, load_dataset, search_people};
//!
//! let alumni = load_dataset(Path::new("structured_careers.json"))?;
//! let stats = compute_stats(&alumni);
//! println!("{} alumni across {} companies", stats.total_alumni, stats.unique_companies);
//!
//! for alumnus in search_people(&alumni, "acme") {
//!     println!("{}", alumnus.name());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod clipboard;
pub mod dataset;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod search;
pub mod timeline;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{analyze_career_paths, compute_stats};
pub use dataset::load_dataset;
pub use models::{AlumniStats, Alumnus, Job, Person};
pub use search::search_people;
pub use timeline::{JobDuration, job_duration};
