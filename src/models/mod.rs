//! Data models for the alumni dataset.
//!
//! - [`Person`] - A raw record as it appears in the JSON document
//! - [`Job`] - One employment entry of a person
//! - [`Alumnus`] - A normalized person with at least one job and its `firstJob`
//! - [`AlumniStats`] - Aggregate counts over the normalized list
//!
//! Records deserialize leniently: malformed optional fields become absent instead of failing
//! the record (see `parsers::deserializers`).

pub mod person;
pub mod stats;

pub use person::{Alumnus, Job, Person};
pub use stats::AlumniStats;
