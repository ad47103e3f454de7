//! JSON parsers for the alumni dataset
//!
//! # Error Handling Strategy
//!
//! Parsing follows a **graceful degradation** approach:
//!
//! - **Field-level problems**: Malformed optional fields deserialize as absent (see
//!   [`deserializers`]), so one bad year never drops a whole record.
//!
//! - **Record-level failures**: Records that are not JSON objects or fail to deserialize are
//!   logged with `tracing::warn!` and skipped.
//!
//! - **Catastrophic failure detection**: If more than half of the records fail, the parser
//!   returns an error instead of handing back a mostly empty dataset.
//!
//! - **Document-level failures**: Unreadable files, oversized files and invalid JSON are
//!   propagated as `anyhow` errors with context.

pub mod dataset;
pub mod deserializers;

pub use dataset::{parse_dataset_file, parse_dataset_str};
