//! Dataset loading and normalization
//!
//! # Error Handling Strategy
//!
//! - **Parse-level errors**: Delegated to [`crate::parsers`], which skips malformed records
//!   and fails only on unreadable or mostly broken documents.
//! - **Normalization**: Records without a job history are dropped here. They are not errors
//!   and are only counted in the load summary.
//! - **Background loading**: [`spawn_loader`] runs the whole load off the UI thread and hands
//!   back the `Result`. The browser logs a failure and keeps showing its loading state.

pub mod background;
pub mod loader;

pub use background::{LoadHandle, LoadPoll, spawn_loader};
pub use loader::{load_dataset, normalize};
