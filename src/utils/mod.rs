pub mod environment;
pub mod logging;
pub mod paths;
pub mod terminal;

pub use environment::{
    DATA_ENV_VAR, DEFAULT_DATASET_FILE, default_browse_log_path, resolve_data_path,
};
pub use logging::init_logging;
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_for_terminal;
