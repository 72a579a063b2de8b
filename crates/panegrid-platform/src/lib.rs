pub mod paths;

pub use paths::{config_dir, config_file, cookie_dir, data_dir, ensure_dirs, resolve_data_dir};
