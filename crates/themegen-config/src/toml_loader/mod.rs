//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{config_dir, create_default_config, default_config_path};
