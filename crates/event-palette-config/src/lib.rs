//! Configuration and file management for the event palette
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Palette configuration (PaletteConfig)
//! - Loading the event registry and string table the config points at

pub mod config_file;
pub mod palette_config;
pub mod paths;

pub use config_file::load_config_file;
pub use palette_config::PaletteConfig;
pub use paths::cache_dir;
