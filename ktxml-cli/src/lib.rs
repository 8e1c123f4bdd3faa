//! CLI library for testing purposes

pub mod config;
pub mod debug;
pub mod generate;

pub use config::{ConfigOverrides, FileConfig, resolve_config};
pub use debug::{DebugOptions, debug_json};
pub use generate::{GenerateOptions, generate, parse_kinds};
