//! Configuration parsing and policy resolution.
//!
//! Precedence: CLI overrides > `cuiguard.toml` > profile preset defaults.
//! The resolved output is an [`cuiguard_engine::InspectionPolicy`], threaded
//! explicitly through every call.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CuiguardConfigV1, parse_config_toml};
pub use presets::preset;
pub use resolve::{Overrides, ResolvedConfig, resolve_config};
