//! `namegen.toml` configuration

pub mod consts;
mod model;

pub use model::{Config, GenerateConfig, SourceConfig, SourceKind};
