// Core modules
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod source;
pub mod template;

// Re-export commonly used types
pub use context::{Category, ConstructionContext, ContextSet};
pub use error::{NamegenError, Result};
pub use generator::{NameGenerator, NameRequest, NameResponse};
pub use template::{evaluate, parse, RandomSource, Token};
