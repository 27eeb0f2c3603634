//! Secretenv Application - Parsing, resolution and use cases
//!
//! This crate turns raw source documents into compiled environments and
//! defines the ports through which secrets and files are reached.

pub mod error;
pub mod ports;
pub mod resolver;
pub mod source;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use resolver::{EnvironmentResolver, ResolverConfig, new_env};
pub use source::{ParsedSource, SourceDialect, parse_source, trim_quotes};
pub use use_cases::{ResolveEnvironment, ResolveEnvironmentOutput};
