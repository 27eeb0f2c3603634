//! Secretenv Domain - Core types
//!
//! This crate defines the domain model for building a process environment
//! from a template document whose values may reference external secrets.
//! All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod template;

pub use environment::{EnvVar, Environment, LineNumber, TemplateVars};
pub use error::{EnvError, EnvResult, LineErrorKind};
pub use template::{Node, Parser, Template, TemplateError};
