//! Secretenv Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod persistence;
pub mod secrets;
pub mod serialization;

pub use persistence::TokioFileSystem;
pub use secrets::{FileSecretProvider, StaticSecretProvider};
pub use serialization::{SerializationError, from_json_bytes};
