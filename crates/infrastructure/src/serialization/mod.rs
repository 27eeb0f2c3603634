//! JSON helpers for the secrets file format.

mod json;

pub use json::*;
