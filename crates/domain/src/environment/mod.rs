//! Environment and variable domain types

mod compiled;
mod template_vars;
mod variable;

pub use compiled::Environment;
pub use template_vars::TemplateVars;
pub use variable::{EnvVar, LineNumber};
