//! Secret provider adapters.

mod file_provider;
mod static_provider;

pub use file_provider::FileSecretProvider;
pub use static_provider::StaticSecretProvider;
