//! # Adapters
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Adapters Provided
//!
//! - `StaticConfigProvider` - In-code node settings (always available)
//! - `TomlConfigProvider` - Config file loading (requires "config" feature)
//! - `JsonDescriptorCodec` - Size-bounded JSON codec (requires "json" feature)

// Semantic submodules
/// Configuration providers
pub mod config;
/// Descriptor codecs
#[cfg(feature = "json")]
pub mod codec;

// Re-export public API
pub use config::StaticConfigProvider;

#[cfg(feature = "config")]
pub use config::{ConfigError, TomlConfigProvider};

#[cfg(feature = "json")]
pub use codec::JsonDescriptorCodec;
