//! # Playground
//!
//! A small demonstration of value semantics versus shared-reference
//! semantics in Rust.
//!
//! ## Layout
//!
//! - **Value types**: [`Dimensions`] is `Copy`, so assignment duplicates it
//! - **Reference types**: [`VideoMode`] is a shared handle, so assignment
//!   aliases one instance and [`Identity`] compares handles, not fields
//! - **Driver**: [`Script`] runs the demonstration and renders the transcript

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod script;
pub mod value;

// Re-export main types
pub use context::ScriptConfig;
pub use error::{PlaygroundError, Result};
pub use script::{Observation, Script, Section};
pub use value::{retime, Dimensions, Float, Identity, VideoMode, VideoModeState};

/// Playground version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
