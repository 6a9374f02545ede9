//! Shading-language vocabulary registries.
//!
//! Callers work with stable identifiers (`Qualifier`, `BasicType`, `ImageFormat`, ...) and look up spellings through
//! the functions in each submodule instead of matching on strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IR types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use glslout_core::lang::qualifiers::{self, Qualifier};
//!
//! assert_eq!(qualifiers::keyword(Qualifier::CentroidIn), "centroid in");
//! ```

pub mod builtins;
pub mod dialect;
pub mod image_formats;
pub mod layout;
pub mod qualifiers;
pub mod texture_compat;
pub mod types;
