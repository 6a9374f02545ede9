//! Provide the canonical shading-language vocabulary used by the `glslout` renderer.
//!
//! This crate is intentionally small and dependency-free. It holds the *words* of the output language (qualifier
//! keywords, type names, image formats, block layouts, built-in symbols, compatibility rename tables) and the
//! predicates that decide which dialect spells what.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no renderer types.
//! - Everything here is a `const` table or a pure function over `Copy` identifiers.

pub mod lang;
pub mod names;
