//! Render GLSL / ESSL source text from typed IR.
//!
//! This module defines [`GlslEmitter`] and wires together the focused submodules that implement IR → GLSL
//! rendering. The heavy lifting lives in those submodules; `mod.rs` only holds the emitter and the per-pass state.
//!
//! ## Notes
//! - All per-pass mutable state (output buffer, name map, declared structs, unroll stack, scope depth) lives in a
//!   [`RenderContext`] passed by `&mut` through every rendering call. The emitter itself is immutable, so one emitter
//!   can render any number of passes, one after another or on separate threads.
//! - Rendering is codegen-only: it does not read or write files.
//!
//! ## See also
//! - [`program`]: pass entry points
//! - [`statements`]: blocks, control flow, declarations, function definitions
//! - [`expressions`]: operators, calls, constructors, swizzles, index clamping
//! - [`types`]: type occurrences and struct / interface-block bodies
//! - [`qualifiers`]: storage qualifier mapping and layout qualifiers
//! - [`consts`]: constant values
//! - [`operators`]: operator lowering table
//! - [`unroll`]: forced loop unrolling
//! - [`names`]: identifier renaming

#![cfg_attr(not(test), deny(clippy::unwrap_used))]

mod consts;
mod errors;
mod expressions;
mod names;
mod operators;
mod program;
mod qualifiers;
mod statements;
mod types;
mod unroll;
mod writer;

pub use errors::EmitError;
pub use names::NameMap;
pub use program::render;
pub use writer::SourceWriter;

use crate::capabilities::{BuiltInLookup, FunctionEmulator, PrefixEmulator, StaticBuiltIns};
use crate::config::RenderConfig;

use types::DeclaredEntities;
use unroll::LoopUnrollStack;

/// Render GLSL / ESSL source from typed IR.
///
/// ## Notes
/// - The public API is [`GlslEmitter::emit`] / [`GlslEmitter::emit_with_names`] (implemented in `program.rs`).
/// - Rendering helpers are implemented on this type across submodules and take the pass state explicitly.
pub struct GlslEmitter<'a> {
    /// Target and workaround settings for every pass
    config: RenderConfig,
    /// Symbol-table query for built-in names
    builtins: &'a dyn BuiltInLookup,
    /// Replacement names for emulated built-in functions
    emulator: &'a dyn FunctionEmulator,
}

impl<'a> GlslEmitter<'a> {
    pub fn new(config: RenderConfig, builtins: &'a dyn BuiltInLookup, emulator: &'a dyn FunctionEmulator) -> Self {
        Self {
            config,
            builtins,
            emulator,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Built-in check against the source version of this pass.
    pub(crate) fn is_built_in(&self, name: &str) -> bool {
        self.builtins.is_built_in(name, self.config.shader_version)
    }
}

impl GlslEmitter<'static> {
    /// Emitter backed by the static built-in registry and the `webgl_<name>_emu` emulation spelling.
    pub fn with_defaults(config: RenderConfig) -> Self {
        Self::new(config, &StaticBuiltIns, &PrefixEmulator)
    }
}

/// Mutable state of one rendering pass.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    /// Rendered text
    pub(crate) out: SourceWriter,
    /// Original → rendered identifiers
    pub(crate) names: NameMap,
    /// Structs whose body has been written
    pub(crate) declared: DeclaredEntities,
    /// Frames of the forced-unrolled loops being rendered
    pub(crate) unroll: LoopUnrollStack,
    /// Block nesting; 0 is global scope
    pub(crate) depth: usize,
}

impl RenderContext {
    pub(crate) fn new(names: NameMap) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    pub(crate) fn enter_scope(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave_scope(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn write(&mut self, s: &str) {
        self.out.write(s);
    }
}

/// Result of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOutput {
    /// The complete rendered source unit
    pub source: String,
    /// Every user identifier that was hashed, with its rendered spelling
    pub name_map: NameMap,
}
