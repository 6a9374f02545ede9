//! Render a whole IR tree.
//!
//! This module implements the pass-level API of the emitter: create the per-pass state, render the root, and hand
//! back the source text together with the name map.
//!
//! ## Notes
//! - A pass either returns the complete source or an error; nothing partial escapes.
//! - A name map from an earlier pass may be supplied so that several shaders of one program share their renamed
//!   identifiers.
//!
//! ## See also
//! - [`crate::emit::GlslEmitter`]
//! - [`crate::emit::statements`]

use super::{EmitError, EmitOutput, GlslEmitter, NameMap, RenderContext};
use crate::config::RenderConfig;
use crate::ir::Node;

impl GlslEmitter<'_> {
    /// Render `root` with an empty name map.
    pub fn emit(&self, root: &Node) -> Result<EmitOutput, EmitError> {
        self.emit_with_names(root, NameMap::new())
    }

    /// Render `root`, starting from an already populated name map.
    #[tracing::instrument(
        skip_all,
        fields(output = ?self.config.output, stage = ?self.config.stage, version = self.config.shader_version)
    )]
    pub fn emit_with_names(&self, root: &Node, names: NameMap) -> Result<EmitOutput, EmitError> {
        let mut ctx = RenderContext::new(names);
        self.write_node(&mut ctx, root)?;
        Ok(EmitOutput {
            source: ctx.out.finish(),
            name_map: ctx.names,
        })
    }
}

/// Render `root` with the default built-in table and emulation spelling.
///
/// ## Examples
/// ```rust
/// use glslout::config::RenderConfig;
/// use glslout::emit::render;
/// use glslout::ir::{ConstValue, Constant, Node, Type};
/// use glslout_core::lang::types::BasicType;
///
/// let ty = Type::vector(BasicType::Float, 3);
/// let values = vec![ConstValue::Float(1.0), ConstValue::Float(2.0), ConstValue::Float(3.0)];
/// let node = Node::Constant(Constant::new(ty, values));
/// assert_eq!(render(&node, &RenderConfig::default()).unwrap(), "vec3(1.0, 2.0, 3.0)");
/// ```
pub fn render(root: &Node, config: &RenderConfig) -> Result<String, EmitError> {
    GlslEmitter::with_defaults(config.clone())
        .emit(root)
        .map(|output| output.source)
}
