//! Storage qualifiers and layout qualifiers.
//!
//! ## Notes
//! - Keyword remapping is version-aware: desktop GLSL 1.30+ has no `attribute`/`varying`, and the ESSL 3 centroid
//!   workaround replaces `centroid` with its non-centroid counterpart. The centroid rule wins when both apply.
//! - Interface blocks never go through [`needs_layout_qualifier`]; their layout is written by
//!   [`write_block_layout`] as part of the type.

use glslout_core::lang::image_formats;
use glslout_core::lang::layout::{packing_keyword, storage_keyword};
use glslout_core::lang::qualifiers::{self, Qualifier};
use glslout_core::lang::types::BasicType;

use super::{EmitError, GlslEmitter, RenderContext};
use crate::ir::{InterfaceBlockDef, Type};

impl GlslEmitter<'_> {
    /// Keyword written for a storage qualifier on this target.
    pub(crate) fn map_qualifier(&self, qualifier: Qualifier) -> &'static str {
        if self.config.strips_centroid() {
            match qualifier {
                Qualifier::Centroid => return "",
                Qualifier::CentroidIn => return "smooth in",
                Qualifier::CentroidOut => return "smooth out",
                _ => {}
            }
        }
        if self.config.output.is_glsl130_or_newer() {
            match qualifier {
                Qualifier::Attribute | Qualifier::VaryingIn => return "in",
                Qualifier::VaryingOut => return "out",
                _ => {}
            }
        }
        qualifiers::keyword(qualifier)
    }
}

fn has_location(ty: &Type) -> bool {
    qualifiers::accepts_location(ty.qualifier) && ty.layout.location.is_some()
}

fn has_image_format(ty: &Type) -> bool {
    ty.basic.is_image() && image_formats::keyword(ty.layout.image_format).is_some()
}

/// Whether a declaration of `ty` carries a `layout(...)` prefix.
pub(crate) fn needs_layout_qualifier(ty: &Type) -> bool {
    if ty.basic == BasicType::InterfaceBlock {
        return false;
    }
    has_location(ty) || has_image_format(ty)
}

/// Write `layout(location = N) ` or `layout(<format>) ` when the type needs one.
pub(crate) fn write_layout_qualifier(ctx: &mut RenderContext, ty: &Type) -> Result<(), EmitError> {
    if !needs_layout_qualifier(ty) {
        return Ok(());
    }
    ctx.write("layout(");
    let location = ty.layout.location.filter(|_| qualifiers::accepts_location(ty.qualifier));
    if let Some(location) = location {
        ctx.out.writef(format_args!("location = {location}"));
    }
    let format = image_formats::keyword(ty.layout.image_format).filter(|_| ty.basic.is_image());
    if let Some(format) = format {
        if !qualifiers::accepts_image_format(ty.qualifier) {
            return Err(EmitError::ImageFormatContext {
                qualifier: format!("{:?}", ty.qualifier),
            });
        }
        ctx.write(format);
    }
    ctx.write(") ");
    Ok(())
}

/// Write `layout(<storage>, <packing>) ` for an interface block.
pub(crate) fn write_block_layout(ctx: &mut RenderContext, block: &InterfaceBlockDef) {
    ctx.out.writef(format_args!(
        "layout({}, {}) ",
        storage_keyword(block.storage),
        packing_keyword(block.packing)
    ));
}
