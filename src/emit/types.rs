//! Type occurrences and aggregate bodies.
//!
//! A declaration writes, in order: `invariant`, the interface-block layout, the storage qualifier, memory
//! qualifiers and then the type itself. Struct bodies are written once per pass, at their first occurrence, and
//! every later occurrence uses the name only. Interface-block bodies are written at every occurrence.

use std::collections::HashSet;

use glslout_core::lang::qualifiers;
use glslout_core::lang::types::{BasicType, Precision, builtin_type_name, precision_keyword};
use tracing::debug;

use super::qualifiers::write_block_layout;
use super::{EmitError, GlslEmitter, NameMap, RenderContext};
use crate::ir::{Field, InterfaceBlockDef, Name, StructDef, StructId, Type};

/// Structs whose body has already been written in this pass.
#[derive(Debug, Default)]
pub(crate) struct DeclaredEntities {
    structs: HashSet<StructId>,
}

impl DeclaredEntities {
    /// Anonymous structs never count as declared.
    pub(crate) fn is_declared(&self, def: &StructDef) -> bool {
        !def.name.is_empty() && self.structs.contains(&def.id)
    }

    pub(crate) fn mark(&mut self, def: &StructDef) {
        if !def.name.is_empty() {
            self.structs.insert(def.id);
        }
    }
}

/// `[N]` for arrays, empty otherwise.
pub(crate) fn array_brackets(ty: &Type) -> String {
    ty.array_size.map(|n| format!("[{n}]")).unwrap_or_default()
}

pub(crate) fn struct_def(ty: &Type) -> Result<&StructDef, EmitError> {
    ty.structure
        .as_deref()
        .ok_or_else(|| EmitError::malformed("struct type", "no struct definition attached"))
}

pub(crate) fn block_def(ty: &Type) -> Result<&InterfaceBlockDef, EmitError> {
    ty.interface_block
        .as_deref()
        .ok_or_else(|| EmitError::malformed("interface block type", "no block definition attached"))
}

impl GlslEmitter<'_> {
    /// Bare type spelling: the (hashed) struct or block name, or the built-in type name.
    pub(crate) fn type_name(&self, names: &mut NameMap, ty: &Type) -> Result<String, EmitError> {
        match ty.basic {
            BasicType::Struct => Ok(self.hash_type_name(names, &struct_def(ty)?.name)),
            BasicType::InterfaceBlock => Ok(self.hash_type_name(names, &block_def(ty)?.name)),
            basic => builtin_type_name(basic, ty.cols, ty.rows)
                .ok_or_else(|| EmitError::UnnamedType(format!("{basic:?} {}x{}", ty.cols, ty.rows))),
        }
    }

    /// Write the precision keyword; returns whether anything was written.
    fn write_precision(&self, ctx: &mut RenderContext, precision: Precision) -> bool {
        if !self.config.writes_precision() {
            return false;
        }
        match precision_keyword(precision) {
            Some(keyword) => {
                ctx.write(keyword);
                true
            }
            None => false,
        }
    }

    /// Write a full type occurrence with all of its qualifiers.
    pub(crate) fn write_variable_type(&self, ctx: &mut RenderContext, ty: &Type) -> Result<(), EmitError> {
        if ty.invariant && !self.config.remove_invariant() {
            ctx.write("invariant ");
        }
        if ty.basic == BasicType::InterfaceBlock {
            write_block_layout(ctx, block_def(ty)?);
        }
        if !qualifiers::is_storage_free(ty.qualifier) {
            let keyword = self.map_qualifier(ty.qualifier);
            if !keyword.is_empty() {
                ctx.write(keyword);
                ctx.write(" ");
            }
        }
        for keyword in ty.memory.keywords() {
            if !ty.basic.is_image() {
                return Err(EmitError::MemoryQualifierOnNonImage { qualifier: keyword });
            }
            ctx.write(keyword);
            ctx.write(" ");
        }
        self.write_type_body(ctx, ty)
    }

    /// The type itself: a struct body on first use, a block body, or precision and name.
    fn write_type_body(&self, ctx: &mut RenderContext, ty: &Type) -> Result<(), EmitError> {
        if ty.basic == BasicType::Struct {
            let def = struct_def(ty)?;
            if !ctx.declared.is_declared(def) {
                self.declare_struct(ctx, def)?;
                ctx.declared.mark(def);
                return Ok(());
            }
        }
        if ty.basic == BasicType::InterfaceBlock {
            return self.declare_interface_block(ctx, block_def(ty)?);
        }
        self.write_type_reference(ctx, ty)
    }

    /// Precision and name only, never a body.
    fn write_type_reference(&self, ctx: &mut RenderContext, ty: &Type) -> Result<(), EmitError> {
        if self.write_precision(ctx, ty.precision) {
            ctx.write(" ");
        }
        let name = self.type_name(&mut ctx.names, ty)?;
        ctx.write(&name);
        Ok(())
    }

    fn declare_struct(&self, ctx: &mut RenderContext, def: &StructDef) -> Result<(), EmitError> {
        debug!(name = %def.name, fields = def.fields.len(), "declaring struct");
        let name = self.hash_type_name(&mut ctx.names, &def.name);
        ctx.write("struct ");
        ctx.write(&name);
        ctx.write("{\n");
        for field in &def.fields {
            let rendered = self.hash_field_name(&mut ctx.names, &def.name, &field.name);
            self.write_field(ctx, field, &rendered)?;
        }
        ctx.write("}");
        Ok(())
    }

    fn declare_interface_block(&self, ctx: &mut RenderContext, def: &InterfaceBlockDef) -> Result<(), EmitError> {
        let name = self.hash_type_name(&mut ctx.names, &def.name);
        ctx.write(&name);
        ctx.write("{\n");
        for field in &def.fields {
            let rendered = self.hash_name(&mut ctx.names, &Name::new(field.name.as_str()));
            self.write_field(ctx, field, &rendered)?;
        }
        ctx.write("}");
        Ok(())
    }

    /// `<type> <name>[N];` inside an aggregate body.
    ///
    /// Struct definitions cannot nest in ESSL 3.00 or GLSL 1.30+, so a member of struct type must name a struct whose
    /// body has already been written in this pass.
    fn write_field(&self, ctx: &mut RenderContext, field: &Field, rendered: &str) -> Result<(), EmitError> {
        if field.ty.basic == BasicType::Struct {
            let member = struct_def(&field.ty)?;
            if !ctx.declared.is_declared(member) {
                return Err(EmitError::UndeclaredMemberStruct(member.name.clone()));
            }
        }
        self.write_type_reference(ctx, &field.ty)?;
        ctx.write(" ");
        ctx.write(rendered);
        ctx.write(&array_brackets(&field.ty));
        ctx.write(";\n");
        Ok(())
    }
}
