//! Expression rendering.
//!
//! Expressions are written in source order (left operand first, arguments in declaration order) with the operator
//! text taken from the lowering table. Two expression kinds need more than the table:
//!
//! - indirect indexing with `add_index_clamp` set, which wraps the index in a bound clamp, and
//! - struct / interface-block field access, which resolves a constant index to a field name.

use glslout_core::names::INT_CLAMP_HELPER;

use super::operators::{BinaryLowering, Lowering, builtin_function_name, lower_binary, lower_unary};
use super::types::{array_brackets, block_def, struct_def};
use super::{EmitError, GlslEmitter, RenderContext};
use crate::config::ClampingStrategy;
use crate::ir::{
    Aggregate, AggregateOp, Binary, BinaryOp, Constant, Field, FunctionPrototype, Name, Node, Swizzle, Symbol, Ternary,
    Unary,
};

const SWIZZLE_COMPONENTS: [char; 4] = ['x', 'y', 'z', 'w'];

impl GlslEmitter<'_> {
    /// Variable reference; the induction variable of an enclosing unrolled loop becomes its literal value.
    pub(crate) fn write_symbol(&self, ctx: &mut RenderContext, symbol: &Symbol) {
        if let Some(value) = ctx.unroll.value_for(symbol.id) {
            ctx.out.writef(format_args!("{value}"));
            return;
        }
        let name = self.hash_variable_name(&mut ctx.names, &symbol.name);
        ctx.write(&name);
    }

    pub(crate) fn write_constant(&self, ctx: &mut RenderContext, constant: &Constant) -> Result<(), EmitError> {
        let (text, rest) = self.render_constant(&mut ctx.names, &constant.ty, &constant.values)?;
        if !rest.is_empty() {
            return Err(EmitError::malformed(
                "constant",
                format!("{} values left over after rendering", rest.len()),
            ));
        }
        ctx.write(&text);
        Ok(())
    }

    /// Name of a built-in function, replaced by its emulation when requested.
    fn call_name(&self, name: &str, emulated: bool) -> String {
        if emulated {
            self.emulator.emulated_name(name)
        } else {
            name.to_string()
        }
    }

    pub(crate) fn write_unary(&self, ctx: &mut RenderContext, unary: &Unary) -> Result<(), EmitError> {
        match lower_unary(unary.op) {
            Lowering::Inline(triplet) => {
                ctx.write(triplet.pre);
                self.write_node(ctx, &unary.operand)?;
                ctx.write(triplet.post);
            }
            Lowering::Function(name) => {
                let name = self.call_name(name, unary.use_emulated_function);
                ctx.write(&name);
                ctx.write("(");
                self.write_node(ctx, &unary.operand)?;
                ctx.write(")");
            }
        }
        Ok(())
    }

    pub(crate) fn write_binary(&self, ctx: &mut RenderContext, binary: &Binary) -> Result<(), EmitError> {
        match lower_binary(binary.op) {
            BinaryLowering::FieldSelect => self.write_field_select(ctx, binary),
            BinaryLowering::Inline(_) if binary.op == BinaryOp::IndexIndirect && binary.add_index_clamp => {
                self.write_node(ctx, &binary.left)?;
                self.write_clamped_index(ctx, binary)
            }
            BinaryLowering::Inline(triplet) => {
                ctx.write(triplet.pre);
                self.write_node(ctx, &binary.left)?;
                ctx.write(triplet.sep);
                self.write_node(ctx, &binary.right)?;
                ctx.write(triplet.post);
                Ok(())
            }
        }
    }

    /// `[int(clamp(float(i), 0.0, float(max)))]` or `[webgl_int_clamp(i, 0, max)]`.
    fn write_clamped_index(&self, ctx: &mut RenderContext, binary: &Binary) -> Result<(), EmitError> {
        let indexed = binary
            .left
            .ty()
            .ok_or_else(|| EmitError::malformed("indexing", "indexed operand is not an expression"))?;
        let max_index = match indexed.array_size {
            Some(0) => return Err(EmitError::ZeroLengthArray(describe(&binary.left))),
            Some(size) => i64::from(size) - 1,
            None => i64::from(indexed.cols) - 1,
        };
        match self.config.clamping {
            ClampingStrategy::ClampIntrinsic => {
                ctx.write("[int(clamp(float(");
                self.write_node(ctx, &binary.right)?;
                ctx.out.writef(format_args!("), 0.0, float({max_index})))]"));
            }
            ClampingStrategy::HelperFunction => {
                ctx.write("[");
                ctx.write(INT_CLAMP_HELPER);
                ctx.write("(");
                self.write_node(ctx, &binary.right)?;
                ctx.out.writef(format_args!(", 0, {max_index})]"));
            }
        }
        Ok(())
    }

    /// `left.field`; fields of built-in structs keep their names, block fields are always renamed.
    fn write_field_select(&self, ctx: &mut RenderContext, binary: &Binary) -> Result<(), EmitError> {
        let index = match binary.right.as_ref() {
            Node::Constant(constant) => constant.as_int(),
            _ => None,
        }
        .ok_or_else(|| EmitError::malformed("field access", "field index is not an integer constant"))?;
        let owner = binary
            .left
            .ty()
            .ok_or_else(|| EmitError::malformed("field access", "operand is not an expression"))?;

        self.write_node(ctx, &binary.left)?;
        ctx.write(".");

        let name = if binary.op == BinaryOp::IndexDirectInterfaceBlock {
            let def = block_def(owner)?;
            let field = field_at(&def.name, &def.fields, index)?;
            self.hash_name(&mut ctx.names, &Name::new(field.name.as_str()))
        } else {
            let def = struct_def(owner)?;
            let field = field_at(&def.name, &def.fields, index)?;
            self.hash_field_name(&mut ctx.names, &def.name, &field.name)
        };
        ctx.write(&name);
        Ok(())
    }

    /// `((c) ? (t) : (f))`; the outer pair keeps the ternary intact inside any enclosing expression.
    pub(crate) fn write_ternary(&self, ctx: &mut RenderContext, ternary: &Ternary) -> Result<(), EmitError> {
        ctx.write("((");
        self.write_node(ctx, &ternary.condition)?;
        ctx.write(") ? (");
        self.write_node(ctx, &ternary.if_true)?;
        ctx.write(") : (");
        self.write_node(ctx, &ternary.if_false)?;
        ctx.write("))");
        Ok(())
    }

    pub(crate) fn write_swizzle(&self, ctx: &mut RenderContext, swizzle: &Swizzle) -> Result<(), EmitError> {
        self.write_node(ctx, &swizzle.operand)?;
        ctx.write(".");
        let components = swizzle
            .offsets
            .iter()
            .map(|&offset| SWIZZLE_COMPONENTS.get(usize::from(offset)).copied())
            .collect::<Option<String>>()
            .ok_or_else(|| EmitError::malformed("swizzle", "component offset above 3"))?;
        ctx.write(&components);
        Ok(())
    }

    /// Function calls, constructors and multi-argument intrinsics: `name(a, b, c)`.
    pub(crate) fn write_aggregate(&self, ctx: &mut RenderContext, aggregate: &Aggregate) -> Result<(), EmitError> {
        let callee = match &aggregate.op {
            AggregateOp::FunctionCall(function) => {
                let name = self.hash_function_name(&mut ctx.names, function);
                self.call_name(&name, aggregate.use_emulated_function)
            }
            AggregateOp::Construct => {
                let name = self.type_name(&mut ctx.names, &aggregate.ty)?;
                format!("{name}{}", array_brackets(&aggregate.ty))
            }
            AggregateOp::BuiltIn(op) => self.call_name(builtin_function_name(*op), aggregate.use_emulated_function),
        };
        ctx.write(&callee);
        ctx.write("(");
        self.write_separated(ctx, &aggregate.args, ", ")?;
        ctx.write(")");
        Ok(())
    }

    /// Write nodes with `sep` between each pair.
    pub(crate) fn write_separated(&self, ctx: &mut RenderContext, nodes: &[Node], sep: &str) -> Result<(), EmitError> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                ctx.write(sep);
            }
            self.write_node(ctx, node)?;
        }
        Ok(())
    }

    /// `<type> name(<params>)`, shared by forward declarations and definitions.
    pub(crate) fn write_prototype(&self, ctx: &mut RenderContext, prototype: &FunctionPrototype) -> Result<(), EmitError> {
        self.write_function_head(ctx, prototype)?;
        self.write_parameters(ctx, &prototype.params)
    }

    pub(crate) fn write_function_head(
        &self,
        ctx: &mut RenderContext,
        prototype: &FunctionPrototype,
    ) -> Result<(), EmitError> {
        self.write_variable_type(ctx, &prototype.return_type)?;
        ctx.write(&array_brackets(&prototype.return_type));
        ctx.write(" ");
        let name = self.hash_function_name(&mut ctx.names, &prototype.name);
        ctx.write(&name);
        Ok(())
    }

    /// `(<type> <name>[N], ...)`; unnamed parameters write the type only.
    pub(crate) fn write_parameters(&self, ctx: &mut RenderContext, params: &[Symbol]) -> Result<(), EmitError> {
        ctx.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                ctx.write(", ");
            }
            self.write_variable_type(ctx, &param.ty)?;
            if !param.name.is_empty() {
                ctx.write(" ");
                let name = self.hash_name(&mut ctx.names, &param.name);
                ctx.write(&name);
            }
            ctx.write(&array_brackets(&param.ty));
        }
        ctx.write(")");
        Ok(())
    }

    pub(crate) fn write_invariant_declaration(&self, ctx: &mut RenderContext, symbol: &Symbol) {
        ctx.write("invariant ");
        self.write_symbol(ctx, symbol);
    }
}

fn field_at<'f>(owner: &str, fields: &'f [Field], index: i64) -> Result<&'f Field, EmitError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| fields.get(i))
        .ok_or_else(|| EmitError::FieldIndexOutOfRange {
            owner: owner.to_string(),
            index: usize::try_from(index).unwrap_or(usize::MAX),
            count: fields.len(),
        })
}

/// Short description of an indexed operand for error messages.
fn describe(node: &Node) -> String {
    match node {
        Node::Symbol(symbol) => symbol.name.text.clone(),
        _ => "expression".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::ir::{BuiltInOp, ConstValue, FunctionName, StructDef, StructId, Type, UnaryOp};
    use glslout_core::lang::types::BasicType;

    fn float() -> Type {
        Type::scalar(BasicType::Float)
    }

    fn var(id: u32, name: &str, ty: Type) -> Symbol {
        Symbol::new(id, Name::new(name), ty)
    }

    fn int(v: i32) -> Node {
        Node::Constant(Constant::new(Type::scalar(BasicType::Int), vec![ConstValue::Int(v)]))
    }

    fn render_with(config: RenderConfig, node: &Node) -> Result<String, EmitError> {
        let emitter = GlslEmitter::with_defaults(config);
        let mut ctx = RenderContext::default();
        emitter.write_node(&mut ctx, node)?;
        Ok(ctx.out.finish())
    }

    fn render(node: impl Into<Node>) -> String {
        render_with(RenderConfig::default(), &node.into()).unwrap()
    }

    // ========================================
    // Operator tests
    // ========================================

    #[test]
    fn test_unary_inline_and_function_forms() {
        assert_eq!(render(Unary::new(UnaryOp::Negative, var(1, "x", float()), float())), "(-x)");
        assert_eq!(render(Unary::new(UnaryOp::PostIncrement, var(1, "x", float()), float())), "(x++)");
        assert_eq!(render(Unary::new(UnaryOp::Sqrt, var(1, "x", float()), float())), "sqrt(x)");
    }

    #[test]
    fn test_emulated_unary_uses_replacement_name() {
        let node = Unary::new(UnaryOp::Atanh, var(1, "x", float()), float()).emulated();
        assert_eq!(render(node), "webgl_atanh_emu(x)");
    }

    #[test]
    fn test_nested_binary() {
        let inner = Binary::new(BinaryOp::Mul, var(1, "a", float()), var(2, "b", float()), float());
        let outer = Binary::new(BinaryOp::Sub, inner, var(3, "c", float()), float());
        assert_eq!(render(outer), "((a * b) - c)");
    }

    #[test]
    fn test_comma_operator() {
        let node = Binary::new(BinaryOp::Comma, var(1, "a", float()), var(2, "b", float()), float());
        assert_eq!(render(node), "(a, b)");
    }

    #[test]
    fn test_ternary_double_parentheses() {
        let cond = var(1, "c", Type::scalar(BasicType::Bool));
        let node = Ternary::new(cond, var(2, "a", float()), var(3, "b", float()), float());
        assert_eq!(render(node), "((c) ? (a) : (b))");
    }

    #[test]
    fn test_swizzle_offsets() {
        let v = var(1, "v", Type::vector(BasicType::Float, 4));
        let node = Swizzle::new(v, vec![0, 2, 1], Type::vector(BasicType::Float, 3));
        assert_eq!(render(node), "v.xzy");
    }

    #[test]
    fn test_swizzle_offset_out_of_range() {
        let v = var(1, "v", Type::vector(BasicType::Float, 4));
        let node: Node = Swizzle::new(v, vec![4], float()).into();
        assert!(matches!(render_with(RenderConfig::default(), &node), Err(EmitError::Malformed { .. })));
    }

    // ========================================
    // Index clamp tests
    // ========================================

    fn clamped_index(array: Type) -> Node {
        let idx = var(2, "idx", Type::scalar(BasicType::Int));
        Binary::new(BinaryOp::IndexIndirect, var(1, "data", array), idx, float())
            .with_index_clamp()
            .into()
    }

    #[test]
    fn test_clamp_intrinsic_on_array() {
        let node = clamped_index(float().with_array_size(4));
        assert_eq!(
            render_with(RenderConfig::default(), &node).unwrap(),
            "data[int(clamp(float(idx), 0.0, float(3)))]"
        );
    }

    #[test]
    fn test_clamp_helper_on_vector() {
        let config = RenderConfig::default().with_clamping(ClampingStrategy::HelperFunction);
        let node = clamped_index(Type::vector(BasicType::Float, 3));
        assert_eq!(render_with(config, &node).unwrap(), "data[webgl_int_clamp(idx, 0, 2)]");
    }

    #[test]
    fn test_clamp_on_zero_length_array_fails() {
        let node = clamped_index(float().with_array_size(0));
        assert_eq!(
            render_with(RenderConfig::default(), &node),
            Err(EmitError::ZeroLengthArray("data".to_string()))
        );
    }

    #[test]
    fn test_unclamped_indirect_index() {
        let idx = var(2, "idx", Type::scalar(BasicType::Int));
        let node = Binary::new(BinaryOp::IndexIndirect, var(1, "data", float().with_array_size(4)), idx, float());
        assert_eq!(render(node), "data[idx]");
    }

    // ========================================
    // Field access tests
    // ========================================

    #[test]
    fn test_struct_field_access() {
        let def = StructDef::new(
            StructId(1),
            "Light",
            vec![Field::new("dir", Type::vector(BasicType::Float, 3)), Field::new("power", float())],
        );
        let light = var(1, "light", Type::structure(def));
        let node = Binary::new(BinaryOp::IndexDirectStruct, light, int(1), float());
        assert_eq!(render(node), "light.power");
    }

    #[test]
    fn test_field_index_out_of_range() {
        let def = StructDef::new(StructId(1), "Light", vec![Field::new("dir", float())]);
        let light = var(1, "light", Type::structure(def));
        let node: Node = Binary::new(BinaryOp::IndexDirectStruct, light, int(3), float()).into();
        assert_eq!(
            render_with(RenderConfig::default(), &node),
            Err(EmitError::FieldIndexOutOfRange {
                owner: "Light".to_string(),
                index: 3,
                count: 1
            })
        );
    }

    // ========================================
    // Call and constructor tests
    // ========================================

    #[test]
    fn test_function_call_arguments() {
        let call = Aggregate::call(
            FunctionName::new("blend(f1;f1;"),
            vec![var(1, "a", float()).into(), var(2, "b", float()).into()],
            float(),
        );
        assert_eq!(render(call), "blend(a, b)");
    }

    #[test]
    fn test_array_constructor() {
        let ty = float().with_array_size(2);
        let args = vec![var(1, "a", float()).into(), var(2, "b", float()).into()];
        assert_eq!(render(Aggregate::construct(ty, args)), "float[2](a, b)");
    }

    #[test]
    fn test_builtin_intrinsic_and_emulation() {
        let args = || vec![var(1, "y", float()).into(), var(2, "x", float()).into()];
        assert_eq!(render(Aggregate::builtin(BuiltInOp::Atan, args(), float())), "atan(y, x)");
        assert_eq!(
            render(Aggregate::builtin(BuiltInOp::Atan, args(), float()).emulated()),
            "webgl_atan_emu(y, x)"
        );
    }

    #[test]
    fn test_prototype_with_unnamed_parameter() {
        let prototype = FunctionPrototype {
            name: FunctionName::new("f(f1;vf2;"),
            return_type: float(),
            params: vec![
                var(1, "x", float()),
                Symbol::new(2, Name::new(""), Type::vector(BasicType::Float, 2).with_array_size(3)),
            ],
        };
        assert_eq!(render(prototype), "float f(float x, vec2[3])");
    }
}
