//! Statement rendering and the node dispatcher.
//!
//! [`GlslEmitter::write_node`] is the single exhaustive `match` over [`Node`]; expression kinds are handed to
//! `expressions`, everything else is written here.
//!
//! ## Notes
//! - Braces are written for blocks below global scope only. Depth grows by one for every block, function
//!   definition, loop and if/else, and shrinks symmetrically.
//! - Statements inside a block that are not compound constructs are terminated with `;\n`.

use tracing::debug;

use super::qualifiers::write_layout_qualifier;
use super::types::array_brackets;
use super::unroll::{UnrollFrame, induction_variable};
use super::{EmitError, GlslEmitter, RenderContext};
use crate::ir::{Block, Branch, BranchOp, Case, Declaration, FunctionDefinition, IfElse, Loop, LoopKind, Node, Switch};

impl GlslEmitter<'_> {
    /// Render any node.
    pub(crate) fn write_node(&self, ctx: &mut RenderContext, node: &Node) -> Result<(), EmitError> {
        match node {
            Node::Symbol(symbol) => {
                self.write_symbol(ctx, symbol);
                Ok(())
            }
            Node::Constant(constant) => self.write_constant(ctx, constant),
            Node::Unary(unary) => self.write_unary(ctx, unary),
            Node::Binary(binary) => self.write_binary(ctx, binary),
            Node::Ternary(ternary) => self.write_ternary(ctx, ternary),
            Node::Swizzle(swizzle) => self.write_swizzle(ctx, swizzle),
            Node::Aggregate(aggregate) => self.write_aggregate(ctx, aggregate),
            Node::Prototype(prototype) => self.write_prototype(ctx, prototype),
            Node::InvariantDeclaration(symbol) => {
                self.write_invariant_declaration(ctx, symbol);
                Ok(())
            }
            Node::Declaration(declaration) => self.write_declaration(ctx, declaration),
            Node::Block(block) => self.write_block(ctx, block),
            Node::IfElse(if_else) => self.write_if_else(ctx, if_else),
            Node::Switch(switch) => self.write_switch(ctx, switch),
            Node::Case(case) => self.write_case(ctx, case),
            Node::Loop(lp) => self.write_loop(ctx, lp),
            Node::Branch(branch) => self.write_branch(ctx, branch),
            Node::FunctionDefinition(definition) => self.write_function_definition(ctx, definition),
        }
    }

    pub(crate) fn write_block(&self, ctx: &mut RenderContext, block: &Block) -> Result<(), EmitError> {
        let scoped = ctx.depth > 0;
        if scoped {
            ctx.write("{\n");
        }
        ctx.enter_scope();
        for statement in &block.statements {
            self.write_node(ctx, statement)?;
            if statement.is_single_statement() {
                ctx.write(";\n");
            }
        }
        ctx.leave_scope();
        if scoped {
            ctx.write("}\n");
        }
        Ok(())
    }

    /// Body of a compound statement; a missing body is an empty block.
    fn write_code_block(&self, ctx: &mut RenderContext, block: Option<&Block>) -> Result<(), EmitError> {
        match block {
            Some(block) => self.write_block(ctx, block),
            None => {
                ctx.write("{\n}\n");
                Ok(())
            }
        }
    }

    fn write_if_else(&self, ctx: &mut RenderContext, if_else: &IfElse) -> Result<(), EmitError> {
        ctx.write("if (");
        self.write_node(ctx, &if_else.condition)?;
        ctx.write(")\n");

        ctx.enter_scope();
        self.write_code_block(ctx, if_else.true_block.as_ref())?;
        if let Some(false_block) = &if_else.false_block {
            ctx.write("else\n");
            self.write_code_block(ctx, Some(false_block))?;
        }
        ctx.leave_scope();
        Ok(())
    }

    fn write_switch(&self, ctx: &mut RenderContext, switch: &Switch) -> Result<(), EmitError> {
        ctx.write("switch (");
        self.write_node(ctx, &switch.init)?;
        match &switch.body {
            // the statement list writes the braces
            Some(body) => {
                ctx.write(") ");
                self.write_block(ctx, body)
            }
            None => {
                ctx.write(") {}\n");
                Ok(())
            }
        }
    }

    fn write_case(&self, ctx: &mut RenderContext, case: &Case) -> Result<(), EmitError> {
        match &case.condition {
            Some(condition) => {
                ctx.write("case (");
                self.write_node(ctx, condition)?;
                ctx.write("):\n");
            }
            None => ctx.write("default:\n"),
        }
        Ok(())
    }

    fn write_loop(&self, ctx: &mut RenderContext, lp: &Loop) -> Result<(), EmitError> {
        ctx.enter_scope();
        let result = if lp.unroll {
            self.write_unrolled_loop(ctx, lp)
        } else {
            self.write_plain_loop(ctx, lp)
        };
        ctx.leave_scope();
        result
    }

    fn write_plain_loop(&self, ctx: &mut RenderContext, lp: &Loop) -> Result<(), EmitError> {
        match lp.kind {
            LoopKind::For => {
                ctx.write("for (");
                self.write_optional(ctx, lp.init.as_deref())?;
                ctx.write("; ");
                self.write_optional(ctx, lp.condition.as_deref())?;
                ctx.write("; ");
                self.write_optional(ctx, lp.expression.as_deref())?;
                ctx.write(")\n");
                self.write_code_block(ctx, lp.body.as_ref())
            }
            LoopKind::While => {
                ctx.write("while (");
                self.write_node(ctx, required_condition(lp)?)?;
                ctx.write(")\n");
                self.write_code_block(ctx, lp.body.as_ref())
            }
            LoopKind::DoWhile => {
                ctx.write("do\n");
                self.write_code_block(ctx, lp.body.as_ref())?;
                ctx.write("while (");
                self.write_node(ctx, required_condition(lp)?)?;
                ctx.write(");\n");
                Ok(())
            }
        }
    }

    /// One-iteration wrapper holding a literal-substituted copy of the body per iteration.
    fn write_unrolled_loop(&self, ctx: &mut RenderContext, lp: &Loop) -> Result<(), EmitError> {
        let frame = UnrollFrame::from_loop(lp)?;
        let iterations = frame.iterations();
        let (index, _) = induction_variable(lp)?;
        let name = self.hash_variable_name(&mut ctx.names, &index.name);
        ctx.out
            .writef(format_args!("for (int {name} = 0; {name} < 1; ++{name})\n{{\n"));

        ctx.unroll.push(frame);
        let expanded = self.write_unrolled_bodies(ctx, lp, iterations);
        ctx.unroll.pop();
        expanded?;

        debug!(index = %index.name.text, iterations, enclosing = ctx.unroll.depth(), "unrolled loop");
        ctx.write("}\n");
        Ok(())
    }

    fn write_unrolled_bodies(&self, ctx: &mut RenderContext, lp: &Loop, iterations: u64) -> Result<(), EmitError> {
        for _ in 0..iterations {
            self.write_code_block(ctx, lp.body.as_ref())?;
            ctx.unroll.step_top();
        }
        Ok(())
    }

    fn write_optional(&self, ctx: &mut RenderContext, node: Option<&Node>) -> Result<(), EmitError> {
        match node {
            Some(node) => self.write_node(ctx, node),
            None => Ok(()),
        }
    }

    fn write_branch(&self, ctx: &mut RenderContext, branch: &Branch) -> Result<(), EmitError> {
        match branch.op {
            BranchOp::Discard => ctx.write("discard"),
            BranchOp::Break => ctx.write("break"),
            BranchOp::Continue => ctx.write("continue"),
            BranchOp::Return => {
                ctx.write("return ");
                self.write_optional(ctx, branch.value.as_deref())?;
            }
        }
        Ok(())
    }

    /// `<layout> <type> a[N] = init, b`; every declarator shares the first one's type.
    fn write_declaration(&self, ctx: &mut RenderContext, declaration: &Declaration) -> Result<(), EmitError> {
        let first = declaration
            .declarators
            .first()
            .ok_or_else(|| EmitError::malformed("declaration", "no declarators"))?;
        write_layout_qualifier(ctx, &first.symbol.ty)?;
        self.write_variable_type(ctx, &first.symbol.ty)?;
        ctx.write(" ");

        for (i, declarator) in declaration.declarators.iter().enumerate() {
            if i > 0 {
                ctx.write(", ");
            }
            let name = self.hash_variable_name(&mut ctx.names, &declarator.symbol.name);
            ctx.write(&name);
            ctx.write(&array_brackets(&declarator.symbol.ty));
            if let Some(initializer) = &declarator.initializer {
                ctx.write(" = ");
                self.write_node(ctx, initializer)?;
            }
        }
        Ok(())
    }

    fn write_function_definition(
        &self,
        ctx: &mut RenderContext,
        definition: &FunctionDefinition,
    ) -> Result<(), EmitError> {
        self.write_function_head(ctx, &definition.prototype)?;
        ctx.enter_scope();
        self.write_parameters(ctx, &definition.prototype.params)?;
        self.write_block(ctx, &definition.body)?;
        ctx.leave_scope();
        Ok(())
    }
}

fn required_condition(lp: &Loop) -> Result<&Node, EmitError> {
    lp.condition
        .as_deref()
        .ok_or_else(|| EmitError::malformed("loop", format!("{:?} loop without a condition", lp.kind)))
}
