//! Forced loop unrolling.
//!
//! A `for` loop marked for unrolling is rendered as a one-iteration wrapper loop (so `break` and `continue` keep
//! their targets) holding one copy of the body per iteration, with every read of the induction variable replaced by
//! its literal value. Only loops of the canonical shape can be unrolled:
//!
//! ```text
//! for (int i = <int>; i <cmp> <int>; <i++ | ++i | i-- | --i | i += <int> | i -= <int>>)
//! ```
//!
//! The trip count is computed up front from the start value, bound, comparison and step; a loop that never
//! terminates is rejected. Nested unrolled loops push one [`UnrollFrame`] each; the innermost frame that owns a
//! symbol wins.

use glslout_core::lang::types::BasicType;

use super::EmitError;
use crate::ir::{BinaryOp, Loop, LoopKind, Node, Symbol, SymbolId, UnaryOp};

/// Upper bound on the copies a single loop may expand into. Only a guard against runaway output; terminating loops
/// are otherwise expanded in full.
pub(crate) const MAX_UNROLLED_ITERATIONS: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    fn from_op(op: BinaryOp) -> Option<Self> {
        match op {
            BinaryOp::LessThan => Some(Comparison::Less),
            BinaryOp::LessThanEqual => Some(Comparison::LessEqual),
            BinaryOp::GreaterThan => Some(Comparison::Greater),
            BinaryOp::GreaterThanEqual => Some(Comparison::GreaterEqual),
            BinaryOp::Equal => Some(Comparison::Equal),
            BinaryOp::NotEqual => Some(Comparison::NotEqual),
            _ => None,
        }
    }

    /// Iterations of `for (i = start; i <cmp> limit; i += step)`; `None` when the loop never stops.
    fn trip_count(self, start: i64, limit: i64, step: i64) -> Option<u64> {
        let distance = (limit - start).unsigned_abs();
        let stride = step.unsigned_abs();
        match self {
            Comparison::Less if start >= limit => Some(0),
            Comparison::LessEqual if start > limit => Some(0),
            Comparison::Greater if start <= limit => Some(0),
            Comparison::GreaterEqual if start < limit => Some(0),
            Comparison::Less | Comparison::LessEqual if step < 0 => None,
            Comparison::Greater | Comparison::GreaterEqual if step > 0 => None,
            Comparison::Less | Comparison::Greater => Some(distance.div_ceil(stride)),
            Comparison::LessEqual | Comparison::GreaterEqual => Some(distance / stride + 1),
            Comparison::Equal => Some(u64::from(start == limit)),
            Comparison::NotEqual if start == limit => Some(0),
            Comparison::NotEqual => {
                let reaches = (limit - start).signum() == step.signum() && distance % stride == 0;
                reaches.then(|| distance / stride)
            }
        }
    }
}

/// State of one loop being unrolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnrollFrame {
    index: SymbolId,
    value: i64,
    step: i64,
    iterations: u64,
}

fn int_constant(node: &Node) -> Option<i64> {
    match node {
        Node::Constant(constant) => constant.as_int(),
        _ => None,
    }
}

fn is_index(node: &Node, index: SymbolId) -> bool {
    matches!(node, Node::Symbol(symbol) if symbol.id == index)
}

fn unrollable(detail: &str) -> EmitError {
    EmitError::Unroll(detail.to_string())
}

/// The induction variable declared by an unrolled loop's initializer, with its start value.
pub(crate) fn induction_variable(lp: &Loop) -> Result<(&Symbol, i64), EmitError> {
    if lp.kind != LoopKind::For {
        return Err(unrollable("only for loops can be unrolled"));
    }
    let Some(Node::Declaration(decl)) = lp.init.as_deref() else {
        return Err(unrollable("initializer is not a declaration"));
    };
    let [declarator] = decl.declarators.as_slice() else {
        return Err(unrollable("initializer must declare exactly one variable"));
    };
    let ty = &declarator.symbol.ty;
    if ty.basic != BasicType::Int || ty.cols != 1 || ty.is_array() {
        return Err(unrollable("induction variable must be a scalar int"));
    }
    let start = declarator
        .initializer
        .as_deref()
        .and_then(int_constant)
        .ok_or_else(|| unrollable("induction variable must start at an integer constant"))?;
    Ok((&declarator.symbol, start))
}

impl UnrollFrame {
    pub(crate) fn from_loop(lp: &Loop) -> Result<Self, EmitError> {
        let (symbol, start) = induction_variable(lp)?;
        let index = symbol.id;

        let Some(Node::Binary(condition)) = lp.condition.as_deref() else {
            return Err(unrollable("condition is not a comparison"));
        };
        let comparison =
            Comparison::from_op(condition.op).ok_or_else(|| unrollable("condition is not a comparison"))?;
        if !is_index(&condition.left, index) {
            return Err(unrollable("condition does not test the induction variable"));
        }
        let limit = int_constant(&condition.right).ok_or_else(|| unrollable("loop bound is not an integer constant"))?;

        let step = match lp.expression.as_deref() {
            Some(Node::Unary(unary)) if is_index(&unary.operand, index) => match unary.op {
                UnaryOp::PostIncrement | UnaryOp::PreIncrement => 1,
                UnaryOp::PostDecrement | UnaryOp::PreDecrement => -1,
                _ => return Err(unrollable("unsupported step operator")),
            },
            Some(Node::Binary(binary)) if is_index(&binary.left, index) => {
                let amount = int_constant(&binary.right).ok_or_else(|| unrollable("step is not an integer constant"))?;
                match binary.op {
                    BinaryOp::AddAssign => amount,
                    BinaryOp::SubAssign => -amount,
                    _ => return Err(unrollable("unsupported step operator")),
                }
            }
            _ => return Err(unrollable("step does not update the induction variable")),
        };
        if step == 0 {
            return Err(unrollable("step is zero"));
        }

        let iterations = comparison
            .trip_count(start, limit, step)
            .ok_or_else(|| unrollable("loop never terminates"))?;
        if iterations > MAX_UNROLLED_ITERATIONS {
            return Err(EmitError::Unroll(format!(
                "{iterations} iterations exceed the limit of {MAX_UNROLLED_ITERATIONS}"
            )));
        }

        Ok(Self {
            index,
            value: start,
            step,
            iterations,
        })
    }

    /// Number of body copies the loop expands into.
    pub(crate) fn iterations(&self) -> u64 {
        self.iterations
    }

    pub(crate) fn step(&mut self) {
        self.value += self.step;
    }
}

/// Frames of the unrolled loops currently being rendered, innermost last.
#[derive(Debug, Default)]
pub(crate) struct LoopUnrollStack {
    frames: Vec<UnrollFrame>,
}

impl LoopUnrollStack {
    pub(crate) fn push(&mut self, frame: UnrollFrame) {
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<UnrollFrame> {
        self.frames.pop()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Current literal value of `index`, when it is the induction variable of an enclosing unrolled loop.
    pub(crate) fn value_for(&self, index: SymbolId) -> Option<i64> {
        self.frames.iter().rev().find(|frame| frame.index == index).map(|frame| frame.value)
    }

    pub(crate) fn step_top(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Binary, Block, ConstValue, Constant, Declaration, Declarator, Name, Type, Unary};
    use glslout_core::lang::types::BasicType;

    fn int(v: i32) -> Node {
        Node::Constant(Constant::new(Type::scalar(BasicType::Int), vec![ConstValue::Int(v)]))
    }

    fn index() -> Symbol {
        Symbol::new(1, Name::new("i"), Type::scalar(BasicType::Int))
    }

    fn counting_loop(start: i32, op: BinaryOp, limit: i32, step: Node) -> Loop {
        Loop {
            kind: LoopKind::For,
            init: Some(Box::new(
                Declaration::new(vec![Declarator::initialized(index(), int(start))]).into(),
            )),
            condition: Some(Box::new(Binary::new(op, index(), int(limit), Type::scalar(BasicType::Bool)).into())),
            expression: Some(Box::new(step)),
            body: Some(Block::default()),
            unroll: true,
        }
    }

    fn post_increment() -> Node {
        Unary::new(UnaryOp::PostIncrement, index(), Type::scalar(BasicType::Int)).into()
    }

    fn iterations(frame: &mut UnrollFrame) -> Vec<i64> {
        let mut seen = Vec::new();
        for _ in 0..frame.iterations() {
            seen.push(frame.value);
            frame.step();
        }
        seen
    }

    fn add_assign(amount: i32) -> Node {
        Binary::new(BinaryOp::AddAssign, index(), int(amount), Type::scalar(BasicType::Int)).into()
    }

    // ========================================
    // Frame extraction tests
    // ========================================

    #[test]
    fn test_counting_up() {
        let lp = counting_loop(0, BinaryOp::LessThan, 3, post_increment());
        let mut frame = UnrollFrame::from_loop(&lp).unwrap();
        assert_eq!(iterations(&mut frame), vec![0, 1, 2]);
    }

    #[test]
    fn test_counting_down_by_two() {
        let step = Binary::new(BinaryOp::SubAssign, index(), int(2), Type::scalar(BasicType::Int)).into();
        let lp = counting_loop(6, BinaryOp::GreaterThanEqual, 0, step);
        let mut frame = UnrollFrame::from_loop(&lp).unwrap();
        assert_eq!(iterations(&mut frame), vec![6, 4, 2, 0]);
    }

    #[test]
    fn test_zero_step_rejected() {
        let step = Binary::new(BinaryOp::AddAssign, index(), int(0), Type::scalar(BasicType::Int)).into();
        let lp = counting_loop(0, BinaryOp::LessThan, 3, step);
        assert_eq!(UnrollFrame::from_loop(&lp), Err(EmitError::Unroll("step is zero".to_string())));
    }

    #[test]
    fn test_counting_past_a_thousand() {
        let lp = counting_loop(0, BinaryOp::LessThan, 1025, post_increment());
        assert_eq!(UnrollFrame::from_loop(&lp).unwrap().iterations(), 1025);
    }

    #[test]
    fn test_trip_counts() {
        let cases = [
            (0, BinaryOp::LessThan, 10, 3, 4),
            (0, BinaryOp::LessThanEqual, 9, 3, 4),
            (5, BinaryOp::LessThan, 5, 1, 0),
            (10, BinaryOp::GreaterThan, 0, -4, 3),
            (3, BinaryOp::Equal, 3, 1, 1),
            (0, BinaryOp::NotEqual, 6, 2, 3),
            (6, BinaryOp::NotEqual, 6, 2, 0),
        ];
        for (start, op, limit, step, expected) in cases {
            let lp = counting_loop(start, op, limit, add_assign(step));
            assert_eq!(UnrollFrame::from_loop(&lp).unwrap().iterations(), expected, "{start} {op:?} {limit} += {step}");
        }
    }

    #[test]
    fn test_non_terminating_loops_rejected() {
        let never = Err(EmitError::Unroll("loop never terminates".to_string()));
        let away = counting_loop(0, BinaryOp::LessThan, 3, add_assign(-1));
        assert_eq!(UnrollFrame::from_loop(&away), never);
        let skips_bound = counting_loop(0, BinaryOp::NotEqual, 5, add_assign(2));
        assert_eq!(UnrollFrame::from_loop(&skips_bound), never);
        let wrong_way = counting_loop(0, BinaryOp::NotEqual, -4, add_assign(2));
        assert_eq!(UnrollFrame::from_loop(&wrong_way), never);
    }

    #[test]
    fn test_uint_index_rejected() {
        let uint = Type::scalar(BasicType::UInt);
        let i = || Symbol::new(1, Name::new("i"), uint.clone());
        let zero = Node::Constant(Constant::new(uint.clone(), vec![ConstValue::UInt(0)]));
        let two = Node::Constant(Constant::new(uint.clone(), vec![ConstValue::UInt(2)]));
        let lp = Loop {
            kind: LoopKind::For,
            init: Some(Box::new(Declaration::new(vec![Declarator::initialized(i(), zero)]).into())),
            condition: Some(Box::new(Binary::new(BinaryOp::LessThan, i(), two, Type::scalar(BasicType::Bool)).into())),
            expression: Some(Box::new(Unary::new(UnaryOp::PostIncrement, i(), uint.clone()).into())),
            body: Some(Block::default()),
            unroll: true,
        };
        assert_eq!(
            UnrollFrame::from_loop(&lp),
            Err(EmitError::Unroll("induction variable must be a scalar int".to_string()))
        );
    }

    #[test]
    fn test_condition_on_other_variable_rejected() {
        let mut lp = counting_loop(0, BinaryOp::LessThan, 3, post_increment());
        let other = Symbol::new(2, Name::new("j"), Type::scalar(BasicType::Int));
        lp.condition = Some(Box::new(
            Binary::new(BinaryOp::LessThan, other, int(3), Type::scalar(BasicType::Bool)).into(),
        ));
        assert!(matches!(UnrollFrame::from_loop(&lp), Err(EmitError::Unroll(_))));
    }

    #[test]
    fn test_while_loop_rejected() {
        let mut lp = counting_loop(0, BinaryOp::LessThan, 3, post_increment());
        lp.kind = LoopKind::While;
        assert!(matches!(UnrollFrame::from_loop(&lp), Err(EmitError::Unroll(_))));
    }

    // ========================================
    // Stack tests
    // ========================================

    #[test]
    fn test_innermost_frame_wins() {
        let lp = counting_loop(0, BinaryOp::LessThan, 3, post_increment());
        let mut stack = LoopUnrollStack::default();
        stack.push(UnrollFrame::from_loop(&lp).unwrap());
        let mut inner = UnrollFrame::from_loop(&lp).unwrap();
        inner.step();
        inner.step();
        stack.push(inner);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.value_for(SymbolId(1)), Some(2));
        stack.pop();
        assert_eq!(stack.value_for(SymbolId(1)), Some(0));
        assert_eq!(stack.value_for(SymbolId(9)), None);
    }

    #[test]
    fn test_step_top_advances_only_innermost() {
        let outer = counting_loop(0, BinaryOp::LessThan, 3, post_increment());
        let mut stack = LoopUnrollStack::default();
        stack.push(UnrollFrame::from_loop(&outer).unwrap());
        let mut inner = UnrollFrame::from_loop(&outer).unwrap();
        inner.index = SymbolId(2);
        stack.push(inner);
        stack.step_top();
        assert_eq!(stack.value_for(SymbolId(2)), Some(1));
        assert_eq!(stack.value_for(SymbolId(1)), Some(0));
    }
}
