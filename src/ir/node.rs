//! IR node definitions.
//!
//! ## Enum-based dispatch
//!
//! [`Node`] is a closed sum type. The renderer matches on it exhaustively, so adding a node kind is a compile error
//! in every place that has to learn how to render it.

use super::ops::{BinaryOp, BuiltInOp, UnaryOp};
use super::types::Type;

/// Identity of a variable, used to recognize loop indices independent of their spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

/// An identifier as written by the user or synthesized by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    pub text: String,
    /// Compiler-synthesized, not user visible.
    pub internal: bool,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            internal: false,
        }
    }

    pub fn internal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            internal: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A function name as the type checker records it: mangled with its parameter encoding (`"foo(f1;vf3;"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName {
    pub mangled: String,
    pub internal: bool,
}

impl FunctionName {
    pub fn new(mangled: impl Into<String>) -> Self {
        Self {
            mangled: mangled.into(),
            internal: false,
        }
    }

    pub fn internal(mangled: impl Into<String>) -> Self {
        Self {
            mangled: mangled.into(),
            internal: true,
        }
    }
}

/// Reference to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: Name,
    pub ty: Type,
}

impl Symbol {
    pub fn new(id: u32, name: Name, ty: Type) -> Self {
        Self {
            id: SymbolId(id),
            name,
            ty,
        }
    }
}

/// One scalar of a flattened constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Float(f32),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

/// Constant literal: a type and its values flattened depth-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub ty: Type,
    pub values: Vec<ConstValue>,
}

impl Constant {
    pub fn new(ty: Type, values: Vec<ConstValue>) -> Self {
        Self { ty, values }
    }

    /// Value of a scalar integer constant.
    pub fn as_int(&self) -> Option<i64> {
        match self.values.as_slice() {
            [ConstValue::Int(v)] => Some(i64::from(*v)),
            [ConstValue::UInt(v)] => Some(i64::from(*v)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub op: UnaryOp,
    pub operand: Box<Node>,
    pub ty: Type,
    /// The target lacks a native version of this intrinsic.
    pub use_emulated_function: bool,
}

impl Unary {
    pub fn new(op: UnaryOp, operand: impl Into<Node>, ty: Type) -> Self {
        Self {
            op,
            operand: Box::new(operand.into()),
            ty,
            use_emulated_function: false,
        }
    }

    pub fn emulated(mut self) -> Self {
        self.use_emulated_function = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub ty: Type,
    /// Wrap the index of an [`BinaryOp::IndexIndirect`] in a bound clamp.
    pub add_index_clamp: bool,
}

impl Binary {
    pub fn new(op: BinaryOp, left: impl Into<Node>, right: impl Into<Node>, ty: Type) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            ty,
            add_index_clamp: false,
        }
    }

    pub fn with_index_clamp(mut self) -> Self {
        self.add_index_clamp = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ternary {
    pub condition: Box<Node>,
    pub if_true: Box<Node>,
    pub if_false: Box<Node>,
    pub ty: Type,
}

impl Ternary {
    pub fn new(condition: impl Into<Node>, if_true: impl Into<Node>, if_false: impl Into<Node>, ty: Type) -> Self {
        Self {
            condition: Box::new(condition.into()),
            if_true: Box::new(if_true.into()),
            if_false: Box::new(if_false.into()),
            ty,
        }
    }
}

/// Component selection; offsets are 0..=3 and render as `xyzw`.
#[derive(Debug, Clone, PartialEq)]
pub struct Swizzle {
    pub operand: Box<Node>,
    pub offsets: Vec<u8>,
    pub ty: Type,
}

impl Swizzle {
    pub fn new(operand: impl Into<Node>, offsets: Vec<u8>, ty: Type) -> Self {
        Self {
            operand: Box::new(operand.into()),
            offsets,
            ty,
        }
    }
}

/// What an aggregate node does with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateOp {
    /// Call of a user-defined or built-in function.
    FunctionCall(FunctionName),
    /// Constructor of the node's own type.
    Construct,
    /// Multi-argument intrinsic.
    BuiltIn(BuiltInOp),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub op: AggregateOp,
    pub args: Vec<Node>,
    pub ty: Type,
    pub use_emulated_function: bool,
}

impl Aggregate {
    pub fn call(name: FunctionName, args: Vec<Node>, ty: Type) -> Self {
        Self {
            op: AggregateOp::FunctionCall(name),
            args,
            ty,
            use_emulated_function: false,
        }
    }

    pub fn construct(ty: Type, args: Vec<Node>) -> Self {
        Self {
            op: AggregateOp::Construct,
            args,
            ty,
            use_emulated_function: false,
        }
    }

    pub fn builtin(op: BuiltInOp, args: Vec<Node>, ty: Type) -> Self {
        Self {
            op: AggregateOp::BuiltIn(op),
            args,
            ty,
            use_emulated_function: false,
        }
    }

    pub fn emulated(mut self) -> Self {
        self.use_emulated_function = true;
        self
    }
}

/// Function signature; rendered alone as a forward declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPrototype {
    pub name: FunctionName,
    pub return_type: Type,
    pub params: Vec<Symbol>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub prototype: FunctionPrototype,
    pub body: Block,
}

/// One variable introduced by a declaration, with its optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub symbol: Symbol,
    pub initializer: Option<Box<Node>>,
}

impl Declarator {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            initializer: None,
        }
    }

    pub fn initialized(symbol: Symbol, value: impl Into<Node>) -> Self {
        Self {
            symbol,
            initializer: Some(Box::new(value.into())),
        }
    }
}

/// Variable declaration. All declarators share the first declarator's type.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub declarators: Vec<Declarator>,
}

impl Declaration {
    pub fn new(declarators: Vec<Declarator>) -> Self {
        Self { declarators }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfElse {
    pub condition: Box<Node>,
    pub true_block: Option<Block>,
    pub false_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub init: Box<Node>,
    pub body: Option<Block>,
}

/// `case <condition>:` or, without a condition, `default:`.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub condition: Option<Box<Node>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    For,
    While,
    DoWhile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub kind: LoopKind,
    pub init: Option<Box<Node>>,
    pub condition: Option<Box<Node>>,
    pub expression: Option<Box<Node>>,
    pub body: Option<Block>,
    /// Force unrolling into literal-substituted copies of the body.
    pub unroll: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchOp {
    Discard,
    Break,
    Continue,
    Return,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub op: BranchOp,
    pub value: Option<Box<Node>>,
}

/// A node of the IR tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Symbol(Symbol),
    Constant(Constant),
    Unary(Unary),
    Binary(Binary),
    Ternary(Ternary),
    Swizzle(Swizzle),
    Aggregate(Aggregate),
    Prototype(FunctionPrototype),
    InvariantDeclaration(Symbol),
    Declaration(Declaration),
    Block(Block),
    IfElse(IfElse),
    Switch(Switch),
    Case(Case),
    Loop(Loop),
    Branch(Branch),
    FunctionDefinition(FunctionDefinition),
}

impl Node {
    /// Type of an expression node; `None` for statements.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Node::Symbol(s) => Some(&s.ty),
            Node::Constant(c) => Some(&c.ty),
            Node::Unary(u) => Some(&u.ty),
            Node::Binary(b) => Some(&b.ty),
            Node::Ternary(t) => Some(&t.ty),
            Node::Swizzle(s) => Some(&s.ty),
            Node::Aggregate(a) => Some(&a.ty),
            Node::Prototype(p) => Some(&p.return_type),
            Node::InvariantDeclaration(_)
            | Node::Declaration(_)
            | Node::Block(_)
            | Node::IfElse(_)
            | Node::Switch(_)
            | Node::Case(_)
            | Node::Loop(_)
            | Node::Branch(_)
            | Node::FunctionDefinition(_) => None,
        }
    }

    /// Statements that are not compound constructs and need a terminating `;`.
    pub fn is_single_statement(&self) -> bool {
        !matches!(
            self,
            Node::FunctionDefinition(_)
                | Node::Block(_)
                | Node::IfElse(_)
                | Node::Loop(_)
                | Node::Switch(_)
                | Node::Case(_)
        )
    }
}

macro_rules! impl_into_node {
    ($($payload:ident),* $(,)?) => {
        $(
            impl From<$payload> for Node {
                fn from(value: $payload) -> Self {
                    Node::$payload(value)
                }
            }
        )*
    };
}

impl_into_node!(
    Symbol, Constant, Unary, Binary, Ternary, Swizzle, Aggregate, Declaration, Block, IfElse, Switch, Case, Loop,
    Branch, FunctionDefinition
);

impl From<FunctionPrototype> for Node {
    fn from(value: FunctionPrototype) -> Self {
        Node::Prototype(value)
    }
}
