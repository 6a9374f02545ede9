//! Typed shader IR consumed by the renderer.
//!
//! The tree is built, type-checked and optimized upstream; the renderer only reads it. Every node owns its
//! children exclusively, and struct / interface-block definitions are shared through `Arc` so that every occurrence
//! of a type refers to the same definition identity.
//!
//! ## Module Organization
//!
//! - `types.rs` - type descriptors and struct / interface-block definitions
//! - `ops.rs` - operator codes (unary, binary, built-in aggregate)
//! - `node.rs` - the node sum type and its payloads

mod node;
mod ops;
mod types;

pub use node::{
    Aggregate, AggregateOp, Binary, Block, Branch, BranchOp, Case, ConstValue, Constant, Declaration, Declarator,
    FunctionDefinition, FunctionName, FunctionPrototype, IfElse, Loop, LoopKind, Name, Node, Swizzle, Switch, Symbol,
    SymbolId, Ternary, Unary,
};
pub use ops::{BinaryOp, BuiltInOp, UnaryOp};
pub use types::{
    BlockId, Field, InterfaceBlockDef, LayoutQualifier, MemoryQualifiers, StructDef, StructId, Type,
};
