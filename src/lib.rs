#![forbid(unsafe_code)]
//! GLSL / ESSL source renderer
//!
//! This crate turns a typed, already optimized shader IR into source text for a target shading-language
//! dialect. It adapts keywords and layouts to the target version, declares structs once, renames identifiers for
//! sandboxed execution, encodes non-finite floats and unrolls loops that are marked for it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. IR that breaks the renderer's
//!   input contract is reported as an [`emit::EmitError`], never by panicking.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use glslout::config::RenderConfig;
//! use glslout::emit::GlslEmitter;
//! use glslout::ir::{Binary, BinaryOp, ConstValue, Constant, Name, Node, Symbol, Type};
//! use glslout::lang::types::BasicType;
//!
//! let float = Type::scalar(BasicType::Float);
//! let a = Symbol::new(1, Name::new("a"), float.clone());
//! let b = Symbol::new(2, Name::new("b"), float.clone());
//! let one = Constant::new(float.clone(), vec![ConstValue::Float(1.0)]);
//! let sum = Binary::new(BinaryOp::Add, b, one, float.clone());
//! let assign: Node = Binary::new(BinaryOp::Assign, a, sum, float).into();
//!
//! let output = GlslEmitter::with_defaults(RenderConfig::default()).emit(&assign).unwrap();
//! assert_eq!(output.source, "(a = (b + 1.0))");
//! ```

pub mod capabilities;
pub mod config;
pub mod emit;
pub mod ir;

pub use glslout_core::{lang, names};

pub use capabilities::{BuiltInLookup, FunctionEmulator, PrefixEmulator, StaticBuiltIns, fnv1a_64};
pub use config::{ClampingStrategy, CompatFlags, HashFunction, RenderConfig};
pub use emit::{EmitError, EmitOutput, GlslEmitter, NameMap, render};
