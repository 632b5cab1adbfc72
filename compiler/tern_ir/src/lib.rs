//! Intermediate representation shared by the Tern front end and evaluator.
//!
//! # Architecture
//!
//! - [`Span`]: compact byte-offset source locations
//! - [`Name`] / [`StringInterner`]: 32-bit interned identifiers
//! - [`ast`]: the owned expression tree handed from the parser to the evaluator
//!
//! Function, method and class definitions sit behind `Rc` so runtime values
//! can keep a handle to the body they were created from without cloning the
//! subtree.

pub mod ast;
mod interner;
mod name;
mod span;

pub use ast::{
    Arg, BinaryOp, ClassDef, ClassMember, CompareOp, Expr, ExprKind, FunctionDef, Param,
    Program, UnaryOp,
};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
