//! Lumen Language Compiler — semantic core (lumc)
//!
//! The type model, member/overload resolution engine and lexical
//! scope/closure-frame machinery used while checking a Lumen program and
//! translating its syntax tree into typed IR for the JVM bytecode backend.
//!
//! ## Architecture
//!
//! - **types**: canonical type table ([`types::TypeTable`]), the closed
//!   [`types::TypeRef`] sum over primitive/null/class/array types, the
//!   widening/subtyping rules ([`types::rules`]) and the field/method/
//!   constructor finders ([`types::find`])
//! - **scope**: lexical scopes, closure frames and the per-body
//!   [`scope::LocalContext`] façade
//! - **error**: crate-wide [`SemaError`]
//! - **consts**: JVM access-flag bits and well-known class names
//!
//! ## Analysis flow
//!
//! ```text
//! AST walk → LocalContext (declare/lookup locals)
//!          → finders (field/method/constructor dispatch)
//!          → rules (assignability and cast checks)
//! ```
//!
//! Parsing, AST lowering, class-file introspection and bytecode emission
//! live in the surrounding compiler; this crate's boundary is purely
//! in-process API and it performs no I/O.

pub mod consts;
pub mod error;
pub mod scope;
pub mod types;

pub use error::{Result, SemaError};
