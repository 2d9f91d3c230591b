//! Local variables, lexical scopes and closure frames.
//!
//! One [`LocalFrame`] holds the variable storage of a single method,
//! constructor or closure body; its scopes mirror block nesting. Frames form
//! a chain to the lexically enclosing frame, and a lookup that crosses N
//! frame boundaries resolves to a [`ClosureLocalBinding`] with frame
//! distance N — the backend uses that distance to decide whether the
//! variable lives in a plain slot or a hoisted capture record.
//!
//! Frames and scopes are arena entries addressed by ids ([`FrameArena`])
//! rather than parent pointers, and the whole arena is owned by the
//! [`LocalContext`] driving one body's analysis.

mod binding;
mod context;
mod frame;

pub use binding::{ClosureLocalBinding, LocalBinding};
pub use context::{LocalContext, SymbolGenerator};
pub use frame::{FrameArena, FrameId, LocalFrame, LocalScope};
