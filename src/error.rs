use thiserror::Error;

/// Result type for lumc semantic operations
pub type Result<T> = std::result::Result<T, SemaError>;

/// Error types for the semantic core.
///
/// Expected analysis failures (unresolved or ambiguous members, duplicate
/// declarations, incompatible types) are reported through these variants so
/// the surrounding compiler can accumulate diagnostics and keep going;
/// nothing here panics on a user-program error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemaError {
    #[error("duplicate class definition: {0}")]
    DuplicateClass(String),

    #[error("duplicate field '{name}' in class '{class}'")]
    DuplicateField { class: String, name: String },

    #[error("duplicate local variable '{0}' in the same scope")]
    DuplicateLocalVariable(String),

    #[error("cannot add '{0}': frame is closed by a compiled closure")]
    ClosedFrame(String),

    #[error("no active frame (unbalanced open_frame/close_frame)")]
    NoActiveFrame,

    #[error("no applicable method '{name}' for argument types [{found}]")]
    MethodNotFound { name: String, found: String },

    #[error("ambiguous method '{name}' for argument types [{found}]; candidates: {candidates}")]
    AmbiguousMethod {
        name: String,
        found: String,
        candidates: String,
    },

    #[error("no applicable constructor for '{class}' with argument types [{found}]")]
    ConstructorNotFound { class: String, found: String },

    #[error("ambiguous constructor for '{class}' with argument types [{found}]; candidates: {candidates}")]
    AmbiguousConstructor {
        class: String,
        found: String,
        candidates: String,
    },

    #[error("incompatible types: expected {expected}, found {found}")]
    IncompatibleType { expected: String, found: String },
}
