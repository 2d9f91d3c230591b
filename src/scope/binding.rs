use crate::types::TypeRef;

/// A local variable: its frame-local slot index and type. Slot indices are
/// unique within one frame and assigned monotonically; discarding a scope
/// never renumbers slots already issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBinding {
    pub index: usize,
    pub ty: TypeRef,
}

impl LocalBinding {
    pub fn new(index: usize, ty: TypeRef) -> Self {
        LocalBinding { index, ty }
    }
}

/// A resolved variable reference: the binding plus how many lexical frame
/// boundaries separate the reference from the declaration. `frame == 0`
/// means the variable lives in the referencing frame itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureLocalBinding {
    pub frame: usize,
    pub index: usize,
    pub ty: TypeRef,
}

impl ClosureLocalBinding {
    pub fn new(frame: usize, index: usize, ty: TypeRef) -> Self {
        ClosureLocalBinding { frame, index, ty }
    }
}
