//! Per-body analysis context.

use crate::error::{Result, SemaError};
use crate::types::{ConstructorRef, MethodRef, TypeRef};

use super::binding::{ClosureLocalBinding, LocalBinding};
use super::frame::{FrameArena, FrameId};

/// Generates unique names for compiler-introduced temporaries.
#[derive(Debug)]
pub struct SymbolGenerator {
    prefix: String,
    count: usize,
}

impl SymbolGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SymbolGenerator {
            prefix: prefix.into(),
            count: 0,
        }
    }

    pub fn generate(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.count);
        self.count += 1;
        name
    }
}

/// The member whose body is under analysis.
#[derive(Debug, Clone)]
enum ContextMember {
    Method(MethodRef),
    Constructor(ConstructorRef),
}

/// Façade over the frame arena for one method, constructor or closure body.
///
/// The AST-walking analysis pass drives this: it opens a frame per closure
/// body, a scope per block, declares parameters and locals through
/// `add_entry`, and resolves every identifier through `lookup`. The resolved
/// [`ClosureLocalBinding`]s flow to the backend, which uses the frame
/// distance to place each variable in a plain slot or a capture record.
#[derive(Debug)]
pub struct LocalContext {
    arena: FrameArena,
    current: Option<FrameId>,
    is_static: bool,
    is_global: bool,
    member: Option<ContextMember>,
    generator: SymbolGenerator,
}

impl LocalContext {
    /// Creates a context with its root frame already open.
    pub fn new() -> Self {
        let mut arena = FrameArena::new();
        let root = arena.new_frame(None);
        LocalContext {
            arena,
            current: Some(root),
            is_static: false,
            is_global: false,
            member: None,
            generator: SymbolGenerator::new("symbol#"),
        }
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_global(&self) -> bool {
        self.is_global
    }

    pub fn set_global(&mut self, is_global: bool) {
        self.is_global = is_global;
    }

    pub fn set_method(&mut self, method: MethodRef) {
        self.member = Some(ContextMember::Method(method));
    }

    pub fn set_constructor(&mut self, constructor: ConstructorRef) {
        self.member = Some(ContextMember::Constructor(constructor));
    }

    pub fn method(&self) -> Option<&MethodRef> {
        match &self.member {
            Some(ContextMember::Method(m)) => Some(m),
            _ => None,
        }
    }

    pub fn constructor(&self) -> Option<&ConstructorRef> {
        match &self.member {
            Some(ContextMember::Constructor(c)) => Some(c),
            _ => None,
        }
    }

    /// The enclosing method's return type; `void` inside a constructor or
    /// before any member was set.
    pub fn return_type(&self) -> TypeRef {
        match &self.member {
            Some(ContextMember::Method(m)) => m.return_type,
            _ => TypeRef::VOID,
        }
    }

    /// A fresh name for a compiler-introduced temporary.
    pub fn new_name(&mut self) -> String {
        self.generator.generate()
    }

    // frame lifecycle

    /// Opens a frame for a closure body; the current frame becomes its
    /// lexically enclosing frame.
    pub fn open_frame(&mut self) {
        let frame = self.arena.new_frame(self.current);
        self.current = Some(frame);
    }

    /// Closes the current frame, returning to the enclosing one. Closing the
    /// root frame leaves no active frame.
    pub fn close_frame(&mut self) -> Result<()> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.current = self.arena.parent(current);
        Ok(())
    }

    pub fn current_frame(&self) -> Option<FrameId> {
        self.current
    }

    /// 0-based depth of the current frame; `None` when no frame is active.
    pub fn depth(&self) -> Option<usize> {
        self.current.map(|frame| self.arena.depth(frame))
    }

    // scope lifecycle

    pub fn open_scope(&mut self) -> Result<()> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.arena.open_scope(current);
        Ok(())
    }

    pub fn close_scope(&mut self) -> Result<()> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.arena.close_scope(current);
        Ok(())
    }

    // declaration and lookup

    /// Declares a variable in the current scope, returning its slot index.
    pub fn add_entry(&mut self, name: &str, ty: TypeRef) -> Result<usize> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.arena.add_entry(current, name, ty)
    }

    /// Declares a generated temporary, returning its name and slot index.
    pub fn add_generated_entry(&mut self, ty: TypeRef) -> Result<(String, usize)> {
        let name = self.new_name();
        let index = self.add_entry(&name, ty)?;
        Ok((name, index))
    }

    pub fn lookup(&self, name: &str) -> Option<ClosureLocalBinding> {
        self.arena.lookup(self.current?, name)
    }

    pub fn lookup_only_current_scope(&self, name: &str) -> Option<ClosureLocalBinding> {
        self.arena.lookup_only_current_scope(self.current?, name)
    }

    // closure close-out

    /// Marks the current frame closed (or reopens it, which normal analysis
    /// never does).
    pub fn set_closed(&mut self, closed: bool) -> Result<()> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.arena.set_closed(current, closed);
        Ok(())
    }

    /// Marks the current frame and every enclosing frame closed, after a
    /// closure has been compiled against their layout.
    pub fn set_all_closed(&mut self, closed: bool) -> Result<()> {
        let current = self.current.ok_or(SemaError::NoActiveFrame)?;
        self.arena.set_all_closed(current, closed);
        Ok(())
    }

    /// Storage layout of the current frame for the backend: every binding
    /// sorted by slot index.
    pub fn frame_entries(&self) -> Vec<LocalBinding> {
        match self.current {
            Some(frame) => self.arena.entries(frame),
            None => Vec::new(),
        }
    }

    /// The underlying arena, for backends that need to inspect enclosing
    /// frames directly.
    pub fn arena(&self) -> &FrameArena {
        &self.arena
    }
}

impl Default for LocalContext {
    fn default() -> Self {
        Self::new()
    }
}
