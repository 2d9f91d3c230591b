//! Frame and scope arena.

use std::collections::HashMap;

use crate::error::{Result, SemaError};
use crate::types::TypeRef;

use super::binding::{ClosureLocalBinding, LocalBinding};

/// Id of a frame within one [`FrameArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u32);

/// One lexical scope: a name→binding map plus the index of its parent scope
/// within the owning frame. A name bound in this exact scope cannot be
/// rebound.
#[derive(Debug, Default)]
pub struct LocalScope {
    parent: Option<usize>,
    bindings: HashMap<String, LocalBinding>,
}

impl LocalScope {
    fn new(parent: Option<usize>) -> Self {
        LocalScope {
            parent,
            bindings: HashMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<LocalBinding> {
        self.bindings.get(name).copied()
    }

    /// Registers a binding. Returns `false` (and leaves the scope unchanged)
    /// if the name is already bound here.
    pub fn put(&mut self, name: &str, binding: LocalBinding) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.to_string(), binding);
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = LocalBinding> + '_ {
        self.bindings.values().copied()
    }
}

/// Variable storage of one method, constructor or closure body.
#[derive(Debug)]
pub struct LocalFrame {
    parent: Option<FrameId>,
    /// Every scope ever opened in this frame, in open order. Closed scopes
    /// stay here so `entries` can enumerate the frame's full slot layout.
    scopes: Vec<LocalScope>,
    current: usize,
    max_index: usize,
    closed: bool,
}

impl LocalFrame {
    fn new(parent: Option<FrameId>) -> Self {
        LocalFrame {
            parent,
            scopes: vec![LocalScope::new(None)],
            current: 0,
            max_index: 0,
            closed: false,
        }
    }

    pub fn parent(&self) -> Option<FrameId> {
        self.parent
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Walks the current scope and its ancestors within this frame only.
    fn lookup_in_scopes(&self, name: &str) -> Option<LocalBinding> {
        let mut scope = Some(self.current);
        while let Some(index) = scope {
            if let Some(binding) = self.scopes[index].get(name) {
                return Some(binding);
            }
            scope = self.scopes[index].parent;
        }
        None
    }
}

/// Arena owning every frame of one method/constructor/closure analysis.
///
/// Frames are created and discarded in LIFO order matching AST traversal;
/// the arena keeps discarded frames alive so a closure frame's reference to
/// its lexically enclosing frame can never dangle.
#[derive(Debug, Default)]
pub struct FrameArena {
    frames: Vec<LocalFrame>,
}

impl FrameArena {
    pub fn new() -> Self {
        FrameArena { frames: Vec::new() }
    }

    /// Creates a frame whose lexically enclosing frame is `parent`, with its
    /// root scope already open.
    pub fn new_frame(&mut self, parent: Option<FrameId>) -> FrameId {
        let id = FrameId(self.frames.len() as u32);
        self.frames.push(LocalFrame::new(parent));
        id
    }

    pub fn frame(&self, id: FrameId) -> &LocalFrame {
        &self.frames[id.0 as usize]
    }

    pub fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.frame(id).parent
    }

    /// Opens a nested scope in `id`, linked to the previous current scope.
    pub fn open_scope(&mut self, id: FrameId) {
        let frame = &mut self.frames[id.0 as usize];
        let parent = frame.current;
        frame.scopes.push(LocalScope::new(Some(parent)));
        frame.current = frame.scopes.len() - 1;
    }

    /// Closes the current scope of `id`, restoring its parent. Slots issued
    /// inside the discarded scope are not renumbered.
    pub fn close_scope(&mut self, id: FrameId) {
        let frame = &mut self.frames[id.0 as usize];
        if let Some(parent) = frame.scopes[frame.current].parent {
            frame.current = parent;
        }
    }

    /// Declares `name` in the current scope of `id` and returns its slot
    /// index. A name already bound in that exact scope is rejected and no
    /// slot is consumed; a closed frame rejects every declaration.
    pub fn add_entry(&mut self, id: FrameId, name: &str, ty: TypeRef) -> Result<usize> {
        let frame = &mut self.frames[id.0 as usize];
        if frame.closed {
            return Err(SemaError::ClosedFrame(name.to_string()));
        }
        let index = frame.max_index;
        let current = frame.current;
        if !frame.scopes[current].put(name, LocalBinding::new(index, ty)) {
            return Err(SemaError::DuplicateLocalVariable(name.to_string()));
        }
        frame.max_index += 1;
        Ok(index)
    }

    /// Resolves `name` starting at `id`'s current scope: the scope chain of
    /// the frame first, then each enclosing frame outward. The frame
    /// distance counts the boundaries crossed.
    pub fn lookup(&self, id: FrameId, name: &str) -> Option<ClosureLocalBinding> {
        let mut frame = Some(id);
        let mut distance = 0;
        while let Some(current) = frame {
            if let Some(binding) = self.frame(current).lookup_in_scopes(name) {
                return Some(ClosureLocalBinding::new(distance, binding.index, binding.ty));
            }
            distance += 1;
            frame = self.frame(current).parent;
        }
        None
    }

    /// Checks exactly the innermost scope of `id` — no parent scopes, no
    /// parent frames. Used to detect illegal re-declaration within a block.
    pub fn lookup_only_current_scope(&self, id: FrameId, name: &str) -> Option<ClosureLocalBinding> {
        let frame = self.frame(id);
        frame.scopes[frame.current]
            .get(name)
            .map(|binding| ClosureLocalBinding::new(0, binding.index, binding.ty))
    }

    /// Every binding of the frame across all scopes ever opened, sorted by
    /// slot index. This is the frame's storage layout for the backend.
    pub fn entries(&self, id: FrameId) -> Vec<LocalBinding> {
        let mut entries: Vec<LocalBinding> = self
            .frame(id)
            .scopes
            .iter()
            .flat_map(|scope| scope.entries())
            .collect();
        entries.sort_by_key(|binding| binding.index);
        entries
    }

    pub fn set_closed(&mut self, id: FrameId, closed: bool) {
        self.frames[id.0 as usize].closed = closed;
    }

    /// Marks `id` and every frame reachable through its parent chain.
    /// Fired when a closure finishes compiling against the chain: none of
    /// those frames may grow afterwards without shifting a layout the
    /// closure already assumed.
    pub fn set_all_closed(&mut self, id: FrameId, closed: bool) {
        let mut frame = Some(id);
        while let Some(current) = frame {
            self.frames[current.0 as usize].closed = closed;
            frame = self.frames[current.0 as usize].parent;
        }
    }

    pub fn is_closed(&self, id: FrameId) -> bool {
        self.frame(id).closed
    }

    /// 0-based distance from `id` to the outermost ancestor frame.
    pub fn depth(&self, id: FrameId) -> usize {
        let mut depth = 0;
        let mut frame = self.frame(id).parent;
        while let Some(current) = frame {
            depth += 1;
            frame = self.frame(current).parent;
        }
        depth
    }
}
