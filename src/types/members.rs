//! Member representations and the per-class member tables.
//!
//! Fields are stored one-per-name in declaration order; methods and
//! constructors are multi-valued per name (overloads). Duplicate field names
//! are rejected rather than overwritten.

use indexmap::IndexMap;

use crate::consts::CONSTRUCTOR_NAME;
use super::{ClassId, TypeRef};

/// Anything keyed by a (never empty) name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A field declared on a class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub owner: ClassId,
    pub modifier: u16,
    pub name: String,
    pub ty: TypeRef,
}

impl FieldRef {
    pub fn new(owner: ClassId, modifier: u16, name: impl Into<String>, ty: TypeRef) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "field name must not be empty");
        FieldRef { owner, modifier, name, ty }
    }
}

impl Named for FieldRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A method declared on a class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef {
    pub owner: ClassId,
    pub modifier: u16,
    pub name: String,
    pub arguments: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl MethodRef {
    pub fn new(
        owner: ClassId,
        modifier: u16,
        name: impl Into<String>,
        arguments: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "method name must not be empty");
        MethodRef { owner, modifier, name, arguments, return_type }
    }
}

impl Named for MethodRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A constructor declared on a class. Constructors carry no source-level
/// name; they all answer to `<init>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRef {
    pub owner: ClassId,
    pub modifier: u16,
    pub arguments: Vec<TypeRef>,
}

impl ConstructorRef {
    pub fn new(owner: ClassId, modifier: u16, arguments: Vec<TypeRef>) -> Self {
        ConstructorRef { owner, modifier, arguments }
    }
}

impl Named for ConstructorRef {
    fn name(&self) -> &str {
        CONSTRUCTOR_NAME
    }
}

/// Insertion-ordered name table holding at most one entry per name.
#[derive(Debug, Clone, Default)]
pub struct OrderedTable<T: Named> {
    entries: IndexMap<String, T>,
}

impl<T: Named> OrderedTable<T> {
    pub fn new() -> Self {
        OrderedTable { entries: IndexMap::new() }
    }

    /// Adds an entry. Returns `false` (and leaves the table unchanged) if the
    /// name is already present.
    pub fn add(&mut self, entry: T) -> bool {
        if self.entries.contains_key(entry.name()) {
            return false;
        }
        self.entries.insert(entry.name().to_string(), entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insertion-ordered name table holding many entries per name (overloads).
#[derive(Debug, Clone, Default)]
pub struct MultiTable<T: Named> {
    entries: IndexMap<String, Vec<T>>,
}

impl<T: Named> MultiTable<T> {
    pub fn new() -> Self {
        MultiTable { entries: IndexMap::new() }
    }

    pub fn add(&mut self, entry: T) {
        self.entries
            .entry(entry.name().to_string())
            .or_default()
            .push(entry);
    }

    pub fn get(&self, name: &str) -> &[T] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All entries, grouped by name in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
