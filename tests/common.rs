//! Shared fixtures for the semantic-core integration tests.

#![allow(dead_code)]

use lumc::consts::{ACC_INTERFACE, ACC_PUBLIC};
use lumc::types::{TypeRef, TypeTable};

/// A small class hierarchy:
///
/// ```text
/// java.lang.Object
///   ├─ demo.Base
///   │    └─ demo.Derived (implements demo.Marker)
///   └─ interface demo.Marker
/// ```
pub struct Fixture {
    pub table: TypeTable,
    pub object: TypeRef,
    pub base: TypeRef,
    pub derived: TypeRef,
    pub marker: TypeRef,
}

pub fn hierarchy() -> Fixture {
    let mut table = TypeTable::new();
    let object = table.root_class();
    let marker = table
        .define_class("demo.Marker", ACC_PUBLIC | ACC_INTERFACE, Some(object), vec![])
        .unwrap();
    let base = table
        .define_class("demo.Base", ACC_PUBLIC, Some(object), vec![])
        .unwrap();
    let derived = table
        .define_class("demo.Derived", ACC_PUBLIC, Some(base), vec![marker])
        .unwrap();
    Fixture {
        table,
        object,
        base,
        derived,
        marker,
    }
}
