//! Subtype and widening rules.
//!
//! `is_super_type(left, right)` answers whether a value of type `right` may
//! stand where `left` is expected: primitive widening along the fixed
//! lattice, class/interface subtyping over the reflexive-transitive
//! superclass/interface closure, covariant arrays, and null against any
//! object or array type.

use super::{BasicType, TypeRef, TypeTable};

/// True iff a value of type `right` may be used where `left` is expected.
pub fn is_super_type(table: &TypeTable, left: TypeRef, right: TypeRef) -> bool {
    if left.is_basic() {
        return match (left.as_basic(), right.as_basic()) {
            (Some(l), Some(r)) => is_super_type_basic(l, r),
            _ => false,
        };
    }
    if left.is_class() {
        if right.is_class() {
            return is_super_type_class(table, left, Some(right));
        }
        if right.is_array() {
            // Only the synthesized superclass accepts an array here; the
            // array's interfaces are not considered.
            return Some(left) == table.super_class_of(right);
        }
        return right.is_null();
    }
    if left.is_array() {
        if right.is_array() {
            return is_super_type(table, table.base_of(left), table.base_of(right));
        }
        return right.is_null();
    }
    false
}

/// Assignability coincides with the supertype relation.
pub fn is_assignable(table: &TypeTable, left: TypeRef, right: TypeRef) -> bool {
    is_super_type(table, left, right)
}

/// Reflexive-transitive closure over `right`'s superclass chain and
/// interface set, depth first. A missing superclass terminates the
/// recursion.
fn is_super_type_class(table: &TypeTable, left: TypeRef, right: Option<TypeRef>) -> bool {
    let Some(right) = right else { return false };
    if left == right {
        return true;
    }
    if is_super_type_class(table, left, table.super_class_of(right)) {
        return true;
    }
    table
        .interfaces_of(right)
        .iter()
        .any(|&i| is_super_type_class(table, left, Some(i)))
}

/// The primitive widening lattice, by explicit case analysis on `left`.
/// Note that `short` and `char` are incomparable in both directions; the
/// lattice is not a total order.
fn is_super_type_basic(left: BasicType, right: BasicType) -> bool {
    use BasicType::*;
    match left {
        Double => matches!(right, Char | Byte | Short | Int | Long | Float | Double),
        Float => matches!(right, Char | Byte | Short | Int | Long | Float),
        Long => matches!(right, Char | Byte | Short | Int | Long),
        Int => matches!(right, Char | Byte | Short | Int),
        Short => matches!(right, Byte | Short),
        Boolean => right == Boolean,
        Byte => right == Byte,
        Char => right == Char,
        Void => false,
    }
}
