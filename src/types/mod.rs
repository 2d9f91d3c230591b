//! Type model for the semantic core.
//!
//! Every type the analysis pass can encounter is a [`TypeRef`]: one of the
//! nine primitives, the null type, a class/interface, or an array. Class and
//! array data live in the per-session [`TypeTable`] arena and are referred to
//! by interned ids, so `TypeRef` is `Copy` and comparing two of them compares
//! identities — the table guarantees one id per class name and one id per
//! (component, dimension) pair, which every algorithm in this crate relies
//! on as a fast path.

mod members;
mod table;

pub mod find;
pub mod rules;

pub use members::{ConstructorRef, FieldRef, MethodRef, MultiTable, Named, OrderedTable};
pub use table::TypeTable;

/// Interned id of a class or interface in a [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub(crate) u32);

/// Interned id of an array type in a [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayId(pub(crate) u32);

/// The nine primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Void,
}

impl BasicType {
    pub fn name(self) -> &'static str {
        match self {
            BasicType::Byte => "byte",
            BasicType::Short => "short",
            BasicType::Char => "char",
            BasicType::Int => "int",
            BasicType::Long => "long",
            BasicType::Float => "float",
            BasicType::Double => "double",
            BasicType::Boolean => "boolean",
            BasicType::Void => "void",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            BasicType::Byte | BasicType::Short | BasicType::Int | BasicType::Long
        )
    }

    pub fn is_real(self) -> bool {
        matches!(self, BasicType::Float | BasicType::Double)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_real()
    }

    pub fn is_boolean(self) -> bool {
        self == BasicType::Boolean
    }
}

/// Uniform handle for any type.
///
/// Equality is identity: two `TypeRef`s are equal iff they denote the same
/// canonical type in the owning [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Basic(BasicType),
    Null,
    Class(ClassId),
    Array(ArrayId),
}

impl TypeRef {
    pub const BYTE: TypeRef = TypeRef::Basic(BasicType::Byte);
    pub const SHORT: TypeRef = TypeRef::Basic(BasicType::Short);
    pub const CHAR: TypeRef = TypeRef::Basic(BasicType::Char);
    pub const INT: TypeRef = TypeRef::Basic(BasicType::Int);
    pub const LONG: TypeRef = TypeRef::Basic(BasicType::Long);
    pub const FLOAT: TypeRef = TypeRef::Basic(BasicType::Float);
    pub const DOUBLE: TypeRef = TypeRef::Basic(BasicType::Double);
    pub const BOOLEAN: TypeRef = TypeRef::Basic(BasicType::Boolean);
    pub const VOID: TypeRef = TypeRef::Basic(BasicType::Void);
    pub const NULL: TypeRef = TypeRef::Null;

    pub fn is_basic(self) -> bool {
        matches!(self, TypeRef::Basic(_))
    }

    pub fn is_null(self) -> bool {
        matches!(self, TypeRef::Null)
    }

    pub fn is_class(self) -> bool {
        matches!(self, TypeRef::Class(_))
    }

    pub fn is_array(self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    /// A class/interface or an array: anything with members and a hierarchy.
    pub fn is_object(self) -> bool {
        matches!(self, TypeRef::Class(_) | TypeRef::Array(_))
    }

    pub fn as_basic(self) -> Option<BasicType> {
        match self {
            TypeRef::Basic(b) => Some(b),
            _ => None,
        }
    }
}
