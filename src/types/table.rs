//! The per-compilation-session type table.
//!
//! All class/interface and array types live here; [`TypeRef`]s are interned
//! ids into this arena. Requesting the same class name, or the same
//! (component, dimension) pair, always yields the same `TypeRef` — identity
//! comparison of types is correct only because of this canonicalization.
//!
//! The table is owned by one compilation session and passed by reference into
//! the subtype rules and member finders. Loading external platform classes
//! (class-file introspection) happens outside this crate; the bridge adapts
//! them into `define_class`/`add_*` calls so source-declared and platform
//! classes look identical from here on.

use std::collections::HashMap;

use crate::consts::{ACC_INTERFACE, ACC_PUBLIC, CLONEABLE_CLASS, CONSTRUCTOR_NAME, ROOT_CLASS, SERIALIZABLE_CLASS};
use crate::error::{Result, SemaError};

use super::find::{ConstructorFinder, FieldFinder, MethodFinder, Resolution};
use super::members::{ConstructorRef, FieldRef, MethodRef, MultiTable, OrderedTable};
use super::{ArrayId, ClassId, TypeRef};

#[derive(Debug)]
struct ClassData {
    name: String,
    modifier: u16,
    super_class: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    fields: OrderedTable<FieldRef>,
    methods: MultiTable<MethodRef>,
    constructors: Vec<ConstructorRef>,
}

#[derive(Debug)]
struct ArrayData {
    name: String,
    component: TypeRef,
    dimension: usize,
    /// One dimension down: the component itself for dimension 1, otherwise
    /// the canonical (component, dimension - 1) array.
    base: TypeRef,
    super_class: TypeRef,
    interfaces: Vec<TypeRef>,
}

/// Canonicalizing arena for class and array types.
#[derive(Debug)]
pub struct TypeTable {
    classes: Vec<ClassData>,
    arrays: Vec<ArrayData>,
    class_ids: HashMap<String, ClassId>,
    array_ids: HashMap<(TypeRef, usize), ArrayId>,
    root: TypeRef,
    array_interfaces: Vec<TypeRef>,
}

impl TypeTable {
    /// Creates a table seeded with the well-known classes every session
    /// needs: the root object class and the two interfaces synthesized onto
    /// array types. Everything else is defined by the caller.
    pub fn new() -> Self {
        let mut table = TypeTable {
            classes: Vec::new(),
            arrays: Vec::new(),
            class_ids: HashMap::new(),
            array_ids: HashMap::new(),
            root: TypeRef::Null,
            array_interfaces: Vec::new(),
        };
        let root = table
            .define_class(ROOT_CLASS, ACC_PUBLIC, None, Vec::new())
            .expect("fresh table");
        table.root = root;
        let serializable = table
            .define_class(SERIALIZABLE_CLASS, ACC_PUBLIC | ACC_INTERFACE, Some(root), Vec::new())
            .expect("fresh table");
        let cloneable = table
            .define_class(CLONEABLE_CLASS, ACC_PUBLIC | ACC_INTERFACE, Some(root), Vec::new())
            .expect("fresh table");
        table.array_interfaces = vec![serializable, cloneable];
        table
    }

    /// The root object class.
    pub fn root_class(&self) -> TypeRef {
        self.root
    }

    /// Defines a new class or interface (set `ACC_INTERFACE` in `modifier`).
    ///
    /// `super_class` is `None` only for the root class. The superclass and
    /// every interface must already be defined, which keeps the hierarchy
    /// acyclic at this layer.
    pub fn define_class(
        &mut self,
        name: &str,
        modifier: u16,
        super_class: Option<TypeRef>,
        interfaces: Vec<TypeRef>,
    ) -> Result<TypeRef> {
        debug_assert!(!name.is_empty(), "class name must not be empty");
        if self.class_ids.contains_key(name) {
            return Err(SemaError::DuplicateClass(name.to_string()));
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassData {
            name: name.to_string(),
            modifier,
            super_class,
            interfaces,
            fields: OrderedTable::new(),
            methods: MultiTable::new(),
            constructors: Vec::new(),
        });
        self.class_ids.insert(name.to_string(), id);
        log::debug!("define class: {} (id={})", name, id.0);
        Ok(TypeRef::Class(id))
    }

    /// Looks up a class or interface by qualified name.
    pub fn load_class(&self, name: &str) -> Option<TypeRef> {
        self.class_ids.get(name).copied().map(TypeRef::Class)
    }

    /// Interns the array type of `dimension` dimensions over `component`.
    ///
    /// The array's superclass is the root class and its interfaces are
    /// Serializable and Cloneable. Its `base` (one dimension down) is
    /// resolved through this table up front so later queries are read-only.
    pub fn load_array(&mut self, component: TypeRef, dimension: usize) -> TypeRef {
        debug_assert!(dimension >= 1, "array dimension must be at least 1");
        if let Some(&id) = self.array_ids.get(&(component, dimension)) {
            return TypeRef::Array(id);
        }
        let base = if dimension == 1 {
            component
        } else {
            self.load_array(component, dimension - 1)
        };
        let name = format!("{}{}", "[".repeat(dimension), self.name_of(component));
        let id = ArrayId(self.arrays.len() as u32);
        self.arrays.push(ArrayData {
            name,
            component,
            dimension,
            base,
            super_class: self.root,
            interfaces: self.array_interfaces.clone(),
        });
        self.array_ids.insert((component, dimension), id);
        log::debug!("intern array: {} (id={})", self.arrays[id.0 as usize].name, id.0);
        TypeRef::Array(id)
    }

    // member registration

    /// Adds a field to a class. A second field of the same name is rejected.
    pub fn add_field(&mut self, class: TypeRef, modifier: u16, name: &str, ty: TypeRef) -> Result<()> {
        let id = self.expect_class(class);
        let field = FieldRef::new(id, modifier, name, ty);
        if !self.classes[id.0 as usize].fields.add(field) {
            return Err(SemaError::DuplicateField {
                class: self.classes[id.0 as usize].name.clone(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Adds a method overload to a class or interface.
    pub fn add_method(
        &mut self,
        class: TypeRef,
        modifier: u16,
        name: &str,
        arguments: Vec<TypeRef>,
        return_type: TypeRef,
    ) {
        let id = self.expect_class(class);
        let method = MethodRef::new(id, modifier, name, arguments, return_type);
        self.classes[id.0 as usize].methods.add(method);
    }

    /// Adds a constructor overload to a class.
    pub fn add_constructor(&mut self, class: TypeRef, modifier: u16, arguments: Vec<TypeRef>) {
        let id = self.expect_class(class);
        let constructor = ConstructorRef::new(id, modifier, arguments);
        self.classes[id.0 as usize].constructors.push(constructor);
    }

    // query surface

    /// Stable display name of any type.
    pub fn name_of(&self, ty: TypeRef) -> &str {
        match ty {
            TypeRef::Basic(b) => b.name(),
            TypeRef::Null => "null",
            TypeRef::Class(id) => &self.classes[id.0 as usize].name,
            TypeRef::Array(id) => &self.arrays[id.0 as usize].name,
        }
    }

    /// Superclass of a class or array type. `None` for the root class and
    /// for non-object types.
    pub fn super_class_of(&self, ty: TypeRef) -> Option<TypeRef> {
        match ty {
            TypeRef::Class(id) => self.classes[id.0 as usize].super_class,
            TypeRef::Array(id) => Some(self.arrays[id.0 as usize].super_class),
            _ => None,
        }
    }

    /// Interfaces of a class, or the synthesized pair for an array.
    pub fn interfaces_of(&self, ty: TypeRef) -> &[TypeRef] {
        match ty {
            TypeRef::Class(id) => &self.classes[id.0 as usize].interfaces,
            TypeRef::Array(id) => &self.arrays[id.0 as usize].interfaces,
            _ => &[],
        }
    }

    pub fn modifier_of(&self, ty: TypeRef) -> u16 {
        match ty {
            TypeRef::Class(id) => self.classes[id.0 as usize].modifier,
            _ => 0,
        }
    }

    pub fn is_interface(&self, ty: TypeRef) -> bool {
        self.modifier_of(ty) & ACC_INTERFACE != 0
    }

    /// Declared fields of a class; array types delegate to the synthesized
    /// superclass. `None` for non-object types.
    pub fn fields_of(&self, ty: TypeRef) -> Option<&OrderedTable<FieldRef>> {
        match ty {
            TypeRef::Class(id) => Some(&self.classes[id.0 as usize].fields),
            TypeRef::Array(id) => self.fields_of(self.arrays[id.0 as usize].super_class),
            _ => None,
        }
    }

    /// Declared methods of a class; array types delegate to the synthesized
    /// superclass. `None` for non-object types.
    pub fn methods_of(&self, ty: TypeRef) -> Option<&MultiTable<MethodRef>> {
        match ty {
            TypeRef::Class(id) => Some(&self.classes[id.0 as usize].methods),
            TypeRef::Array(id) => self.methods_of(self.arrays[id.0 as usize].super_class),
            _ => None,
        }
    }

    /// Declared method overloads of the given name.
    pub fn methods_named(&self, ty: TypeRef, name: &str) -> &[MethodRef] {
        self.methods_of(ty).map(|m| m.get(name)).unwrap_or(&[])
    }

    /// Declared constructors; empty for non-class types.
    pub fn constructors_of(&self, ty: TypeRef) -> &[ConstructorRef] {
        match ty {
            TypeRef::Class(id) => &self.classes[id.0 as usize].constructors,
            _ => &[],
        }
    }

    // array accessors

    pub fn component_of(&self, ty: TypeRef) -> TypeRef {
        self.arrays[self.expect_array(ty).0 as usize].component
    }

    pub fn dimension_of(&self, ty: TypeRef) -> usize {
        self.arrays[self.expect_array(ty).0 as usize].dimension
    }

    /// One dimension down: the component for a one-dimensional array,
    /// otherwise the canonical (component, dimension - 1) array.
    pub fn base_of(&self, ty: TypeRef) -> TypeRef {
        self.arrays[self.expect_array(ty).0 as usize].base
    }

    // resolution conveniences (standard matcher)

    /// Resolves a field against `target`'s hierarchy; first match wins.
    pub fn find_field(&self, target: TypeRef, name: &str) -> Option<FieldRef> {
        FieldFinder::new().find(self, target, name)
    }

    /// Resolves a method call against `target`'s hierarchy.
    pub fn find_method(&self, target: TypeRef, name: &str, args: &[TypeRef]) -> Resolution<MethodRef> {
        MethodFinder::new().find(self, target, name, args)
    }

    /// Resolves a constructor call against `target`'s own constructors.
    pub fn find_constructor(&self, target: TypeRef, args: &[TypeRef]) -> Resolution<ConstructorRef> {
        ConstructorFinder::new().find(self, target, args)
    }

    /// Human-readable signature of a member's argument list, for diagnostics.
    pub fn describe_arguments(&self, args: &[TypeRef]) -> String {
        let names: Vec<&str> = args.iter().map(|&a| self.name_of(a)).collect();
        names.join(", ")
    }

    /// Human-readable `Owner.name(args)` form of a method, for diagnostics.
    pub fn describe_method(&self, method: &MethodRef) -> String {
        format!(
            "{}.{}({})",
            self.classes[method.owner.0 as usize].name,
            method.name,
            self.describe_arguments(&method.arguments)
        )
    }

    /// Human-readable `Owner.<init>(args)` form of a constructor.
    pub fn describe_constructor(&self, constructor: &ConstructorRef) -> String {
        format!(
            "{}.{}({})",
            self.classes[constructor.owner.0 as usize].name,
            CONSTRUCTOR_NAME,
            self.describe_arguments(&constructor.arguments)
        )
    }

    fn expect_class(&self, ty: TypeRef) -> ClassId {
        match ty {
            TypeRef::Class(id) => id,
            other => panic!("expected a class type, got {}", self.name_of(other)),
        }
    }

    fn expect_array(&self, ty: TypeRef) -> ArrayId {
        match ty {
            TypeRef::Array(id) => id,
            other => panic!("expected an array type, got {}", self.name_of(other)),
        }
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}
