//! Member resolution: field, method and constructor finders.
//!
//! Method and constructor resolution pools every applicable candidate it can
//! see — the receiver's own members first, then the superclass chain, then
//! interfaces — deduplicates identical signatures (first encountered wins, so
//! an override shadows the inherited declaration purely through enumeration
//! order), and then ranks the pool once by parameter-type specificity. A
//! member declared nearer the receiver's class gets no other preference; two
//! mutually non-dominating leaders make the call ambiguous and the whole
//! candidate set is returned for diagnostics.

use std::cmp::Ordering;

use crate::error::{Result, SemaError};

use super::members::{ConstructorRef, FieldRef, MethodRef};
use super::rules::is_super_type;
use super::{TypeRef, TypeTable};

/// Applicability test between declared parameter types and the static types
/// of the argument expressions at a call site.
pub trait ParameterMatcher {
    fn matches(&self, table: &TypeTable, parameters: &[TypeRef], arguments: &[TypeRef]) -> bool;
}

/// The standard rule: arity must agree and every declared parameter type
/// must accept the corresponding argument type by widening/subtyping.
#[derive(Debug, Default)]
pub struct StandardParameterMatcher;

impl ParameterMatcher for StandardParameterMatcher {
    fn matches(&self, table: &TypeTable, parameters: &[TypeRef], arguments: &[TypeRef]) -> bool {
        parameters.len() == arguments.len()
            && parameters
                .iter()
                .zip(arguments)
                .all(|(&p, &a)| is_super_type(table, p, a))
    }
}

/// Outcome of method/constructor resolution. `Ambiguous` carries the full
/// ranked candidate set so the caller can list the competing signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    NotFound,
    Found(T),
    Ambiguous(Vec<T>),
}

impl<T> Resolution<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Resolution::Found(m) => Some(m),
            _ => None,
        }
    }

    /// The competing candidates of an ambiguous resolution.
    pub fn candidates(&self) -> &[T] {
        match self {
            Resolution::Ambiguous(c) => c,
            _ => &[],
        }
    }
}

impl Resolution<MethodRef> {
    /// Converts the outcome into a diagnostic-ready result for a call of
    /// `name` with the given argument types.
    pub fn into_result(self, table: &TypeTable, name: &str, args: &[TypeRef]) -> Result<MethodRef> {
        match self {
            Resolution::Found(m) => Ok(m),
            Resolution::NotFound => Err(SemaError::MethodNotFound {
                name: name.to_string(),
                found: table.describe_arguments(args),
            }),
            Resolution::Ambiguous(candidates) => {
                let listed: Vec<String> =
                    candidates.iter().map(|m| table.describe_method(m)).collect();
                Err(SemaError::AmbiguousMethod {
                    name: name.to_string(),
                    found: table.describe_arguments(args),
                    candidates: listed.join("; "),
                })
            }
        }
    }
}

impl Resolution<ConstructorRef> {
    /// Converts the outcome into a diagnostic-ready result for `new` of
    /// `class` with the given argument types.
    pub fn into_result(self, table: &TypeTable, class: TypeRef, args: &[TypeRef]) -> Result<ConstructorRef> {
        match self {
            Resolution::Found(c) => Ok(c),
            Resolution::NotFound => Err(SemaError::ConstructorNotFound {
                class: table.name_of(class).to_string(),
                found: table.describe_arguments(args),
            }),
            Resolution::Ambiguous(candidates) => {
                let listed: Vec<String> = candidates
                    .iter()
                    .map(|c| table.describe_constructor(c))
                    .collect();
                Err(SemaError::AmbiguousConstructor {
                    class: table.name_of(class).to_string(),
                    found: table.describe_arguments(args),
                    candidates: listed.join("; "),
                })
            }
        }
    }
}

/// Field resolution: first match wins, no ambiguity.
#[derive(Debug, Default)]
pub struct FieldFinder;

impl FieldFinder {
    pub fn new() -> Self {
        FieldFinder
    }

    /// Checks `target`'s own declared fields, then the superclass
    /// recursively, then each interface in declaration order.
    pub fn find(&self, table: &TypeTable, target: TypeRef, name: &str) -> Option<FieldRef> {
        let fields = table.fields_of(target)?;
        if let Some(field) = fields.get(name) {
            return Some(field.clone());
        }
        if let Some(superclass) = table.super_class_of(target) {
            if let Some(field) = self.find(table, superclass, name) {
                return Some(field);
            }
        }
        for &interface in table.interfaces_of(target) {
            if let Some(field) = self.find(table, interface, name) {
                return Some(field);
            }
        }
        None
    }
}

/// Method overload resolution over the receiver's whole hierarchy.
pub struct MethodFinder {
    matcher: Box<dyn ParameterMatcher>,
}

impl MethodFinder {
    pub fn new() -> Self {
        MethodFinder {
            matcher: Box::new(StandardParameterMatcher),
        }
    }

    pub fn with_matcher(matcher: Box<dyn ParameterMatcher>) -> Self {
        MethodFinder { matcher }
    }

    pub fn find(
        &self,
        table: &TypeTable,
        target: TypeRef,
        name: &str,
        args: &[TypeRef],
    ) -> Resolution<MethodRef> {
        let mut candidates: Vec<MethodRef> = Vec::new();
        self.collect(table, target, name, args, &mut candidates);
        // Rank in signature order first so ties between incomparable
        // candidates resolve deterministically, then stable-sort by
        // specificity.
        candidates.sort_by(|a, b| signature_order(table, &a.name, &a.arguments, &b.name, &b.arguments));
        candidates.sort_by(|a, b| compare_specificity(table, &a.arguments, &b.arguments));
        if candidates.len() >= 2
            && compare_specificity(table, &candidates[0].arguments, &candidates[1].arguments)
                != Ordering::Less
        {
            log::debug!(
                "ambiguous method '{}' for ({}): {} candidates",
                name,
                table.describe_arguments(args),
                candidates.len()
            );
            return Resolution::Ambiguous(candidates);
        }
        match candidates.len() {
            0 => Resolution::NotFound,
            _ => Resolution::Found(candidates.swap_remove(0)),
        }
    }

    fn collect(
        &self,
        table: &TypeTable,
        target: TypeRef,
        name: &str,
        args: &[TypeRef],
        out: &mut Vec<MethodRef>,
    ) {
        for method in table.methods_named(target, name) {
            if self.matcher.matches(table, &method.arguments, args)
                && !out.iter().any(|m| m.arguments == method.arguments)
            {
                out.push(method.clone());
            }
        }
        if let Some(superclass) = table.super_class_of(target) {
            self.collect(table, superclass, name, args, out);
        }
        for &interface in table.interfaces_of(target) {
            self.collect(table, interface, name, args, out);
        }
    }
}

impl Default for MethodFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructor overload resolution. Constructors are not inherited, so only
/// the target class's own declarations are considered; ranking and ambiguity
/// work exactly as for methods.
pub struct ConstructorFinder {
    matcher: Box<dyn ParameterMatcher>,
}

impl ConstructorFinder {
    pub fn new() -> Self {
        ConstructorFinder {
            matcher: Box::new(StandardParameterMatcher),
        }
    }

    pub fn with_matcher(matcher: Box<dyn ParameterMatcher>) -> Self {
        ConstructorFinder { matcher }
    }

    pub fn find(&self, table: &TypeTable, target: TypeRef, args: &[TypeRef]) -> Resolution<ConstructorRef> {
        let mut candidates: Vec<ConstructorRef> = Vec::new();
        for constructor in table.constructors_of(target) {
            if self.matcher.matches(table, &constructor.arguments, args)
                && !candidates.iter().any(|c| c.arguments == constructor.arguments)
            {
                candidates.push(constructor.clone());
            }
        }
        candidates.sort_by(|a, b| signature_order(table, "", &a.arguments, "", &b.arguments));
        candidates.sort_by(|a, b| compare_specificity(table, &a.arguments, &b.arguments));
        if candidates.len() >= 2
            && compare_specificity(table, &candidates[0].arguments, &candidates[1].arguments)
                != Ordering::Less
        {
            log::debug!(
                "ambiguous constructor for '{}' ({}): {} candidates",
                table.name_of(target),
                table.describe_arguments(args),
                candidates.len()
            );
            return Resolution::Ambiguous(candidates);
        }
        match candidates.len() {
            0 => Resolution::NotFound,
            _ => Resolution::Found(candidates.swap_remove(0)),
        }
    }
}

impl Default for ConstructorFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders candidates by name, then arity, then each parameter type's name.
/// Two members comparing equal here have identical signatures.
fn signature_order(
    table: &TypeTable,
    name_a: &str,
    args_a: &[TypeRef],
    name_b: &str,
    args_b: &[TypeRef],
) -> Ordering {
    let by_name = name_a.cmp(name_b);
    if by_name != Ordering::Equal {
        return by_name;
    }
    let by_arity = args_a.len().cmp(&args_b.len());
    if by_arity != Ordering::Equal {
        return by_arity;
    }
    for (&a, &b) in args_a.iter().zip(args_b) {
        if a != b {
            return table.name_of(a).cmp(table.name_of(b));
        }
    }
    Ordering::Equal
}

/// Specificity comparator: `Less` when every parameter of `a` is accepted by
/// the corresponding parameter of `b` (so `a` is more specific and sorts
/// first), `Greater` for the reverse, `Equal` when the two are incomparable.
fn compare_specificity(table: &TypeTable, a: &[TypeRef], b: &[TypeRef]) -> Ordering {
    if all_super_type(table, b, a) {
        return Ordering::Less;
    }
    if all_super_type(table, a, b) {
        return Ordering::Greater;
    }
    Ordering::Equal
}

fn all_super_type(table: &TypeTable, left: &[TypeRef], right: &[TypeRef]) -> bool {
    left.iter()
        .zip(right)
        .all(|(&l, &r)| is_super_type(table, l, r))
}
