//! Lexical scopes, closure frames and the per-body analysis context.

mod common;

use common::hierarchy;
use lumc::consts::ACC_PUBLIC;
use lumc::scope::LocalContext;
use lumc::types::TypeRef;
use lumc::SemaError;

#[test]
fn inner_scope_shadows_with_a_fresh_slot() {
    let mut ctx = LocalContext::new();
    assert_eq!(ctx.add_entry("x", TypeRef::INT).unwrap(), 0);
    ctx.open_scope().unwrap();
    assert_eq!(ctx.add_entry("x", TypeRef::LONG).unwrap(), 1);

    let shadowing = ctx.lookup("x").unwrap();
    assert_eq!((shadowing.frame, shadowing.index, shadowing.ty), (0, 1, TypeRef::LONG));

    ctx.close_scope().unwrap();
    let outer = ctx.lookup("x").unwrap();
    assert_eq!((outer.frame, outer.index, outer.ty), (0, 0, TypeRef::INT));
}

#[test]
fn redeclaration_in_the_same_scope_consumes_no_slot() {
    let mut ctx = LocalContext::new();
    assert_eq!(ctx.add_entry("x", TypeRef::INT).unwrap(), 0);
    assert_eq!(
        ctx.add_entry("x", TypeRef::LONG),
        Err(SemaError::DuplicateLocalVariable("x".to_string()))
    );
    // the failed declaration must not burn slot 1
    assert_eq!(ctx.add_entry("y", TypeRef::INT).unwrap(), 1);
    assert_eq!(ctx.lookup("x").unwrap().ty, TypeRef::INT);
}

#[test]
fn slots_survive_scope_close() {
    let mut ctx = LocalContext::new();
    ctx.add_entry("a", TypeRef::INT).unwrap();
    ctx.open_scope().unwrap();
    ctx.add_entry("b", TypeRef::INT).unwrap();
    ctx.close_scope().unwrap();
    // "b" is out of scope but its slot is not reissued
    assert!(ctx.lookup("b").is_none());
    assert_eq!(ctx.add_entry("c", TypeRef::INT).unwrap(), 2);
    let indices: Vec<usize> = ctx.frame_entries().iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn lookup_counts_crossed_frame_boundaries() {
    let mut ctx = LocalContext::new();
    ctx.add_entry("outer", TypeRef::INT).unwrap();
    ctx.open_frame();
    ctx.add_entry("mid", TypeRef::LONG).unwrap();
    ctx.open_frame();
    // slot numbering restarts per frame
    assert_eq!(ctx.add_entry("inner", TypeRef::BOOLEAN).unwrap(), 0);

    assert_eq!(ctx.lookup("inner").unwrap().frame, 0);
    assert_eq!(ctx.lookup("mid").unwrap().frame, 1);
    let captured = ctx.lookup("outer").unwrap();
    assert_eq!((captured.frame, captured.index, captured.ty), (2, 0, TypeRef::INT));
    assert!(ctx.lookup("missing").is_none());
}

#[test]
fn lookup_only_current_scope_ignores_enclosing_scopes_and_frames() {
    let mut ctx = LocalContext::new();
    ctx.add_entry("a", TypeRef::INT).unwrap();
    ctx.open_scope().unwrap();
    assert!(ctx.lookup_only_current_scope("a").is_none());
    ctx.add_entry("b", TypeRef::INT).unwrap();
    assert!(ctx.lookup_only_current_scope("b").is_some());
    ctx.close_scope().unwrap();

    ctx.open_frame();
    assert!(ctx.lookup_only_current_scope("a").is_none());
    assert!(ctx.lookup("a").is_some());
}

#[test]
fn depth_follows_the_frame_chain() {
    let mut ctx = LocalContext::new();
    assert_eq!(ctx.depth(), Some(0));
    ctx.open_frame();
    assert_eq!(ctx.depth(), Some(1));
    ctx.open_frame();
    assert_eq!(ctx.depth(), Some(2));
    ctx.close_frame().unwrap();
    assert_eq!(ctx.depth(), Some(1));
}

#[test]
fn closing_the_root_frame_leaves_no_active_frame() {
    let mut ctx = LocalContext::new();
    ctx.close_frame().unwrap();
    assert_eq!(ctx.current_frame(), None);
    assert_eq!(ctx.depth(), None);
    assert_eq!(ctx.close_frame(), Err(SemaError::NoActiveFrame));
    assert_eq!(ctx.add_entry("x", TypeRef::INT), Err(SemaError::NoActiveFrame));
    assert_eq!(ctx.open_scope(), Err(SemaError::NoActiveFrame));
    assert!(ctx.lookup("x").is_none());
    assert!(ctx.frame_entries().is_empty());
}

#[test]
fn closed_frames_reject_declarations_up_the_chain() {
    let mut ctx = LocalContext::new();
    ctx.add_entry("outer", TypeRef::INT).unwrap();
    ctx.open_frame();
    ctx.set_all_closed(true).unwrap();

    assert_eq!(
        ctx.add_entry("inner", TypeRef::INT),
        Err(SemaError::ClosedFrame("inner".to_string()))
    );
    ctx.close_frame().unwrap();
    // the enclosing frame was closed too
    assert_eq!(
        ctx.add_entry("late", TypeRef::INT),
        Err(SemaError::ClosedFrame("late".to_string()))
    );
    // lookups still work against a closed frame
    assert!(ctx.lookup("outer").is_some());
}

#[test]
fn set_closed_only_marks_the_current_frame() {
    let mut ctx = LocalContext::new();
    ctx.open_frame();
    ctx.set_closed(true).unwrap();
    assert_eq!(
        ctx.add_entry("x", TypeRef::INT),
        Err(SemaError::ClosedFrame("x".to_string()))
    );
    ctx.close_frame().unwrap();
    assert!(ctx.add_entry("x", TypeRef::INT).is_ok());
}

#[test]
fn generated_names_are_unique_and_declared() {
    let mut ctx = LocalContext::new();
    assert_eq!(ctx.new_name(), "symbol#0");
    assert_eq!(ctx.new_name(), "symbol#1");
    let (name, index) = ctx.add_generated_entry(TypeRef::LONG).unwrap();
    assert_eq!(name, "symbol#2");
    assert_eq!(index, 0);
    assert_eq!(ctx.lookup(&name).unwrap().ty, TypeRef::LONG);
}

#[test]
fn context_tracks_the_member_under_analysis() {
    let mut fix = hierarchy();
    fix.table.add_method(fix.base, ACC_PUBLIC, "size", vec![], TypeRef::INT);
    fix.table.add_constructor(fix.base, ACC_PUBLIC, vec![]);
    let method = fix
        .table
        .find_method(fix.base, "size", &[])
        .found()
        .cloned()
        .unwrap();
    let constructor = fix.table.find_constructor(fix.base, &[]).found().cloned().unwrap();

    let mut ctx = LocalContext::new();
    assert_eq!(ctx.return_type(), TypeRef::VOID);
    assert!(ctx.method().is_none());

    ctx.set_method(method);
    assert_eq!(ctx.return_type(), TypeRef::INT);
    assert!(ctx.constructor().is_none());

    ctx.set_constructor(constructor);
    assert_eq!(ctx.return_type(), TypeRef::VOID);
    assert!(ctx.method().is_none());
    assert!(ctx.constructor().is_some());

    assert!(!ctx.is_static());
    ctx.set_static(true);
    assert!(ctx.is_static());
    assert!(!ctx.is_global());
    ctx.set_global(true);
    assert!(ctx.is_global());
}
