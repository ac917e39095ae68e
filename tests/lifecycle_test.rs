//! Void and retire lifecycle tests

mod common;

use emr_model::{LifecyclePolicy, Location, ModelError, Retireable, Visit, Voidable};
use uuid::Uuid;

#[test]
fn void_sets_all_four_fields_together() {
    let created = common::ctx_at("alice", 1_000);
    let voided = common::ctx_at("bob", 2_000);

    let mut visit = Visit::new(Uuid::new_v4(), "outpatient", &created);
    visit.void("duplicate entry", &voided).unwrap();

    let state = visit.void_state();
    assert!(state.is_voided());
    assert_eq!(state.voided_by(), Some(voided.user()));
    assert_eq!(state.date_voided(), Some(voided.now()));
    assert_eq!(state.void_reason(), Some("duplicate entry"));
}

#[test]
fn double_void_keeps_the_original_metadata() {
    let first = common::ctx_at("alice", 1_000);
    let second = common::ctx_at("bob", 9_000);

    let mut visit = Visit::new(Uuid::new_v4(), "outpatient", &first);
    visit.void("duplicate entry", &first).unwrap();
    visit.void("something else", &second).unwrap();

    let state = visit.void_state();
    assert_eq!(state.voided_by(), Some(first.user()));
    assert_eq!(state.date_voided(), Some(first.now()));
    assert_eq!(state.void_reason(), Some("duplicate entry"));
}

#[test]
fn unvoid_clears_all_four_fields_together() {
    let ctx = common::ctx();
    let mut visit = Visit::new(Uuid::new_v4(), "outpatient", &ctx);
    visit.void("entered in error", &ctx).unwrap();
    visit.unvoid();

    let state = visit.void_state();
    assert!(!state.is_voided());
    assert!(state.voided_by().is_none());
    assert!(state.date_voided().is_none());
    assert!(state.void_reason().is_none());

    // unvoiding an active record stays a no-op
    visit.unvoid();
    assert!(!visit.is_voided());
}

#[test]
fn blank_reason_is_rejected_by_default_policy() {
    let ctx = common::ctx();
    let mut visit = Visit::new(Uuid::new_v4(), "outpatient", &ctx);
    match visit.void("   ", &ctx) {
        Err(ModelError::MissingReason { operation }) => assert_eq!(operation, "void"),
        other => panic!("expected MissingReason, got {other:?}"),
    }
    assert!(!visit.is_voided());
}

#[test]
fn permissive_policy_accepts_blank_reason() {
    let ctx = common::ctx().with_policy(LifecyclePolicy::permissive());
    let mut visit = Visit::new(Uuid::new_v4(), "outpatient", &ctx);
    visit.void("", &ctx).unwrap();
    assert!(visit.is_voided());
}

#[test]
fn retire_mirrors_the_void_state_machine() {
    let created = common::ctx_at("alice", 1_000);
    let retired = common::ctx_at("carol", 3_000);

    let mut location = Location::new("Old ward", &created);
    location.retire("ward closed", &retired).unwrap();

    let state = location.retire_state();
    assert!(state.is_retired());
    assert_eq!(state.retired_by(), Some(retired.user()));
    assert_eq!(state.date_retired(), Some(retired.now()));
    assert_eq!(state.retire_reason(), Some("ward closed"));

    // idempotent
    let later = common::ctx_at("dave", 9_000);
    location.retire("other reason", &later).unwrap();
    assert_eq!(location.retire_state().retire_reason(), Some("ward closed"));

    location.unretire();
    let state = location.retire_state();
    assert!(!state.is_retired());
    assert!(state.retired_by().is_none());
    assert!(state.date_retired().is_none());
    assert!(state.retire_reason().is_none());
}
