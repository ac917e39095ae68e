//! Audit trail tests

mod common;

use emr_model::{AuditInfo, Auditable, Location, MutableAuditable, UserRef};

#[test]
fn creation_stamps_creator_once() {
    let ctx = common::ctx_at("alice", 1_000);
    let location = Location::new("North clinic", &ctx);

    assert_eq!(location.audit().creator(), ctx.user());
    assert_eq!(location.audit().date_created(), ctx.now());
    assert!(location.audit().changed_by().is_none());
    assert!(location.audit().date_changed().is_none());
}

#[test]
fn every_mutation_refreshes_the_change_stamps() {
    let created = common::ctx_at("alice", 1_000);
    let renamed = common::ctx_at("bob", 2_000);
    let renamed_again = common::ctx_at("carol", 3_000);

    let mut location = Location::new("North clinic", &created);
    location.rename("North wing", &renamed);
    assert_eq!(location.audit().changed_by(), Some(renamed.user()));
    assert_eq!(location.audit().date_changed(), Some(renamed.now()));

    location.rename("North pavilion", &renamed_again);
    assert_eq!(location.audit().changed_by(), Some(renamed_again.user()));
    assert_eq!(location.audit().date_changed(), Some(renamed_again.now()));

    // creation stamps survive every mutation
    assert_eq!(location.audit().creator(), created.user());
    assert_eq!(location.audit().date_created(), created.now());
}

#[test]
fn hydrated_audit_reconstructs_without_touching_anything() {
    let creator = UserRef::new("importer");
    let changer = UserRef::new("editor");
    let audit = AuditInfo::hydrated(
        creator.clone(),
        common::instant(500),
        Some(changer.clone()),
        Some(common::instant(900)),
    );

    assert_eq!(audit.creator(), &creator);
    assert_eq!(audit.date_created(), common::instant(500));
    assert_eq!(audit.changed_by(), Some(&changer));
    assert_eq!(audit.date_changed(), Some(common::instant(900)));
}

#[test]
fn touch_via_trait_object_surface() {
    let created = common::ctx_at("alice", 1_000);
    let touched = common::ctx_at("bob", 5_000);

    let mut location = Location::new("North clinic", &created);
    MutableAuditable::touch(&mut location, &touched);
    assert_eq!(location.audit().changed_by(), Some(touched.user()));
}
