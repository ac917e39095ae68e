//! Tests for the DomainObject derive receivers

use darling::FromDeriveInput;
use syn::DeriveInput;

use crate::domain_object::DomainObjectReceiver;

fn parse(source: &str) -> DeriveInput {
    syn::parse_str(source).expect("test struct should parse")
}

#[test]
fn parses_all_domain_markers() {
    let input = parse(
        r"
        struct Visit {
            #[domain(identity)]
            identity: Identity,
            #[domain(audit)]
            audit: AuditInfo,
            #[domain(void)]
            void_state: VoidState,
            #[domain(attributes)]
            attributes: Vec<Attribute>,
            visit_type: String,
        }
        ",
    );

    let receiver = DomainObjectReceiver::from_derive_input(&input).expect("receiver should parse");
    let fields = receiver.fields();

    assert_eq!(fields.iter().filter(|f| f.identity.is_present()).count(), 1);
    assert_eq!(fields.iter().filter(|f| f.audit.is_present()).count(), 1);
    assert_eq!(fields.iter().filter(|f| f.void.is_present()).count(), 1);
    assert_eq!(fields.iter().filter(|f| f.retire.is_present()).count(), 0);
    assert_eq!(
        fields.iter().filter(|f| f.attributes.is_present()).count(),
        1
    );
}

#[test]
fn unmarked_fields_carry_no_flags() {
    let input = parse(
        r"
        struct Location {
            #[domain(identity)]
            identity: Identity,
            name: String,
        }
        ",
    );

    let receiver = DomainObjectReceiver::from_derive_input(&input).expect("receiver should parse");
    let fields = receiver.fields();

    let name_field = fields
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|ident| ident == "name"))
        .expect("name field present");
    assert!(!name_field.identity.is_present());
    assert!(!name_field.audit.is_present());
    assert!(!name_field.void.is_present());
    assert!(!name_field.retire.is_present());
    assert!(!name_field.attributes.is_present());
}

#[test]
fn rejects_tuple_structs() {
    let input = parse("struct Broken(String);");
    assert!(DomainObjectReceiver::from_derive_input(&input).is_err());
}
