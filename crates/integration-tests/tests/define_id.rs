//! IDs defined outside the core crate.

use shoplist_core::define_id;

define_id!(BasketId);

#[test]
fn test_define_id_without_direct_dependencies() {
    let generated = BasketId::generate();
    assert_eq!(generated.as_str().len(), 36);
    assert_ne!(generated, BasketId::generate());

    let named = BasketId::from("weekly");
    assert_eq!(named.to_string(), "weekly");
    assert_eq!(String::from(named), "weekly");
}
