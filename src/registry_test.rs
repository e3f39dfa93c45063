use super::*;

#[test]
fn register_text_requires_matching_start() {
    let mut reg = TextRegistry::new();
    let err = reg.register_text("a.rs", 5, 10, 1).unwrap_err();
    assert!(matches!(err, CoreError::InternalInvariant { .. }));
}

#[test]
fn register_text_rejects_limit_before_start() {
    let mut reg = TextRegistry::new();
    let err = reg.register_text("a.rs", 1, 0, 1).unwrap_err();
    assert!(matches!(err, CoreError::InternalInvariant { .. }));
}

#[test]
fn register_sequential_texts() {
    let mut reg = TextRegistry::new();
    let a = reg.register_text("a.rs", 1, 5, 1).unwrap();
    let b = reg.register_text("b.rs", 5, 9, 5).unwrap();
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.get(0).unwrap().name, "a.rs");
    assert_eq!(reg.get(1).unwrap().len(), 4);
}

#[test]
fn text_index_at_finds_containing_text() {
    let mut reg = TextRegistry::new();
    reg.register_text("a.rs", 1, 5, 1).unwrap();
    reg.register_text("b.rs", 5, 9, 5).unwrap();
    assert_eq!(reg.text_index_at(1).unwrap(), 0);
    assert_eq!(reg.text_index_at(4).unwrap(), 0);
    assert_eq!(reg.text_index_at(5).unwrap(), 1);
    assert_eq!(reg.text_index_at(8).unwrap(), 1);
    assert!(reg.text_index_at(9).is_err());
    assert!(reg.text_index_at(0).is_err());
}

#[test]
fn partition_defaults_to_new_without_boundary() {
    let mut reg = TextRegistry::new();
    reg.register_text("a.rs", 1, 5, 1).unwrap();
    assert_eq!(reg.partition_of(0), Partition::New);
}

#[test]
fn partition_splits_at_boundary() {
    let mut reg = TextRegistry::new();
    reg.register_text("a.rs", 1, 5, 1).unwrap();
    reg.register_text("b.rs", 5, 9, 5).unwrap();
    reg.register_text("c.rs", 9, 13, 9).unwrap();
    reg.set_new_old_boundary(1);
    assert_eq!(reg.partition_of(0), Partition::New);
    assert_eq!(reg.partition_of(1), Partition::Old);
    assert_eq!(reg.partition_of(2), Partition::Old);
}
