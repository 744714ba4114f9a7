use super::*;

// -------------------- Construction --------------------

#[test]
fn new_document_defaults() {
    let doc = Document::new();
    assert_eq!(doc.version, DEFAULT_VERSION);
    assert!(doc.metadata.is_empty());
    assert!(doc.databases.is_empty());
    assert_eq!(doc.entry_count(), 0);
}

#[test]
fn default_matches_new() {
    assert_eq!(Document::default(), Document::new());
}

#[test]
fn with_version_overrides_default() {
    let doc = Document::with_version("0009");
    assert_eq!(doc.version, "0009");
}

#[test]
fn entry_constructors() {
    let plain = Entry::new("foo", Value::Str(b"bar".to_vec()));
    assert_eq!(plain.key, b"foo");
    assert_eq!(plain.expire_at_ms, None);

    let expiring = Entry::expiring("baz", Value::Str(b"qux".to_vec()), 1_710_382_559_637);
    assert_eq!(expiring.expire_at_ms, Some(1_710_382_559_637));
}

// -------------------- Database accessors --------------------

#[test]
fn database_len_and_expiring_len() {
    let mut db = Database::new(3);
    assert!(db.is_empty());

    db.entries.push(Entry::new("a", Value::Int(1)));
    db.entries.push(Entry::expiring("b", Value::Int(2), 5000));
    db.entries.push(Entry::expiring("c", Value::Int(3), 6000));

    assert_eq!(db.len(), 3);
    assert!(!db.is_empty());
    assert_eq!(db.expiring_len(), 2);
    assert_eq!(db.index, 3);
}

#[test]
fn entry_count_spans_databases() {
    let mut doc = Document::new();
    let mut db0 = Database::new(0);
    db0.entries.push(Entry::new("a", Value::Str(b"1".to_vec())));
    db0.entries.push(Entry::new("b", Value::Str(b"2".to_vec())));
    let mut db1 = Database::new(1);
    db1.entries.push(Entry::new("c", Value::Str(b"3".to_vec())));
    doc.databases.push(db0);
    doc.databases.push(db1);

    assert_eq!(doc.entry_count(), 3);
}

// -------------------- Value semantics --------------------

#[test]
fn set_collapses_duplicates() {
    let mut set = BTreeSet::new();
    set.insert(b"x".to_vec());
    set.insert(b"x".to_vec());
    set.insert(b"y".to_vec());
    let v = Value::Set(set);

    if let Value::Set(s) = &v {
        assert_eq!(s.len(), 2);
    } else {
        panic!("expected Set");
    }
}

#[test]
fn hash_equality_ignores_insert_order() {
    let mut a = BTreeMap::new();
    a.insert(b"k1".to_vec(), b"v1".to_vec());
    a.insert(b"k2".to_vec(), b"v2".to_vec());

    let mut b = BTreeMap::new();
    b.insert(b"k2".to_vec(), b"v2".to_vec());
    b.insert(b"k1".to_vec(), b"v1".to_vec());

    assert_eq!(Value::Hash(a), Value::Hash(b));
}

#[test]
fn sorted_set_equality_is_order_sensitive() {
    let a = Value::SortedSet(vec![(b"m1".to_vec(), 1.5), (b"m2".to_vec(), -2.0)]);
    let b = Value::SortedSet(vec![(b"m2".to_vec(), -2.0), (b"m1".to_vec(), 1.5)]);
    assert_ne!(a, b);
}

#[test]
fn value_kind_names() {
    assert_eq!(Value::Str(Vec::new()).kind(), "string");
    assert_eq!(Value::List(Vec::new()).kind(), "list");
    assert_eq!(Value::Set(BTreeSet::new()).kind(), "set");
    assert_eq!(Value::SortedSet(Vec::new()).kind(), "zset");
    assert_eq!(Value::Hash(BTreeMap::new()).kind(), "hash");
    assert_eq!(Value::Int(0).kind(), "int");
}

#[test]
fn clone_preserves_equality() {
    let mut doc = Document::new();
    doc.metadata
        .insert("redis-ver".to_string(), "6.0.16".to_string());
    let mut db = Database::new(0);
    db.entries
        .push(Entry::expiring("k", Value::Int(-7), 1234));
    doc.databases.push(db);

    assert_eq!(doc.clone(), doc);
}
