use document::{Database, Document, Entry, Value};

/// A small two-entry document: one plain string, one expiring string, plus a
/// metadata pair. Used wherever a realistic complete file is needed.
pub fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.metadata
        .insert("redis-ver".to_string(), "6.0.16".to_string());
    let mut db = Database::new(0);
    db.entries
        .push(Entry::new("foo", Value::Str(b"bar".to_vec())));
    db.entries.push(Entry::expiring(
        "baz",
        Value::Str(b"qux".to_vec()),
        1_710_382_559_637,
    ));
    doc.databases.push(db);
    doc
}

/// Appends the checksum trailer to a hand-built record stream, producing a
/// complete well-formed file.
pub fn seal(mut body: Vec<u8>) -> Vec<u8> {
    checksum::append(&mut body);
    body
}
