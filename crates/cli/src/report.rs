//! Human-readable rendering of a decoded document.

use document::{Document, Entry, Value};

/// Longest key/string preview before truncation kicks in.
const PREVIEW_BYTES: usize = 32;

/// Renders the whole document as line-oriented text, one entry per line.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("version {}\n", doc.version));

    out.push_str(&format!("metadata ({}):\n", doc.metadata.len()));
    for (name, value) in &doc.metadata {
        out.push_str(&format!("  {name} = {value}\n"));
    }

    for db in &doc.databases {
        out.push_str(&format!(
            "database {}: {} entries ({} expiring)\n",
            db.index,
            db.len(),
            db.expiring_len()
        ));
        for entry in &db.entries {
            out.push_str(&format!("  {}\n", describe_entry(entry)));
        }
    }
    out
}

fn describe_entry(entry: &Entry) -> String {
    let mut line = format!("{} -> {}", preview(&entry.key), describe_value(&entry.value));
    if let Some(ms) = entry.expire_at_ms {
        line.push_str(&format!(" [expires {ms}]"));
    }
    line
}

/// One-line summary of a value: strings and integers in full (truncated),
/// containers by kind and size.
fn describe_value(value: &Value) -> String {
    match value {
        Value::Str(bytes) => format!("\"{}\"", preview(bytes)),
        Value::Int(n) => n.to_string(),
        Value::List(items) => format!("(list, {} items)", items.len()),
        Value::Set(members) => format!("(set, {} members)", members.len()),
        Value::SortedSet(pairs) => format!("(zset, {} members)", pairs.len()),
        Value::Hash(fields) => format!("(hash, {} fields)", fields.len()),
    }
}

/// Lossy UTF-8 preview of raw bytes, truncated with an ellipsis marker.
fn preview(bytes: &[u8]) -> String {
    if bytes.len() <= PREVIEW_BYTES {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        format!(
            "{}... ({} bytes)",
            String::from_utf8_lossy(&bytes[..PREVIEW_BYTES]),
            bytes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document::Database;

    fn one_entry_doc(entry: Entry) -> Document {
        let mut db = Database::new(3);
        db.entries.push(entry);
        let mut doc = Document::new();
        doc.databases.push(db);
        doc
    }

    #[test]
    fn renders_version_metadata_and_counts() {
        let mut doc = one_entry_doc(Entry::new("k", Value::Int(7)));
        doc.metadata
            .insert("redis-ver".to_string(), "6.0.16".to_string());

        let text = render(&doc);
        assert!(text.contains("version 0011"));
        assert!(text.contains("redis-ver = 6.0.16"));
        assert!(text.contains("database 3: 1 entries (0 expiring)"));
        assert!(text.contains("k -> 7"));
    }

    #[test]
    fn expiring_entries_are_marked() {
        let doc = one_entry_doc(Entry::expiring("k", Value::Str(b"v".to_vec()), 99));
        assert!(render(&doc).contains("k -> \"v\" [expires 99]"));
    }

    #[test]
    fn containers_summarized_by_size() {
        let value = Value::List(vec![b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(describe_value(&value), "(list, 2 items)");
    }

    #[test]
    fn long_strings_are_truncated() {
        let text = preview(&[b'x'; 100]);
        assert!(text.starts_with("xxxx"));
        assert!(text.ends_with("(100 bytes)"));
        assert!(text.len() < 60);
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        let text = preview(&[0xFF, 0xFE, b'a']);
        assert!(text.contains('a'));
    }
}
