//! # CLI - Snapdump snapshot tool
//!
//! A one-shot command-line tool over the snapshot codec. Decodes a file and
//! prints a human-readable summary, checks the trailer checksum, or writes a
//! small demonstration snapshot to play with.
//!
//! ## Commands
//!
//! ```text
//! inspect <file>   Decode and print version, metadata, databases, entries,
//!                  and whether the checksum verified
//! verify <file>    Decode and exit 0 only if the checksum verifies
//!                  (exit 1 on mismatch)
//! sample <file>    Write a demonstration snapshot covering all six value
//!                  kinds
//! ```
//!
//! ## Configuration
//!
//! All settings are controlled via environment variables:
//!
//! ```text
//! SNAPDUMP_MAX_MB   Input size cap in MiB before decoding (default: 64)
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli -- sample demo.rdb
//! wrote demo.rdb (186 bytes, 1 database, 6 entries)
//! $ cargo run -p cli -- inspect demo.rdb
//! version 0011
//! metadata (1):
//!   redis-ver = 6.0.16
//! database 0: 6 entries (1 expiring)
//!   counter -> 42
//!   greeting -> "hello"
//!   ...
//! checksum verified
//! ```

mod report;

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use codec::{decode, encode_to, Integrity};
use document::{Database, Document, Entry, Value};

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn usage() {
    eprintln!("usage: cli <command> [args]");
    eprintln!();
    eprintln!("  inspect <file>   decode a snapshot and print its contents");
    eprintln!("  verify <file>    exit 0 only if the checksum verifies");
    eprintln!("  sample <file>    write a demonstration snapshot");
    eprintln!();
    eprintln!("  SNAPDUMP_MAX_MB  input size cap in MiB (default: 64)");
}

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        ["inspect", path] => inspect(Path::new(path))?,
        ["verify", path] => verify(Path::new(path))?,
        ["sample", path] => sample(Path::new(path))?,
        _ => {
            usage();
            2
        }
    };
    Ok(ExitCode::from(code))
}

/// Reads the whole snapshot, refusing files over the configured size cap.
///
/// Decoding is in-memory and single-pass; the cap is the knob that bounds
/// work on oversized or accidental inputs before any byte is parsed.
fn load_capped(path: &Path) -> Result<Vec<u8>> {
    let max_mb: u64 = env_or("SNAPDUMP_MAX_MB", "64").parse().unwrap_or(64);
    let len = fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    if len > max_mb * 1024 * 1024 {
        bail!(
            "{} is {} bytes, over the {} MiB cap (raise SNAPDUMP_MAX_MB to override)",
            path.display(),
            len,
            max_mb
        );
    }
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn inspect(path: &Path) -> Result<u8> {
    let bytes = load_capped(path)?;
    let decoded = decode(&bytes).with_context(|| format!("decode {}", path.display()))?;

    print!("{}", report::render(&decoded.document));
    match decoded.integrity {
        Integrity::Verified => println!("checksum verified"),
        Integrity::Mismatch { stored, computed } => {
            println!("checksum MISMATCH: stored {stored:#018x}, computed {computed:#018x}");
        }
    }
    Ok(0)
}

fn verify(path: &Path) -> Result<u8> {
    let bytes = load_capped(path)?;
    let decoded = decode(&bytes).with_context(|| format!("decode {}", path.display()))?;

    match decoded.integrity {
        Integrity::Verified => {
            println!("{}: ok", path.display());
            Ok(0)
        }
        Integrity::Mismatch { stored, computed } => {
            eprintln!(
                "{}: checksum mismatch (stored {stored:#018x}, computed {computed:#018x})",
                path.display()
            );
            Ok(1)
        }
    }
}

fn sample(path: &Path) -> Result<u8> {
    let doc = sample_snapshot();
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    encode_to(&doc, &mut file).with_context(|| format!("write {}", path.display()))?;

    let len = fs::metadata(path)?.len();
    println!(
        "wrote {} ({} bytes, {} database, {} entries)",
        path.display(),
        len,
        doc.databases.len(),
        doc.entry_count()
    );
    Ok(0)
}

/// One database exercising every value kind, plus metadata and an expiry.
fn sample_snapshot() -> Document {
    let mut set = BTreeSet::new();
    set.insert(b"reading".to_vec());
    set.insert(b"hiking".to_vec());

    let mut hash = BTreeMap::new();
    hash.insert(b"name".to_vec(), b"alice".to_vec());
    hash.insert(b"city".to_vec(), b"oslo".to_vec());

    let mut db = Database::new(0);
    db.entries
        .push(Entry::new("greeting", Value::Str(b"hello".to_vec())));
    db.entries.push(Entry::new("counter", Value::Int(42)));
    db.entries.push(Entry::new(
        "queue",
        Value::List(vec![b"first".to_vec(), b"second".to_vec()]),
    ));
    db.entries.push(Entry::new("tags", Value::Set(set)));
    db.entries.push(Entry::new(
        "ranking",
        Value::SortedSet(vec![(b"alice".to_vec(), 1.5), (b"bob".to_vec(), -2.0)]),
    ));
    db.entries.push(Entry::expiring(
        "profile",
        Value::Hash(hash),
        1_710_382_559_637,
    ));

    let mut doc = Document::new();
    doc.metadata
        .insert("redis-ver".to_string(), "6.0.16".to_string());
    doc.databases.push(db);
    doc
}
