//! Test fixtures for building catalogs.
//!
//! Stores are built in memory with `ResourceStore::from_entries`; the loader
//! tests write the same data to temp files.

use std::io::Write;

use resource_hub::domains::resources::{ResourceRecord, ResourceStore, TopicEntry};
use tempfile::NamedTempFile;

/// A resource with a predictable URL derived from its title
pub fn record(title: &str) -> ResourceRecord {
    ResourceRecord::new(title, format!("https://example.com/{}", title))
}

/// Two entries spelling the same topic differently, plus one other topic.
///
/// Document order: Python[A], Databases[C, D], python[B], Empty[]
pub fn mixed_case_store() -> ResourceStore {
    ResourceStore::from_entries(vec![
        TopicEntry::new("Python", vec![record("A")]),
        TopicEntry::new("Databases", vec![record("C"), record("D")]),
        TopicEntry::new("python", vec![record("B")]),
        TopicEntry::new("Empty", vec![]),
    ])
}

/// A small realistic catalog with every optional field exercised
pub fn sample_store() -> ResourceStore {
    ResourceStore::from_entries(vec![
        TopicEntry::new(
            "Rust",
            vec![
                ResourceRecord::new("The Rust Book", "https://doc.rust-lang.org/book/")
                    .with_description("The official introduction to Rust")
                    .with_kind("book")
                    .with_category("Programming"),
                ResourceRecord::new("Rustlings", "https://github.com/rust-lang/rustlings")
                    .with_kind("exercises"),
            ],
        ),
        TopicEntry::new(
            "Databases",
            vec![ResourceRecord::new(
                "Use The Index, Luke",
                "https://use-the-index-luke.com/",
            )
            .with_kind("article")],
        ),
        TopicEntry::new(
            "rust",
            vec![ResourceRecord::new("Rust by Example", "https://doc.rust-lang.org/rust-by-example/")],
        ),
    ])
}

/// The dataset document form of `sample_store`
pub const SAMPLE_DATASET: &str = r#"[
  {
    "topic": "Rust",
    "resources": [
      {
        "title": "The Rust Book",
        "url": "https://doc.rust-lang.org/book/",
        "description": "The official introduction to Rust",
        "type": "book",
        "category": "Programming"
      },
      { "title": "Rustlings", "url": "https://github.com/rust-lang/rustlings", "type": "exercises" }
    ]
  },
  {
    "topic": "Databases",
    "resources": [
      { "title": "Use The Index, Luke", "url": "https://use-the-index-luke.com/", "type": "article" }
    ]
  },
  {
    "topic": "rust",
    "resources": [
      { "title": "Rust by Example", "url": "https://doc.rust-lang.org/rust-by-example/" }
    ]
  }
]"#;

/// Write a dataset document to a temp file that lives as long as the handle
pub fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp dataset");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp dataset");
    file
}
