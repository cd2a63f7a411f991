//! Normalization of publication metadata into canonical BibTeX entries.
//!
//! `pubnorm` takes raw publication records from two external sources and
//! derives a deterministic bibliographic entry from each one: an entry type,
//! a citation key and a set of BibTeX fields.
//!
//! # Key Features
//!
//! - **Two input formats**:
//!   - OpenAlex work records (JSON)
//!   - Google Scholar BibTeX snippets
//!
//! - **Deterministic output**:
//!   - Entry type chosen by an ordered rule table
//!   - Citation keys of the form `<family><year><titleword>`
//!   - Stable BibTeX rendering with a fixed leading field order
//!
//! - **Never blocks ingestion**: records with too little data degrade to
//!   `misc` and `anonymousn.d.untitled` instead of failing.
//!
//! # Basic Usage
//!
//! ```rust
//! use pubnorm::{EntryType, PublicationGenerator};
//!
//! let raw = r#"@article{gs1,
//!     title={Something for Something},
//!     author={John Smith and Alice Brown},
//!     journal={The Journal},
//!     pub_year={2020}
//! }"#;
//!
//! let mut generator = PublicationGenerator::new();
//! let publication = generator.generate_google_scholar(raw);
//!
//! assert_eq!(publication.entry_type, EntryType::Article);
//! assert_eq!(publication.citekey, "smith2020something");
//! println!("{publication}");
//! ```
//!
//! # OpenAlex Works
//!
//! ```rust
//! use pubnorm::{OpenAlexWork, PublicationGenerator};
//!
//! let json = r#"{
//!     "id": "https://openalex.org/W1",
//!     "title": "Deep Learning for Code Review",
//!     "authorships": [{"author": {"display_name": "Ali Ouni"}}],
//!     "primary_location": {"source": {"display_name": "Empirical Software Engineering"}},
//!     "publication_year": 2023
//! }"#;
//!
//! let work = OpenAlexWork::from_json(json).unwrap();
//! let publication = PublicationGenerator::new().generate_openalex(&work);
//! assert_eq!(publication.citekey, "ouni2023deep");
//! ```
//!
//! # Error Handling
//!
//! Normalization itself is total. Only decoding raw payloads and building
//! persistence records can fail, with a [`PublicationError`]:
//!
//! ```rust
//! use pubnorm::{OpenAlexWork, PublicationError};
//!
//! match OpenAlexWork::from_json("not json") {
//!     Ok(work) => println!("Decoded {:?}", work.title),
//!     Err(PublicationError::Json(e)) => eprintln!("Bad payload: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! Every extractor is a pure function of its input. A [`PublicationGenerator`]
//! caches the last entry it produced and should stay scoped to one caller;
//! [`batch::normalize_works`] runs independent normalizations in parallel when
//! the `parallel` feature is enabled.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod batch;
pub mod citekey;
pub mod classify;
pub mod generator;
pub mod openalex;
pub mod record;
mod regex;
pub mod render;
pub mod scholar;
mod utils;

// Reexports
pub use generator::{GeneratorConfig, PublicationGenerator};
pub use openalex::{OpenAlexExtractor, OpenAlexWork};
pub use record::PublicationRecord;
pub use scholar::ScholarExtractor;
pub use utils::{clean_title, reorder_author_list, reorder_author_name};

/// A specialized Result type for publication operations.
pub type Result<T> = std::result::Result<T, PublicationError>;

/// Represents errors that can occur around normalization.
#[derive(Error, Debug)]
pub enum PublicationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Canonical mapping from BibTeX field name to value.
///
/// Keys are unique and iterate in ascending order.
pub type Fields = BTreeMap<String, String>;

/// BibTeX entry type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Article,
    Book,
    Booklet,
    Conference,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
    Online,
    Presentation,
}

impl EntryType {
    /// Every defined tag, in declaration order.
    pub const ALL: [EntryType; 16] = [
        Self::Article,
        Self::Book,
        Self::Booklet,
        Self::Conference,
        Self::InBook,
        Self::InCollection,
        Self::InProceedings,
        Self::Manual,
        Self::MastersThesis,
        Self::Misc,
        Self::PhdThesis,
        Self::Proceedings,
        Self::TechReport,
        Self::Unpublished,
        Self::Online,
        Self::Presentation,
    ];

    /// Canonical lowercase tag, as written after `@` in BibTeX.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::Conference => "conference",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::Proceedings => "proceedings",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Online => "online",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = PublicationError;

    /// Parses a tag case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|entry_type| entry_type.as_str() == tag)
            .ok_or_else(|| PublicationError::InvalidFormat(format!("Unknown entry type: '{s}'")))
    }
}

/// A normalized bibliographic entry.
///
/// Built fresh for every raw record and never mutated afterwards; a changed
/// record produces a new `Publication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Entry type chosen by [`classify::classify`]
    pub entry_type: EntryType,
    /// Key derived by [`citekey::generate_citekey`]
    pub citekey: CompactString,
    /// Normalized fields
    pub fields: Fields,
}

impl Publication {
    /// Classifies and keys a normalized field mapping.
    pub fn from_fields(fields: Fields) -> Self {
        Self {
            entry_type: classify::classify(&fields),
            citekey: citekey::generate_citekey(&fields),
            fields,
        }
    }

    /// Get a field value by its exact key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `(entry type, citekey, fields)` triple handed to persistence.
    pub fn into_parts(self) -> (EntryType, CompactString, Fields) {
        (self.entry_type, self.citekey, self.fields)
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_entry(
            self.entry_type,
            &self.citekey,
            &self.fields,
        ))
    }
}

/// Trait for source-specific field extractors.
pub trait FieldExtractor {
    /// Raw record type consumed by this extractor.
    type Input: ?Sized;

    /// Maps a raw record into a normalized field mapping.
    ///
    /// Extraction is total over well-formed input: missing data yields
    /// missing fields, never an error.
    fn extract(&self, input: &Self::Input) -> Fields;
}
