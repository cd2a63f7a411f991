//! Persistence projection of a publication.
//!
//! Ingestion stores each normalized publication as a row keyed by its
//! source identifier, overwriting any unapproved earlier version. The row
//! carries a fixed set of columns copied from the field mapping and starts
//! out unapproved so an administrator can review it.

use crate::{EntryType, Publication, PublicationError, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A publication row ready for create-or-update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Source identifier the row is keyed on
    pub id: String,
    pub entry_type: EntryType,
    pub citekey: CompactString,
    pub title: Option<String>,
    pub author: Option<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    pub publisher: Option<String>,
    pub year: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub pages: Option<String>,
    pub url: Option<String>,
    /// Whether an administrator approved the row; always false when built
    pub is_approved: bool,
}

impl PublicationRecord {
    /// Builds the row for a publication.
    ///
    /// Fields outside the stored column set are not carried over.
    ///
    /// # Errors
    ///
    /// Returns `PublicationError::MissingField` if `id` is blank.
    pub fn new(id: impl Into<String>, publication: &Publication) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PublicationError::MissingField("id".to_string()));
        }

        let column = |key: &str| publication.field(key).map(str::to_string);

        Ok(Self {
            id,
            entry_type: publication.entry_type,
            citekey: publication.citekey.clone(),
            title: column("title"),
            author: column("author"),
            journal: column("journal"),
            booktitle: column("booktitle"),
            publisher: column("publisher"),
            year: column("year"),
            volume: column("volume"),
            number: column("number"),
            pages: column("pages"),
            url: column("url"),
            is_approved: false,
        })
    }

    /// The identifier made safe for an admin URL path segment.
    ///
    /// Everything except ASCII alphanumerics and `-_.~` is percent-encoded,
    /// then `%` is replaced with `_`.
    pub fn admin_slug(&self) -> String {
        urlencoding::encode(&self.id).replace('%', "_")
    }
}
