//! OpenAlex field extraction.
//!
//! Maps an OpenAlex work record onto BibTeX fields. Absent and empty values
//! are dropped, so every field in the result carries text.
//!
//! # Example
//!
//! ```
//! use pubnorm::{FieldExtractor, OpenAlexExtractor, OpenAlexWork};
//!
//! let work = OpenAlexWork::from_json(r#"{
//!     "title": "Mining Code Review Data",
//!     "authorships": [{"author": {"display_name": "Moataz Chouchen"}}],
//!     "publication_year": 2021
//! }"#).unwrap();
//!
//! let fields = OpenAlexExtractor::new().extract(&work);
//! assert_eq!(fields["author"], "Chouchen, Moataz");
//! assert_eq!(fields["year"], "2021");
//! ```

mod structure;

pub use structure::{AuthorRef, Authorship, Biblio, Location, OpenAlexWork, Source};

use crate::generator::GeneratorConfig;
use crate::utils::{clean_title, reorder_author_name, AUTHOR_SEPARATOR};
use crate::{FieldExtractor, Fields, Result};
use itertools::Itertools;
use tracing::debug;

impl OpenAlexWork {
    /// Decodes a single work from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `PublicationError::Json` if the text is not JSON or does not
    /// match the work shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Field extractor for OpenAlex works.
#[derive(Debug, Clone)]
pub struct OpenAlexExtractor {
    suppressed_journal_sources: Vec<String>,
}

impl Default for OpenAlexExtractor {
    fn default() -> Self {
        Self::with_config(&GeneratorConfig::default())
    }
}

impl OpenAlexExtractor {
    /// Creates an extractor with the default venue suppression list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor using the given configuration.
    #[must_use]
    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self {
            suppressed_journal_sources: config.suppressed_journal_sources.clone(),
        }
    }

    /// The venue name to use as `journal`, unless it is a suppressed source.
    fn journal<'a>(&self, source_name: Option<&'a str>) -> Option<&'a str> {
        let name = source_name?;
        match self
            .suppressed_journal_sources
            .iter()
            .find(|suppressed| name.contains(suppressed.as_str()))
        {
            Some(suppressed) => {
                debug!(source = name, matched = %suppressed, "suppressing journal name");
                None
            }
            None => Some(name),
        }
    }
}

impl FieldExtractor for OpenAlexExtractor {
    type Input = OpenAlexWork;

    fn extract(&self, work: &OpenAlexWork) -> Fields {
        let biblio = work.biblio.clone().unwrap_or_default();
        let source_name = work.source_name();

        let authors = work
            .author_names()
            .map(reorder_author_name)
            .join(AUTHOR_SEPARATOR);
        let title = clean_title(work.title.as_deref().unwrap_or_default());
        let booktitle = source_name.filter(|_| work.is_conference());
        let pages = page_range(biblio.first_page.as_deref(), biblio.last_page.as_deref());

        let candidates = [
            ("author", Some(authors)),
            ("title", Some(title)),
            ("journal", self.journal(source_name).map(str::to_string)),
            ("booktitle", booktitle.map(str::to_string)),
            ("publisher", work.publisher().map(str::to_string)),
            ("year", work.publication_year.map(|year| year.to_string())),
            ("volume", biblio.volume),
            ("number", biblio.issue),
            ("pages", pages),
            ("url", work.landing_page_url().map(str::to_string)),
        ];

        candidates
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (key.to_string(), v))
            })
            .collect()
    }
}

/// Formats a page range as `first--last`, or just `first` when the range is
/// a single page or the last page is unknown.
fn page_range(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let first = first.filter(|page| !page.is_empty())?;
    match last.filter(|page| !page.is_empty()) {
        Some(last) if last != first => Some(format!("{first}--{last}")),
        _ => Some(first.to_string()),
    }
}
