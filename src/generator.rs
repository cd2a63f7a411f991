//! Publication generation.
//!
//! Chains extraction, classification and key generation for each source.
//! The free functions are pure; [`PublicationGenerator`] wraps them and
//! remembers the last entry it produced so it can be printed for logging.
//!
//! # Example
//!
//! ```
//! use pubnorm::{OpenAlexWork, PublicationGenerator};
//!
//! let mut generator = PublicationGenerator::new();
//! generator.generate_openalex(&OpenAlexWork::default());
//!
//! assert_eq!(generator.to_string(), "@misc{anonymousn.d.untitled,\n}");
//! ```

use crate::{
    FieldExtractor, OpenAlexExtractor, OpenAlexWork, Publication, ScholarExtractor,
};
use std::fmt;
use tracing::debug;

/// Configuration for publication generation.
///
/// # Examples
///
/// ```
/// use pubnorm::{GeneratorConfig, PublicationGenerator};
///
/// let config = GeneratorConfig {
///     suppressed_journal_sources: vec!["Zenodo".to_string(), "arXiv".to_string()],
/// };
/// let generator = PublicationGenerator::new().with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Venue names containing any of these substrings (case-sensitive) are
    /// never used as an OpenAlex `journal`.
    pub suppressed_journal_sources: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            suppressed_journal_sources: vec!["Zenodo".to_string()],
        }
    }
}

/// Normalizes an OpenAlex work.
pub fn openalex_publication(work: &OpenAlexWork, config: &GeneratorConfig) -> Publication {
    Publication::from_fields(OpenAlexExtractor::with_config(config).extract(work))
}

/// Normalizes a Google Scholar BibTeX snippet.
pub fn google_scholar_publication(raw: &str) -> Publication {
    Publication::from_fields(ScholarExtractor::new().extract(raw))
}

/// Generates publications and keeps the most recent one.
///
/// Scope an instance to a single caller; independent records can be
/// normalized with the free functions instead.
#[derive(Debug, Clone, Default)]
pub struct PublicationGenerator {
    config: GeneratorConfig,
    last: Option<Publication>,
}

impl PublicationGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a publication from an OpenAlex work.
    pub fn generate_openalex(&mut self, work: &OpenAlexWork) -> Publication {
        self.remember(openalex_publication(work, &self.config))
    }

    /// Generates a publication from a Google Scholar BibTeX snippet.
    pub fn generate_google_scholar(&mut self, raw: &str) -> Publication {
        self.remember(google_scholar_publication(raw))
    }

    /// The last publication generated, if any.
    pub fn last(&self) -> Option<&Publication> {
        self.last.as_ref()
    }

    fn remember(&mut self, publication: Publication) -> Publication {
        debug!(
            entry_type = %publication.entry_type,
            citekey = %publication.citekey,
            fields = publication.fields.len(),
            "generated publication"
        );
        self.last = Some(publication.clone());
        publication
    }
}

impl fmt::Display for PublicationGenerator {
    /// Renders the last publication as BibTeX; nothing before the first one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.last {
            Some(publication) => write!(f, "{publication}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryType;
    use pretty_assertions::assert_eq;

    const SCHOLAR_ARTICLE: &str = r#"@article{gs,
        title={Something for Something},
        author={John Smith and Alice Brown},
        journal={The Journal},
        pub_year={2024},
        abstract={Long abstract}
    }"#;

    fn openalex_work() -> OpenAlexWork {
        OpenAlexWork::from_json(
            r#"{
                "id": "https://openalex.org/W1",
                "title": "Something for Something",
                "authorships": [{"author": {"display_name": "John Smith"}}],
                "primary_location": {"source": {"display_name": "The Journal"}},
                "type": "journal-article",
                "publication_year": 2024
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_google_scholar() {
        let mut generator = PublicationGenerator::new();
        let publication = generator.generate_google_scholar(SCHOLAR_ARTICLE);

        assert_eq!(publication.entry_type, EntryType::Article);
        assert_eq!(publication.citekey, "smith2024something");
        assert_eq!(publication.field("author"), Some("Smith, John and Brown, Alice"));
        assert_eq!(publication.field("abstract"), None);
        assert_eq!(generator.last(), Some(&publication));
    }

    #[test]
    fn test_generate_openalex() {
        let mut generator = PublicationGenerator::new();
        let publication = generator.generate_openalex(&openalex_work());

        assert_eq!(publication.entry_type, EntryType::Article);
        assert_eq!(publication.citekey, "smith2024something");
        assert_eq!(generator.last(), Some(&publication));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let work = openalex_work();
        let config = GeneratorConfig::default();
        assert_eq!(
            openalex_publication(&work, &config),
            openalex_publication(&work, &config)
        );
        assert_eq!(
            google_scholar_publication(SCHOLAR_ARTICLE),
            google_scholar_publication(SCHOLAR_ARTICLE)
        );
    }

    #[test]
    fn test_display_renders_last_publication() {
        let mut generator = PublicationGenerator::new();
        assert_eq!(generator.to_string(), "");

        generator.generate_google_scholar(SCHOLAR_ARTICLE);
        let bibtex = generator.generate_google_scholar("@misc{k,\n title={Other}\n}");

        assert_eq!(generator.to_string(), bibtex.to_string());
        assert_eq!(
            generator.to_string(),
            "@booklet{anonymousn.d.other,\n  title={Other},\n}"
        );
    }

    #[test]
    fn test_malformed_input_degrades() {
        let publication = PublicationGenerator::new().generate_google_scholar("garbage");
        assert_eq!(publication.entry_type, EntryType::Misc);
        assert_eq!(publication.citekey, "anonymousn.d.untitled");
    }

    #[test]
    fn test_with_config_reaches_extractor() {
        let config = GeneratorConfig {
            suppressed_journal_sources: vec!["The Journal".to_string()],
        };
        let publication = PublicationGenerator::new()
            .with_config(config)
            .generate_openalex(&openalex_work());

        assert_eq!(publication.field("journal"), None);
        assert_eq!(publication.entry_type, EntryType::Booklet);
    }

    #[test]
    fn test_scholar_empty_values_are_rendered() {
        let publication = google_scholar_publication("@misc{k,\n title={T},\n note={}\n}");
        assert_eq!(publication.to_string(), "@booklet{anonymousn.d.t,\n  title={T},\n  note={},\n}");
    }
}
