//! Google Scholar field extraction.
//!
//! Google Scholar exports a citation as a BibTeX snippet. The extractor
//! keeps every `key={value}` pair it finds, renames `pub_year` to `year`,
//! reorders author names to `Family, Given` and drops `abstract` and
//! `citation`.
//!
//! Unlike [`OpenAlexExtractor`](crate::OpenAlexExtractor), empty values are
//! kept: `note={}` yields a `note` field holding an empty string, and the
//! renderer emits a line for it.
//!
//! # Example
//!
//! ```
//! use pubnorm::{FieldExtractor, ScholarExtractor};
//!
//! let raw = r#"@article{gs,
//!     title={Something for Something},
//!     author={John Smith and Alice Brown},
//!     pub_year={2020}
//! }"#;
//!
//! let fields = ScholarExtractor::new().extract(raw);
//! assert_eq!(fields["author"], "Smith, John and Brown, Alice");
//! assert_eq!(fields["year"], "2020");
//! ```

mod parse;

use crate::utils::reorder_author_list;
use crate::{FieldExtractor, Fields, PublicationError, Result};
use parse::{scholar_parse, RawScholarData};
use tracing::trace;

/// Keys that never reach the canonical entry.
const DROPPED_KEYS: [&str; 2] = ["abstract", "citation"];

/// Field extractor for Google Scholar BibTeX snippets.
#[derive(Debug, Clone, Default)]
pub struct ScholarExtractor;

impl ScholarExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts fields, requiring a well-formed `@type{key,` header.
    ///
    /// # Errors
    ///
    /// Returns `PublicationError::InvalidFormat` when the header is missing.
    pub fn parse_strict(&self, raw: &str) -> Result<Fields> {
        let data = scholar_parse(raw);
        if data.header.is_none() {
            return Err(PublicationError::InvalidFormat(
                "Missing @type{key, header".into(),
            ));
        }
        Ok(normalize(data))
    }
}

impl FieldExtractor for ScholarExtractor {
    type Input = str;

    fn extract(&self, raw: &str) -> Fields {
        normalize(scholar_parse(raw))
    }
}

fn normalize(RawScholarData { pairs, .. }: RawScholarData) -> Fields {
    trace!(pairs = pairs.len(), "parsed scholar bibtex");

    let mut fields: Fields = pairs.into_iter().collect();

    if let Some(year) = fields.remove("pub_year") {
        fields.insert("year".to_string(), year);
    }
    if let Some(author) = fields.get_mut("author") {
        *author = reorder_author_list(author);
    }
    for key in DROPPED_KEYS {
        fields.remove(key);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(
        r#"@article{example2020,
                title={Something for Something},
                author={John Smith and Alice Brown},
                journal={The Journal},
                pub_year={2020},
                abstract={This is the abstract},
                citation={Some citation}
            }"#,
        &[("title", "Something for Something"), ("author", "Smith, John and Brown, Alice"), ("journal", "The Journal"), ("year", "2020")]
    )]
    #[case(
        r#"@book{example2020,
        title={Something for Something},
        author={John Smith},
        pub_year={2020}
    }"#,
        &[("title", "Something for Something"), ("author", "Smith, John"), ("year", "2020")]
    )]
    #[case(
        r#"@misc{id123,
        title={Something for Something}
    }"#,
        &[("title", "Something for Something")]
    )]
    #[case(
        r#"@article{extraSpaces,
        title =   {Something for Something} ,
        author={John Smith and Alice Brown} ,
        pub_year = {2020}
    }"#,
        &[("title", "Something for Something"), ("author", "Smith, John and Brown, Alice"), ("year", "2020")]
    )]
    #[case(
        r#"@article{empty,
            }"#,
        &[]
    )]
    fn test_extract(#[case] raw: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(ScholarExtractor::new().extract(raw), fields(expected));
    }

    #[test]
    fn test_extract_keeps_empty_values() {
        let raw = "@misc{k,\n title={T},\n note={},\n volume={ }\n}";
        assert_eq!(
            ScholarExtractor::new().extract(raw),
            fields(&[("title", "T"), ("note", ""), ("volume", "")])
        );
    }

    #[test]
    fn test_pub_year_overrides_year() {
        let raw = "@misc{k,\n year={1999},\n pub_year={2001}\n}";
        assert_eq!(ScholarExtractor::new().extract(raw)["year"], "2001");
    }

    #[test]
    fn test_later_duplicate_wins() {
        let raw = "@misc{k,\n note={first},\n note={second}\n}";
        assert_eq!(ScholarExtractor::new().extract(raw)["note"], "second");
    }

    #[test]
    fn test_parse_strict_requires_header() {
        let result = ScholarExtractor::new().parse_strict("title={T}, year={2020}}");
        assert!(matches!(result, Err(PublicationError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_strict_accepts_valid_snippet() {
        let fields = ScholarExtractor::new()
            .parse_strict("@inproceedings{k,\n title={T},\n booktitle={ICSE}\n}")
            .unwrap();
        assert_eq!(fields["booktitle"], "ICSE");
    }

    #[test]
    fn test_extract_never_fails_on_garbage() {
        assert_eq!(ScholarExtractor::new().extract("}}{{ not bibtex"), Fields::new());
    }
}
