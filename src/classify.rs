//! Entry type classification.
//!
//! Guesses a BibTeX entry type from the set of field keys present, following
//! the required-field lists of the standard entry types
//! (<https://www.bibtex.com/e/entry-types/>).
//!
//! Rules are evaluated in order and the first match wins. Several rules have
//! overlapping key sets, so the order in [`RULES`] is significant: a record
//! with `author, title, booktitle, publisher, year` is an `incollection`
//! even though it also satisfies `inproceedings` and `book`.

use crate::{EntryType, Fields};
use std::collections::HashSet;

/// One row of the decision table.
#[derive(Debug)]
pub struct Rule {
    /// Tag assigned when the rule matches
    pub entry_type: EntryType,
    /// Alternative key sets; one of them must be fully present
    pub any_of: &'static [&'static [&'static str]],
    /// Keys that must all be absent
    pub none_of: &'static [&'static str],
}

impl Rule {
    fn matches(&self, keys: &HashSet<String>) -> bool {
        self.any_of
            .iter()
            .any(|required| required.iter().all(|key| keys.contains(*key)))
            && !self.none_of.iter().any(|key| keys.contains(*key))
    }
}

/// The decision table, in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        entry_type: EntryType::Article,
        any_of: &[&["author", "title", "journal", "year"]],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::InBook,
        any_of: &[
            &["author", "title", "publisher", "year", "chapter"],
            &["author", "title", "publisher", "year", "pages"],
            &["editor", "title", "publisher", "year", "chapter"],
            &["editor", "title", "publisher", "year", "pages"],
        ],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::InCollection,
        any_of: &[&["author", "title", "booktitle", "publisher", "year"]],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::InProceedings,
        any_of: &[&["author", "title", "booktitle", "year"]],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::Book,
        any_of: &[
            &["author", "title", "publisher", "year"],
            &["editor", "title", "publisher", "year"],
        ],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::Proceedings,
        any_of: &[&["editor", "title", "year"]],
        none_of: &["author", "journal", "booktitle", "publisher"],
    },
    Rule {
        entry_type: EntryType::PhdThesis,
        any_of: &[&["author", "title", "school", "year"]],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::TechReport,
        any_of: &[&["author", "title", "institution", "year"]],
        none_of: &[],
    },
    Rule {
        entry_type: EntryType::Unpublished,
        any_of: &[&["author", "title", "note"]],
        none_of: &["year"],
    },
    Rule {
        entry_type: EntryType::Booklet,
        any_of: &[&["title"]],
        none_of: &["journal", "publisher", "booktitle"],
    },
];

/// Chooses the entry type for a field mapping.
///
/// Keys are compared lowercased and a key counts as present even when its
/// value is empty. Falls back to [`EntryType::Misc`] when no rule matches.
pub fn classify(fields: &Fields) -> EntryType {
    let keys: HashSet<String> = fields.keys().map(|k| k.to_lowercase()).collect();

    RULES
        .iter()
        .find(|rule| rule.matches(&keys))
        .map_or(EntryType::Misc, |rule| rule.entry_type)
}
