//! OpenAlex work record structures.
//!
//! Only the parts of a work that feed normalization are modelled. Every
//! field is optional because OpenAlex returns `null` or omits keys freely;
//! unknown keys are ignored on decode.

use serde::{Deserialize, Serialize};

/// A single work as returned by the OpenAlex `/works` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAlexWork {
    /// OpenAlex identifier, used as the persistence key
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorships: Vec<Authorship>,
    #[serde(default)]
    pub biblio: Option<Biblio>,
    #[serde(default)]
    pub primary_location: Option<Location>,
    /// Work type, e.g. `journal-article` or `Conference Paper`
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
}

/// One author of a work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authorship {
    #[serde(default)]
    pub author: AuthorRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Volume, issue and page information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Biblio {
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub first_page: Option<String>,
    #[serde(default)]
    pub last_page: Option<String>,
}

/// Where a work is hosted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub landing_page_url: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

/// The venue a work was published in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl OpenAlexWork {
    /// Display names of all authors, in order. Missing names read as empty.
    pub(crate) fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authorships
            .iter()
            .map(|a| a.author.display_name.as_deref().unwrap_or_default())
    }

    pub(crate) fn source(&self) -> Option<&Source> {
        self.primary_location.as_ref()?.source.as_ref()
    }

    pub(crate) fn source_name(&self) -> Option<&str> {
        self.source()?.display_name.as_deref()
    }

    pub(crate) fn publisher(&self) -> Option<&str> {
        self.source()?.publisher.as_deref()
    }

    pub(crate) fn landing_page_url(&self) -> Option<&str> {
        self.primary_location.as_ref()?.landing_page_url.as_deref()
    }

    pub(crate) fn is_conference(&self) -> bool {
        self.work_type
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains("conference"))
    }
}
