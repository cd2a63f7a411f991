//! Citation key generation.
//!
//! A key is the family name of the first author, the year and the first
//! significant word of the title, concatenated and lowercased:
//! `smith2020something`.

use crate::regex::Regex;
use crate::utils::AUTHOR_SEPARATOR;
use crate::Fields;
use compact_str::CompactString;
use std::sync::LazyLock;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

const ANONYMOUS: &str = "anonymous";
const NO_DATE: &str = "n.d.";
const UNTITLED: &str = "untitled";

/// Words skipped when picking the title word.
const STOPWORDS: [&str; 33] = [
    "a", "an", "and", "the", "of", "on", "in", "to", "with", "for", "at", "by", "from", "about",
    "as", "into", "like", "through", "after", "over", "between", "out", "against", "during",
    "without", "before", "under", "around", "among", "up", "down", "off", "near",
];

/// Derives the citation key for a field mapping.
///
/// Missing data never fails: no author gives `anonymous`, a missing or blank
/// year gives `n.d.` and a title without significant words gives `untitled`.
pub fn generate_citekey(fields: &Fields) -> CompactString {
    let family = first_author_family_name(fields);
    let family = family.as_deref().unwrap_or(ANONYMOUS);
    let year = fields
        .get("year")
        .map(String::as_str)
        .filter(|year| !year.trim().is_empty())
        .unwrap_or(NO_DATE);
    let word = fields
        .get("title")
        .and_then(|title| first_significant_word(title))
        .unwrap_or(UNTITLED);

    CompactString::from(format!("{family}{year}{word}").to_lowercase())
}

/// First token of the first author, with commas removed.
fn first_author_family_name(fields: &Fields) -> Option<String> {
    let authors = fields.get("author").filter(|a| !a.is_empty())?;
    let first_author = authors.split(AUTHOR_SEPARATOR).next().unwrap_or_default();
    let token = first_author.split_whitespace().next().unwrap_or_default();
    Some(token.replace(',', ""))
}

fn first_significant_word(title: &str) -> Option<&str> {
    WORD_REGEX
        .find_iter(title)
        .map(|m| m.as_str())
        .find(|word| !STOPWORDS.contains(&word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(&[("author", "Smith, John and Alice Brown"), ("year", "2020"), ("title", "Something for Something")], "smith2020something")]
    #[case(&[("author", "Brown Alice"), ("year", "2019"), ("title", "An Introduction to Something for Something")], "brown2019introduction")]
    #[case(&[("author", "Smith, John"), ("year", "2018"), ("title", "A Study on Something")], "smith2018study")]
    #[case(&[("author", "John"), ("year", ""), ("title", "Something for Something")], "johnn.d.something")]
    #[case(&[("author", "John"), ("year", "   "), ("title", "Something")], "johnn.d.something")]
    #[case(&[("author", ""), ("year", "2021"), ("title", "Something for Something")], "anonymous2021something")]
    #[case(&[("author", "O'Connor, John"), ("year", "2022"), ("title", "On the Effects of Something for Something")], "o'connor2022effects")]
    #[case(&[("author", "Smith, John"), ("year", "2023"), ("title", "The")], "smith2023untitled")]
    #[case(&[("author", "Johnson"), ("year", "2020"), ("title", "")], "johnson2020untitled")]
    #[case(&[("author", "Johnson"), ("year", "2020")], "johnson2020untitled")]
    #[case(&[("title", "Something for Something"), ("year", "2019")], "anonymous2019something")]
    #[case(&[("author", "Smith, John"), ("title", "In and Out"), ("year", "2024")], "smith2024untitled")]
    #[case(&[("author", "Smith, John"), ("title", "...of: Mining-Repositories"), ("year", "2024")], "smith2024mining")]
    #[case(&[], "anonymousn.d.untitled")]
    fn test_generate_citekey(#[case] pairs: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(generate_citekey(&fields(pairs)), expected);
    }

    #[test]
    fn test_generate_citekey_is_deterministic() {
        let map = fields(&[("author", "Ouni, Ali"), ("title", "Refactoring Bots"), ("year", "2021")]);
        assert_eq!(generate_citekey(&map), generate_citekey(&map));
    }
}
