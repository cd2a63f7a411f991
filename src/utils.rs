use itertools::Itertools;

/// Separator between authors inside a BibTeX `author` field.
pub const AUTHOR_SEPARATOR: &str = " and ";

/// Reorders a display name so the family name comes first.
///
/// Assumes the given name is the first whitespace-delimited token and that
/// everything after it belongs to the family name:
/// `"John Robert Smith"` becomes `"Robert Smith, John"`.
///
/// # Arguments
///
/// * `name` - The display name to reorder
pub fn reorder_author_name(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(given) = tokens.next() else {
        return String::new();
    };

    let family = tokens.join(" ");
    if family.is_empty() {
        given.to_string()
    } else {
        format!("{family}, {given}")
    }
}

/// Reorders every name of an `" and "`-separated author list.
pub fn reorder_author_list(authors: &str) -> String {
    authors
        .split(AUTHOR_SEPARATOR)
        .map(reorder_author_name)
        .join(AUTHOR_SEPARATOR)
}

/// Removes every character that is not an ASCII letter, digit, punctuation
/// mark or whitespace, then trims the result.
pub fn clean_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation() || is_ascii_space(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

// Matches the whitespace set `' \t\n\r\x0b\x0c'`; `char::is_ascii_whitespace`
// leaves out the vertical tab.
fn is_ascii_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
