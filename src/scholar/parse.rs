use crate::regex::Regex;
use std::sync::LazyLock;

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(\w+)\{([^,]+),\s*").unwrap());

static FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*=\s*\{([^}]*)\}").unwrap());

/// Raw key-value data of a single Google Scholar BibTeX snippet.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawScholarData {
    /// Entry type and key from the `@type{key,` header, if one was found.
    pub(crate) header: Option<(String, String)>,
    /// Trimmed key-value pairs in source order, duplicates included.
    pub(crate) pairs: Vec<(String, String)>,
}

/// Split a BibTeX snippet into its header and `key={value}` pairs.
///
/// Values end at the first closing brace, so nested braces truncate the
/// value rather than failing.
pub(crate) fn scholar_parse(raw: &str) -> RawScholarData {
    let text = raw.trim();

    let (header, body) = match HEADER_REGEX.captures(text) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            let header = (caps[1].to_string(), caps[2].trim().to_string());
            (Some(header), &text[end..])
        }
        None => (None, text),
    };

    let body = body.rsplit_once('}').map_or(body, |(inner, _)| inner);

    let pairs = FIELD_REGEX
        .captures_iter(body)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .collect();

    RawScholarData { header, pairs }
}
