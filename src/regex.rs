//! Re-exports from either `regex` or `regex_lite`, depending on features.
//!
//! `regex_lite` matches `\w` against ASCII only, so title words containing
//! accented letters split differently when the `lite` feature is selected.

#[cfg(feature = "lite")]
pub(crate) use regex_lite::Regex;
#[cfg(all(feature = "regex", not(feature = "lite")))]
pub(crate) use regex::Regex;

#[cfg(not(any(feature = "regex", feature = "lite")))]
compile_error!("pubnorm requires the \"regex\" or \"lite\" feature to be enabled");
