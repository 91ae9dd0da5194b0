//! First normalization step: punctuation removal and case folding

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace
static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercase `raw` and drop every character that is not a word character or
/// whitespace. Whitespace is kept as-is so token offsets stay meaningful.
pub fn clean_text(raw: &str) -> String {
    NON_WORD_REGEX.replace_all(&raw.to_lowercase(), "").into_owned()
}
