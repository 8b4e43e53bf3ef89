use crate::filter::Filter;
use crate::trie::Trie;
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref BUILTIN: Filter = {
        let trie: Trie = words(include_str!("sensitive_words.txt")).collect();
        debug!(
            words = trie.len(),
            max_depth = trie.max_depth(),
            "built-in word list loaded"
        );
        Filter::new(trie)
    };
}

/// Words of a list with one word per line, skipping blank lines and `#` comments.
pub(crate) fn words(list: &str) -> impl Iterator<Item = &str> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// The filter for the word list that ships with this crate. Built on first use, then only read.
///
/// The list has one word per line. Lines are trimmed, so words can't start or end with
/// whitespace, and blank lines and lines starting with `#` are skipped.
pub fn builtin() -> &'static Filter {
    &BUILTIN
}

/// Filters `text` with the [`builtin`] word list. See [`Filter::filter`].
pub fn filter(text: &str) -> Option<String> {
    BUILTIN.filter(text)
}

/// Returns `true` if `text` contains a word from the [`builtin`] list. See [`Filter::is_sensitive`].
pub fn is_sensitive(text: &str) -> bool {
    BUILTIN.is_sensitive(text)
}

/// FilterStr makes it easy to check a `String` or `&str` against the [`builtin`] word list.
pub trait FilterStr: Sized {
    /// The output is a newly allocated, filtered string, or `None` if there was nothing to filter.
    fn masked(self) -> Option<String>;

    /// Returns `true` if the text contains a built-in sensitive word.
    fn is_sensitive(self) -> bool;
}

impl FilterStr for &str {
    fn masked(self) -> Option<String> {
        filter(self)
    }

    fn is_sensitive(self) -> bool {
        is_sensitive(self)
    }
}
