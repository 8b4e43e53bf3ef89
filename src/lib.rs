//! wordmask masks sensitive words in text, including words that were split up with punctuation
//! or spaces to get past a filter.
//!
//! Words are stored in a [`Trie`], and text is scanned once from left to right by a
//! [`Scanner`]. Every character that is not an ASCII letter, an ASCII digit, or an East Asian
//! ideograph is a *symbol* (see [`is_symbol`]), and symbols in the middle of a word are skipped.
//! Each detected word becomes [`REPLACEMENT`], no matter how long it was.
//!
//! ```
//! use wordmask::Filter;
//!
//! let filter: Filter = ["fuck", "嫖娼"].into_iter().collect();
//!
//! assert_eq!(filter.filter("f-u-c-k you").as_deref(), Some("*** you"));
//! // A symbol outside of a word is kept.
//! assert_eq!(filter.filter("不许☆嫖☆娼").as_deref(), Some("不许☆***"));
//! assert!(filter.is_sensitive("fuck"));
//!
//! // Blank text has nothing to filter.
//! assert_eq!(filter.filter(" \n"), None);
//! ```
//!
//! With the `builtin` feature (enabled by default), a word list bundled with the crate is
//! available through [`filter()`], [`is_sensitive()`], and the [`FilterStr`] trait.

#[cfg(feature = "builtin")]
mod builtin;
mod char_map;
mod filter;
mod scanner;
mod trie;

#[cfg(feature = "builtin")]
pub use builtin::{builtin, filter, is_sensitive, FilterStr};
pub use filter::{Filter, REPLACEMENT};
pub use scanner::{is_symbol, Scanner, Segment};
pub use trie::{Node, Trie};

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;

/// Returns `true` if `s` is empty or consists only of whitespace. Such text is never filtered.
///
/// See [`is_whitespace`] for what counts as whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// Returns true iff the character is whitespace. No-break spaces (U+00A0, U+2007, U+202F) and
/// NEL (U+0085) are not, but the ASCII information separators U+001C..=U+001F are.
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && !matches!(c, '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}'))
        || ('\u{1C}'..='\u{1F}').contains(&c)
}
