use crate::is_blank;
use crate::scanner::{Scanner, Segment};
use crate::trie::Trie;
use std::borrow::Cow;
use std::ops::Range;

/// What detected words are replaced with, unless configured otherwise.
pub const REPLACEMENT: &str = "***";

/// Filter masks words from a [`Trie`] in arbitrary text, matching through punctuation and
/// other symbols that were inserted to dodge it.
///
/// A filter is immutable once configured and can be shared between threads freely.
///
/// ```
/// use wordmask::{Filter, Trie};
///
/// let filter = Filter::new(["fuck", "赌博"].into_iter().collect::<Trie>());
/// assert_eq!(filter.filter("f.u.c.k you").as_deref(), Some("*** you"));
/// assert_eq!(filter.filter("禁止赌&博").as_deref(), Some("禁止***"));
/// assert_eq!(filter.filter("  "), None);
/// ```
#[derive(Debug)]
pub struct Filter {
    trie: Trie,
    replacement: Cow<'static, str>,
}

impl Filter {
    /// Creates a filter that replaces every word in `trie` with [`REPLACEMENT`].
    pub fn new(trie: Trie) -> Self {
        Self {
            trie,
            replacement: Cow::Borrowed(REPLACEMENT),
        }
    }

    /// Sets what each detected word is replaced with, regardless of its length.
    ///
    /// Choose a replacement made of symbols (see [`crate::is_symbol`]), or at least one that
    /// cannot be matched itself, to keep filtered text stable.
    pub fn with_replacement(&mut self, replacement: impl Into<Cow<'static, str>>) -> &mut Self {
        self.replacement = replacement.into();
        self
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The stored words.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Iterates over the raw output of a single pass over `text`. Unlike [`Self::filter`], blank
    /// text is scanned like any other.
    pub fn scan<'a>(&'a self, text: &'a str) -> Scanner<'a> {
        Scanner::new(&self.trie, text)
    }

    /// Returns `text` with every detected word replaced, or `None` if `text` is empty or
    /// whitespace (see [`crate::is_blank`]), meaning there is nothing to filter.
    pub fn filter(&self, text: &str) -> Option<String> {
        if is_blank(text) {
            return None;
        }

        let mut ret = String::with_capacity(text.len());
        let mut scanner = self.scan(text);
        for segment in scanner.by_ref() {
            match segment {
                Segment::Literal(c) => ret.push(c),
                Segment::Masked(_) => ret.push_str(&self.replacement),
            }
        }
        ret.push_str(scanner.rest());
        Some(ret)
    }

    /// Returns `true` if filtering `text` would mask anything. Stops at the first detection.
    pub fn is_sensitive(&self, text: &str) -> bool {
        self.matches(text).next().is_some()
    }

    /// Byte ranges of the detected words in `text`, in order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.scan(text).filter_map(|segment| match segment {
            Segment::Masked(span) => Some(span),
            Segment::Literal(_) => None,
        })
    }

    /// Number of words filtering `text` would mask.
    pub fn count(&self, text: &str) -> usize {
        self.matches(text).count()
    }
}

impl From<Trie> for Filter {
    fn from(trie: Trie) -> Self {
        Self::new(trie)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Filter {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
