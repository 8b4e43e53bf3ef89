use crate::trie::{Node, Trie};
use std::iter::FusedIterator;
use std::ops::Range;
use std::ptr;
use tracing::trace;

/// Returns `true` if `c` may be skipped while matching, i.e. it is neither an ASCII letter or
/// digit nor in the East Asian block `U+2E80..=U+9FFF` (CJK radicals through unified ideographs).
///
/// Punctuation, whitespace, and other scripts are all symbols, so `f-u-c-k` and `f u c k` can
/// still be matched against `fuck`.
pub fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !('\u{2E80}'..='\u{9FFF}').contains(&c)
}

/// One piece of [`Scanner`] output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A character to copy to the output as is.
    Literal(char),
    /// A detected word, as a byte range into the scanned text. Includes any symbols that were
    /// skipped between its characters.
    Masked(Range<usize>),
}

/// Walks text through a [`Trie`] in a single left-to-right pass, yielding [`Segment`]s.
///
/// At most one candidate is tracked at a time. A candidate ends at the first terminal node it
/// reaches, even if a longer word continues from there. When a candidate dies, its first
/// character is emitted and scanning resumes from the character after it.
pub struct Scanner<'a> {
    text: &'a str,
    trie: &'a Trie,
    /// Byte offset of the first unresolved character.
    begin: usize,
    /// Byte offset of the next character to look at.
    position: usize,
    /// Node reached by the non-symbol characters in `begin..position`.
    node: &'a Node,
}

impl<'a> Scanner<'a> {
    pub fn new(trie: &'a Trie, text: &'a str) -> Self {
        Self {
            text,
            trie,
            begin: 0,
            position: 0,
            node: trie.root(),
        }
    }

    /// The part of the text that has not been resolved yet. Once the scanner is exhausted,
    /// this is empty.
    pub fn rest(&self) -> &'a str {
        &self.text[self.begin..]
    }

    fn in_candidate(&self) -> bool {
        !ptr::eq(self.node, self.trie.root())
    }

    fn reset(&mut self, begin: usize) {
        self.begin = begin;
        self.position = begin;
        self.node = self.trie.root();
    }

    /// Gives up on the current candidate (if any), emitting its first character.
    fn restart(&mut self) -> Option<Segment> {
        let c = self.rest().chars().next()?;
        self.reset(self.begin + c.len_utf8());
        Some(Segment::Literal(c))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        while self.begin < self.text.len() {
            let c = match self.text[self.position..].chars().next() {
                Some(c) => c,
                // Ran out of text mid-candidate.
                None => return self.restart(),
            };
            let end = self.position + c.len_utf8();

            if is_symbol(c) {
                if self.in_candidate() {
                    self.position = end;
                    continue;
                }
                // Outside a candidate, position == begin.
                self.reset(end);
                return Some(Segment::Literal(c));
            }

            match self.node.child(c) {
                None => return self.restart(),
                Some(child) if child.is_terminal() => {
                    let span = self.begin..end;
                    trace!(start = span.start, end = span.end, "masked");
                    self.reset(end);
                    return Some(Segment::Masked(span));
                }
                Some(child) => {
                    self.node = child;
                    self.position = end;
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each segment consumes at least one byte from `begin`.
        let remaining = self.text.len() - self.begin;
        (if remaining == 0 { 0 } else { 1 }, Some(remaining))
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
