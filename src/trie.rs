use crate::char_map::CharMap;
use std::fmt;
use tracing::trace;

/// Prefix tree of sensitive words, one character per edge.
///
/// Built by inserting words, then only read. Every mutating method takes `&mut self`, so a
/// trie shared behind `&` (or inside a [`crate::Filter`]) is frozen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trie {
    root: Node,
    /// Number of distinct words.
    len: usize,
    /// Character count of the longest word.
    max_depth: usize,
}

/// A node of a [`Trie`], standing for the prefix spelled by the path from the root.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    children: CharMap<Node>,
    /// Some word ends exactly here.
    terminal: bool,
    depth: usize,
}

impl Node {
    fn new(depth: usize) -> Self {
        Self {
            children: CharMap::default(),
            terminal: false,
            depth,
        }
    }

    /// The child reached by following `c`, if any word continues that way.
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(c)
    }

    /// Returns `true` if a stored word ends at this node. Never true for the root.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of characters between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Trie {
    /// An empty trie, which matches nothing.
    pub fn new() -> Self {
        Self {
            root: Node::new(0),
            len: 0,
            max_depth: 0,
        }
    }

    /// Adds a word. Empty words are ignored, since a terminal root would match
    /// the empty string everywhere.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            trace!("ignoring empty word");
            return;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            let depth = current.depth + 1;
            current = current.children.get_or_insert_with(c, || Node::new(depth));
        }

        if !current.terminal {
            current.terminal = true;
            self.len += 1;
            self.max_depth = self.max_depth.max(current.depth);
        }
    }

    /// The node for the empty prefix.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns `true` if exactly `word` was inserted. Symbols are not skipped.
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .map_or(false, Node::is_terminal)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length, in characters, of the longest stored word. This bounds how far a single
    /// candidate can extend past its first character, not counting skipped symbols.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn insert_and_lookup() {
        let trie: Trie = ["abc", "abd", "赌博"].into_iter().collect();

        let a = trie.root().child('a').unwrap();
        let b = a.child('b').unwrap();
        assert!(!a.is_terminal());
        assert!(!b.is_terminal());
        assert!(b.child('c').unwrap().is_terminal());
        assert!(b.child('d').unwrap().is_terminal());
        assert!(b.child('e').is_none());
        assert_eq!(b.depth(), 2);

        assert!(trie.root().child('赌').unwrap().child('博').unwrap().is_terminal());
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.max_depth(), 3);
    }

    #[test]
    fn prefixes_are_not_words() {
        let trie: Trie = ["abc"].into_iter().collect();
        assert!(trie.contains("abc"));
        assert!(!trie.contains("ab"));
        assert!(!trie.contains("abcd"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn empty_word_ignored() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(!trie.root().is_terminal());
        assert!(trie.is_empty());

        trie.insert("x");
        trie.insert("");
        assert!(!trie.root().is_terminal());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn idempotent_and_commutative() {
        let words = ["ab", "abc", "b", "吸毒"];
        let forward: Trie = words.iter().collect();
        let backward: Trie = words.iter().rev().chain(words.iter()).collect();

        assert_eq!(forward.len(), backward.len());
        assert_eq!(forward.max_depth(), backward.max_depth());
        for word in ["a", "ab", "abc", "abcd", "b", "吸", "吸毒"] {
            assert_eq!(forward.contains(word), backward.contains(word), "{}", word);
        }
    }

    #[test]
    fn extend_after_collect() {
        let mut trie: Trie = ["one"].into_iter().collect();
        trie.extend(vec![String::from("two"), String::new()]);
        assert!(trie.contains("one"));
        assert!(trie.contains("two"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde() {
        let trie: Trie = ["fuck", "赌博"].into_iter().collect();
        let json = serde_json::to_string(&trie).unwrap();
        let loaded: Trie = serde_json::from_str(&json).unwrap();

        assert!(loaded.contains("fuck"));
        assert!(loaded.contains("赌博"));
        assert!(!loaded.contains("fu"));
        assert_eq!(loaded.len(), 2);
    }
}
