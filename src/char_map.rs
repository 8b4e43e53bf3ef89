use crate::Map;
use std::mem;

/// Child table of a trie node.
///
/// Word lists are dominated by lowercase ASCII, so those keys get a direct-indexed slot until
/// the first other key shows up, at which point everything moves into a hash map for good.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum CharMap<V> {
    // All keys are common.
    Common([Option<Box<V>>; 26]),
    // Some keys are rare.
    Rare(Map<char, V>),
}

impl<V> Default for CharMap<V> {
    fn default() -> Self {
        Self::Common(Default::default())
    }
}

impl<V> CharMap<V> {
    fn to_common_idx(key: char) -> Option<usize> {
        key.is_ascii_lowercase().then(|| key as usize - 'a' as usize)
    }

    fn from_common_idx(idx: usize) -> char {
        (idx as u8 + b'a') as char
    }

    fn make_rare(&mut self) {
        if let Self::Common(arr) = self {
            let mut map = Map::default();

            for (idx, value) in arr.iter_mut().enumerate() {
                if let Some(value) = mem::take(value) {
                    map.insert(Self::from_common_idx(idx), *value);
                }
            }

            *self = Self::Rare(map);
        }
    }

    pub fn get(&self, key: char) -> Option<&V> {
        match self {
            Self::Common(arr) => Self::to_common_idx(key).and_then(|k| arr[k].as_deref()),
            Self::Rare(map) => map.get(&key),
        }
    }

    /// Returns the value for `key`, inserting the result of `f` first if there is none.
    pub fn get_or_insert_with(&mut self, key: char, f: impl FnOnce() -> V) -> &mut V {
        let common_idx = Self::to_common_idx(key);

        if common_idx.is_none() {
            self.make_rare();
        }

        match (self, common_idx) {
            (Self::Common(arr), Some(k)) => &mut **arr[k].get_or_insert_with(|| Box::new(f())),
            (Self::Common(_), None) => unreachable!("rare key in common map"),
            (Self::Rare(map), _) => map.entry(key).or_insert_with(f),
        }
    }
}
