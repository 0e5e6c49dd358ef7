use std::collections::BTreeSet;
use std::ops::Bound;

use crate::OrderedSet;

pub struct StdBTreeSet<K: Ord> {
    inner: BTreeSet<K>,
}

impl<K: Ord> StdBTreeSet<K> {
    pub fn into_inner(self) -> BTreeSet<K> {
        self.inner
    }
}

impl<K: Ord> OrderedSet for StdBTreeSet<K> {
    type Key = K;

    fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.inner.contains(key)
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        self.inner.insert(key)
    }

    fn remove(&mut self, key: &Self::Key) -> bool {
        self.inner.remove(key)
    }

    fn min(&self) -> Option<&Self::Key> {
        self.inner.first()
    }

    fn max(&self) -> Option<&Self::Key> {
        self.inner.last()
    }

    fn successor(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.inner
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
