use crate::OrderedSet;

pub struct SortedVecSet<K: Ord> {
    data: Vec<K>,
}

impl<K: Ord> OrderedSet for SortedVecSet<K> {
    type Key = K;

    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.data.binary_search(key).is_ok()
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        match self.data.binary_search(&key) {
            Ok(_) => false,
            Err(idx) => {
                self.data.insert(idx, key);
                true
            }
        }
    }

    fn remove(&mut self, key: &Self::Key) -> bool {
        match self.data.binary_search(key) {
            Ok(idx) => {
                self.data.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    fn min(&self) -> Option<&Self::Key> {
        self.data.first()
    }

    fn max(&self) -> Option<&Self::Key> {
        self.data.last()
    }

    fn successor(&self, key: &Self::Key) -> Option<&Self::Key> {
        let idx = self.data.partition_point(|k| k <= key);
        self.data.get(idx)
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
