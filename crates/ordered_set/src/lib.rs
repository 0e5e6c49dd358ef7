pub mod impls;

/// Ordered set interface.
///
/// - Keys are unique; inserting a present key is a no-op returning `false`.
/// - Removing an absent key is a no-op returning `false`.
/// - `successor` returns the smallest stored key strictly greater than `key`.
pub trait OrderedSet {
    type Key: Ord;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &Self::Key) -> bool;

    fn insert(&mut self, key: Self::Key) -> bool;

    fn remove(&mut self, key: &Self::Key) -> bool;

    fn min(&self) -> Option<&Self::Key>;

    fn max(&self) -> Option<&Self::Key>;

    fn successor(&self, key: &Self::Key) -> Option<&Self::Key>;

    fn clear(&mut self);
}

pub use impls::{Iter, Postorder, Preorder, RbTreeSet, SortedVecSet, StdBTreeSet};
