mod rb;
mod sorted_vec;
mod std_btree;

pub use rb::{Iter, Postorder, Preorder, RbTreeSet};
pub use sorted_vec::SortedVecSet;
pub use std_btree::StdBTreeSet;
