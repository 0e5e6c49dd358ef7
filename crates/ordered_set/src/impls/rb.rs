use std::cmp::Ordering;
use std::fmt;

use crate::OrderedSet;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Id(u32);

impl Id {
    const SENTINEL: Self = Self(0);

    #[inline(always)]
    fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

#[derive(Clone)]
struct Node<K> {
    key: Option<K>,
    ch: [Id; 2],
    p: Id,
    red: bool,
}

impl<K> Node<K> {
    fn sentinel() -> Self {
        Self {
            key: None,
            ch: [Id::SENTINEL; 2],
            p: Id::SENTINEL,
            red: false,
        }
    }

    fn new(key: K, p: Id) -> Self {
        Self {
            key: Some(key),
            ch: [Id::SENTINEL; 2],
            p,
            red: true,
        }
    }
}

/// Red-black tree set over an index arena.
///
/// Nodes live in a `Vec` addressed by `u32` handles; slot 0 is the shared
/// black sentinel standing in for every absent child. Removed slots are
/// recycled through a free list, so clearing and refilling does not grow
/// the arena.
#[derive(Clone)]
pub struct RbTreeSet<K: Ord> {
    nodes: Vec<Node<K>>,
    root: Id,
    free: Vec<Id>,
    len: usize,
}

impl<K: Ord> RbTreeSet<K> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            root: Id::SENTINEL,
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn node(&self, x: Id) -> &Node<K> {
        &self.nodes[x.idx()]
    }

    #[inline(always)]
    fn node_mut(&mut self, x: Id) -> &mut Node<K> {
        &mut self.nodes[x.idx()]
    }

    #[inline(always)]
    fn key(&self, x: Id) -> &K {
        self.node(x).key.as_ref().expect("slot holds no key")
    }

    #[inline(always)]
    fn is_red(&self, x: Id) -> bool {
        self.node(x).red
    }

    fn alloc(&mut self, key: K, p: Id) -> Id {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot.idx()] = Node::new(key, p);
                slot
            }
            None => {
                let slot = id(self.nodes.len());
                self.nodes.push(Node::new(key, p));
                slot
            }
        }
    }

    fn release(&mut self, x: Id) {
        debug_assert!(!x.is_sentinel());
        let node = self.node_mut(x);
        node.key = None;
        node.ch = [Id::SENTINEL; 2];
        node.p = Id::SENTINEL;
        node.red = false;
        self.free.push(x);
    }

    fn find(&self, key: &K) -> Id {
        let mut x = self.root;
        while !x.is_sentinel() {
            match key.cmp(self.key(x)) {
                Ordering::Less => x = self.node(x).ch[0],
                Ordering::Greater => x = self.node(x).ch[1],
                Ordering::Equal => return x,
            }
        }
        Id::SENTINEL
    }

    fn extreme(&self, from: Id, side: usize) -> Id {
        let mut x = from;
        while !self.node(x).ch[side].is_sentinel() {
            x = self.node(x).ch[side];
        }
        x
    }

    fn successor_of(&self, x: Id) -> Id {
        if !self.node(x).ch[1].is_sentinel() {
            return self.extreme(self.node(x).ch[1], 0);
        }
        let mut x = x;
        let mut p = self.node(x).p;
        while !p.is_sentinel() && self.node(p).ch[1] == x {
            x = p;
            p = self.node(p).p;
        }
        p
    }

    /// Rotation toward `dir`, promoting `x`'s child on side `dir ^ 1`.
    /// `rotate(x, 0)` is the classic left rotation.
    fn rotate(&mut self, x: Id, dir: usize) {
        let y = self.node(x).ch[dir ^ 1];
        debug_assert!(!y.is_sentinel());

        let b = self.node(y).ch[dir];
        self.node_mut(x).ch[dir ^ 1] = b;
        if !b.is_sentinel() {
            self.node_mut(b).p = x;
        }

        let p = self.node(x).p;
        self.node_mut(y).p = p;
        if p.is_sentinel() {
            self.root = y;
        } else {
            let side = usize::from(self.node(p).ch[1] == x);
            self.node_mut(p).ch[side] = y;
        }

        self.node_mut(y).ch[dir] = x;
        self.node_mut(x).p = y;
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_sentinel()
    }

    pub fn min(&self) -> Option<&K> {
        if self.root.is_sentinel() {
            return None;
        }
        Some(self.key(self.extreme(self.root, 0)))
    }

    pub fn max(&self) -> Option<&K> {
        if self.root.is_sentinel() {
            return None;
        }
        Some(self.key(self.extreme(self.root, 1)))
    }

    /// Smallest stored key strictly greater than `key`, present or not.
    pub fn successor(&self, key: &K) -> Option<&K> {
        let mut x = self.root;
        let mut best = Id::SENTINEL;
        while !x.is_sentinel() {
            if key < self.key(x) {
                best = x;
                x = self.node(x).ch[0];
            } else {
                x = self.node(x).ch[1];
            }
        }
        if best.is_sentinel() {
            None
        } else {
            Some(self.key(best))
        }
    }

    pub fn insert(&mut self, key: K) -> bool {
        let mut p = Id::SENTINEL;
        let mut x = self.root;
        let mut dir = 0;
        while !x.is_sentinel() {
            match key.cmp(self.key(x)) {
                Ordering::Less => dir = 0,
                Ordering::Greater => dir = 1,
                Ordering::Equal => return false,
            }
            p = x;
            x = self.node(x).ch[dir];
        }

        let n = self.alloc(key, p);
        if p.is_sentinel() {
            self.root = n;
        } else {
            self.node_mut(p).ch[dir] = n;
        }
        self.len += 1;
        self.insert_fixup(n);
        true
    }

    fn insert_fixup(&mut self, mut x: Id) {
        while self.is_red(self.node(x).p) {
            let p = self.node(x).p;
            let g = self.node(p).p;
            let dir = usize::from(self.node(g).ch[1] == p);
            let uncle = self.node(g).ch[dir ^ 1];
            if self.is_red(uncle) {
                // uncle red: recolor and push the violation up
                self.node_mut(p).red = false;
                self.node_mut(uncle).red = false;
                self.node_mut(g).red = true;
                x = g;
            } else {
                if self.node(p).ch[dir ^ 1] == x {
                    // inner grandchild: straighten into the outer shape
                    x = p;
                    self.rotate(x, dir);
                }
                let p = self.node(x).p;
                let g = self.node(p).p;
                self.node_mut(p).red = false;
                self.node_mut(g).red = true;
                self.rotate(g, dir ^ 1);
            }
        }
        let root = self.root;
        self.node_mut(root).red = false;
    }

    pub fn remove(&mut self, key: &K) -> bool {
        let z = self.find(key);
        if z.is_sentinel() {
            return false;
        }
        self.remove_at(z);
        true
    }

    fn remove_at(&mut self, z: Id) {
        let mut removed_red = self.node(z).red;
        let x;
        if self.node(z).ch[0].is_sentinel() {
            x = self.node(z).ch[1];
            self.transplant(z, x);
        } else if self.node(z).ch[1].is_sentinel() {
            x = self.node(z).ch[0];
            self.transplant(z, x);
        } else {
            // two children: splice in the right-subtree minimum
            let s = self.extreme(self.node(z).ch[1], 0);
            removed_red = self.node(s).red;
            x = self.node(s).ch[1];
            if self.node(s).p == z {
                // x may be the sentinel and must still ascend to s
                self.node_mut(x).p = s;
            } else {
                self.transplant(s, x);
                let zr = self.node(z).ch[1];
                self.node_mut(s).ch[1] = zr;
                self.node_mut(zr).p = s;
            }
            self.transplant(z, s);
            let zl = self.node(z).ch[0];
            self.node_mut(s).ch[0] = zl;
            self.node_mut(zl).p = s;
            let z_red = self.node(z).red;
            self.node_mut(s).red = z_red;
        }
        if !removed_red {
            self.remove_fixup(x);
        }
        self.release(z);
        self.len -= 1;
    }

    /// Hangs `v` where `u` is attached. `v`'s parent field is written even
    /// when `v` is the sentinel; the remove fixup reads it to ascend.
    fn transplant(&mut self, u: Id, v: Id) {
        let p = self.node(u).p;
        if p.is_sentinel() {
            self.root = v;
        } else {
            let side = usize::from(self.node(p).ch[1] == u);
            self.node_mut(p).ch[side] = v;
        }
        self.node_mut(v).p = p;
    }

    fn remove_fixup(&mut self, mut x: Id) {
        while x != self.root && !self.is_red(x) {
            let p = self.node(x).p;
            let dir = usize::from(self.node(p).ch[1] == x);
            let mut w = self.node(p).ch[dir ^ 1];
            if self.is_red(w) {
                // red sibling: rotate so the sibling is black
                self.node_mut(w).red = false;
                self.node_mut(p).red = true;
                self.rotate(p, dir);
                w = self.node(p).ch[dir ^ 1];
            }
            if !self.is_red(self.node(w).ch[0]) && !self.is_red(self.node(w).ch[1]) {
                // both nephews black: recolor and ascend
                self.node_mut(w).red = true;
                x = p;
            } else {
                if !self.is_red(self.node(w).ch[dir ^ 1]) {
                    // far nephew black: rotate the sibling to make it red
                    let near = self.node(w).ch[dir];
                    self.node_mut(near).red = false;
                    self.node_mut(w).red = true;
                    self.rotate(w, dir ^ 1);
                    w = self.node(p).ch[dir ^ 1];
                }
                let p_red = self.node(p).red;
                self.node_mut(w).red = p_red;
                self.node_mut(p).red = false;
                let far = self.node(w).ch[dir ^ 1];
                self.node_mut(far).red = false;
                self.rotate(p, dir);
                x = self.root;
            }
        }
        self.node_mut(x).red = false;
    }

    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        if !self.root.is_sentinel() {
            stack.push((self.root, false));
        }
        while let Some((x, expanded)) = stack.pop() {
            if expanded {
                self.release(x);
                continue;
            }
            stack.push((x, true));
            for side in [1, 0] {
                let c = self.node(x).ch[side];
                if !c.is_sentinel() {
                    stack.push((c, false));
                }
            }
        }
        self.root = Id::SENTINEL;
        self.len = 0;
    }

    /// Ascending in-order traversal.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            next: self.extreme(self.root, 0),
            remaining: self.len,
        }
    }

    /// Pre-order traversal (node before its subtrees).
    pub fn preorder(&self) -> Preorder<'_, K> {
        let mut stack = Vec::new();
        if !self.root.is_sentinel() {
            stack.push(self.root);
        }
        Preorder {
            tree: self,
            stack,
            remaining: self.len,
        }
    }

    /// Post-order traversal (subtrees before their node).
    pub fn postorder(&self) -> Postorder<'_, K> {
        let mut stack = Vec::new();
        if !self.root.is_sentinel() {
            stack.push((self.root, false));
        }
        Postorder {
            tree: self,
            stack,
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, K: Ord> {
    tree: &'a RbTreeSet<K>,
    next: Id,
    remaining: usize,
}

impl<'a, K: Ord> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.next.is_sentinel() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.successor_of(current);
        self.remaining -= 1;
        Some(self.tree.key(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord> ExactSizeIterator for Iter<'_, K> {}

pub struct Preorder<'a, K: Ord> {
    tree: &'a RbTreeSet<K>,
    stack: Vec<Id>,
    remaining: usize,
}

impl<'a, K: Ord> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let x = self.stack.pop()?;
        for side in [1, 0] {
            let c = self.tree.node(x).ch[side];
            if !c.is_sentinel() {
                self.stack.push(c);
            }
        }
        self.remaining -= 1;
        Some(self.tree.key(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord> ExactSizeIterator for Preorder<'_, K> {}

pub struct Postorder<'a, K: Ord> {
    tree: &'a RbTreeSet<K>,
    stack: Vec<(Id, bool)>,
    remaining: usize,
}

impl<'a, K: Ord> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some((x, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(self.tree.key(x));
            }
            self.stack.push((x, true));
            for side in [1, 0] {
                let c = self.tree.node(x).ch[side];
                if !c.is_sentinel() {
                    self.stack.push((c, false));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord> ExactSizeIterator for Postorder<'_, K> {}

impl<K: Ord> Default for RbTreeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for RbTreeSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> Extend<K> for RbTreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RbTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, K: Ord> IntoIterator for &'a RbTreeSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord> OrderedSet for RbTreeSet<K> {
    type Key = K;

    fn new() -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.contains(key)
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        self.insert(key)
    }

    fn remove(&mut self, key: &Self::Key) -> bool {
        self.remove(key)
    }

    fn min(&self) -> Option<&Self::Key> {
        self.min()
    }

    fn max(&self) -> Option<&Self::Key> {
        self.max()
    }

    fn successor(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.successor(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}
