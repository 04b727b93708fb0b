//! Collection builder for repeatable options

use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Interface-level family a collection type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Keeps encounter order (`Vec`, `LinkedList`)
    Sequence,
    /// Drops duplicates (`HashSet`, `BTreeSet`)
    Set,
    /// Consumed from the front or by priority (`VecDeque`, `BinaryHeap`)
    Queue,
}

/// A container a repeatable option can accumulate into
///
/// The engine builds a fresh container with [`Repeated::empty`] each time a
/// repeatable option is matched and fills it with [`Repeated::add`].
pub trait Repeated: Default + 'static {
    type Element: 'static;

    fn kind() -> CollectionKind;

    fn empty() -> Self {
        Self::default()
    }

    fn add(&mut self, element: Self::Element);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: 'static> Repeated for Vec<V> {
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Sequence
    }

    fn add(&mut self, element: V) {
        self.push(element);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V: 'static> Repeated for LinkedList<V> {
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Sequence
    }

    fn add(&mut self, element: V) {
        self.push_back(element);
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<V: 'static> Repeated for VecDeque<V> {
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Queue
    }

    fn add(&mut self, element: V) {
        self.push_back(element);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<V: Ord + 'static> Repeated for BinaryHeap<V> {
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Queue
    }

    fn add(&mut self, element: V) {
        self.push(element);
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

impl<V, S> Repeated for HashSet<V, S>
where
    V: Eq + Hash + 'static,
    S: BuildHasher + Default + 'static,
{
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Set
    }

    fn add(&mut self, element: V) {
        self.insert(element);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<V: Ord + 'static> Repeated for BTreeSet<V> {
    type Element = V;

    fn kind() -> CollectionKind {
        CollectionKind::Set
    }

    fn add(&mut self, element: V) {
        self.insert(element);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
