//! Equivalence-pluggable hash sets [`EquivSet`].

use crate::prelude::*;
use hashbrown::{hash_table::Entry, HashTable};

/// A hash set that delegates element equality and hashing to a pair of functions fixed at
/// construction. The element type's own [`PartialEq`] and [`Hash`](std::hash::Hash)
/// implementations, if any, are never consulted.
///
/// The first element inserted from each equivalence class becomes the stored *representative* for
/// that class; later equivalent elements are rejected without replacing it. Probes are fungible
/// within a class: under an "all evens are equal" relation, removing `4` from a set storing `2`
/// succeeds.
///
/// ## Invariants
///
/// At most one element per equivalence class is ever stored: `eq(a, b)` implies `a` and `b` cannot
/// coexist in the set.
///
/// ## Preconditions
///
/// Callers must guarantee that `eq` is reflexive, symmetric, and transitive over every value they
/// intend to store, and that `hash` maps equivalent elements to the same value. Neither property
/// is checked; a relation violating them silently breaks the invariant above.
pub struct EquivSet<T, E, H> {
    /// The function defining equality between elements.
    eq: E,
    /// The function defining an element's hash. Must be consistent with `eq`.
    hash: H,
    /// The table used for storage.
    pub(crate) table: HashTable<T>,
}

/// An [`EquivSet`] whose functions are plain function pointers.
///
/// Useful when the set must be named in a struct field or across regimes sharing one type.
pub type FnEquivSet<T> = EquivSet<T, fn(&T, &T) -> bool, fn(&T) -> u64>;

impl<T: Debug, E, H> Debug for EquivSet<T, E, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.table.iter()).finish()
    }
}

impl<T, E, H> EquivSet<T, E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    // -------------------- Construction -------------------- //

    /// Constructs a new, empty set with the given equality and hash functions.
    #[must_use]
    pub fn new(eq: E, hash: H) -> Self {
        Self {
            eq,
            hash,
            table: HashTable::new(),
        }
    }

    /// Constructs a new, empty set with room for at least `capacity` elements. The capacity is a
    /// performance hint only; it never changes observable behavior.
    #[must_use]
    pub fn with_capacity(capacity: usize, eq: E, hash: H) -> Self {
        Self {
            eq,
            hash,
            table: HashTable::with_capacity(capacity),
        }
    }

    /// Constructs a set containing the given elements, deduplicated under `eq` in iteration
    /// order. The first element of each equivalence class becomes its representative; later
    /// equivalent elements are dropped.
    #[must_use]
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I, eq: E, hash: H) -> Self {
        let elements = elements.into_iter();
        let mut set = Self::with_capacity(elements.size_hint().0, eq, hash);
        set.insert_all(elements);
        set
    }

    // -------------------- Queries -------------------- //

    /// The number of equivalence classes represented in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The number of elements the set can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the stored representative of `element`'s equivalence class, if any.
    #[must_use]
    pub fn get(&self, element: &T) -> Option<&T> {
        let (eq, hash) = (&self.eq, &self.hash);
        self.table.find(hash(element), |x| eq(x, element))
    }

    /// Whether some element equivalent to `element` is stored.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.get(element).is_some()
    }

    /// Whether every element of `elements` has an equivalent in the set. An empty input is
    /// vacuously true.
    #[must_use]
    pub fn contains_all<'a, I: IntoIterator<Item = &'a T>>(&self, elements: I) -> bool
    where
        T: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    // -------------------- Mutation -------------------- //

    /// Inserts `element` if no equivalent element is present. Returns whether the insertion
    /// happened; an existing representative is never replaced.
    pub fn insert(&mut self, element: T) -> bool {
        let (eq, hash) = (&self.eq, &self.hash);
        let hashed = hash(&element);
        match self.table.entry(hashed, |x| eq(x, &element), |x| hash(x)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(element);
                true
            }
        }
    }

    /// Inserts each element in turn, as per [`insert`](Self::insert). Returns whether at least
    /// one insertion happened; an empty input returns `false`.
    ///
    /// When several input elements share a class, the first one encountered wins the
    /// representative slot, so the result is sensitive to input order.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        let mut changed = false;
        for element in elements {
            changed |= self.insert(element);
        }
        changed
    }

    /// Removes and returns the representative of `element`'s equivalence class, if any. The probe
    /// need not be the stored value itself, only equivalent to it.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let (eq, hash) = (&self.eq, &self.hash);
        self.table
            .find_entry(hash(element), |x| eq(x, element))
            .ok()
            .map(|entry| entry.remove().0)
    }

    /// Removes the representative of `element`'s equivalence class. Returns whether a removal
    /// occurred.
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Removes each element in turn, as per [`remove`](Self::remove). Returns whether at least
    /// one removal occurred; an empty input returns `false`.
    pub fn remove_all<'a, I: IntoIterator<Item = &'a T>>(&mut self, elements: I) -> bool
    where
        T: 'a,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.remove(element);
        }
        changed
    }

    /// Keeps only the elements with an equivalent in `elements`, matched under this set's own
    /// functions. Returns whether at least one element was removed.
    pub fn retain_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        let (eq, hash) = (&self.eq, &self.hash);

        // A parallel table under the same functions.
        let mut keep = HashTable::new();
        for element in elements {
            let hashed = hash(&element);
            if let Entry::Vacant(entry) = keep.entry(hashed, |x| eq(x, &element), |x| hash(x)) {
                entry.insert(element);
            }
        }

        let before = self.table.len();
        self.table
            .retain(|x| keep.find(hash(x), |y| eq(y, x)).is_some());
        self.table.len() != before
    }

    /// Keeps only the elements satisfying the predicate.
    pub fn retain<P: FnMut(&T) -> bool>(&mut self, mut pred: P) {
        self.table.retain(|x| pred(x));
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let hash = &self.hash;
        self.table.reserve(additional, |x| hash(x));
    }

    // -------------------- Iteration and export -------------------- //

    /// Iterate over the stored representatives, in backing-store order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.table.iter())
    }

    /// Clones the stored representatives into a new vector, in backing-store order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones the stored representatives into the front of `buf`, in backing-store order.
    ///
    /// If `buf` holds at least [`len`](Self::len) slots, its length is preserved and the trailing
    /// slots are set to [`None`]. Otherwise it is resized to exactly fit the elements.
    pub fn export(&self, buf: &mut Vec<Option<T>>)
    where
        T: Clone,
    {
        if buf.len() < self.len() {
            buf.resize(self.len(), None);
        }

        let mut iter = self.iter();
        for slot in buf.iter_mut() {
            *slot = iter.next().cloned();
        }
    }
}

impl<T, E, H> Extend<T> for EquivSet<T, E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
