//! Iterators over an [`EquivSet`].

use crate::set::EquivSet;
use hashbrown::hash_table;
use std::iter::FusedIterator;

/// A borrowing iterator over the representatives stored in an [`EquivSet`], in backing-store
/// order. Created by [`EquivSet::iter`].
pub struct Iter<'a, T>(pub(crate) hash_table::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the representatives stored in an [`EquivSet`], in backing-store order.
/// Created by [`IntoIterator::into_iter`].
pub struct IntoIter<T>(pub(crate) hash_table::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, E, H> IntoIterator for EquivSet<T, E, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.table.into_iter())
    }
}

impl<'a, T, E, H> IntoIterator for &'a EquivSet<T, E, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter(self.table.iter())
    }
}
