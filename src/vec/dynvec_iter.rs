use crate::storage::RawStorage;
use crate::vec::DynVec;

use core::iter::FusedIterator;



#[cfg(feature = "panicy-memory")] impl<T> FromIterator<T> for DynVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.as_slice().iter() }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.as_slice_mut().iter_mut() }
}

impl<T> IntoIterator for DynVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let (data, len) = self.into_raw_parts();
        IntoIter { data, i: 0, len }
    }
}

/// [`DynVec`] converted into an iterator (e.g. the result of <code>v.[into_iter](DynVec::into_iter)\(\)</code>)
///
/// Owns the storage block; elements in `[i, len)` are still live and are read out one by one.
/// Dropping the iterator drops the unyielded range in place, then the block itself frees.
pub struct IntoIter<T> {
    data:   RawStorage<T>,
    i:      usize,
    len:    usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: ✔️ `[i, len)` holds the elements not yet yielded; nothing will observe them again
        let to_drop = core::ptr::slice_from_raw_parts_mut(unsafe { self.data.as_mut_ptr().add(self.i) }, self.len - self.i);
        // SAFETY: ✔️ as above; the storage block frees afterwards without touching element memory
        unsafe { to_drop.drop_in_place() };
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.len { return None }
        // SAFETY: ✔️ slot `i` holds a live element; `i` advances past it, so this is the only read
        let item = unsafe { self.data.as_mut_ptr().add(self.i).read() };
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.i;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.len { return None }
        self.len -= 1;
        // SAFETY: ✔️ slot `len` held the last unyielded element; `len` no longer covers it, so this is the only read
        Some(unsafe { self.data.as_mut_ptr().add(self.len).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
