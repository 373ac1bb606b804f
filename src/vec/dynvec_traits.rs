use crate::vec::DynVec;

use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;



// core::fmt::*

impl<T: Debug> Debug for DynVec<T> { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.debug_struct("DynVec").field("capacity", &self.capacity()).field("data", &self.as_slice()).finish() } }



// Indexing goes through the live slice: out of bounds is a programmer error and panics.

impl<T, I: SliceIndex<[T]>> Index<I> for DynVec<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &I::Output { self.as_slice().index(index) }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynVec<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output { self.as_slice_mut().index_mut(index) }
}

#[cfg(feature = "std")]
impl std::io::Write for DynVec<u8> {
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.try_extend_from_slice(buf) {
            Ok(()) => Ok(buf.len()),
            Err(_err) => Err(std::io::Error::from(std::io::ErrorKind::OutOfMemory)),
        }
    }
}
