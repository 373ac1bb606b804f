use crate::vec::DynVec;

use core::borrow::{Borrow, BorrowMut};
use core::ops::{Deref, DerefMut};



// (Auto)Derefs

impl<T> Deref          for DynVec<T> { fn deref(&self)            -> &[T]         { self.as_slice()     } type Target = [T]; }
impl<T> DerefMut       for DynVec<T> { fn deref_mut(&mut self)    -> &mut [T]     { self.as_slice_mut() } }
impl<T> AsMut<[T]>     for DynVec<T> { fn as_mut(&mut self)       -> &mut [T]     { self } }
impl<T> AsMut<Self>    for DynVec<T> { fn as_mut(&mut self)       -> &mut Self    { self } }
impl<T> AsRef<[T]>     for DynVec<T> { fn as_ref(&self)           -> &[T]         { self } }
impl<T> AsRef<Self>    for DynVec<T> { fn as_ref(&self)           -> &Self        { self } }
impl<T> Borrow<[T]>    for DynVec<T> { fn borrow(&self)           -> &[T]         { self } }
impl<T> BorrowMut<[T]> for DynVec<T> { fn borrow_mut(&mut self)   -> &mut [T]     { self } }
