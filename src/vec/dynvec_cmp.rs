use crate::vec::DynVec;

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};



impl<T: Eq>     Eq     for DynVec<T> {}
impl<T: Ord>    Ord    for DynVec<T> { fn cmp(&self, other: &Self) -> Ordering { <[T]>::cmp(self, other) } }
impl<T: Hash>   Hash   for DynVec<T> { fn hash<H: Hasher>(&self, state: &mut H) { <[T]>::hash::<H>(self, state) } }

#[allow(clippy::partialeq_ne_impl)] // unnecessary but why not
impl<T: PartialEq> PartialEq  for DynVec<T> {
    fn eq(&self, other: &Self) -> bool { <[T]>::eq(self, other.as_slice()) }
    fn ne(&self, other: &Self) -> bool { <[T]>::ne(self, other.as_slice()) }
}

impl<T: PartialOrd> PartialOrd for DynVec<T> {
    fn partial_cmp  (&self, other: &Self) -> Option<Ordering>   { <[T]>::partial_cmp   (self, other) }
    fn ge           (&self, other: &Self) -> bool               { <[T]>::ge            (self, other) }
    fn gt           (&self, other: &Self) -> bool               { <[T]>::gt            (self, other) }
    fn le           (&self, other: &Self) -> bool               { <[T]>::le            (self, other) }
    fn lt           (&self, other: &Self) -> bool               { <[T]>::lt            (self, other) }
}
