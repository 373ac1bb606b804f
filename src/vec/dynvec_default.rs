use crate::vec::DynVec;



impl<T> Default for DynVec<T> { fn default() -> Self { Self::new() } }

// `Default` doubles as the move-assignment story: `core::mem::take` hands the contents over and
// leaves a valid, empty container behind, without touching any element.
