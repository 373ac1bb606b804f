#![allow(dead_code)] // some used for test code

use core::marker::PhantomData;



/// Rollback scope for placement-constructing a batch of elements into raw slots.
///
/// Construction code that can unwind (element `Clone`/`Default`/closures) runs between
/// [`ConstructedBatch::new`] and [`ConstructedBatch::commit`]; if the batch is dropped before
/// `commit`, everything constructed so far is dropped again in place, so a mid-batch panic
/// leaks nothing and leaves the slots raw.
pub struct ConstructedBatch<T> {
    start:          *mut T,
    constructed:    usize,
}

impl<T> ConstructedBatch<T> {
    /// ## Safety
    /// *   `start` must point at uninitialized slots with room for every later [`construct`](Self::construct) call
    /// *   nothing else may observe the slots until [`commit`](Self::commit) (or the rollback drop) runs
    pub unsafe fn new(start: *mut T) -> Self { Self { start, constructed: 0 } }

    pub fn construct(&mut self, value: T) {
        // SAFETY: ✔️ `new`'s contract guarantees an uninitialized slot at `start + constructed`
        unsafe { self.start.add(self.constructed).write(value) };
        self.constructed += 1;
    }

    /// Disarm the rollback; returns how many elements were constructed.
    pub fn commit(self) -> usize {
        let n = self.constructed;
        core::mem::forget(self);
        n
    }
}

impl<T> Drop for ConstructedBatch<T> {
    fn drop(&mut self) {
        let partial = core::ptr::slice_from_raw_parts_mut(self.start, self.constructed);
        // SAFETY: ✔️ exactly `constructed` live elements start at `start`, and nothing else will observe them again
        unsafe { partial.drop_in_place() }
    }
}



#[cfg(any(feature = "std", test))] std::thread_local! { static LIVE_COUNTS: [core::cell::Cell<usize>; 256] = [(); 256].map(|_| core::cell::Cell::new(0)); }

/// Test helper: a value whose live instances are counted per tag, panicking on unbalanced drops.
#[cfg(any(feature = "std", test))] #[derive(Debug)] pub struct Counted {
    value: u8,
    _phantom: PhantomData<*const ()>,
}

#[cfg(any(feature = "std", test))] impl Counted {
    pub fn new(value: u8) -> Self { LIVE_COUNTS.with(|lc| lc[value as usize].set(lc[value as usize].get() + 1)); Self { value, _phantom: PhantomData } }
    pub fn value(&self) -> u8 { self.value }
    pub fn live() -> [usize; 256] { LIVE_COUNTS.with(|lc| lc.clone().map(|c| c.get())) }
    pub fn live_total() -> usize { Self::live().iter().sum() }
}

#[cfg(any(feature = "std", test))] impl Drop for Counted {
    fn drop(&mut self) {
        let value = self.value as usize;
        LIVE_COUNTS.with(|lc| lc[value].set(lc[value].get().checked_sub(1).expect("live count went negative, a util::drop::Counted was presumably dropped multiple times")))
    }
}

#[cfg(any(feature = "std", test))] impl Clone for Counted {
    fn clone(&self) -> Self { Self::new(self.value) }
}

#[cfg(any(feature = "std", test))] impl Default for Counted {
    fn default() -> Self { Self::new(0) }
}

#[cfg(any(feature = "std", test))] impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}
