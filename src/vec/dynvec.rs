use crate::error::*;
use crate::storage::RawStorage;
use crate::util::drop::ConstructedBatch;

use core::ptr;



/// [`alloc::vec::Vec`] alternative that manages element lifetime by hand over a [`RawStorage`] block.
///
/// Slots `[0, len)` of the storage hold live, constructed `T`s; slots `[len, capacity)` are raw
/// memory.  That invariant holds at every observable point: operations that must pass through
/// intermediate states restore it on both the success and the failure path (partial batches are
/// dropped, the length is only advanced once the batch is complete).
///
/// Reallocating operations are commit-or-rollback: the new block is built fully — allocation,
/// then any new element, then bitwise relocation of the old live range — before a storage swap
/// adopts it.  The only fallible step is the up-front allocation, so a failed operation hands
/// back an [`AllocationFailedError`] (and the unconsumed value, where there is one) with the
/// container byte-for-byte untouched.
///
/// Growth doubles from capacity 1; an explicit [`try_reserve`](Self::try_reserve) allocates
/// exactly what was asked.  Capacity never shrinks implicitly.
pub struct DynVec<T> {
    pub(super) data:    RawStorage<T>,
    pub(super) len:     usize,
}

impl<T> Drop for DynVec<T> { fn drop(&mut self) { self.clear() } }

impl<T> DynVec<T> {
    /// An empty container: length 0, capacity 0, nothing allocated.
    pub const fn new() -> Self { Self { data: RawStorage::new(), len: 0 } }

    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.data.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.data.as_mut_ptr() }
    // SAFETY: ✔️ `[0, len)` holds live elements at every observable point
    #[inline(always)] pub fn as_slice(&self) -> &[T] { unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) } }
    // SAFETY: ✔️ `[0, len)` holds live elements at every observable point
    #[inline(always)] pub fn as_slice_mut(&mut self) -> &mut [T] { unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) } }
    #[inline(always)] pub fn capacity(&self) -> usize { self.data.capacity() }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.len == 0 }
    #[inline(always)] pub fn len(&self) -> usize { self.len }

    /// ## Safety
    /// *   `new_len <= capacity()`
    /// *   slots `[0, new_len)` must hold live elements, and slots `[new_len, capacity)` none
    #[inline(always)] pub unsafe fn set_len(&mut self, new_len: usize) { self.len = new_len; }

    /// Construct with an explicit initial length: `len` value-initialized (default) elements.
    ///
    /// If a `T::default()` call panics partway, the already-constructed prefix is dropped and
    /// the allocation released before the panic propagates.
    pub fn try_with_len(len: usize) -> Result<Self, AllocationFailedError> where T : Default {
        let mut v = Self::new();
        v.try_resize_with(len, T::default)?;
        Ok(v)
    }

    #[cfg(feature = "panicy-memory")] pub fn with_len(len: usize) -> Self where T : Default { Self::try_with_len(len).expect("out of memory") }

    pub fn clear(&mut self) { self.truncate(0) }

    /// Drop the elements in `[len, self.len)`.  No-op when `len >= self.len`; never shrinks capacity.
    pub fn truncate(&mut self, len: usize) {
        if let Some(to_drop) = self.len.checked_sub(len) {
            // SAFETY: ✔️ `[len, self.len)` holds live elements; the length is lowered before they are dropped, so an element panic cannot make them observable again
            let to_drop = ptr::slice_from_raw_parts_mut(unsafe { self.as_mut_ptr().add(len) }, to_drop);
            self.len = len;
            // SAFETY: ✔️ as above
            unsafe { to_drop.drop_in_place() };
        }
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        // SAFETY: ✔️ slot `last` held a live element; the length no longer covers it, so this is the only read
        Some(unsafe { self.as_mut_ptr().add(last).read() })
    }

    /// Append `value`, growing by doubling when full; returns a reference to the new element.
    ///
    /// When growth is needed, the new element is written into the fresh block *before* the old
    /// elements are relocated, so a failed allocation hands `value` back with the container
    /// untouched.  Relocation itself is a bitwise move and cannot fail.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, (T, AllocationFailedError)> {
        if self.len == self.capacity() {
            let mut new_data : RawStorage<T> = match RawStorage::try_with_capacity(self.grown_capacity()) {
                Ok(data) => data,
                Err(e) => return Err((value, e)),
            };
            // SAFETY: ✔️ the new block holds at least len + 1 slots; the value lands in the first raw slot
            unsafe { new_data.slot(self.len).write(value) };
            // SAFETY: ✔️ distinct blocks; relocates `[0, len)`, after which the old slots are dead memory (not destructor targets)
            unsafe { ptr::copy_nonoverlapping(self.as_ptr(), new_data.as_mut_ptr(), self.len) };
            self.data.swap(&mut new_data); // commit; the old (now element-free) block frees on drop
        } else {
            // SAFETY: ✔️ len < capacity, so slot `len` is raw and in bounds
            unsafe { self.as_mut_ptr().add(self.len).write(value) };
        }
        self.len += 1;
        // SAFETY: ✔️ slot `len - 1` was just written
        Ok(unsafe { &mut *self.as_mut_ptr().add(self.len - 1) })
    }

    #[cfg(feature = "panicy-memory")] pub fn push(&mut self, value: T) -> &mut T { self.try_push(value).map_err(|(_, e)| e).expect("out of memory") }

    /// Append without ever reallocating; hands `value` back when full.
    pub fn push_within_capacity(&mut self, value: T) -> Result<&mut T, T> {
        if self.len < self.capacity() {
            // SAFETY: ✔️ we just checked len < capacity
            Ok(unsafe { self.push_within_capacity_unchecked(value) })
        } else {
            Err(value)
        }
    }

    /// ## Safety
    /// `len < capacity()`
    pub(super) unsafe fn push_within_capacity_unchecked(&mut self, value: T) -> &mut T {
        // SAFETY: ✔️ caller guarantees slot `len` is raw and in bounds
        let slot = unsafe { self.as_mut_ptr().add(self.len) };
        // SAFETY: ✔️ as above
        unsafe { slot.write(value) };
        self.len += 1;
        // SAFETY: ✔️ just written
        unsafe { &mut *slot }
    }

    /// Insert `value` immediately before `index`, shifting the tail right; returns a reference
    /// to the inserted element.  `index == len()` behaves exactly like a push.
    ///
    /// Panics if `index > len()` (a programmer error, not a recoverable condition).
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, (T, AllocationFailedError)> {
        assert!(index <= self.len, "insertion index out of bounds");
        if index == self.len { return self.try_push(value) }
        if self.len == self.capacity() {
            let mut new_data : RawStorage<T> = match RawStorage::try_with_capacity(self.grown_capacity()) {
                Ok(data) => data,
                Err(e) => return Err((value, e)),
            };
            // The new element first, then the halves of the old live range around it.  Only the
            // allocation above can fail; everything below is bitwise.
            // SAFETY: ✔️ the new block holds at least len + 1 slots, `index < len`
            unsafe { new_data.slot(index).write(value) };
            // SAFETY: ✔️ distinct blocks; `[0, index)` relocates to the same offsets
            unsafe { ptr::copy_nonoverlapping(self.as_ptr(), new_data.as_mut_ptr(), index) };
            // SAFETY: ✔️ distinct blocks; `[index, len)` relocates to just after the new element
            unsafe { ptr::copy_nonoverlapping(self.as_ptr().add(index), new_data.slot(index + 1), self.len - index) };
            self.data.swap(&mut new_data);
        } else {
            // SAFETY: ✔️ len < capacity, so shifting `[index, len)` up one slot stays in bounds; the vacated slot is then placement-written
            unsafe {
                let slot = self.as_mut_ptr().add(index);
                ptr::copy(slot, slot.add(1), self.len - index);
                slot.write(value);
            }
        }
        self.len += 1;
        // SAFETY: ✔️ slot `index` was just written (or relocated into place)
        Ok(unsafe { &mut *self.as_mut_ptr().add(index) })
    }

    #[cfg(feature = "panicy-memory")] pub fn insert(&mut self, index: usize, value: T) -> &mut T { self.try_insert(index, value).map_err(|(_, e)| e).expect("out of memory") }

    /// Remove and return the element at `index`, shifting the tail left; `None` when out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Option<T> {
        if index < self.len {
            let tail = self.len - index - 1;
            // SAFETY: ✔️ slot `index` holds a live element; it is read out exactly once, then the
            // live tail `[index + 1, len)` shifts down over it and the length drops by one
            let value : T = unsafe { self.as_mut_ptr().add(index).read() };
            self.len -= 1;
            // SAFETY: ✔️ as above; `ptr::copy` handles the overlap
            unsafe { ptr::copy(self.as_ptr().add(index + 1), self.as_mut_ptr().add(index), tail) };
            Some(value)
        } else {
            None
        }
    }

    #[cfg(feature = "panicy-bounds")] pub fn remove(&mut self, index: usize) -> T { self.try_remove(index).expect("index out of bounds") }

    /// Ensure room for at least `new_capacity` elements, allocating exactly `new_capacity`
    /// slots when growth is needed.
    ///
    /// Absolute, not additional: `try_reserve(n)` with `n <= capacity()` changes nothing
    /// observable (no element moves, no address changes).  Capacity never shrinks.  On
    /// allocation failure the container is unmodified — the new block is obtained before any
    /// element is touched.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocationFailedError> {
        if new_capacity <= self.capacity() { return Ok(()) }
        let mut new_data = RawStorage::try_with_capacity(new_capacity)?;
        // SAFETY: ✔️ distinct blocks; relocates `[0, len)` bitwise, after which the old slots are dead memory
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), new_data.as_mut_ptr(), self.len) };
        self.data.swap(&mut new_data);
        Ok(())
    }

    #[cfg(feature = "panicy-memory")] pub fn reserve(&mut self, new_capacity: usize) { self.try_reserve(new_capacity).expect("out of memory") }

    /// Resize to exactly `new_len` elements: dropping the excess when shrinking, constructing
    /// `f()` values in place when growing.
    ///
    /// If `f` panics partway through growth, the partially-constructed batch is dropped and the
    /// length stays at its pre-call value — no partial growth is ever observable (capacity may
    /// still have grown; it never shrinks).
    pub fn try_resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), AllocationFailedError> {
        if let Some(additional) = new_len.checked_sub(self.len) {
            if additional == 0 { return Ok(()) }
            self.try_reserve(new_len)?;
            // SAFETY: ✔️ `[len, new_len)` are raw in-bounds slots, observed only through the batch until commit
            let mut batch = unsafe { ConstructedBatch::new(self.as_mut_ptr().add(self.len)) };
            for _ in 0..additional { batch.construct(f()) }
            self.len += batch.commit();
        } else {
            self.truncate(new_len);
        }
        Ok(())
    }

    /// [`try_resize_with`](Self::try_resize_with), value-initializing new elements.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), AllocationFailedError> where T : Default {
        self.try_resize_with(new_len, T::default)
    }

    #[cfg(feature = "panicy-memory")] pub fn resize(&mut self, new_len: usize) where T : Default { self.try_resize(new_len).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) { self.try_resize_with(new_len, f).expect("out of memory") }

    /// Clone-append every element of `slice`.
    pub fn try_extend_from_slice(&mut self, slice: &[T]) -> Result<(), AllocationFailedError> where T : Clone {
        self.try_reserve(self.len.saturating_add(slice.len()))?;
        for value in slice.iter().cloned() {
            // SAFETY: ✔️ room for all of `slice` was just reserved
            unsafe { self.push_within_capacity_unchecked(value) };
        }
        Ok(())
    }

    #[cfg(feature = "panicy-memory")] pub fn extend_from_slice(&mut self, slice: &[T]) where T : Clone { self.try_extend_from_slice(slice).expect("out of memory") }

    /// Exchange contents (storage and length) with `other`.  Never fails, never moves elements.
    pub fn swap(&mut self, other: &mut Self) { core::mem::swap(self, other) }

    /// Move the contents out, leaving `self` valid and empty.
    pub fn take(&mut self) -> Self { core::mem::replace(self, Self::new()) }

    fn grown_capacity(&self) -> usize { core::cmp::max(1, self.capacity().saturating_mul(2)) }

    pub(super) fn into_raw_parts(self) -> (RawStorage<T>, usize) {
        let this = core::mem::ManuallyDrop::new(self);
        let len  = this.len;
        // SAFETY: ✔️ `this` will never be accessed again, including for Drop
        let data = unsafe { core::ptr::read(&this.data) };
        (data, len)
    }
}


#[cfg(test)] mod tests {
    use crate::util::drop::Counted;
    use crate::vec::DynVec;

    use proptest::prelude::*;

    #[test] fn push_erase_insert_scenario() {
        let mut v = DynVec::new();
        for i in 0..3 { v.push(i); }
        assert_eq!(v.len(), 3);
        assert!(v.capacity() >= 3);
        assert_eq!(v.as_slice(), [0, 1, 2]);

        assert_eq!(v.remove(1), 1);
        assert_eq!(v.as_slice(), [0, 2]);
        assert_eq!(v.len(), 2);

        v.insert(1, 9);
        assert_eq!(v.as_slice(), [0, 9, 2]);
        assert_eq!(v.len(), 3);
    }

    #[test] fn with_len_value_initializes() {
        let v = DynVec::<u32>::with_len(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == u32::default()));

        let v = DynVec::<Counted>::with_len(4);
        assert_eq!(Counted::live()[0], 4);
        drop(v);
        assert_eq!(Counted::live()[0], 0);
    }

    #[test] fn push_returns_reference_to_new_element() {
        let mut v = DynVec::new();
        *v.push(1) += 10;
        assert_eq!(v.as_slice(), [11]);
        let r = v.try_push(2).unwrap();
        assert_eq!(*r, 2);
    }

    #[test] fn pop_is_lifo_and_none_when_empty() {
        let mut v = DynVec::new();
        assert_eq!(v.pop(), None);
        for i in 0..10 { v.push(i); }
        for i in (0..10).rev() { assert_eq!(v.pop(), Some(i)) }
        assert_eq!(v.pop(), None);
        assert_eq!(v.len(), 0);
    }

    #[test] fn reserve_is_exact_and_monotonic() {
        let mut v = DynVec::new();
        v.push(1u8); v.push(2); v.push(3);
        v.reserve(7);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.as_slice(), [1, 2, 3]);

        // n <= capacity: nothing observable changes
        let addr = v.as_ptr();
        v.reserve(5);
        v.reserve(0);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.as_ptr(), addr);
        assert_eq!(v.len(), 3);
    }

    #[test] fn resize_grows_with_defaults_and_shrinks_dropping() {
        let mut v = DynVec::new();
        v.push(7u32);
        v.resize(4);
        assert_eq!(v.as_slice(), [7, 0, 0, 0]);

        let mut v = DynVec::new();
        for i in 1..=6 { v.push(Counted::new(i)); }
        v.resize_with(2, || Counted::new(0));
        assert_eq!(v.len(), 2);
        assert!(Counted::live().starts_with(&[0, 1, 1, 0, 0, 0, 0]));
        drop(v);
        assert_eq!(Counted::live_total(), 0);
    }

    #[test] fn resize_to_same_len_is_a_noop() {
        let mut v = DynVec::new();
        v.push(1); v.push(2);
        let (addr, cap) = (v.as_ptr(), v.capacity());
        v.resize(2);
        assert_eq!((v.as_ptr(), v.capacity(), v.len()), (addr, cap, 2));
    }

    #[test] fn insert_at_end_behaves_like_push() {
        let mut v = DynVec::new();
        v.insert(0, 1);
        v.insert(1, 2);
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test] fn insert_shifts_right_without_reallocation() {
        let mut v = DynVec::new();
        v.reserve(8);
        for i in 0..4 { v.push(i); }
        let addr = v.as_ptr();
        v.insert(1, 9);
        assert_eq!(v.as_slice(), [0, 9, 1, 2, 3]);
        assert_eq!(v.as_ptr(), addr);
    }

    #[test] fn insert_when_full_reallocates_around_new_element() {
        let mut v = DynVec::new();
        for i in 0..4 { v.push(i); }
        assert_eq!(v.capacity(), 4);
        v.insert(2, 9);
        assert_eq!(v.as_slice(), [0, 1, 9, 2, 3]);
        assert_eq!(v.capacity(), 8);
    }

    #[test] #[should_panic] fn insert_past_end_asserts() {
        let mut v = DynVec::new();
        v.push(1);
        let _ = v.try_insert(2, 2);
    }

    #[test] fn remove_is_inverse_of_insert() {
        let mut v = DynVec::new();
        for i in 0..6 { v.push(i); }
        let before : alloc::vec::Vec<i32> = v.iter().copied().collect();
        v.insert(3, 42);
        assert_eq!(v.remove(3), 42);
        assert_eq!(v.as_slice(), &before[..]);
    }

    #[test] fn try_remove_out_of_bounds_is_none() {
        let mut v = DynVec::<i32>::new();
        assert_eq!(v.try_remove(0), None);
        v.push(1);
        assert_eq!(v.try_remove(1), None);
        assert_eq!(v.try_remove(0), Some(1));
    }

    #[test] fn truncate_and_clear_drop_exactly_the_excess() {
        let mut v = DynVec::new();
        for i in 1..=5 { v.push(Counted::new(i)); }
        v.truncate(9); // no-op past the end
        assert_eq!(v.len(), 5);
        v.truncate(2);
        assert!(Counted::live().starts_with(&[0, 1, 1, 0, 0, 0]));
        let cap = v.capacity();
        v.clear();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), cap); // capacity never shrinks
        assert_eq!(Counted::live_total(), 0);
    }

    #[test] fn take_leaves_a_valid_empty_container() {
        let mut v = DynVec::new();
        for i in 0..3 { v.push(i); }
        let t = v.take();
        assert_eq!(t.as_slice(), [0, 1, 2]);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        v.push(9); // still fully usable
        assert_eq!(v.as_slice(), [9]);
    }

    #[test] fn swap_exchanges_contents() {
        let mut a = DynVec::new(); a.push(1u8);
        let mut b = DynVec::new(); b.push(2u8); b.push(3);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), [2, 3]);
        assert_eq!(b.as_slice(), [1]);
    }

    #[test] fn push_within_capacity_never_reallocates() {
        let mut v = DynVec::new();
        assert_eq!(v.push_within_capacity(1), Err(1));
        v.reserve(2);
        assert!(v.push_within_capacity(1).is_ok());
        assert!(v.push_within_capacity(2).is_ok());
        assert_eq!(v.push_within_capacity(3), Err(3));
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test] fn zero_sized_elements_never_allocate() {
        let mut v = DynVec::new();
        for _ in 0..100 { v.push(()); }
        assert_eq!(v.len(), 100);
        assert!(v.capacity() >= 100);
        v.insert(10, ());
        assert_eq!(v.try_remove(0), Some(()));
        assert_eq!(v.pop(), Some(()));
        assert_eq!(v.len(), 99);
    }

    #[test] fn resize_generator_panic_rolls_back() {
        let mut v = DynVec::new();
        for i in 1..=3 { v.push(Counted::new(i)); }
        let calls = core::cell::Cell::new(0u32);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.try_resize_with(8, || {
                if calls.get() == 2 { panic!("element construction failure") }
                calls.set(calls.get() + 1);
                Counted::new(100)
            })
        }));
        assert!(result.is_err());

        // no partial growth observable: old contents intact, the doomed batch dropped
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().map(|c| c.value()).collect::<alloc::vec::Vec<u8>>(), [1, 2, 3]);
        assert_eq!(Counted::live()[100], 0);
        drop(v);
        assert_eq!(Counted::live_total(), 0);
    }

    #[test] fn clone_element_panic_leaves_source_untouched() {
        struct Fragile(Counted);
        impl Clone for Fragile {
            fn clone(&self) -> Self {
                if self.0.value() == 3 { panic!("clone failure") }
                Fragile(self.0.clone())
            }
        }

        let mut v = DynVec::new();
        for i in 1..=4 { v.push(Fragile(Counted::new(i))); }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| v.clone()));
        assert!(result.is_err());

        // the partial copy was dropped; only the source's four elements remain live
        assert_eq!(v.len(), 4);
        assert_eq!(Counted::live_total(), 4);
        drop(v);
        assert_eq!(Counted::live_total(), 0);
    }

    #[derive(Debug, Clone)] enum Op {
        Push(i32),
        Pop,
        Insert(usize, i32),
        Remove(usize),
        Resize(usize),
        Reserve(usize),
        Truncate(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => any::<i32>().prop_map(Op::Push),
            2 => Just(Op::Pop),
            2 => (any::<usize>(), any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
            2 => any::<usize>().prop_map(Op::Remove),
            1 => (0usize..48).prop_map(Op::Resize),
            1 => (0usize..96).prop_map(Op::Reserve),
            1 => (0usize..48).prop_map(Op::Truncate),
        ]
    }

    proptest! {
        #[test] fn behaves_like_a_dynamic_array(ops in proptest::collection::vec(op(), 0..64)) {
            let mut model = alloc::vec::Vec::new();
            let mut v = DynVec::new();
            for op in ops {
                match op {
                    Op::Push(x)         => { model.push(x); v.push(x); }
                    Op::Pop             => prop_assert_eq!(v.pop(), model.pop()),
                    Op::Insert(i, x)    => { let i = i % (model.len() + 1); model.insert(i, x); v.insert(i, x); }
                    Op::Remove(i)       => if model.is_empty() {
                                               prop_assert_eq!(v.try_remove(i), None);
                                           } else {
                                               let i = i % model.len();
                                               prop_assert_eq!(v.remove(i), model.remove(i));
                                           },
                    Op::Resize(n)       => { model.resize(n, i32::default()); v.resize(n); }
                    Op::Reserve(n)      => { let before = v.capacity(); v.reserve(n); prop_assert!(v.capacity() >= before); prop_assert!(v.capacity() >= n); }
                    Op::Truncate(n)     => { model.truncate(n); v.truncate(n); }
                }
                prop_assert_eq!(v.as_slice(), model.as_slice());
                prop_assert!(v.len() <= v.capacity());
            }
        }

        #[test] fn push_pop_net_count(pushes in 0usize..40, pops in 0usize..40) {
            let mut v = DynVec::new();
            for i in 0..pushes { v.push(i); }
            let mut popped = 0;
            for _ in 0..pops { if v.pop().is_some() { popped += 1 } }
            prop_assert_eq!(popped, pops.min(pushes));
            prop_assert_eq!(v.len(), pushes - popped);
            for (i, &x) in v.iter().enumerate() { prop_assert_eq!(x, i) }
        }

        #[test] fn growth_doubles_and_reallocates_only_when_full(count in 1usize..64) {
            let mut v = DynVec::new();
            for i in 0..count {
                let (len0, cap0, addr0) = (v.len(), v.capacity(), v.as_ptr());
                v.push(i);
                let moved = v.as_ptr() != addr0;
                prop_assert_eq!(moved, len0 == cap0); // reallocation happens exactly at the doubling points
                prop_assert_eq!(v.capacity(), if len0 == cap0 { core::cmp::max(1, cap0 * 2) } else { cap0 });
            }
            prop_assert_eq!(v.capacity(), count.next_power_of_two());
        }

        #[test] fn insert_places_exactly_at_index(values in proptest::collection::vec(any::<i32>(), 0..24), index in any::<usize>(), value in any::<i32>()) {
            let mut v = DynVec::new();
            v.extend_from_slice(&values);
            let index = index % (values.len() + 1);
            v.insert(index, value);
            prop_assert_eq!(v.len(), values.len() + 1);
            prop_assert_eq!(&v[..index], &values[..index]);
            prop_assert_eq!(v[index], value);
            prop_assert_eq!(&v[index + 1..], &values[index..]);
            prop_assert_eq!(v.remove(index), value);
            prop_assert_eq!(v.as_slice(), &values[..]);
        }
    }
}
