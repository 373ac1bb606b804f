use crate::error::*;

use core::alloc::Layout;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::mem::size_of;
use core::ptr::NonNull;



/// An untyped block of memory sized for `capacity` elements of `T`, with no element lifetime semantics of its own.
///
/// [`RawStorage`] allocates, deallocates, and transfers ownership — nothing else.  It never
/// constructs or drops a `T`: callers are solely responsible for object lifetime inside the
/// block, and dropping a [`RawStorage`] while live elements remain in it leaks their contents
/// (their destructors will not run).  There is no checking of that contract; it is a calling
/// convention, exactly like the raw allocation it wraps.
///
/// The block is exclusively owned: moves transfer it, [`RawStorage::take`] moves it out leaving
/// the source empty, and `Clone` is deliberately not implemented.
pub struct RawStorage<T> {
    data:       NonNull<T>, // dangling if nothing is allocated
    capacity:   usize,
    _phantom:   PhantomData<T>,
}

// SAFETY: ✔️ a RawStorage is just an exclusively owned block; it holds no shared state beyond what T itself would
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: ✔️ &RawStorage exposes only the pointer value and capacity
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Some(layout) = Self::allocated_layout(self.capacity) {
            // SAFETY: ✔️ `self.data` was allocated by the global allocator with exactly this layout, and is never accessed again
            unsafe { alloc::alloc::dealloc(self.data.as_ptr().cast(), layout) };
        }
    }
}

impl<T> RawStorage<T> {
    /// An empty storage block: capacity 0, nothing allocated.
    pub const fn new() -> Self { Self { data: NonNull::dangling(), capacity: 0, _phantom: PhantomData } }

    /// Allocate a block sized for exactly `capacity` elements of `T`.
    ///
    /// A `capacity` of 0 — or a zero-sized `T` — allocates nothing and uses a dangling,
    /// well-aligned pointer.  The block is uninitialized: no elements live in it until the
    /// caller placement-constructs them.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocationFailedError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| ExcessiveCapacityRequestedError { requested: capacity })?;
        if layout.size() == 0 { return Ok(Self { data: NonNull::dangling(), capacity, _phantom: PhantomData }) }
        // SAFETY: ✔️ we just ensured `layout` has a nonzero size (and Layout::array capped it at isize::MAX)
        let data = unsafe { alloc::alloc::alloc(layout) };
        let data = NonNull::new(data.cast::<T>()).ok_or(AllocationFailedError { requested: capacity })?;
        Ok(Self { data, capacity, _phantom: PhantomData })
    }

    /// [`RawStorage::try_with_capacity`], but the block is zero-filled by the allocator.
    pub fn try_with_capacity_zeroed(capacity: usize) -> Result<Self, AllocationFailedError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| ExcessiveCapacityRequestedError { requested: capacity })?;
        if layout.size() == 0 { return Ok(Self { data: NonNull::dangling(), capacity, _phantom: PhantomData }) }
        // SAFETY: ✔️ we just ensured `layout` has a nonzero size (and Layout::array capped it at isize::MAX)
        let data = unsafe { alloc::alloc::alloc_zeroed(layout) };
        let data = NonNull::new(data.cast::<T>()).ok_or(AllocationFailedError { requested: capacity })?;
        Ok(Self { data, capacity, _phantom: PhantomData })
    }

    #[cfg(feature = "panicy-memory")] pub fn with_capacity(capacity: usize) -> Self { Self::try_with_capacity(capacity).expect("out of memory") }

    /// How many elements the block can hold.  Says nothing about how many are live — that accounting is the caller's.
    #[inline(always)] pub const fn capacity(&self) -> usize { self.capacity }

    #[inline(always)] pub const fn as_ptr(&self) -> *const T { self.data.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.data.as_ptr() }

    /// Pointer to the slot at `index`.  The one-past-the-end slot is addressable but never dereferenceable.
    ///
    /// Dereferencing the result for anything but a placement-construction target requires the
    /// caller to have constructed an element there — the caller's contract, not a checked one.
    #[inline(always)] pub fn slot(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity, "slot index out of bounds of storage capacity");
        // SAFETY: ✔️ `index <= capacity` stays within (or one past) the allocated block
        unsafe { self.data.as_ptr().add(index) }
    }

    /// Move the block out, leaving `self` empty (capacity 0, nothing allocated).
    pub fn take(&mut self) -> Self { core::mem::replace(self, Self::new()) }

    /// Exchange blocks with `other`.  Never fails, never touches element memory — this is the
    /// atomic commit step of every reallocating container operation.
    pub fn swap(&mut self, other: &mut Self) { core::mem::swap(self, other) }

    fn allocated_layout(capacity: usize) -> Option<Layout> {
        if capacity == 0 || size_of::<T>() == 0 { return None }
        // capacity was validated by Layout::array at allocation time
        Layout::array::<T>(capacity).ok()
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Debug for RawStorage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.debug_struct("RawStorage").field("capacity", &self.capacity).finish_non_exhaustive() }
}



#[test] fn zero_capacity_allocates_nothing() {
    let s = RawStorage::<u32>::new();
    assert_eq!(s.capacity(), 0);
    let s = RawStorage::<u32>::try_with_capacity(0).unwrap();
    assert_eq!(s.capacity(), 0);
    assert_eq!(s.as_ptr().align_offset(core::mem::align_of::<u32>()), 0);
}

#[test] fn zst_capacity_allocates_nothing() {
    let s = RawStorage::<()>::try_with_capacity(usize::MAX).unwrap();
    assert_eq!(s.capacity(), usize::MAX);
}

#[test] fn excessive_capacity_is_an_error() {
    let err = RawStorage::<u64>::try_with_capacity(usize::MAX).unwrap_err();
    assert_eq!(err, AllocationFailedError { requested: usize::MAX });
}

#[test] fn take_leaves_source_empty() {
    let mut s = RawStorage::<u8>::try_with_capacity(16).unwrap();
    let ptr = s.as_ptr();
    let t = s.take();
    assert_eq!(s.capacity(), 0);
    assert_eq!(t.capacity(), 16);
    assert_eq!(t.as_ptr(), ptr);
}

#[test] fn swap_exchanges_blocks() {
    let mut a = RawStorage::<u8>::try_with_capacity(4).unwrap();
    let mut b = RawStorage::<u8>::try_with_capacity(8).unwrap();
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    a.swap(&mut b);
    assert_eq!((a.capacity(), b.capacity()), (8, 4));
    assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
}

#[test] fn zeroed_block_is_zero_filled() {
    let mut s = RawStorage::<u64>::try_with_capacity_zeroed(8).unwrap();
    for i in 0..8 {
        // SAFETY: ✔️ alloc_zeroed initialized all 8 slots, and 0 is a valid u64
        assert_eq!(unsafe { s.slot(i).read() }, 0);
    }
}
