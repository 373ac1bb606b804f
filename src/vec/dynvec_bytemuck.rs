use crate::error::AllocationFailedError;
use crate::storage::RawStorage;
use crate::vec::DynVec;

use bytemuck::Zeroable;



impl<T: Zeroable> DynVec<T> {
    /// Construct with an explicit initial length of `len` zero-filled elements.
    ///
    /// The zero-fill fast path of [`DynVec::try_with_len`]: the allocator hands back an
    /// already-zeroed block and all `len` elements are adopted at once — no per-element
    /// construction runs.
    pub fn try_with_zeroed(len: usize) -> Result<Self, AllocationFailedError> {
        let data = RawStorage::try_with_capacity_zeroed(len)?;
        // `T: Zeroable`, so the all-zero block is `len` valid elements
        Ok(Self { data, len })
    }

    #[cfg(feature = "panicy-memory")] pub fn with_zeroed(len: usize) -> Self { Self::try_with_zeroed(len).expect("out of memory") }
}



#[test] fn zeroed_len_equals_default() {
    let v = DynVec::<u32>::try_with_zeroed(5).unwrap();
    assert_eq!(v.len(), 5);
    assert!(v.capacity() >= 5);
    assert!(v.iter().all(|&x| x == u32::default()));
}

#[test] fn zeroed_zst() {
    let v = DynVec::<()>::try_with_zeroed(3).unwrap();
    assert_eq!(v.len(), 3);
}
