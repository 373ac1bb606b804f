use crate::util::drop::ConstructedBatch;
use crate::vec::DynVec;



#[cfg(feature = "panicy-memory")] impl<T: Clone> Clone for DynVec<T> {
    /// Full copy: fresh storage sized to `len()`, elements cloned in order.
    ///
    /// A panicking element clone drops the constructed prefix and releases the new block; the
    /// source is untouched either way.
    fn clone(&self) -> Self {
        let mut v = Self::new();
        v.try_extend_from_slice(self).expect("out of memory");
        v
    }

    /// Copy assignment that reuses existing storage when the source fits.
    ///
    /// `source.len() <= self.capacity()`: the overlapping prefix is overwritten by element
    /// assignment, then the excess suffix is dropped (shrinking) or the missing suffix is
    /// clone-constructed (growing) — no reallocation, element addresses unchanged.  Otherwise a
    /// fresh clone is built and swapped in, so a mid-copy panic never corrupts `self`.
    fn clone_from(&mut self, source: &Self) {
        if source.len() <= self.capacity() {
            let overlap = self.len().min(source.len());
            for (dst, src) in self.as_slice_mut().iter_mut().zip(&source.as_slice()[..overlap]) { dst.clone_from(src) }
            if source.len() < self.len() {
                self.truncate(source.len());
            } else {
                // SAFETY: ✔️ `[len, source.len())` are raw in-bounds slots (source fits in capacity), observed only through the batch until commit
                let mut batch = unsafe { ConstructedBatch::new(self.as_mut_ptr().add(self.len)) };
                for value in &source.as_slice()[overlap..] { batch.construct(value.clone()) }
                self.len += batch.commit();
            }
        } else {
            let mut fresh = source.clone();
            self.swap(&mut fresh);
        }
    }
}



#[cfg(test)] mod tests {
    use crate::util::drop::Counted;
    use crate::vec::DynVec;

    #[test] fn clone_is_deep() {
        let mut a = DynVec::new();
        for i in 0..4 { a.push(i); }
        let mut b = a.clone();
        assert_eq!(a.as_slice(), b.as_slice());
        b[0] = 99;
        b.push(4);
        assert_eq!(a.as_slice(), [0, 1, 2, 3]);
        assert_eq!(b.as_slice(), [99, 1, 2, 3, 4]);
    }

    #[test] fn clone_from_reuses_storage_when_shrinking() {
        let mut dst = DynVec::new();
        for i in 0..8u32 { dst.push(i); }
        let addr = dst.as_ptr();
        let mut src = DynVec::new();
        for i in 0..3u32 { src.push(i * 10); }

        dst.clone_from(&src);
        assert_eq!(dst.as_slice(), [0, 10, 20]);
        assert_eq!(dst.as_ptr(), addr);
        assert_eq!(dst.capacity(), 8);
    }

    #[test] fn clone_from_reuses_storage_when_growing_within_capacity() {
        let mut dst = DynVec::new();
        dst.reserve(16);
        dst.push(1u32);
        let addr = dst.as_ptr();
        let mut src = DynVec::new();
        for i in 0..10u32 { src.push(i); }

        dst.clone_from(&src);
        assert_eq!(dst.as_slice(), src.as_slice());
        assert_eq!(dst.as_ptr(), addr);
    }

    #[test] fn clone_from_reallocates_when_source_exceeds_capacity() {
        let mut dst = DynVec::new();
        dst.push(7u32);
        let mut src = DynVec::new();
        for i in 0..32u32 { src.push(i); }

        dst.clone_from(&src);
        assert_eq!(dst.as_slice(), src.as_slice());
        assert_eq!(dst.capacity(), 32);
    }

    #[test] fn clone_drop_accounting_balances() {
        assert_eq!(Counted::live_total(), 0);
        let mut a = DynVec::new();
        for i in 1..=5 { a.push(Counted::new(i)); }
        let b = a.clone();
        assert_eq!(Counted::live_total(), 10);
        drop(a);
        assert_eq!(Counted::live_total(), 5);
        drop(b);
        assert_eq!(Counted::live_total(), 0);
    }
}
