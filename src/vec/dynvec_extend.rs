use crate::vec::DynVec;



#[cfg(feature = "panicy-memory")] impl<T> Extend<T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len().saturating_add(iter.size_hint().0));
        for item in iter { self.push(item); }
    }
}

#[cfg(feature = "panicy-memory")] impl<'a, T: Copy + 'a> Extend<&'a T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len().saturating_add(iter.size_hint().0));
        for item in iter { self.push(*item); }
    }
}
