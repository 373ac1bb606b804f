//! [`AllocationFailedError`], [`ExcessiveCapacityRequestedError`]

use core::fmt::{self, Display, Formatter};



/// The byte size of the requested element capacity overflows [`core::alloc::Layout`] limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)] pub struct ExcessiveCapacityRequestedError {
    pub requested: usize,
}

/// The global allocator could not provide a block for the requested element capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)] pub struct AllocationFailedError {
    pub requested: usize,
}

impl Display for ExcessiveCapacityRequestedError { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "requested capacity for {} elements, which overflows allocation layout limits", self.requested) } }
impl Display for AllocationFailedError           { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "unable to allocate storage for {} elements", self.requested) } }

impl From<ExcessiveCapacityRequestedError> for AllocationFailedError { fn from(e: ExcessiveCapacityRequestedError) -> Self { Self { requested: e.requested } } }

#[cfg(feature = "std")] impl std::error::Error for ExcessiveCapacityRequestedError {}
#[cfg(feature = "std")] impl std::error::Error for AllocationFailedError {}


#[test] fn display_messages() {
    assert_eq!(std::format!("{}", AllocationFailedError { requested: 3 }), "unable to allocate storage for 3 elements");
    assert_eq!(std::format!("{}", ExcessiveCapacityRequestedError { requested: usize::MAX }).contains("overflows"), true);
}
