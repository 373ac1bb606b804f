//! [`alloc::vec::Vec`] alternative over [`crate::storage::RawStorage`]

mod dynvec;                 pub use dynvec::*;
mod dynvec_bytemuck;
mod dynvec_clone;
mod dynvec_cmp;
mod dynvec_default;
mod dynvec_deref;
mod dynvec_extend;
mod dynvec_iter;            pub use dynvec_iter::IntoIter;
mod dynvec_traits;
