//! Raw, lifetime-free storage blocks

mod raw;                    pub use raw::*;
