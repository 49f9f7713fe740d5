//! Items used by code generated from `sk_reflect_derive`.
//!
//! Not public API, do not use it directly.

/// Re-exports of `alloc` and helpers, so the generated code works in
/// `no_std` crates that never declared `extern crate alloc`.
pub mod macro_utils {
    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;

    pub use crate::impls::{struct_debug, zero_of};
}
