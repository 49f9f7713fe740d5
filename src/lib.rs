#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sk_reflect as reflect;
pub use sk_structs as structs;
pub use sk_utils as utils;
