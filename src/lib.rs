//! **inlineopt** provides the types [`Optional`] and [`OptionalCopy`]:
//! a value that might be absent, stored inline next to its presence flag,
//! with the held value's lifetime managed by hand.
//!
//! The held value is only constructed, cloned, moved and dropped when it is
//! actually present. Destruction is compiled out for types that don't need
//! drop, and [`OptionalCopy`] is the bitwise-`Copy` variant for `T: Copy`.
//!
//! ```
//! use inlineopt::{Optional, ABSENT};
//!
//! let mut name = Optional::from(String::from("left"));
//! assert!(name.is_present());
//! assert_eq!(name.as_ref().map(|s| s.len()), Some(4));
//!
//! name.emplace_with(|| "ab".repeat(2));
//! assert_eq!(unsafe { name.get_unchecked() }, "abab");
//!
//! name.assign_absent(ABSENT);
//! assert!(name.is_empty());
//! ```
//!
//! The inlineopt package has the following cargo features:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable to use `no_std` instead.
//!
//! - `serde`
//!   - Optional
//!   - Enable serialization for Optional and OptionalCopy using serde 1.x
//!
//! - `borsh`
//!   - Optional
//!   - Enable serialization for Optional and OptionalCopy using borsh 1.x
//!
//! - `zeroize`
//!   - Optional
//!   - Implement `Zeroize` for Optional and OptionalCopy
//!
//! ## Rust Version
//!
//! This version of inlineopt requires Rust 1.61 or later.
//!
#![doc(html_root_url="https://docs.rs/inlineopt/0.1/")]
#![cfg_attr(not(feature="std"), no_std)]

#[cfg(feature="serde")]
extern crate serde;

#[cfg(not(feature="std"))]
extern crate core as std;

mod absent;
mod cmp_impls;
mod copy;
mod errors;
mod optional;
mod optional_impl;
mod slot;

#[cfg(feature="serde")]
mod serde_impls;
#[cfg(feature="borsh")]
mod borsh_impls;

pub use crate::absent::{Absent, ABSENT};
pub use crate::copy::OptionalCopy;
pub use crate::errors::AbsentError;
pub use crate::optional::Optional;
