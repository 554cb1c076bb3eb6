//! Typed word storage backing the bit-level crates.
//!
//! A [`Container`] owns a fixed run of [`bytemuck::Pod`] words. Single-word
//! containers live inline, everything else is a zero-initialised heap
//! allocation.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod container;
pub mod error;
#[doc(hidden)]
pub mod storage;

pub use container::Container;
pub use error::ContainerError;
pub use storage::Storage;
