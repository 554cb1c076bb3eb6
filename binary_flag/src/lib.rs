//! # binary_flag
//!
//! A fixed-length vector of boolean cells that reports a single combined flag
//! once every cell is set. Typical use is tracking several independent
//! sub-conditions and asking "are all of them done yet?".
//!
//! ```rust
//! use binary_flag::MultipleBinaryFlag;
//!
//! // Three sub-conditions, none satisfied yet
//! let mut flag = MultipleBinaryFlag::with_default(3, false).expect("valid length");
//! assert!(!flag.get_flag());
//!
//! flag.set_flag(0).unwrap();
//! flag.set_flag(1).unwrap();
//! assert_eq!(flag.to_text(), "TTF");
//!
//! flag.set_flag(2).unwrap();
//! assert!(flag.get_flag());
//! ```
//!
//! ## Bounds
//!
//! ```rust
//! use binary_flag::{BinaryFlagError, MultipleBinaryFlag, MAX_LENGTH};
//!
//! assert!(matches!(
//!     MultipleBinaryFlag::new(1),
//!     Err(BinaryFlagError::LengthOutOfRange { length: 1, .. })
//! ));
//! assert!(MultipleBinaryFlag::new(MAX_LENGTH + 1).is_err());
//!
//! let mut flag = MultipleBinaryFlag::new(7).unwrap();
//! assert!(flag.set_flag(7).is_err());
//! assert!(flag.get_flag());
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BinaryFlagError;

mod bit_ops;
mod index;

pub mod flags;

pub use flags::{
    Cells, FALSE_CHAR, InstanceId, MAX_LENGTH, MIN_LENGTH, MultipleBinaryFlag, TRUE_CHAR,
};
