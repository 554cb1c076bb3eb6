#[cfg(feature = "std")]
use thiserror::Error;

/// Out-of-range failures raised by [`MultipleBinaryFlag`](crate::MultipleBinaryFlag).
///
/// Both variants are range errors: one for the capacity requested at
/// construction, one for a cell index passed to a mutator.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFlagError {
    #[cfg_attr(
        feature = "std",
        error("Length {length} is outside the permissible range {min}..={max}")
    )]
    LengthOutOfRange { length: u64, min: u64, max: u64 },

    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of bounds for length {length}")
    )]
    IndexOutOfRange { index: u64, length: u64 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BinaryFlagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BinaryFlagError::LengthOutOfRange { length, min, max } => write!(
                f,
                "Length {} is outside the permissible range {}..={}",
                length, min, max
            ),
            BinaryFlagError::IndexOutOfRange { index, length } => {
                write!(f, "Index {} is out of bounds for length {}", index, length)
            }
        }
    }
}
