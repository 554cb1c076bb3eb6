//! Fixed-length vector of boolean cells with an "all set" query.
//!
//! # Examples
//!
//! ```rust
//! use binary_flag::MultipleBinaryFlag;
//!
//! let mut flag = MultipleBinaryFlag::new(7).expect("valid length");
//! assert_eq!(flag.to_text(), "TTTTTTT");
//! assert!(flag.get_flag());
//!
//! flag.reset_flag(0).unwrap();
//! assert_eq!(flag.to_text(), "FTTTTTT");
//! assert!(!flag.get_flag());
//! ```
//!
//! Equality is identity: two flags built from the same arguments are still
//! different flags.
//!
//! ```rust
//! use binary_flag::MultipleBinaryFlag;
//!
//! let a = MultipleBinaryFlag::new(7).unwrap();
//! let b = MultipleBinaryFlag::new(7).unwrap();
//! assert_ne!(a, b);
//! assert_eq!(a, a);
//! assert_eq!(a.to_text(), b.to_text());
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::string::String;
use log::{debug, trace};
use raw_bytes::Container;

use crate::BinaryFlagError;
use crate::bit_ops;
use crate::index::{self, CellIndex, WordPos};

type Result<T> = core::result::Result<T, BinaryFlagError>;

/// Smallest permissible number of cells.
pub const MIN_LENGTH: u64 = 2;

/// Largest permissible number of cells.
pub const MAX_LENGTH: u64 = 17_179_868_704;

/// Character rendered for a set cell.
pub const TRUE_CHAR: char = 'T';

/// Character rendered for a cleared cell.
pub const FALSE_CHAR: char = 'F';

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [`MultipleBinaryFlag`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        InstanceId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fixed number of boolean cells whose aggregate flag is the AND of all of them.
///
/// Cells are packed 64 to a word. Each stored bit is the cell XORed with the
/// default value, so a fresh flag is all-zero words whatever the default is
/// and construction never writes to the storage.
///
/// Equality, and hashing, follow instance identity rather than contents. The
/// type is deliberately not `Clone`: a copy would be a different flag.
pub struct MultipleBinaryFlag {
    id: InstanceId,
    len: u64,
    default_value: bool,
    words: Container<u64>,
    released: bool,
}

impl MultipleBinaryFlag {
    /// Creates a flag of `length` cells, all set.
    ///
    /// # Errors
    ///
    /// [`BinaryFlagError::LengthOutOfRange`] unless
    /// `MIN_LENGTH <= length <= MAX_LENGTH`.
    pub fn new(length: u64) -> Result<Self> {
        Self::with_default(length, true)
    }

    /// Creates a flag of `length` cells, each initialised to `default_value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_flag::MultipleBinaryFlag;
    ///
    /// let flag = MultipleBinaryFlag::with_default(4, false).unwrap();
    /// assert_eq!(flag.to_text(), "FFFF");
    /// assert!(!flag.get_flag());
    /// ```
    pub fn with_default(length: u64, default_value: bool) -> Result<Self> {
        validate_length(length)?;

        let flag = Self {
            id: InstanceId::next(),
            len: length,
            default_value,
            words: Container::zeroed(index::words_for(length)),
            released: false,
        };
        debug!(
            "created binary flag {} with {} cells (default {})",
            flag.id, length, default_value
        );
        Ok(flag)
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Number of cells. Never changes after construction.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: a flag has at least [`MIN_LENGTH`] cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if and only if every cell is currently set.
    ///
    /// Walks the live words on every call.
    pub fn get_flag(&self) -> bool {
        // A cell is set when its stored bit differs from the default.
        bit_ops::all_equal(self.words.as_slice(), self.len, !self.default_value)
    }

    /// Sets the cell at `index`.
    ///
    /// # Errors
    ///
    /// [`BinaryFlagError::IndexOutOfRange`] if `index >= len`; no cell changes.
    pub fn set_flag(&mut self, index: u64) -> Result<()> {
        self.write_cell(index, true)
    }

    /// Clears the cell at `index`.
    ///
    /// # Errors
    ///
    /// [`BinaryFlagError::IndexOutOfRange`] if `index >= len`; no cell changes.
    pub fn reset_flag(&mut self, index: u64) -> Result<()> {
        self.write_cell(index, false)
    }

    /// Reads the cell at `index`, or `None` past the end.
    pub fn get(&self, index: u64) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let pos = WordPos::from(CellIndex(index));
        let word = self.words.get(pos.word).ok()?;
        Some(bit_ops::get_bit(*word, pos) != self.default_value)
    }

    /// Number of cells currently set.
    pub fn count_set(&self) -> u64 {
        let flipped = bit_ops::count_ones(self.words.as_slice());
        if self.default_value {
            self.len - flipped
        } else {
            flipped
        }
    }

    /// Iterates over the cells in index order.
    pub fn iter(&self) -> Cells<'_> {
        Cells {
            flag: self,
            index: 0,
        }
    }

    /// Renders one character per cell, [`TRUE_CHAR`] or [`FALSE_CHAR`], in index order.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(saturating_usize(self.len));
        text.extend(self.iter().map(cell_char));
        text
    }

    /// Marks the flag as released.
    ///
    /// Advisory only: the cells stay allocated and live, so every other
    /// operation keeps working afterwards. The word storage is freed when the
    /// flag is dropped. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if !self.released {
            debug!(
                "released binary flag {} ({} heap bytes held until drop)",
                self.id,
                self.words.heap_bytes()
            );
            self.released = true;
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn write_cell(&mut self, index: u64, value: bool) -> Result<()> {
        let out_of_range = BinaryFlagError::IndexOutOfRange {
            index,
            length: self.len,
        };
        if index >= self.len {
            trace!(
                "rejected write of cell {} on binary flag {} with {} cells",
                index, self.id, self.len
            );
            return Err(out_of_range);
        }
        let pos = WordPos::from(CellIndex(index));
        let word = self.words.get_mut(pos.word).map_err(|_| out_of_range)?;
        bit_ops::put_bit(word, pos, value != self.default_value);
        Ok(())
    }
}

fn validate_length(length: u64) -> Result<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(BinaryFlagError::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

#[inline]
fn saturating_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[inline]
fn cell_char(cell: bool) -> char {
    if cell { TRUE_CHAR } else { FALSE_CHAR }
}

impl PartialEq for MultipleBinaryFlag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MultipleBinaryFlag {}

impl Hash for MultipleBinaryFlag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for MultipleBinaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for cell in self.iter() {
            f.write_char(cell_char(cell))?;
        }
        Ok(())
    }
}

// Cells are left out: a flag can hold billions of them.
impl fmt::Debug for MultipleBinaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleBinaryFlag")
            .field("id", &self.id)
            .field("len", &self.len)
            .field("flag", &self.get_flag())
            .field("released", &self.released)
            .finish()
    }
}

pub struct Cells<'a> {
    flag: &'a MultipleBinaryFlag,
    index: u64,
}

impl Iterator for Cells<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.flag.get(self.index)?;
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = saturating_usize(self.flag.len - self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

impl<'a> IntoIterator for &'a MultipleBinaryFlag {
    type Item = bool;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
