pub(crate) const BITS_PER_WORD: u64 = u64::BITS as u64;

/// Zero-based cell position inside a flag vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellIndex(pub u64);

/// Word and bit that hold one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct WordPos {
    pub word: usize,
    pub bit: u32,
}

impl From<CellIndex> for WordPos {
    #[inline]
    fn from(c: CellIndex) -> Self {
        WordPos {
            word: (c.0 / BITS_PER_WORD) as usize,
            bit: (c.0 % BITS_PER_WORD) as u32,
        }
    }
}

impl WordPos {
    #[inline]
    pub fn mask(self) -> u64 {
        1u64 << self.bit
    }
}

/// Number of words needed to hold `len` cells.
#[inline]
pub(crate) fn words_for(len: u64) -> usize {
    len.div_ceil(BITS_PER_WORD) as usize
}
