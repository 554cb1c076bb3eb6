use crate::index::{BITS_PER_WORD, WordPos};

#[inline]
pub fn get_bit(word: u64, pos: WordPos) -> bool {
    word & pos.mask() != 0
}

#[inline]
pub fn put_bit(word: &mut u64, pos: WordPos, value: bool) {
    if value {
        *word |= pos.mask();
    } else {
        *word &= !pos.mask();
    }
}

/// Mask of the bits in the last word that belong to a run of `len` bits.
#[inline]
pub fn tail_mask(len: u64) -> u64 {
    match len % BITS_PER_WORD {
        0 => u64::MAX,
        rem => (1u64 << rem) - 1,
    }
}

/// Whether every bit in `[0, len)` equals `value`.
///
/// Bits past `len` in the last word must be zero.
pub fn all_equal(words: &[u64], len: u64, value: bool) -> bool {
    let Some((last, full)) = words.split_last() else {
        return true;
    };

    if value {
        full.iter().all(|&w| w == u64::MAX) && *last == tail_mask(len)
    } else {
        words.iter().all(|&w| w == 0)
    }
}

pub fn count_ones(words: &[u64]) -> u64 {
    words.iter().map(|w| w.count_ones() as u64).sum()
}
