//! Space accounting for alternative page sizes.
//!
//! The embedded tables use 1024-code-point pages. This module measures
//! what other page sizes would cost for a given predicate, which is how
//! that size was chosen.

use crate::bits::{self, CODE_POINT_LIMIT};
use alloc::collections::BTreeMap as Map;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

pub const PAGE_BITS_CANDIDATES: RangeInclusive<u32> = 8..=14;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageSizeReport {
    pub page_bits: u32,
    pub pages: usize,
    pub page_pointers: usize,
    pub bits_per_pointer: u32,
    pub index_bytes: usize,
    pub bytes_per_page: usize,
    pub page_bytes: usize,
}

impl PageSizeReport {
    pub fn total_bytes(&self) -> usize {
        self.index_bytes + self.page_bytes
    }
}

/// Deduplicates pages of `1 << page_bits` code points.
///
/// # Panics
///
/// Panics unless `5 <= page_bits <= 21`; a page is at least one 32-bit
/// word and at most the whole code point space.
pub fn analyze<F>(predicate: F, page_bits: u32) -> PageSizeReport
where
    F: Fn(u32) -> bool,
{
    assert!((5..=21).contains(&page_bits), "unsupported page size: {} bits", page_bits);

    let values_per_page = 1u32 << page_bits;
    let words_per_page = values_per_page as usize / 32;
    let page_pointers = ((1u32 << 21) / values_per_page) as usize;

    let mut pagemap = Map::<Vec<u32>, usize>::new();
    for page_num in 0..page_pointers as u32 {
        let mut page = Vec::with_capacity(words_per_page);
        for i in 0..words_per_page as u32 {
            let mut word = 0;
            for j in 0..32 {
                let code = page_num * values_per_page + i * 32 + j;
                if code < CODE_POINT_LIMIT && predicate(code) {
                    word = bits::set_bit(word, j);
                }
            }
            page.push(word);
        }
        let next = pagemap.len();
        pagemap.entry(page).or_insert(next);
    }

    let pages = pagemap.len();
    let bits_per_pointer = bits_per_pointer(pages);
    let pointers_per_word = (32 / bits_per_pointer) as usize;
    let bytes_per_page = values_per_page as usize / 8;
    PageSizeReport {
        page_bits,
        pages,
        page_pointers,
        bits_per_pointer,
        index_bytes: (page_pointers + pointers_per_word - 1) / pointers_per_word * 4,
        bytes_per_page,
        page_bytes: bytes_per_page * pages,
    }
}

/// Smallest power-of-two field width able to number `pages` pages, so that
/// pointers never straddle a word.
pub fn bits_per_pointer(pages: usize) -> u32 {
    let mut bits = 1;
    while (1usize << bits) < pages {
        bits <<= 1;
    }
    bits
}
