//! Bit layout shared by the paged table, its builder and its serialized
//! form.
//!
//! A code point has 21 significant bits, decomposed as:
//!
//! ```text
//!  20 19 18 17 16 15 14 13 12 11 10 09 08 07 06 05 04 03 02 01 00
//!  \_____________________/ \______/ \____________/ \____________/
//!       page_index_a      page_index_b  bit_index_a    bit_index_b
//! ```
//!
//! `page_index_a` selects a word of the index, `page_index_b` one of the
//! eight 4-bit page numbers packed in it, `bit_index_a` a word of the page
//! and `bit_index_b` the bit within that word.

/// Number of low bits addressing a code point within its page.
pub const PAGE_BITS: u32 = 10;

/// Code points covered by one page.
pub const PAGE_LEN: usize = 1 << PAGE_BITS;

/// 32-bit words making up one page.
pub const WORDS_PER_PAGE: usize = PAGE_LEN / 32;

/// Page numbers packed into one index word.
pub const NIBBLES_PER_WORD: usize = 8;

/// Page numbers are 4 bits wide.
pub const MAX_PAGES: usize = 16;

/// One past the largest code point.
pub const CODE_POINT_LIMIT: u32 = 0x110000;

/// Number of 1024-code-point blocks in `0..CODE_POINT_LIMIT`.
pub const BLOCK_COUNT: usize = CODE_POINT_LIMIT as usize / PAGE_LEN;

/// Words in the page index.
pub const INDEX_LEN: usize = (BLOCK_COUNT + NIBBLES_PER_WORD - 1) / NIBBLES_PER_WORD;

pub type Page = [u32; WORDS_PER_PAGE];

pub const EMPTY_PAGE: Page = [0; WORDS_PER_PAGE];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub page_index_a: u32,
    pub page_index_b: u32,
    pub bit_index_a: u32,
    pub bit_index_b: u32,
}

impl Position {
    pub const fn split(c: u32) -> Self {
        Position {
            bit_index_b: c & 0x1F,
            bit_index_a: (c >> 5) & 0x1F,
            page_index_b: (c >> 10) & 0x7,
            page_index_a: c >> 13,
        }
    }

    pub const fn join(self) -> u32 {
        self.page_index_a << 13
            | (self.page_index_b & 0x7) << 10
            | (self.bit_index_a & 0x1F) << 5
            | (self.bit_index_b & 0x1F)
    }

    /// Index of the 1024-code-point block this position falls in.
    pub const fn block(self) -> u32 {
        self.page_index_a << 3 | self.page_index_b
    }
}

pub const fn get_nibble(word: u32, slot: u32) -> u8 {
    (word >> ((slot & 0x7) * 4) & 0xF) as u8
}

pub const fn set_nibble(word: u32, slot: u32, value: u8) -> u32 {
    let shift = (slot & 0x7) * 4;
    (word & !(0xF << shift)) | ((value as u32 & 0xF) << shift)
}

pub const fn get_bit(word: u32, bit: u32) -> bool {
    word.wrapping_shr(bit) & 1 != 0
}

pub const fn set_bit(word: u32, bit: u32) -> u32 {
    word | 1 << (bit & 0x1F)
}
