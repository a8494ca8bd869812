//! Reference predicates, straight from the XML 1.0 (Fifth Edition) grammar.
//!
//! These are the ground truth the tables are generated from and validated
//! against. They are not meant to be fast.

use core::cmp::Ordering;

// [4] NameStartChar
const NAME_START: &[(u32, u32)] = &[
    (0x3A, 0x3A), // ':'
    (0x41, 0x5A), // 'A'..='Z'
    (0x5F, 0x5F), // '_'
    (0x61, 0x7A), // 'a'..='z'
    (0xC0, 0xD6),
    (0xD8, 0xF6),
    (0xF8, 0x2FF),
    (0x370, 0x37D),
    (0x37F, 0x1FFF),
    (0x200C, 0x200D),
    (0x2070, 0x218F),
    (0x2C00, 0x2FEF),
    (0x3001, 0xD7FF),
    (0xF900, 0xFDCF),
    (0xFDF0, 0xFFFD),
    (0x10000, 0xEFFFF),
];

// [4a] NameChar, minus NameStartChar
const NAME_EXTRA: &[(u32, u32)] = &[
    (0x2D, 0x2E), // '-' '.'
    (0x30, 0x39), // '0'..='9'
    (0xB7, 0xB7),
    (0x300, 0x36F),
    (0x203F, 0x2040),
];

pub fn is_name_start_char(c: u32) -> bool {
    search(c, NAME_START)
}

pub fn is_name_char(c: u32) -> bool {
    is_name_start_char(c) || search(c, NAME_EXTRA)
}

fn search(c: u32, table: &[(u32, u32)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if lo > c {
                Ordering::Greater
            } else if hi < c {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
