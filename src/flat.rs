use crate::bits::{self, CODE_POINT_LIMIT};
use alloc::vec::Vec;
use core::mem;

/// One bit per code point, directly indexed. The baseline the paged table
/// is measured against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatBitmap {
    words: Vec<u32>,
}

impl FlatBitmap {
    pub fn from_predicate<F>(predicate: F) -> Self
    where
        F: Fn(u32) -> bool,
    {
        let mut words = Vec::with_capacity(CODE_POINT_LIMIT as usize / 32);
        for i in 0..CODE_POINT_LIMIT / 32 {
            let mut word = 0;
            for bit in 0..32 {
                if predicate(i * 32 + bit) {
                    word = bits::set_bit(word, bit);
                }
            }
            words.push(word);
        }
        FlatBitmap { words }
    }

    pub fn lookup(&self, c: u32) -> bool {
        match self.words.get(c as usize / 32) {
            Some(&word) => bits::get_bit(word, c % 32),
            None => false,
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn size_bytes(&self) -> usize {
        mem::size_of_val(self.words.as_slice())
    }
}
