use crate::bits::{MAX_PAGES, PAGE_LEN};
use alloc::vec::Vec;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A block's membership pattern would need a 17th page.
    #[error(
        "block {block} (U+{first:04X}..U+{last:04X}, {population} members) needs a new page but all {max} page numbers are in use",
        last = .first + PAGE_LEN as u32 - 1,
        max = MAX_PAGES,
    )]
    CapacityExceeded {
        block: u32,
        first: u32,
        population: u32,
    },

    #[error("{name} disagrees with the oracle on {} code points", .mismatches.len())]
    Validation {
        name: &'static str,
        mismatches: Vec<Mismatch>,
    },

    #[error("table blob is {len} bytes; expected {expected} index bytes followed by whole pages")]
    BlobLength { len: usize, expected: usize },

    #[error("table has {0} pages; expected between 1 and {max}", max = MAX_PAGES)]
    PageCount(usize),

    #[error("index entry for block {block} refers to page {page_number} but only {page_count} pages exist")]
    DanglingPage {
        block: u32,
        page_number: u8,
        page_count: usize,
    },
}

/// A code point on which a candidate predicate disagrees with the oracle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub code_point: u32,
    pub expected: bool,
    pub actual: bool,
}
