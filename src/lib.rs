//! Classifies code points as XML 1.0 `NameStartChar` and `NameChar`.
//!
//! The embedded tables are paged bitmaps: the code point space is cut into
//! 1024-code-point blocks, identical blocks share a page, and a packed
//! index of 4-bit page numbers maps each block to its page. Both tables
//! fit in well under 2 kilobytes, against 136 kilobytes for one bit per
//! code point.
//!
//! ```
//! assert!(xml_name_char::is_name_start_char(':' as u32));
//! assert!(!xml_name_char::is_name_start_char('-' as u32));
//! assert!(xml_name_char::is_name_char('-' as u32));
//! ```

#![no_std]

extern crate alloc;

pub mod analyze;
pub mod bits;
mod build;
mod classify;
mod error;
pub mod flat;
pub mod oracle;
mod paged;
#[rustfmt::skip]
mod tables;
mod validate;

pub use crate::build::build;
pub use crate::classify::{Classifier, Property};
pub use crate::error::{Error, Mismatch, Result};
pub use crate::paged::{PagedTable, PagedTableBuf};
pub use crate::validate::{mismatches, validate};

use crate::tables::{NAME_INDEX, NAME_PAGES, NAME_START_INDEX, NAME_START_PAGES};

pub static NAME_START_TABLE: PagedTable<'static> =
    PagedTable::new(&NAME_START_INDEX.0, &NAME_START_PAGES.0);

pub static NAME_TABLE: PagedTable<'static> = PagedTable::new(&NAME_INDEX.0, &NAME_PAGES.0);

pub fn is_name_start_char(c: u32) -> bool {
    NAME_START_TABLE.lookup(c)
}

pub fn is_name_char(c: u32) -> bool {
    NAME_TABLE.lookup(c)
}

pub fn is_name_start(ch: char) -> bool {
    is_name_start_char(ch as u32)
}

pub fn is_name(ch: char) -> bool {
    is_name_char(ch as u32)
}
