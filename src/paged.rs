use crate::bits::{
    self, Page, Position, INDEX_LEN, MAX_PAGES, NIBBLES_PER_WORD, WORDS_PER_PAGE,
};
use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::mem;

/// Two-level indexed bitmap over the code point space.
///
/// Every 1024 consecutive code points share a page. The index holds one
/// 4-bit page number per block, eight to a word, so blocks with identical
/// membership are stored once in `pages`.
#[derive(Copy, Clone, Debug)]
pub struct PagedTable<'a> {
    index: &'a [u32],
    pages: &'a [Page],
}

impl<'a> PagedTable<'a> {
    /// Wraps tables already known to be consistent, such as the generated
    /// ones embedded in this crate.
    pub(crate) const fn new(index: &'a [u32], pages: &'a [Page]) -> Self {
        PagedTable { index, pages }
    }

    pub fn try_new(index: &'a [u32], pages: &'a [Page]) -> Result<Self> {
        check(index, pages)?;
        Ok(PagedTable { index, pages })
    }

    pub fn lookup(&self, c: u32) -> bool {
        let pos = Position::split(c);
        let word = match self.index.get(pos.page_index_a as usize) {
            Some(&word) => word,
            None => return false,
        };
        let page_number = bits::get_nibble(word, pos.page_index_b);
        match self.pages.get(page_number as usize) {
            Some(page) => bits::get_bit(page[pos.bit_index_a as usize], pos.bit_index_b),
            None => false,
        }
    }

    pub fn index(&self) -> &'a [u32] {
        self.index
    }

    pub fn pages(&self) -> &'a [Page] {
        self.pages
    }

    pub fn size_bytes(&self) -> usize {
        mem::size_of_val(self.index) + mem::size_of_val(self.pages)
    }

    /// Index words followed by every page, each word little-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes());
        for word in self.index.iter().chain(self.pages.iter().flatten()) {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }
}

/// Owned form of [`PagedTable`], as produced by [`build`](crate::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedTableBuf {
    pub(crate) index: Vec<u32>,
    pub(crate) pages: Vec<Page>,
}

impl PagedTableBuf {
    pub fn as_table(&self) -> PagedTable<'_> {
        PagedTable::new(&self.index, &self.pages)
    }

    pub fn lookup(&self, c: u32) -> bool {
        self.as_table().lookup(c)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const WORD: usize = mem::size_of::<u32>();
        const INDEX_BYTES: usize = INDEX_LEN * WORD;
        const PAGE_BYTES: usize = WORDS_PER_PAGE * WORD;

        if bytes.len() < INDEX_BYTES || (bytes.len() - INDEX_BYTES) % PAGE_BYTES != 0 {
            return Err(Error::BlobLength {
                len: bytes.len(),
                expected: INDEX_BYTES,
            });
        }

        let mut words = bytes
            .chunks_exact(WORD)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        let index: Vec<u32> = words.by_ref().take(INDEX_LEN).collect();
        let mut pages = Vec::new();
        let mut page = bits::EMPTY_PAGE;
        for (i, word) in words.enumerate() {
            page[i % WORDS_PER_PAGE] = word;
            if i % WORDS_PER_PAGE == WORDS_PER_PAGE - 1 {
                pages.push(page);
            }
        }

        check(&index, &pages)?;
        Ok(PagedTableBuf { index, pages })
    }
}

fn check(index: &[u32], pages: &[Page]) -> Result<()> {
    if index.len() != INDEX_LEN {
        return Err(Error::BlobLength {
            len: mem::size_of_val(index),
            expected: INDEX_LEN * mem::size_of::<u32>(),
        });
    }
    if pages.is_empty() || pages.len() > MAX_PAGES {
        return Err(Error::PageCount(pages.len()));
    }
    for (i, &word) in index.iter().enumerate() {
        for slot in 0..NIBBLES_PER_WORD as u32 {
            let page_number = bits::get_nibble(word, slot);
            if page_number as usize >= pages.len() {
                return Err(Error::DanglingPage {
                    block: i as u32 * NIBBLES_PER_WORD as u32 + slot,
                    page_number,
                    page_count: pages.len(),
                });
            }
        }
    }
    Ok(())
}
