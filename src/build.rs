use crate::bits::{
    self, Page, Position, BLOCK_COUNT, EMPTY_PAGE, INDEX_LEN, MAX_PAGES, PAGE_BITS,
};
use crate::error::{Error, Result};
use crate::paged::PagedTableBuf;
use alloc::collections::BTreeMap as Map;
use alloc::vec;
use alloc::vec::Vec;

/// Builds the paged table for the set of code points satisfying
/// `predicate`.
///
/// Page 0 is always the empty page. Other pages are numbered in the order
/// their pattern first occurs, so building twice from the same predicate
/// gives identical tables.
pub fn build<F>(predicate: F) -> Result<PagedTableBuf>
where
    F: Fn(u32) -> bool,
{
    let mut pagemap = Map::<Page, u8>::new();
    let mut pages = Vec::<Page>::new();
    pagemap.insert(EMPTY_PAGE, 0);
    pages.push(EMPTY_PAGE);

    let mut index = vec![0u32; INDEX_LEN];
    for block in 0..BLOCK_COUNT as u32 {
        let first = block << PAGE_BITS;
        let page = block_page(first, &predicate);
        let page_number = match pagemap.get(&page) {
            Some(&prev) => prev,
            None => {
                if pages.len() == MAX_PAGES {
                    return Err(Error::CapacityExceeded {
                        block,
                        first,
                        population: page.iter().map(|word| word.count_ones()).sum(),
                    });
                }
                let new = pages.len() as u8;
                log::trace!("block {} (U+{:04X}) allocates page {}", block, first, new);
                pagemap.insert(page, new);
                pages.push(page);
                new
            }
        };
        let pos = Position::split(first);
        let word = &mut index[pos.page_index_a as usize];
        *word = bits::set_nibble(*word, pos.page_index_b, page_number);
    }

    let table = PagedTableBuf { index, pages };
    log::debug!(
        "built paged table with {} pages in {} bytes",
        table.pages.len(),
        table.as_table().size_bytes(),
    );
    Ok(table)
}

fn block_page<F>(first: u32, predicate: &F) -> Page
where
    F: Fn(u32) -> bool,
{
    let mut page = EMPTY_PAGE;
    for (i, word) in page.iter_mut().enumerate() {
        for bit in 0..32 {
            if predicate(first + i as u32 * 32 + bit) {
                *word = bits::set_bit(*word, bit);
            }
        }
    }
    page
}
