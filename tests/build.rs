use xml_name_char::bits::{BLOCK_COUNT, EMPTY_PAGE, INDEX_LEN, MAX_PAGES};
use xml_name_char::{Error, Property};

#[test]
fn matches_embedded_tables() {
    for property in Property::ALL {
        let built = xml_name_char::build(property.oracle()).unwrap();
        let built = built.as_table();
        let embedded = property.table();
        assert_eq!(built.index(), embedded.index(), "{}", property.name());
        assert_eq!(built.pages(), embedded.pages(), "{}", property.name());
    }
}

#[test]
fn deterministic() {
    let first = xml_name_char::build(Property::Name.oracle()).unwrap();
    let second = xml_name_char::build(Property::Name.oracle()).unwrap();
    assert_eq!(first, second);
    for c in [0, 0x2D, 0xB7, 0x10FFFF] {
        assert_eq!(first.lookup(c), first.lookup(c));
    }
}

#[test]
fn page_budget() {
    for property in Property::ALL {
        let table = property.table();
        assert!(table.pages().len() <= MAX_PAGES);
        assert_eq!(table.index().len(), INDEX_LEN);
        assert_eq!(table.pages()[0], EMPTY_PAGE);
        let mut pages = table.pages().to_vec();
        pages.sort_unstable();
        pages.dedup();
        assert_eq!(pages.len(), table.pages().len());
    }
}

#[test]
fn empty_set() {
    let table = xml_name_char::build(|_| false).unwrap();
    let table = table.as_table();
    assert_eq!(table.pages(), [EMPTY_PAGE]);
    assert!(table.index().iter().all(|&word| word == 0));
}

#[test]
fn full_set() {
    let table = xml_name_char::build(|_| true).unwrap();
    let table = table.as_table();
    assert_eq!(table.pages().len(), 2);
    assert_eq!(table.pages()[1], [u32::MAX; 32]);
    assert!(table.index().iter().all(|&word| word == 0x1111_1111));
    assert!(table.lookup(0x10FFFF));
    assert!(!table.lookup(0x110000));
}

#[test]
fn capacity_exceeded() {
    // Block n contains only its own n-th code point, so every block up to
    // 1023 has a distinct pattern.
    let err = xml_name_char::build(|c| c & 0x3FF == c >> 10).unwrap_err();
    match err {
        Error::CapacityExceeded {
            block,
            first,
            population,
        } => {
            assert_eq!(block, 15);
            assert_eq!(first, 0x3C00);
            assert_eq!(population, 1);
        }
        _ => panic!("unexpected error: {}", err),
    }
    assert_eq!(
        err.to_string(),
        "block 15 (U+3C00..U+3FFF, 1 members) needs a new page but all 16 page numbers are in use",
    );
}

#[test]
fn sixteen_pages_fit() {
    // Empty page plus blocks 0..15 each with a distinct single member.
    let table = xml_name_char::build(|c| c >> 10 < 15 && c & 0x3FF == c >> 10).unwrap();
    assert_eq!(table.as_table().pages().len(), MAX_PAGES);
    for block in 0..BLOCK_COUNT as u32 {
        let c = (block << 10) + block;
        assert_eq!(table.lookup(c), block < 15, "block {block}");
    }
}
