use xml_name_char::bits::{self, Position, BLOCK_COUNT, INDEX_LEN, PAGE_LEN, WORDS_PER_PAGE};

#[test]
fn layout_constants() {
    assert_eq!(PAGE_LEN, 1024);
    assert_eq!(WORDS_PER_PAGE, 32);
    assert_eq!(BLOCK_COUNT, 1088);
    assert_eq!(INDEX_LEN, 136);
    assert!(INDEX_LEN > (0x10FFFF >> 13) as usize);
}

#[test]
fn split_fields() {
    let pos = Position::split(0x10FFFF);
    assert_eq!(pos.page_index_a, 0x87);
    assert_eq!(pos.page_index_b, 0x7);
    assert_eq!(pos.bit_index_a, 0x1F);
    assert_eq!(pos.bit_index_b, 0x1F);
    assert_eq!(pos.block(), 0x10FFFF >> 10);

    let pos = Position::split(0b1_0110_1001_1100_0011);
    assert_eq!(pos.bit_index_b, 0b00011);
    assert_eq!(pos.bit_index_a, 0b01110);
    assert_eq!(pos.page_index_b, 0b010);
    assert_eq!(pos.page_index_a, 0b1011);
}

#[test]
fn split_then_join() {
    for c in (0..0x110000).step_by(97).chain([0, 0x3A, 0x3FF, 0x400, 0x10FFFF]) {
        assert_eq!(Position::split(c).join(), c, "U+{c:04X}");
    }
}

#[test]
fn nibbles() {
    let mut word = 0;
    for slot in 0..8 {
        word = bits::set_nibble(word, slot, slot as u8 + 8);
    }
    assert_eq!(word, 0xFEDC_BA98);
    for slot in 0..8 {
        assert_eq!(bits::get_nibble(word, slot), slot as u8 + 8);
    }

    for value in 0..16 {
        let updated = bits::set_nibble(word, 3, value);
        assert_eq!(bits::get_nibble(updated, 3), value);
        for slot in (0..8).filter(|&slot| slot != 3) {
            assert_eq!(bits::get_nibble(updated, slot), bits::get_nibble(word, slot));
        }
    }
}

#[test]
fn single_bits() {
    let mut word = 0;
    for bit in [0, 5, 31] {
        word = bits::set_bit(word, bit);
        assert!(bits::get_bit(word, bit));
    }
    assert_eq!(word, 1 | 1 << 5 | 1 << 31);
    assert_eq!(bits::set_bit(word, 5), word);
    for bit in (0..32).filter(|bit| ![0, 5, 31].contains(bit)) {
        assert!(!bits::get_bit(word, bit));
    }
}
