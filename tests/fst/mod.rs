#![allow(clippy::module_name_repetitions)]

use xml_name_char::Property;

pub fn property_fst(property: Property) -> fst::Set<Vec<u8>> {
    let oracle = property.oracle();
    let mut builder = fst::SetBuilder::memory();
    for c in 0..0x110000u32 {
        if oracle(c) {
            builder.insert(c.to_be_bytes()).unwrap();
        }
    }
    fst::Set::new(builder.into_inner().unwrap()).unwrap()
}
