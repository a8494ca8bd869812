use roaring::RoaringBitmap;
use xml_name_char::Property;

pub fn property_bitmap(property: Property) -> RoaringBitmap {
    let oracle = property.oracle();
    let mut bitmap = RoaringBitmap::new();
    for c in 0..0x110000u32 {
        if oracle(c) {
            bitmap.insert(c);
        }
    }
    bitmap
}
