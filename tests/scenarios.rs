use xml_name_char::{Classifier, Property};

fn check(c: u32, name_start: bool, name: bool) {
    for property in Property::ALL {
        let expected = match property {
            Property::NameStart => name_start,
            Property::Name => name,
        };
        for classifier in Classifier::all(property) {
            assert_eq!(
                expected,
                classifier.classify(c),
                "{} {} U+{c:04X}",
                classifier.name(),
                property.name(),
            );
        }
    }
}

#[test]
fn colon() {
    check(':' as u32, true, true);
}

#[test]
fn hyphen() {
    check('-' as u32, false, true);
}

#[test]
fn middle_dot() {
    check(0xB7, false, true);
}

#[test]
fn latin1_letters() {
    check(0xC0, true, true);
    check(0xD6, true, true);
    check(0xD8, true, true);
}

#[test]
fn multiplication_sign() {
    check(0xD7, false, false);
}

#[test]
fn top_of_range() {
    check(0x10FFFF, false, false);
    check(0xEFFFF, true, true);
    check(0xF0000, false, false);
}

#[test]
fn beyond_range() {
    for c in [0x110000, 0x1FFFFF, 0x200000, u32::MAX] {
        assert!(!xml_name_char::is_name_start_char(c));
        assert!(!xml_name_char::is_name_char(c));
        for property in Property::ALL {
            for classifier in Classifier::all(property) {
                assert!(!classifier.classify(c), "{} U+{c:04X}", classifier.name());
            }
        }
    }
}

#[test]
fn sizes() {
    for property in Property::ALL {
        let [oracle, flat, paged] = Classifier::all(property);
        assert_eq!(oracle.size_bytes(), None);
        assert_eq!(flat.size_bytes(), Some(0x110000 / 8));
        assert_eq!(paged.size_bytes(), Some(136 * 4 + 8 * 128));
    }
}
