use crate::flat::FlatBitmap;
use crate::oracle;
use crate::paged::PagedTable;
use crate::{NAME_START_TABLE, NAME_TABLE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// XML 1.0 production [4] NameStartChar.
    NameStart,
    /// XML 1.0 production [4a] NameChar.
    Name,
}

impl Property {
    pub const ALL: [Property; 2] = [Property::NameStart, Property::Name];

    pub fn name(self) -> &'static str {
        match self {
            Property::NameStart => "NameStartChar",
            Property::Name => "NameChar",
        }
    }

    pub fn oracle(self) -> fn(u32) -> bool {
        match self {
            Property::NameStart => oracle::is_name_start_char,
            Property::Name => oracle::is_name_char,
        }
    }

    /// The paged table embedded in this crate for this property.
    pub fn table(self) -> PagedTable<'static> {
        match self {
            Property::NameStart => NAME_START_TABLE,
            Property::Name => NAME_TABLE,
        }
    }
}

/// The interchangeable implementations of a property.
#[derive(Clone, Debug)]
pub enum Classifier<'a> {
    Oracle(Property),
    Flat(FlatBitmap),
    Paged(PagedTable<'a>),
}

impl Classifier<'static> {
    /// Oracle, flat bitmap and embedded paged table for `property`, in
    /// that order. Building the flat bitmap scans the whole code point
    /// space.
    pub fn all(property: Property) -> [Self; 3] {
        [
            Classifier::Oracle(property),
            Classifier::Flat(FlatBitmap::from_predicate(property.oracle())),
            Classifier::Paged(property.table()),
        ]
    }
}

impl<'a> Classifier<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Oracle(_) => "naive",
            Classifier::Flat(_) => "bigtable",
            Classifier::Paged(_) => "pagedtable",
        }
    }

    #[inline]
    pub fn classify(&self, c: u32) -> bool {
        match self {
            Classifier::Oracle(property) => property.oracle()(c),
            Classifier::Flat(bitmap) => bitmap.lookup(c),
            Classifier::Paged(table) => table.lookup(c),
        }
    }

    /// Memory held by the lookup structure; the oracle has none.
    pub fn size_bytes(&self) -> Option<usize> {
        match self {
            Classifier::Oracle(_) => None,
            Classifier::Flat(bitmap) => Some(bitmap.size_bytes()),
            Classifier::Paged(table) => Some(table.size_bytes()),
        }
    }
}
