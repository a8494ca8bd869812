use crate::bits::CODE_POINT_LIMIT;
use crate::classify::{Classifier, Property};
use crate::error::{Error, Mismatch, Result};
use alloc::vec::Vec;

/// Every code point on which `candidate` disagrees with the oracle for
/// `property`.
pub fn mismatches<F>(property: Property, candidate: F) -> Vec<Mismatch>
where
    F: Fn(u32) -> bool,
{
    let oracle = property.oracle();
    (0..CODE_POINT_LIMIT)
        .filter_map(|code_point| {
            let expected = oracle(code_point);
            let actual = candidate(code_point);
            if expected == actual {
                None
            } else {
                Some(Mismatch {
                    code_point,
                    expected,
                    actual,
                })
            }
        })
        .collect()
}

/// Checks `classifier` against the oracle over the whole domain, logging
/// every disagreement before reporting failure.
pub fn validate(property: Property, classifier: &Classifier) -> Result<()> {
    let mismatches = mismatches(property, |c| classifier.classify(c));
    if mismatches.is_empty() {
        return Ok(());
    }
    for mismatch in &mismatches {
        log::error!(
            "{} returns {} on char U+{:04X} ({:?}), where naive implementation returns {}",
            classifier.name(),
            mismatch.actual,
            mismatch.code_point,
            char::from_u32(mismatch.code_point).unwrap_or(char::REPLACEMENT_CHARACTER),
            mismatch.expected,
        );
    }
    Err(Error::Validation {
        name: classifier.name(),
        mismatches,
    })
}
