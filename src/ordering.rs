//! Strand-aware ordering of located items.
//!
//! On the positive strand items are ordered by ascending begin position. On
//! the negative strand they are ordered by descending end position. Ties keep
//! the order in which the items were discovered, which is what makes feature
//! emission reproducible.

use std::cmp::Reverse;

use omics::coordinate::position::Number;
use omics::coordinate::Strand;

use crate::Feature;
use crate::Range;

/// Something that sits on a 1-based, fully-closed range.
pub trait Located {
    /// The first position.
    fn begin(&self) -> Number;

    /// The last position.
    fn end(&self) -> Number;
}

impl Located for Range {
    fn begin(&self) -> Number {
        Range::begin(self)
    }

    fn end(&self) -> Number {
        Range::end(self)
    }
}

impl Located for Feature {
    fn begin(&self) -> Number {
        Feature::begin(self)
    }

    fn end(&self) -> Number {
        Feature::end(self)
    }
}

impl<T: Located> Located for &T {
    fn begin(&self) -> Number {
        T::begin(*self)
    }

    fn end(&self) -> Number {
        T::end(*self)
    }
}

/// A sort key produced by [`sort_key()`].
///
/// Keys are only comparable when produced for the same strand.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Key {
    /// Ascending by begin position.
    Ascending(Number),

    /// Descending by end position.
    Descending(Reverse<Number>),
}

/// Gets the sort key for an item on the given strand.
///
/// # Examples
///
/// ```
/// use featurelift::ordering::sort_key;
/// use featurelift::Range;
/// use omics::coordinate::Strand;
///
/// let a = Range::try_new(1, 4)?;
/// let b = Range::try_new(7, 10)?;
///
/// assert!(sort_key(&a, Strand::Positive) < sort_key(&b, Strand::Positive));
/// assert!(sort_key(&b, Strand::Negative) < sort_key(&a, Strand::Negative));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn sort_key<T: Located>(item: &T, strand: Strand) -> Key {
    match strand {
        Strand::Positive => Key::Ascending(item.begin()),
        Strand::Negative => Key::Descending(Reverse(item.end())),
    }
}

/// Stably sorts items for the given strand.
///
/// # Examples
///
/// ```
/// use featurelift::ordering::sort;
/// use featurelift::Range;
/// use omics::coordinate::Strand;
///
/// let mut ranges = vec![Range::try_new(1, 4)?, Range::try_new(7, 10)?];
/// sort(&mut ranges, Strand::Negative);
///
/// assert_eq!(ranges[0].begin(), 7);
/// assert_eq!(ranges[1].begin(), 1);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn sort<T: Located>(items: &mut [T], strand: Strand) {
    items.sort_by_key(|item| sort_key(item, strand));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Builder;

    fn feature(id: &str, begin: Number, end: Number) -> Feature {
        Builder::default()
            .kind("exon")
            .and_then(|b| b.range(begin, end))
            .map(|b| b.attribute("ID", id))
            .and_then(|b| b.try_build())
            .unwrap()
    }

    #[test]
    fn ties_keep_discovery_order_on_the_positive_strand() {
        let mut features = vec![
            feature("c", 5, 9),
            feature("a", 1, 3),
            feature("b", 5, 6),
            feature("d", 1, 8),
        ];

        sort(&mut features, Strand::Positive);

        let ids = features.iter().filter_map(Feature::id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn ties_keep_discovery_order_on_the_negative_strand() {
        let mut features = vec![
            feature("a", 1, 3),
            feature("b", 2, 9),
            feature("c", 5, 9),
            feature("d", 1, 12),
        ];

        sort(&mut features, Strand::Negative);

        let ids = features.iter().filter_map(Feature::id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn sorting_twice_is_reproducible() {
        let input = vec![
            feature("a", 4, 4),
            feature("b", 4, 4),
            feature("c", 2, 4),
            feature("d", 4, 4),
        ];

        let mut first = input.clone();
        let mut second = input;

        sort(&mut first, Strand::Negative);
        sort(&mut second, Strand::Negative);

        assert_eq!(first, second);
    }
}
