//! A piecewise map between two coordinate spaces.
//!
//! A [`Map`] is an ordered set of [`Segment`]s, each pairing a range in the
//! "from" space (generally a genomic sequence) with a range in the "to" space
//! (generally a spliced target sequence). The "to" space is covered exactly,
//! with no gaps, while the "from" space may have gaps: that is where introns
//! are skipped.
//!
//! Segments are ordered by ascending "to" position. On the positive strand,
//! that is ascending "from" order. On the negative strand, it is descending
//! "from" order, meaning the "to" space walks backwards across the "from"
//! space.
//!
//! ```text
//! from | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10|
//!      |-------------|       |---------------|
//!              \                     /
//!               \___________________/___
//!                                  /    \
//! to (-)               | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 |
//! ```
//!
//! Positions are scaled by a [`Ratio`], which allows (for example) a map from
//! nucleotides to codons. Units are counted across the whole concatenated
//! "from" space, so a codon may straddle two segments.
//!
//! A [`Map`] cannot be instantiated directly. Instead, you should use
//! [`Builder`] or [`Extent::to_map()`](crate::resolve::Extent::to_map).

use nonempty::NonEmpty;
use omics::coordinate::position::Number;
use omics::coordinate::Strand;
use rust_lapper as lapper;

use crate::Range;

pub mod builder;
pub mod segment;

pub use builder::Builder;
pub use segment::Segment;

/// An error related to a [`Map`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// No segments were provided.
    Empty,

    /// Two "from" ranges overlap.
    Overlapping(Range, Range),

    /// The "from" ranges are not in "to" order for the strand.
    Misordered(Range, Range),

    /// The total "from" length does not divide evenly into "to" units.
    UnalignedRatio(Number, Ratio),

    /// A ratio with a zero term.
    ZeroRatio,

    /// The "to" space must begin at a 1-based position.
    ZeroStart,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Empty => write!(f, "a map requires at least one segment"),
            Error::Overlapping(a, b) => write!(f, "segments overlap: {a} and {b}"),
            Error::Misordered(a, b) => {
                write!(f, "segments are out of order for the strand: {a} then {b}")
            }
            Error::UnalignedRatio(length, ratio) => write!(
                f,
                "a total length of {length} cannot be evenly mapped with a ratio of {ratio}"
            ),
            Error::ZeroRatio => write!(f, "ratio terms must be non-zero"),
            Error::ZeroStart => write!(f, "the \"to\" space must begin at position 1 or later"),
        }
    }
}

impl std::error::Error for Error {}

/// The integer scaling between "from" units and "to" units.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ratio {
    /// The number of "from" units.
    from: Number,

    /// The number of "to" units.
    to: Number,
}

impl Ratio {
    /// One nucleotide to one nucleotide.
    pub const IDENTITY: Ratio = Ratio { from: 1, to: 1 };

    /// Three nucleotides to one codon (or amino acid).
    pub const NUCLEOTIDE_TO_CODON: Ratio = Ratio { from: 3, to: 1 };

    /// One codon (or amino acid) to three nucleotides.
    pub const CODON_TO_NUCLEOTIDE: Ratio = Ratio { from: 1, to: 3 };

    /// Attempts to create a new [`Ratio`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Ratio;
    ///
    /// assert_eq!(Ratio::try_new(3, 1)?, Ratio::NUCLEOTIDE_TO_CODON);
    /// assert!(Ratio::try_new(0, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(from: Number, to: Number) -> Result<Self, Error> {
        if from == 0 || to == 0 {
            return Err(Error::ZeroRatio);
        }

        Ok(Self { from, to })
    }

    /// Gets the number of "from" units.
    pub fn from(&self) -> Number {
        self.from
    }

    /// Gets the number of "to" units.
    pub fn to(&self) -> Number {
        self.to
    }

    /// Converts a 0-based "from" offset to the 0-based "to" offset of the
    /// unit it starts in.
    fn first_to(&self, offset: Number) -> Number {
        offset * self.to / self.from
    }

    /// Converts a 0-based "from" offset to the 0-based "to" offset of the
    /// last unit it covers.
    fn last_to(&self, offset: Number) -> Number {
        ((offset + 1) * self.to - 1) / self.from
    }

    /// Converts a 0-based "to" offset to the first 0-based "from" offset.
    fn first_from(&self, offset: Number) -> Number {
        offset * self.from / self.to
    }

    /// Converts a 0-based "to" offset to the last 0-based "from" offset.
    fn last_from(&self, offset: Number) -> Number {
        ((offset + 1) * self.from - 1) / self.to
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

/// A piecewise map from a "from" space to a "to" space.
#[derive(Debug)]
pub struct Map {
    /// The segments in "to" order.
    segments: NonEmpty<Segment>,

    /// The direction in which the "to" space walks across the "from" space.
    strand: Strand,

    /// The scaling between the spaces.
    ratio: Ratio,

    /// The whole "to" space.
    to: Range,

    /// The total number of "from" positions covered by the map.
    from_length: Number,

    /// A lookup of "from" positions to segment indices.
    index: lapper::Lapper<Number, usize>,
}

impl Map {
    /// Gets the segments of the map in "to" order.
    pub fn segments(&self) -> &NonEmpty<Segment> {
        &self.segments
    }

    /// Gets the strand of the map.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the ratio of the map.
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Gets the total number of "from" positions covered by the map.
    pub fn from_length(&self) -> Number {
        self.from_length
    }

    /// Gets the whole "to" space of the map.
    pub fn to_range(&self) -> &Range {
        &self.to
    }

    /// Finds the segment containing a "from" position.
    fn segment_at(&self, position: Number) -> Option<&Segment> {
        self.index
            .find(position, position + 1)
            .next()
            .and_then(|iv| self.segments.get(iv.val))
    }

    /// Finds the segment containing a 0-based cumulative "from" offset.
    fn segment_at_offset(&self, offset: Number) -> Option<&Segment> {
        // Segments are stored in ascending offset order.
        let after = self
            .segments
            .iter()
            .position(|segment| segment.offset() > offset)
            .unwrap_or(self.segments.len());

        after
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .filter(|segment| offset < segment.offset() + segment.from().len())
    }

    /// Projects a single "from" position into the "to" space.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    ///
    /// let map = Builder::default()
    ///     .push(Range::try_new(1, 4)?)
    ///     .push(Range::try_new(7, 10)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(map.project_position(7), Some(5));
    /// assert_eq!(map.project_position(5), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn project_position(&self, position: Number) -> Option<Number> {
        let segment = self.segment_at(position)?;
        let offset = segment.cumulative(position, self.strand);
        Some(self.to.begin() + self.ratio.first_to(offset))
    }

    /// Projects a "from" range into the "to" space.
    ///
    /// The range is projected only if every position within it is covered by
    /// the map. A range that falls wholly or partially within a gap (an
    /// intron) yields [`None`]: it is never clipped to the covered portion.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    /// use omics::coordinate::Strand;
    ///
    /// let map = Builder::default()
    ///     .strand(Strand::Negative)
    ///     .push(Range::try_new(7, 10)?)
    ///     .push(Range::try_new(1, 4)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(map.project_range(8, 10), Some(Range::try_new(1, 3)?));
    /// assert_eq!(map.project_range(4, 7), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn project_range(&self, begin: Number, end: Number) -> Option<Range> {
        let range = Range::try_new(begin.min(end), begin.max(end)).ok()?;

        let covered: Number = self
            .index
            .find(range.begin(), range.end() + 1)
            .filter_map(|iv| self.segments.get(iv.val))
            .filter_map(|segment| segment.from().overlap(&range))
            .map(|overlap| overlap.len())
            .sum();

        if covered != range.len() {
            return None;
        }

        let a = self
            .segment_at(range.begin())?
            .cumulative(range.begin(), self.strand);
        let b = self
            .segment_at(range.end())?
            .cumulative(range.end(), self.strand);

        let (low, high) = (a.min(b), a.max(b));

        Range::try_new(
            self.to.begin() + self.ratio.first_to(low),
            self.to.begin() + self.ratio.last_to(high),
        )
        .ok()
    }

    /// Projects a single "to" position back into the "from" space. When the
    /// ratio maps many "from" units onto one "to" unit, the first "from"
    /// position of the unit is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    /// use omics::coordinate::Strand;
    ///
    /// let map = Builder::default()
    ///     .strand(Strand::Negative)
    ///     .push(Range::try_new(7, 10)?)
    ///     .push(Range::try_new(1, 4)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(map.inverse_position(1), Some(10));
    /// assert_eq!(map.inverse_position(5), Some(4));
    /// assert_eq!(map.inverse_position(9), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn inverse_position(&self, position: Number) -> Option<Number> {
        if !self.to.contains(position) {
            return None;
        }

        let offset = self.ratio.first_from(position - self.to.begin());
        let segment = self.segment_at_offset(offset)?;

        Some(segment.position_at(offset - segment.offset(), self.strand))
    }

    /// Projects a "to" range back into the "from" space.
    ///
    /// The result is the list of "from" pieces in "to" order. [`None`] is
    /// returned if the range is not wholly within the "to" space.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    ///
    /// let map = Builder::default()
    ///     .push(Range::try_new(1, 4)?)
    ///     .push(Range::try_new(7, 10)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(
    ///     map.inverse_range(3, 6),
    ///     Some(vec![Range::try_new(3, 4)?, Range::try_new(7, 8)?])
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn inverse_range(&self, begin: Number, end: Number) -> Option<Vec<Range>> {
        let (begin, end) = (begin.min(end), begin.max(end));

        if !self.to.contains(begin) || !self.to.contains(end) {
            return None;
        }

        let low = self.ratio.first_from(begin - self.to.begin());
        let high = self
            .ratio
            .last_from(end - self.to.begin())
            .min(self.from_length - 1);

        let mut pieces = Vec::new();

        for segment in self.segments.iter() {
            let first = segment.offset();
            let last = first + segment.from().len() - 1;

            if last < low || first > high {
                continue;
            }

            let a = segment.position_at(low.max(first) - first, self.strand);
            let b = segment.position_at(high.min(last) - first, self.strand);

            pieces.push(Range::try_new(a.min(b), a.max(b)).ok()?);
        }

        Some(pieces)
    }
}

impl std::fmt::Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let segments = self
            .segments
            .iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>();

        write!(f, "[{}] ({}, {})", segments.join(", "), self.strand, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward() -> Result<Map, Box<dyn std::error::Error>> {
        Ok(Builder::default()
            .push(Range::try_new(1, 4)?)
            .push(Range::try_new(7, 10)?)
            .try_build()?)
    }

    fn reverse() -> Result<Map, Box<dyn std::error::Error>> {
        Ok(Builder::default()
            .strand(Strand::Negative)
            .push(Range::try_new(7, 10)?)
            .push(Range::try_new(1, 4)?)
            .try_build()?)
    }

    #[test]
    fn an_identity_segment_offsets_by_a_constant() -> Result<(), Box<dyn std::error::Error>> {
        let map = Builder::default()
            .to_start(101)
            .push(Range::try_new(20, 29)?)
            .try_build()?;

        let projected = map.project_range(22, 25).unwrap();
        assert_eq!(projected.len(), 4);
        assert_eq!(projected.begin(), 22 + 81);

        Ok(())
    }

    #[test]
    fn forward_ranges_project_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let map = forward()?;

        assert_eq!(map.to_range(), &Range::try_new(1, 8)?);
        assert_eq!(map.project_range(1, 4), Some(Range::try_new(1, 4)?));
        assert_eq!(map.project_range(7, 10), Some(Range::try_new(5, 8)?));
        assert_eq!(map.project_range(3, 3), Some(Range::try_new(3, 3)?));

        Ok(())
    }

    #[test]
    fn reverse_ranges_walk_backwards() -> Result<(), Box<dyn std::error::Error>> {
        let map = reverse()?;

        let segments = map.segments().iter().collect::<Vec<_>>();
        assert_eq!(segments[0].from(), &Range::try_new(7, 10)?);
        assert_eq!(segments[0].to(), &Range::try_new(1, 4)?);
        assert_eq!(segments[1].from(), &Range::try_new(1, 4)?);
        assert_eq!(segments[1].to(), &Range::try_new(5, 8)?);

        assert_eq!(map.project_position(10), Some(1));
        assert_eq!(map.project_position(7), Some(4));
        assert_eq!(map.project_position(4), Some(5));
        assert_eq!(map.project_position(1), Some(8));
        assert_eq!(map.project_range(8, 8), Some(Range::try_new(3, 3)?));

        Ok(())
    }

    #[test]
    fn ranges_straddling_a_gap_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
        for map in [forward()?, reverse()?] {
            assert_eq!(map.project_range(3, 7), None);
            assert_eq!(map.project_range(4, 5), None);
            assert_eq!(map.project_range(5, 6), None);
            assert_eq!(map.project_range(1, 10), None);
            assert_eq!(map.project_range(9, 12), None);
        }

        Ok(())
    }

    #[test]
    fn abutting_segments_project_across_the_join() -> Result<(), Box<dyn std::error::Error>> {
        let map = Builder::default()
            .push(Range::try_new(1, 4)?)
            .push(Range::try_new(5, 8)?)
            .try_build()?;

        assert_eq!(map.project_range(3, 6), Some(Range::try_new(3, 6)?));

        Ok(())
    }

    #[test]
    fn inverse_projection() -> Result<(), Box<dyn std::error::Error>> {
        let map = reverse()?;

        assert_eq!(
            map.inverse_range(3, 6),
            Some(vec![Range::try_new(7, 8)?, Range::try_new(3, 4)?])
        );
        assert_eq!(map.inverse_range(0, 2), None);
        assert_eq!(map.inverse_range(8, 9), None);

        for position in 1..=8 {
            let from = map.inverse_position(position).unwrap();
            assert_eq!(map.project_position(from), Some(position));
        }

        Ok(())
    }

    #[test]
    fn codons_straddle_segments() -> Result<(), Box<dyn std::error::Error>> {
        // Two exons of 4 and 5 nucleotides make three codons; the second
        // codon is split 1 + 2 across the exons.
        let map = Builder::default()
            .ratio(Ratio::NUCLEOTIDE_TO_CODON)
            .push(Range::try_new(1, 4)?)
            .push(Range::try_new(10, 14)?)
            .try_build()?;

        assert_eq!(map.to_range(), &Range::try_new(1, 3)?);
        assert_eq!(map.project_position(3), Some(1));
        assert_eq!(map.project_position(4), Some(2));
        assert_eq!(map.project_position(11), Some(2));
        assert_eq!(map.project_position(12), Some(3));
        assert_eq!(map.project_range(10, 11), Some(Range::try_new(2, 2)?));
        assert_eq!(map.project_range(4, 11), None);
        assert_eq!(map.inverse_position(2), Some(4));
        assert_eq!(
            map.inverse_range(2, 2),
            Some(vec![Range::try_new(4, 4)?, Range::try_new(10, 11)?])
        );

        Ok(())
    }

    #[test]
    fn codons_expand_to_nucleotides() -> Result<(), Box<dyn std::error::Error>> {
        let map = Builder::default()
            .ratio(Ratio::CODON_TO_NUCLEOTIDE)
            .push(Range::try_new(1, 3)?)
            .try_build()?;

        assert_eq!(map.to_range(), &Range::try_new(1, 9)?);
        assert_eq!(map.project_position(2), Some(4));
        assert_eq!(map.project_range(2, 2), Some(Range::try_new(4, 6)?));
        assert_eq!(map.inverse_position(6), Some(2));

        Ok(())
    }

    #[test]
    fn display() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(reverse()?.to_string(), "[7-10 -> 1-4, 1-4 -> 5-8] (-, 1:1)");
        Ok(())
    }
}
