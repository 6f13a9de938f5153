//! A builder for a [`Map`].

use nonempty::NonEmpty;
use omics::coordinate::position::Number;
use omics::coordinate::Strand;
use rust_lapper as lapper;

use crate::map::Error;
use crate::map::Map;
use crate::map::Ratio;
use crate::map::Segment;
use crate::Range;

/// The inner value of the "from" lookup data structure.
type Iv = lapper::Interval<Number, usize>;

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Map`].
#[derive(Debug)]
pub struct Builder {
    /// The direction of the map.
    strand: Strand,

    /// The scaling of the map.
    ratio: Ratio,

    /// The first position of the "to" space.
    to_start: Number,

    /// The "from" ranges in "to" order.
    ranges: Vec<Range>,
}

impl Builder {
    /// Sets the strand for the [`Builder`]. Defaults to
    /// [`Strand::Positive`].
    pub fn strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    /// Sets the ratio for the [`Builder`]. Defaults to [`Ratio::IDENTITY`].
    pub fn ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the first position of the "to" space for the [`Builder`].
    /// Defaults to `1`.
    pub fn to_start(mut self, to_start: Number) -> Self {
        self.to_start = to_start;
        self
    }

    /// Pushes a "from" range into the [`Builder`]. Ranges must be pushed in
    /// "to" order: ascending on the positive strand and descending on the
    /// negative strand.
    pub fn push(mut self, range: Range) -> Self {
        self.ranges.push(range);
        self
    }

    /// Consumes `self` to attempt to build a [`Map`].
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
    /// assert_eq!(map.segments().len(), 2);
    /// assert_eq!(map.from_length(), 8);
    ///
    /// // Misordered for the negative strand.
    /// let err = Builder::default()
    ///     .strand(Strand::Negative)
    ///     .push(Range::try_new(1, 4)?)
    ///     .push(Range::try_new(7, 10)?)
    ///     .try_build()
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     err.to_string(),
    ///     "segments are out of order for the strand: 1-4 then 7-10"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Map> {
        if self.to_start == 0 {
            return Err(Error::ZeroStart);
        }

        let ranges = NonEmpty::from_vec(self.ranges).ok_or(Error::Empty)?;

        for (prev, next) in ranges.iter().zip(ranges.iter().skip(1)) {
            if prev.overlap(next).is_some() {
                return Err(Error::Overlapping(*prev, *next));
            }

            let ordered = match self.strand {
                Strand::Positive => next.begin() > prev.end(),
                Strand::Negative => next.end() < prev.begin(),
            };

            if !ordered {
                return Err(Error::Misordered(*prev, *next));
            }
        }

        let from_length: Number = ranges.iter().map(Range::len).sum();

        if (from_length * self.ratio.to()) % self.ratio.from() != 0 {
            return Err(Error::UnalignedRatio(from_length, self.ratio));
        }

        let to = Range::try_new(
            self.to_start,
            self.to_start + from_length * self.ratio.to() / self.ratio.from() - 1,
        )
        .map_err(|_| Error::UnalignedRatio(from_length, self.ratio))?;

        let mut offset = 0;
        let mut segments = Vec::with_capacity(ranges.len());
        let mut intervals = Vec::<Iv>::with_capacity(ranges.len());

        for (i, from) in ranges.into_iter().enumerate() {
            let to = Range::try_new(
                self.to_start + self.ratio.first_to(offset),
                self.to_start + self.ratio.last_to(offset + from.len() - 1),
            )
            .map_err(|_| Error::UnalignedRatio(from_length, self.ratio))?;

            intervals.push(lapper::Interval {
                start: from.begin(),
                stop: from.end() + 1,
                val: i,
            });

            segments.push(Segment::new(from, to, offset));
            offset += from.len();
        }

        let segments = NonEmpty::from_vec(segments).ok_or(Error::Empty)?;

        Ok(Map {
            segments,
            strand: self.strand,
            ratio: self.ratio,
            to,
            from_length,
            index: lapper::Lapper::new(intervals),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            strand: Strand::Positive,
            ratio: Ratio::IDENTITY,
            to_start: 1,
            ranges: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_to_build_an_empty_map() {
        let err = Builder::default().try_build().unwrap_err();
        assert_eq!(err, Error::Empty);
        assert_eq!(err.to_string(), "a map requires at least one segment");
    }

    #[test]
    fn it_fails_to_build_a_map_with_overlapping_segments(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .push(Range::try_new(1, 5)?)
            .push(Range::try_new(5, 10)?)
            .try_build()
            .unwrap_err();

        assert_eq!(err.to_string(), "segments overlap: 1-5 and 5-10");
        Ok(())
    }

    #[test]
    fn it_fails_to_build_a_map_with_unaligned_codons(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .ratio(Ratio::NUCLEOTIDE_TO_CODON)
            .push(Range::try_new(1, 4)?)
            .try_build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "a total length of 4 cannot be evenly mapped with a ratio of 3:1"
        );
        Ok(())
    }

    #[test]
    fn it_fails_to_build_a_map_starting_at_zero(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .to_start(0)
            .push(Range::try_new(1, 4)?)
            .try_build()
            .unwrap_err();

        assert_eq!(err, Error::ZeroStart);
        Ok(())
    }

    #[test]
    fn to_space_is_contiguous() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let map = Builder::default()
            .push(Range::try_new(2, 3)?)
            .push(Range::try_new(10, 12)?)
            .push(Range::try_new(20, 20)?)
            .try_build()?;

        let to = map
            .segments()
            .iter()
            .map(|segment| (segment.to().begin(), segment.to().end()))
            .collect::<Vec<_>>();

        assert_eq!(to, vec![(1, 2), (3, 5), (6, 6)]);
        Ok(())
    }
}
