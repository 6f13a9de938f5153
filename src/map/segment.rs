//! Pairs of ranges that map onto one another linearly.

use omics::coordinate::position::Number;
use omics::coordinate::Strand;

use crate::Range;

/// A utility struct which contains a linearly mapped segment of both the
/// "from" space (generally a genomic sequence) and the "to" space (generally
/// a spliced target sequence).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// The range in the "from" space.
    from: Range,

    /// The range in the "to" space.
    to: Range,

    /// The number of "from" units that precede this segment in the map.
    offset: Number,
}

impl Segment {
    /// Creates a new segment. Only a [`Builder`](crate::map::Builder)
    /// establishes the relationship between the two ranges.
    pub(crate) fn new(from: Range, to: Range, offset: Number) -> Self {
        Self { from, to, offset }
    }

    /// Gets the "from" range for the segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    ///
    /// let map = Builder::default()
    ///     .push(Range::try_new(7, 10)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(map.segments().first().from(), &Range::try_new(7, 10)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from(&self) -> &Range {
        &self.from
    }

    /// Gets the "to" range for the segment.
    ///
    /// When the map's ratio is not 1:1, a unit may straddle two segments. In
    /// that case, the unit is reported in both segments' "to" ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::map::Builder;
    /// use featurelift::Range;
    ///
    /// let map = Builder::default()
    ///     .push(Range::try_new(7, 10)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(map.segments().first().to(), &Range::try_new(1, 4)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to(&self) -> &Range {
        &self.to
    }

    /// Gets the number of "from" units preceding this segment.
    pub fn offset(&self) -> Number {
        self.offset
    }

    /// Gets the 0-based offset of a "from" position within the whole map
    /// (not just this segment), walking in the direction of `strand`.
    ///
    /// The position must fall within [`Segment::from()`].
    pub(crate) fn cumulative(&self, position: Number, strand: Strand) -> Number {
        let within = match strand {
            Strand::Positive => position - self.from.begin(),
            Strand::Negative => self.from.end() - position,
        };

        self.offset + within
    }

    /// Gets the "from" position at the given 0-based offset within this
    /// segment, walking in the direction of `strand`.
    pub(crate) fn position_at(&self, within: Number, strand: Strand) -> Number {
        match strand {
            Strand::Positive => self.from.begin() + within,
            Strand::Negative => self.from.end() - within,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
