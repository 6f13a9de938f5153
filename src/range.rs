//! A 1-based, fully-closed range of positions on a genomic sequence.
//!
//! Ranges carry no direction: `begin` is always less than or equal to `end`.
//! Direction lives with the [`Map`](crate::map::Map) or
//! [`Feature`](crate::Feature) that owns the range.
//!
//! ```text
//! ================ seq0 ===============
//!
//! | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! -------------------------------------
//! |   |   | X | X | X | X | X |   |   |  <= 3-7
//! ```

use omics::coordinate::position::Number;

/// An error related to a [`Range`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// Positions are 1-based, so a range cannot begin at zero.
    ZeroBegin,

    /// The begin position is greater than the end position.
    BeginGreaterThanEnd(Number, Number),

    /// The range could not be parsed from a string.
    Parse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroBegin => write!(f, "ranges are 1-based and cannot begin at zero"),
            Error::BeginGreaterThanEnd(begin, end) => write!(
                f,
                "begin position ({begin}) cannot be greater than end position ({end})"
            ),
            Error::Parse(value) => write!(f, "parse range error: {value} is not a valid range"),
        }
    }
}

impl std::error::Error for Error {}

/// A 1-based, fully-closed range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Range {
    /// The first position in the range.
    begin: Number,

    /// The last position in the range.
    end: Number,
}

impl Range {
    /// Attempts to create a new [`Range`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Range;
    ///
    /// let range = Range::try_new(3, 7)?;
    /// assert_eq!(range.len(), 5);
    ///
    /// assert!(Range::try_new(0, 7).is_err());
    /// assert!(Range::try_new(7, 3).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(begin: Number, end: Number) -> Result<Self, Error> {
        if begin == 0 {
            return Err(Error::ZeroBegin);
        }

        if begin > end {
            return Err(Error::BeginGreaterThanEnd(begin, end));
        }

        Ok(Self { begin, end })
    }

    /// Gets the first position in the range.
    pub fn begin(&self) -> Number {
        self.begin
    }

    /// Gets the last position in the range.
    pub fn end(&self) -> Number {
        self.end
    }

    /// Gets the number of positions in the range.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Number {
        self.end - self.begin + 1
    }

    /// Indicates whether a position falls within the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Range;
    ///
    /// let range = Range::try_new(3, 7)?;
    ///
    /// assert!(range.contains(3));
    /// assert!(range.contains(7));
    /// assert!(!range.contains(2));
    /// assert!(!range.contains(8));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn contains(&self, position: Number) -> bool {
        self.begin <= position && position <= self.end
    }

    /// Gets the overlapping portion of two ranges, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Range;
    ///
    /// let a = Range::try_new(3, 7)?;
    /// let b = Range::try_new(6, 10)?;
    ///
    /// assert_eq!(a.overlap(&b), Some(Range::try_new(6, 7)?));
    /// assert_eq!(a.overlap(&Range::try_new(8, 9)?), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn overlap(&self, other: &Range) -> Option<Range> {
        let begin = self.begin.max(other.begin);
        let end = self.end.min(other.end);

        match begin <= end {
            true => Some(Range { begin, end }),
            false => None,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

impl std::str::FromStr for Range {
    type Err = Error;

    /// Parses a range in the `<begin>-<end>` form it is displayed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Range;
    ///
    /// let range = "7-10".parse::<Range>()?;
    /// assert_eq!(range, Range::try_new(7, 10)?);
    ///
    /// assert!("7..10".parse::<Range>().is_err());
    /// assert!("10-7".parse::<Range>().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (begin, end) = s
            .split_once('-')
            .ok_or_else(|| Error::Parse(s.to_string()))?;

        let begin = begin
            .trim()
            .parse::<Number>()
            .map_err(|_| Error::Parse(s.to_string()))?;
        let end = end
            .trim()
            .parse::<Number>()
            .map_err(|_| Error::Parse(s.to_string()))?;

        Range::try_new(begin, end)
    }
}
