//! Resolution of the genomic extent of a target sequence.
//!
//! Given a set of features and a predicate that recognizes the features that
//! _define_ a target (for example, the exons of a particular transcript),
//! [`resolve()`] produces the ordered genomic ranges that make up the target
//! and the strand it lies on.

use std::collections::VecDeque;

use nonempty::NonEmpty;
use omics::coordinate::position::Number;
use omics::coordinate::Strand;
use tracing::debug;
use tracing::warn;

use crate::map;
use crate::map::Map;
use crate::map::Ratio;
use crate::ordering;
use crate::Feature;
use crate::Range;

/// An error related to resolving a target.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// No defining feature was found.
    ///
    /// This is recoverable: the target simply cannot be derived from the
    /// available annotation.
    NoTargetFound,

    /// Two defining features disagree on their strand. The first strand is
    /// the working strand and the second strand (with its range) is the
    /// feature that disagreed.
    ConflictingStrand(Strand, Strand, Range),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTargetFound => write!(f, "no defining feature was found"),
            Error::ConflictingStrand(working, found, range) => write!(
                f,
                "conflicting strand: defining features are on the {working} strand, but the \
                 feature at {range} is on the {found} strand"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// The resolved genomic extent of a target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Extent {
    /// The genomic ranges in target order.
    ranges: NonEmpty<Range>,

    /// The strand of the target.
    strand: Strand,
}

impl Extent {
    /// Gets the genomic ranges in target order.
    pub fn ranges(&self) -> &NonEmpty<Range> {
        &self.ranges
    }

    /// Gets the strand of the target.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the total length of the target, which is the sum of the lengths of
    /// the ranges.
    pub fn length(&self) -> Number {
        self.ranges.iter().map(Range::len).sum()
    }

    /// Builds the [`Map`] from the genomic ranges to a target that begins at
    /// `to_start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    /// use featurelift::feature::Strand;
    /// use featurelift::map::Ratio;
    /// use featurelift::resolve::resolve;
    /// use featurelift::Range;
    ///
    /// let features = vec![
    ///     Builder::default().kind("exon")?.range(7, 10)?.strand(Strand::Reverse).try_build()?,
    ///     Builder::default().kind("exon")?.range(1, 4)?.strand(Strand::Reverse).try_build()?,
    /// ];
    ///
    /// let extent = resolve(&features, |feature| feature.kind() == "exon", true)?;
    /// let map = extent.to_map(1, Ratio::IDENTITY)?;
    ///
    /// assert_eq!(map.to_range(), &Range::try_new(1, 8)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_map(&self, to_start: Number, ratio: Ratio) -> std::result::Result<Map, map::Error> {
        self.ranges
            .iter()
            .fold(
                map::Builder::default()
                    .strand(self.strand)
                    .ratio(ratio)
                    .to_start(to_start),
                |builder, range| builder.push(*range),
            )
            .try_build()
    }
}

/// Resolves the genomic extent of a target.
///
/// Every feature for which `is_defining` holds contributes its range. The
/// first defining feature fixes the working strand, with an unknown strand
/// read as positive. Any later defining feature on the opposite strand aborts
/// the resolution with [`Error::ConflictingStrand`]. Later features with an
/// unknown strand take on the working strand.
///
/// When `spliceable` is `false`, the target is contiguous by construction and
/// resolution stops at the first defining feature.
///
/// # Examples
///
/// ```
/// use featurelift::feature::Builder;
/// use featurelift::resolve::resolve;
/// use featurelift::resolve::Error;
///
/// let features = vec![
///     Builder::default().kind("gene")?.range(1, 10)?.try_build()?,
///     Builder::default().kind("exon")?.range(1, 4)?.try_build()?,
///     Builder::default().kind("exon")?.range(7, 10)?.try_build()?,
/// ];
///
/// let extent = resolve(&features, |feature| feature.kind() == "exon", true)?;
/// assert_eq!(extent.length(), 8);
///
/// let err = resolve(&features, |feature| feature.kind() == "CDS", true).unwrap_err();
/// assert_eq!(err, Error::NoTargetFound);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve<F>(features: &[Feature], is_defining: F, spliceable: bool) -> Result<Extent>
where
    F: Fn(&Feature) -> bool,
{
    let mut working: Option<Strand> = None;
    let mut ranges = VecDeque::new();

    for feature in features.iter().filter(|&feature| is_defining(feature)) {
        let strand = match (working, feature.strand().known()) {
            (Some(working), Some(found)) if working != found => {
                warn!(
                    "defining feature {} conflicts with the working strand ({})",
                    feature, working
                );
                return Err(Error::ConflictingStrand(working, found, *feature.range()));
            }
            (None, found) => {
                let found = found.unwrap_or(Strand::Positive);
                working = Some(found);
                found
            }
            (Some(working), _) => working,
        };

        match strand {
            Strand::Positive => ranges.push_back(*feature.range()),
            Strand::Negative => ranges.push_front(*feature.range()),
        }

        if !spliceable {
            break;
        }
    }

    let strand = working.unwrap_or(Strand::Positive);

    let mut ranges = Vec::from(ranges);
    ordering::sort(&mut ranges, strand);

    let ranges = NonEmpty::from_vec(ranges).ok_or(Error::NoTargetFound)?;

    debug!(
        "resolved {} range(s) on the {} strand",
        ranges.len(),
        strand
    );

    Ok(Extent { ranges, strand })
}
