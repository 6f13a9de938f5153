//! Splicing a target sequence out of a genomic sequence.

use omics::coordinate::position::Number;
use omics::coordinate::Strand;
use tracing::trace;

use crate::sequence::reverse_complement;
use crate::Range;
use crate::Sequence;

/// The default gap character.
pub const GAP: u8 = b'-';

/// An error related to splicing.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A range falls outside of the genomic sequence. The second and third
    /// values are the first and last positions of the genomic sequence.
    OutOfBounds(Range, Number, Number),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds(range, start, end) => write!(
                f,
                "range {range} falls outside of the genomic sequence ({start}-{end})"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// The shape of a derived target sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Only the spliced residues in target orientation.
    #[default]
    Spliced,

    /// The full genomic span in genomic orientation, with every position
    /// outside the spliced ranges replaced by the gap character.
    Padded,
}

/// The result of splicing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spliced {
    /// The full genomic span, gapped outside of the spliced ranges.
    padded: Vec<u8>,

    /// The spliced residues in target orientation.
    sequence: Vec<u8>,
}

impl Spliced {
    /// Gets the gapped buffer spanning the whole genomic sequence.
    ///
    /// This buffer keeps the positional skeleton of the genomic sequence, so
    /// it is always in genomic orientation.
    pub fn padded(&self) -> &[u8] {
        &self.padded
    }

    /// Gets the spliced residues in target orientation.
    ///
    /// On the negative strand, the spliced residues are reverse complemented
    /// so that the first residue corresponds to the first position of the
    /// target.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Gets the logical (spliced) length.
    pub fn length(&self) -> Number {
        self.sequence.len() as Number
    }

    /// Consumes `self` and returns the residues for the requested [`Mode`].
    pub fn into_mode(self, mode: Mode) -> Vec<u8> {
        match mode {
            Mode::Spliced => self.sequence,
            Mode::Padded => self.padded,
        }
    }
}

/// Splices `ranges` (in target order) out of `sequence`.
///
/// An empty set of ranges produces a fully gapped buffer and a zero-length
/// spliced sequence, so callers should check [`Spliced::length()`] before
/// use.
///
/// # Examples
///
/// ```
/// use featurelift::splice::splice;
/// use featurelift::splice::GAP;
/// use featurelift::Range;
/// use featurelift::Sequence;
/// use omics::coordinate::Strand;
///
/// let sequence = Sequence::new("chr1", 1, b"ACGTACGTAC".to_vec());
/// let ranges = [Range::try_new(1, 4)?, Range::try_new(7, 10)?];
///
/// let spliced = splice(&sequence, &ranges, Strand::Positive, GAP)?;
///
/// assert_eq!(spliced.sequence(), b"ACGTGTAC");
/// assert_eq!(spliced.padded(), b"ACGT--GTAC");
/// assert_eq!(spliced.length(), 8);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn splice(
    sequence: &Sequence,
    ranges: &[Range],
    strand: Strand,
    gap: u8,
) -> Result<Spliced, Error> {
    let mut padded = vec![gap; sequence.residues().len()];
    let mut spliced = Vec::with_capacity(ranges.iter().map(|r| r.len() as usize).sum());

    for range in ranges {
        let residues = sequence
            .slice(range)
            .ok_or(Error::OutOfBounds(*range, sequence.start(), sequence.end()))?;

        // The slice succeeded, so the range begins at or after the start.
        let offset = (range.begin() - sequence.start()) as usize;
        padded[offset..offset + residues.len()].copy_from_slice(residues);

        match strand {
            Strand::Positive => spliced.extend_from_slice(residues),
            Strand::Negative => spliced.extend(reverse_complement(residues)),
        }

        trace!("spliced {} ({} residue(s))", range, residues.len());
    }

    Ok(Spliced {
        padded,
        sequence: spliced,
    })
}
