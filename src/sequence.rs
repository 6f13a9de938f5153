//! A genomic sequence with a known 1-based start.

use omics::coordinate::position::Number;

use crate::Range;

/// A stretch of genomic sequence.
///
/// The first residue sits at the 1-based position `start`, so the residue at
/// genomic position `p` lives at index `p - start`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence {
    /// The name of the sequence (e.g., the contig or region identifier).
    name: String,

    /// The 1-based position of the first residue.
    start: Number,

    /// The residues.
    residues: Vec<u8>,
}

impl Sequence {
    /// Creates a new [`Sequence`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Sequence;
    ///
    /// let sequence = Sequence::new("chr1", 101, b"ACGTACGTAC".to_vec());
    ///
    /// assert_eq!(sequence.name(), "chr1");
    /// assert_eq!(sequence.end(), 110);
    /// ```
    pub fn new(name: impl Into<String>, start: Number, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            start,
            residues: residues.into(),
        }
    }

    /// Gets the name of the sequence.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the 1-based position of the first residue.
    pub fn start(&self) -> Number {
        self.start
    }

    /// Gets the 1-based position of the last residue. For an empty sequence,
    /// this is one less than the start.
    pub fn end(&self) -> Number {
        (self.start + self.residues.len() as Number).saturating_sub(1)
    }

    /// Gets the residues.
    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// Gets the residues within a genomic range, if the range is wholly
    /// contained within the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::Range;
    /// use featurelift::Sequence;
    ///
    /// let sequence = Sequence::new("chr1", 1, b"ACGTACGTAC".to_vec());
    ///
    /// assert_eq!(sequence.slice(&Range::try_new(7, 10)?), Some(&b"GTAC"[..]));
    /// assert_eq!(sequence.slice(&Range::try_new(7, 11)?), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn slice(&self, range: &Range) -> Option<&[u8]> {
        let begin = usize::try_from(range.begin().checked_sub(self.start)?).ok()?;
        let end = usize::try_from(range.end().checked_sub(self.start)?).ok()?;
        self.residues.get(begin..=end)
    }
}

/// Complements a single nucleotide, preserving case.
///
/// `U` complements to `A`. Anything that is not a nucleotide (including
/// `N` and gap characters) is returned unchanged.
///
/// # Examples
///
/// ```
/// use featurelift::sequence::complement;
///
/// assert_eq!(complement(b'A'), b'T');
/// assert_eq!(complement(b'g'), b'c');
/// assert_eq!(complement(b'U'), b'A');
/// assert_eq!(complement(b'N'), b'N');
/// ```
pub fn complement(residue: u8) -> u8 {
    match residue {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Reverse complements a run of nucleotides.
///
/// # Examples
///
/// ```
/// use featurelift::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AACGt"), b"aCGTT".to_vec());
/// ```
pub fn reverse_complement(residues: &[u8]) -> Vec<u8> {
    residues.iter().rev().map(|residue| complement(*residue)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complementing_twice_is_the_identity() {
        let residues = b"ACGTNacgtn".to_vec();
        assert_eq!(reverse_complement(&reverse_complement(&residues)), residues);
    }

    #[test]
    fn slicing_before_the_start_fails() -> Result<(), Box<dyn std::error::Error>> {
        let sequence = Sequence::new("chr1", 5, b"ACGT".to_vec());

        assert_eq!(sequence.slice(&Range::try_new(4, 6)?), None);
        assert_eq!(sequence.slice(&Range::try_new(5, 6)?), Some(&b"AC"[..]));
        assert_eq!(sequence.slice(&Range::try_new(8, 8)?), Some(&b"T"[..]));

        Ok(())
    }

    #[test]
    fn an_empty_sequence_ends_before_it_starts() {
        let sequence = Sequence::new("chr1", 5, Vec::new());
        assert_eq!(sequence.end(), 4);
    }
}
