//! The strand upon which an annotated feature is located.

use std::str::FromStr;

/// An error related to the parsing of a strand.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError(String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse strand error: {} is not a valid strand", self.0)
    }
}

impl std::error::Error for ParseError {}

/// The strand of a feature.
///
/// Unlike [`omics::coordinate::Strand`], a feature's strand may be unknown.
/// An unknown strand is read as forward whenever a direction is required.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Strand {
    /// The forward strand (`+`).
    Forward,
    /// The reverse strand (`-`).
    Reverse,
    /// An unknown or unstranded feature (`.` or `?`).
    #[default]
    Unknown,
}

impl Strand {
    /// Gets the direction of the strand, reading [`Strand::Unknown`] as
    /// forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Strand;
    /// use omics::coordinate::Strand as Direction;
    ///
    /// assert_eq!(Strand::Forward.direction(), Direction::Positive);
    /// assert_eq!(Strand::Reverse.direction(), Direction::Negative);
    /// assert_eq!(Strand::Unknown.direction(), Direction::Positive);
    /// ```
    pub fn direction(&self) -> omics::coordinate::Strand {
        match self {
            Strand::Reverse => omics::coordinate::Strand::Negative,
            Strand::Forward | Strand::Unknown => omics::coordinate::Strand::Positive,
        }
    }

    /// Gets the known direction of the strand, if there is one.
    pub fn known(&self) -> Option<omics::coordinate::Strand> {
        match self {
            Strand::Forward => Some(omics::coordinate::Strand::Positive),
            Strand::Reverse => Some(omics::coordinate::Strand::Negative),
            Strand::Unknown => None,
        }
    }

    /// Swaps forward and reverse. An unknown strand stays unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Strand;
    ///
    /// assert_eq!(Strand::Forward.flip(), Strand::Reverse);
    /// assert_eq!(Strand::Reverse.flip(), Strand::Forward);
    /// assert_eq!(Strand::Unknown.flip(), Strand::Unknown);
    /// ```
    pub fn flip(self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
            Strand::Unknown => Strand::Unknown,
        }
    }
}

impl From<omics::coordinate::Strand> for Strand {
    fn from(value: omics::coordinate::Strand) -> Self {
        match value {
            omics::coordinate::Strand::Positive => Strand::Forward,
            omics::coordinate::Strand::Negative => Strand::Reverse,
        }
    }
}

impl FromStr for Strand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            "." | "?" => Ok(Self::Unknown),
            c => Err(ParseError(c.to_string())),
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_strand_from_str() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("+".parse::<Strand>()?, Strand::Forward);
        assert_eq!("-".parse::<Strand>()?, Strand::Reverse);
        assert_eq!(".".parse::<Strand>()?, Strand::Unknown);
        assert_eq!("?".parse::<Strand>()?, Strand::Unknown);

        let err = "x".parse::<Strand>().unwrap_err();
        assert_eq!(err.to_string(), "parse strand error: x is not a valid strand");

        Ok(())
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
        assert_eq!(Strand::Unknown.to_string(), ".");
    }

    #[test]
    fn test_known_direction() {
        assert_eq!(
            Strand::Forward.known(),
            Some(omics::coordinate::Strand::Positive)
        );
        assert_eq!(
            Strand::Reverse.known(),
            Some(omics::coordinate::Strand::Negative)
        );
        assert_eq!(Strand::Unknown.known(), None);
    }
}
