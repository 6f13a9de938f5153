//! A builder for a [`Feature`].

use indexmap::IndexMap;
use omics::coordinate::position::Number;

use crate::feature::Strand;
use crate::range;
use crate::Feature;
use crate::Range;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum MissingError {
    /// No kind was provided to the [`Builder`].
    Kind,

    /// No range was provided to the [`Builder`].
    Range,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Kind => write!(f, "kind"),
            MissingError::Range => write!(f, "range"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum MultipleError {
    /// The kind field was provided multiple times to the [`Builder`].
    Kind,

    /// The range field was provided multiple times to the [`Builder`].
    Range,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Kind => write!(f, "kind"),
            MultipleError::Range => write!(f, "range"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),

    /// An invalid range.
    Range(range::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
            Error::Range(err) => write!(f, "invalid range: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Feature`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The kind.
    kind: Option<String>,

    /// The range.
    range: Option<Range>,

    /// The strand.
    strand: Strand,

    /// The parent label.
    parent: Option<String>,

    /// The attributes.
    attributes: IndexMap<String, String>,

    /// The description.
    description: Option<String>,

    /// The feature group.
    group: Option<String>,

    /// The raw attribute text.
    raw: Option<String>,
}

impl Builder {
    /// Sets the kind for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let builder = Builder::default().kind("exon")?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn kind(mut self, kind: impl Into<String>) -> Result<Self> {
        if self.kind.is_some() {
            return Err(Error::Multiple(MultipleError::Kind));
        }

        self.kind = Some(kind.into());
        Ok(self)
    }

    /// Sets the 1-based, fully-closed range for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let builder = Builder::default().range(1, 4)?;
    /// assert!(Builder::default().range(4, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn range(mut self, begin: Number, end: Number) -> Result<Self> {
        if self.range.is_some() {
            return Err(Error::Multiple(MultipleError::Range));
        }

        self.range = Some(Range::try_new(begin, end).map_err(Error::Range)?);
        Ok(self)
    }

    /// Sets the strand for the [`Builder`]. Defaults to
    /// [`Strand::Unknown`].
    pub fn strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    /// Sets the parent label for the [`Builder`].
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Pushes an attribute into the [`Builder`]. Setting the same key again
    /// replaces the value but keeps the original position.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the description for the [`Builder`].
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the feature group for the [`Builder`].
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the raw attribute text for the [`Builder`].
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Consumes `self` to attempt to build a [`Feature`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    /// use featurelift::feature::Strand;
    ///
    /// let feature = Builder::default()
    ///     .kind("exon")?
    ///     .range(7, 10)?
    ///     .strand(Strand::Reverse)
    ///     .parent("transcript:ENST1")
    ///     .attribute("ID", "exon:ENSE1")
    ///     .try_build()?;
    ///
    /// assert_eq!(feature.begin(), 7);
    /// assert_eq!(feature.end(), 10);
    /// assert_eq!(feature.strand(), Strand::Reverse);
    /// assert_eq!(feature.parent(), Some("transcript:ENST1"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Feature> {
        let kind = self.kind.ok_or(Error::Missing(MissingError::Kind))?;
        let range = self.range.ok_or(Error::Missing(MissingError::Range))?;

        Ok(Feature {
            kind,
            range,
            strand: self.strand,
            parent: self.parent,
            attributes: self.attributes,
            description: self.description,
            group: self.group,
            raw: self.raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_to_produce_a_feature_when_no_kind_is_provided(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default().range(1, 4)?.try_build().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: kind");
        Ok(())
    }

    #[test]
    fn it_fails_to_produce_a_feature_when_no_range_is_provided(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default().kind("exon")?.try_build().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: range");
        Ok(())
    }

    #[test]
    fn it_fails_when_the_kind_is_provided_more_than_once(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default().kind("exon")?.kind("CDS").unwrap_err();
        assert_eq!(err.to_string(), "singular field set multiple times: kind");
        Ok(())
    }

    #[test]
    fn it_fails_when_the_range_is_inverted() {
        let err = Builder::default().range(10, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid range: begin position (10) cannot be greater than end position (1)"
        );
    }

    #[test]
    fn attributes_keep_their_insertion_order(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let feature = Builder::default()
            .kind("SNV")?
            .range(8, 8)?
            .attribute("ID", "rs1")
            .attribute("alleles", "A,G")
            .attribute("ID", "rs2")
            .try_build()?;

        let keys = feature.attributes().keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["ID", "alleles"]);
        assert_eq!(feature.id(), Some("rs2"));

        Ok(())
    }
}
