//! Annotated features located on a genomic sequence.
//!
//! A [`Feature`] is the unit that the whole engine operates on: an ontology
//! term (its _kind_) attached to a 1-based, fully-closed range on a genomic
//! sequence, together with a strand, an optional parent label and free-form
//! attributes.

use indexmap::IndexMap;
use omics::coordinate::position::Number;

use crate::Range;

pub mod builder;
pub mod strand;

pub use builder::Builder;
pub use strand::Strand;

/// The attribute holding a feature's identifier.
pub const ID: &str = "ID";

/// The attribute holding a variant's comma-separated alleles.
pub const ALLELES: &str = "alleles";

/// An annotated feature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    /// The ontology term for the feature (e.g., `exon` or `CDS`).
    kind: String,

    /// The location of the feature.
    range: Range,

    /// The strand of the feature.
    strand: Strand,

    /// The parent label (e.g., `transcript:ENST00000123456`).
    parent: Option<String>,

    /// The free-form attributes in the order they were provided.
    attributes: IndexMap<String, String>,

    /// A free-text description.
    description: Option<String>,

    /// The feature group, which is generally the source of the feature.
    group: Option<String>,

    /// The attribute text as it was read upstream.
    raw: Option<String>,
}

impl Feature {
    /// Gets the kind of the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let feature = Builder::default().kind("exon")?.range(1, 4)?.try_build()?;
    /// assert_eq!(feature.kind(), "exon");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Gets the range of the feature.
    pub fn range(&self) -> &Range {
        &self.range
    }

    /// Gets the first position of the feature.
    pub fn begin(&self) -> Number {
        self.range.begin()
    }

    /// Gets the last position of the feature.
    pub fn end(&self) -> Number {
        self.range.end()
    }

    /// Gets the number of positions covered by the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let feature = Builder::default().kind("exon")?.range(7, 10)?.try_build()?;
    /// assert_eq!(feature.len(), 4);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Number {
        self.range.len()
    }

    /// Gets the strand of the feature.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the parent label of the feature, if one exists.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Gets the attributes of the feature.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Gets a single attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Gets the identifier of the feature from either the `ID` or `id`
    /// attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let feature = Builder::default()
    ///     .kind("gene")?
    ///     .range(1, 10)?
    ///     .attribute("ID", "gene:ENSG01")
    ///     .try_build()?;
    ///
    /// assert_eq!(feature.id(), Some("gene:ENSG01"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(&self) -> Option<&str> {
        self.attribute(ID).or_else(|| self.attribute("id"))
    }

    /// Gets the comma-separated alleles of the feature, if any.
    pub fn alleles(&self) -> Option<&str> {
        self.attribute(ALLELES)
    }

    /// Gets the description of the feature, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gets the feature group, if any.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Gets the raw attribute text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Indicates whether the parent label references `accession`.
    ///
    /// Parent labels follow the `<kind>:<id>` convention, so matching is done
    /// by containment rather than equality. A feature without a parent
    /// references nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    ///
    /// let feature = Builder::default()
    ///     .kind("exon")?
    ///     .range(1, 4)?
    ///     .parent("transcript:ENST1")
    ///     .try_build()?;
    ///
    /// assert!(feature.has_parent("ENST1"));
    /// assert!(!feature.has_parent("ENST2"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn has_parent(&self, accession: &str) -> bool {
        self.parent()
            .map(|parent| parent.contains(accession))
            .unwrap_or(false)
    }

    /// Indicates whether the identifier references `accession` (again by
    /// containment to tolerate `<kind>:` prefixes).
    pub fn has_id(&self, accession: &str) -> bool {
        self.id().map(|id| id.contains(accession)).unwrap_or(false)
    }

    /// Moves the feature onto a new range.
    pub(crate) fn relocate(&mut self, range: Range) {
        self.range = range;
    }

    /// Sets the strand of the feature.
    pub(crate) fn set_strand(&mut self, strand: Strand) {
        self.strand = strand;
    }

    /// Sets the feature group if one has not already been set.
    pub(crate) fn group_or(&mut self, group: &str) {
        if self.group.is_none() {
            self.group = Some(group.to_string());
        }
    }

    /// Rewrites the alleles of the feature.
    ///
    /// The structured attribute, the description and the first
    /// `alleles=<old>` occurrence within the raw text are all updated.
    pub(crate) fn rewrite_alleles(&mut self, old: &str, new: &str) {
        self.attributes.insert(ALLELES.to_string(), new.to_string());
        self.description = Some(new.to_string());

        if let Some(raw) = self.raw.as_mut() {
            let from = format!("{ALLELES}={old}");
            let to = format!("{ALLELES}={new}");
            *raw = raw.replacen(&from, &to, 1);
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.strand, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewriting_alleles_updates_every_representation() -> Result<(), Box<dyn std::error::Error>>
    {
        let mut feature = Builder::default()
            .kind("SNV")?
            .range(8, 8)?
            .attribute(ALLELES, "A,G")
            .raw("ID=rs1;alleles=A,G;alleles=A,G")
            .try_build()?;

        feature.rewrite_alleles("A,G", "T,C");

        assert_eq!(feature.alleles(), Some("T,C"));
        assert_eq!(feature.description(), Some("T,C"));
        assert_eq!(feature.raw(), Some("ID=rs1;alleles=T,C;alleles=A,G"));

        Ok(())
    }

    #[test]
    fn an_unscoped_feature_references_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let feature = Builder::default().kind("exon")?.range(1, 4)?.try_build()?;
        assert!(!feature.has_parent("ENST1"));
        assert!(!feature.has_id("ENST1"));
        Ok(())
    }

    #[test]
    fn the_group_is_only_defaulted_once() -> Result<(), Box<dyn std::error::Error>> {
        let mut feature = Builder::default()
            .kind("exon")?
            .range(1, 4)?
            .group("ensembl")
            .try_build()?;

        feature.group_or("featurelift");
        assert_eq!(feature.group(), Some("ensembl"));

        Ok(())
    }

    #[test]
    fn display() -> Result<(), Box<dyn std::error::Error>> {
        let feature = Builder::default()
            .kind("exon")?
            .range(1, 4)?
            .strand(Strand::Reverse)
            .try_build()?;

        assert_eq!(feature.to_string(), "exon:-:1-4");
        Ok(())
    }
}
