//! Kinds of target sequences.

use crate::ontology;
use crate::ontology::Ontology;
use crate::Feature;

/// An error related to parsing a [`Kind`].
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError(String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse kind error: {} is not a valid target kind", self.0)
    }
}

impl std::error::Error for ParseError {}

/// The kind of sequence being derived for an accession.
///
/// Each kind decides which features _define_ the target, whether the target
/// may be made up of more than one genomic range, and which of the remaining
/// features are carried over onto the target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// The full genomic span of a gene, identified by the gene's ID.
    Gene,

    /// A spliced transcript (cDNA), made up of the exons of a transcript.
    Transcript,

    /// A spliced coding sequence, made up of the CDS pieces of a transcript.
    Cds,

    /// The unspliced genomic span of a transcript, identified by the
    /// transcript's ID.
    Genomic,
}

impl Kind {
    /// Indicates whether `feature` defines the target for `accession`.
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::feature::Builder;
    /// use featurelift::ontology::Table;
    /// use featurelift::target::Kind;
    ///
    /// let exon = Builder::default()
    ///     .kind("exon")?
    ///     .range(1, 4)?
    ///     .parent("transcript:ENST1")
    ///     .try_build()?;
    ///
    /// let ontology = Table::default();
    ///
    /// assert!(Kind::Transcript.is_defining(&exon, "ENST1", &ontology));
    /// assert!(!Kind::Transcript.is_defining(&exon, "ENST2", &ontology));
    /// assert!(!Kind::Cds.is_defining(&exon, "ENST1", &ontology));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_defining<O>(&self, feature: &Feature, accession: &str, ontology: &O) -> bool
    where
        O: Ontology + ?Sized,
    {
        let kind = feature.kind();

        match self {
            Kind::Gene => ontology.is_a(kind, ontology::GENE) && feature.has_id(accession),
            Kind::Transcript => {
                ontology.is_a(kind, ontology::EXON) && feature.has_parent(accession)
            }
            Kind::Cds => ontology.is_a(kind, ontology::CDS) && feature.has_parent(accession),
            Kind::Genomic => {
                ontology.is_a(kind, ontology::TRANSCRIPT) && feature.has_id(accession)
            }
        }
    }

    /// Indicates whether `feature` is carried over onto the target for
    /// `accession`.
    ///
    /// The defining features themselves are never carried over; neither are
    /// features that belong to some other accession.
    pub fn retains<O>(&self, feature: &Feature, accession: &str, ontology: &O) -> bool
    where
        O: Ontology + ?Sized,
    {
        let kind = feature.kind();

        // Features without a parent are not scoped to any accession.
        let in_scope = || {
            feature
                .parent()
                .map(|parent| parent.contains(accession))
                .unwrap_or(true)
        };

        match self {
            Kind::Gene => {
                !ontology.is_a(kind, ontology::GENE)
                    && !(ontology.is_a(kind, ontology::TRANSCRIPT)
                        && !feature.has_parent(accession))
            }
            Kind::Transcript => !ontology.is_a(kind, ontology::EXON) && in_scope(),
            Kind::Cds => !ontology.is_a(kind, ontology::CDS) && in_scope(),
            Kind::Genomic => {
                !(ontology.is_a(kind, ontology::TRANSCRIPT) && !feature.has_id(accession))
            }
        }
    }

    /// Indicates whether the target may be spliced together from more than
    /// one genomic range.
    pub fn is_spliceable(&self) -> bool {
        matches!(self, Kind::Transcript | Kind::Cds)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Gene => write!(f, "gene"),
            Kind::Transcript => write!(f, "cdna"),
            Kind::Cds => write!(f, "cds"),
            Kind::Genomic => write!(f, "genomic"),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gene" => Ok(Kind::Gene),
            "cdna" | "transcript" => Ok(Kind::Transcript),
            "cds" => Ok(Kind::Cds),
            "genomic" | "genome" => Ok(Kind::Genomic),
            _ => Err(ParseError(s.to_string())),
        }
    }
}
