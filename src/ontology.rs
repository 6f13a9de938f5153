//! The ontology subtype relation.
//!
//! The engine never decides on its own whether one feature kind is a subtype
//! of another. Instead, it asks an [`Ontology`], which is supplied by the
//! caller. Any `Fn(&str, &str) -> bool` is an ontology, and two small
//! implementations are provided here: [`Exact`] and [`Table`].

use std::collections::HashMap;

/// The `gene` term.
pub const GENE: &str = "gene";

/// The `transcript` term.
pub const TRANSCRIPT: &str = "transcript";

/// The `exon` term.
pub const EXON: &str = "exon";

/// The `CDS` term.
pub const CDS: &str = "CDS";

/// The `sequence_variant` term.
pub const SEQUENCE_VARIANT: &str = "sequence_variant";

/// A subtype relation between feature kinds.
///
/// Implementations must be total and free of side effects.
pub trait Ontology {
    /// Indicates whether `kind` is `ancestor` or a subtype of it.
    fn is_a(&self, kind: &str, ancestor: &str) -> bool;
}

impl<F> Ontology for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_a(&self, kind: &str, ancestor: &str) -> bool {
        self(kind, ancestor)
    }
}

/// An ontology where a kind is only ever itself (compared without regard to
/// ASCII case).
///
/// # Examples
///
/// ```
/// use featurelift::ontology::Exact;
/// use featurelift::ontology::Ontology;
///
/// assert!(Exact.is_a("cds", "CDS"));
/// assert!(!Exact.is_a("mRNA", "transcript"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact;

impl Ontology for Exact {
    fn is_a(&self, kind: &str, ancestor: &str) -> bool {
        kind.eq_ignore_ascii_case(ancestor)
    }
}

/// An ontology backed by an explicit table of `child → parent` relations.
///
/// Lookups follow parents transitively and, like [`Exact`], ignore ASCII
/// case throughout. [`Table::default()`] carries the
/// Sequence Ontology relations needed to resolve the target kinds in this
/// crate; [`Table::empty()`] carries none.
///
/// # Examples
///
/// ```
/// use featurelift::ontology::Ontology;
/// use featurelift::ontology::Table;
///
/// let ontology = Table::default();
///
/// assert!(ontology.is_a("mRNA", "transcript"));
/// assert!(ontology.is_a("SNV", "sequence_variant"));
/// assert!(ontology.is_a("snv", "Sequence_Variant"));
/// assert!(!ontology.is_a("exon", "transcript"));
///
/// let ontology = Table::empty().relate("pseudogenic_exon", "exon");
/// assert!(ontology.is_a("pseudogenic_exon", "exon"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    /// The parents of each kind, keyed and valued in ASCII lowercase.
    parents: HashMap<String, Vec<String>>,
}

/// The relations carried by [`Table::default()`].
const DEFAULT_RELATIONS: &[(&str, &str)] = &[
    ("protein_coding_gene", GENE),
    ("ncRNA_gene", GENE),
    ("pseudogene", GENE),
    ("mRNA", TRANSCRIPT),
    ("primary_transcript", TRANSCRIPT),
    ("processed_transcript", TRANSCRIPT),
    ("pseudogenic_transcript", TRANSCRIPT),
    ("ncRNA", TRANSCRIPT),
    ("lnc_RNA", "ncRNA"),
    ("miRNA", "ncRNA"),
    ("snRNA", "ncRNA"),
    ("snoRNA", "ncRNA"),
    ("rRNA", "ncRNA"),
    ("tRNA", "ncRNA"),
    ("NMD_transcript_variant", TRANSCRIPT),
    ("coding_exon", EXON),
    ("noncoding_exon", EXON),
    ("SNV", "sequence_alteration"),
    ("insertion", "sequence_alteration"),
    ("deletion", "sequence_alteration"),
    ("indel", "sequence_alteration"),
    ("substitution", "sequence_alteration"),
    ("sequence_alteration", SEQUENCE_VARIANT),
    ("structural_variant", SEQUENCE_VARIANT),
    ("copy_number_variation", "structural_variant"),
];

impl Table {
    /// Creates a table with no relations.
    pub fn empty() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Consumes `self` to add a `child → parent` relation.
    pub fn relate(mut self, child: impl Into<String>, parent: impl Into<String>) -> Self {
        self.parents
            .entry(child.into().to_ascii_lowercase())
            .or_default()
            .push(parent.into().to_ascii_lowercase());
        self
    }
}

impl Default for Table {
    fn default() -> Self {
        DEFAULT_RELATIONS
            .iter()
            .fold(Self::empty(), |table, (child, parent)| {
                table.relate(*child, *parent)
            })
    }
}

impl Ontology for Table {
    fn is_a(&self, kind: &str, ancestor: &str) -> bool {
        let kind = kind.to_ascii_lowercase();
        let mut pending = vec![kind.as_str()];
        let mut seen = Vec::new();

        while let Some(current) = pending.pop() {
            if current.eq_ignore_ascii_case(ancestor) {
                return true;
            }

            if seen.contains(&current) {
                continue;
            }

            seen.push(current);

            if let Some(parents) = self.parents.get(current) {
                pending.extend(parents.iter().map(String::as_str));
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_ontologies() {
        let ontology = |kind: &str, ancestor: &str| kind == "SNV" && ancestor == SEQUENCE_VARIANT;
        assert!(ontology.is_a("SNV", SEQUENCE_VARIANT));
        assert!(!ontology.is_a("exon", SEQUENCE_VARIANT));
    }

    #[test]
    fn table_lookups_are_transitive() {
        let ontology = Table::default();
        assert!(ontology.is_a("lnc_RNA", TRANSCRIPT));
        assert!(ontology.is_a("copy_number_variation", SEQUENCE_VARIANT));
        assert!(ontology.is_a("gene", GENE));
        assert!(!ontology.is_a("gene", TRANSCRIPT));
    }

    #[test]
    fn table_lookups_ignore_case() {
        let ontology = Table::default();
        assert!(ontology.is_a("snv", SEQUENCE_VARIANT));
        assert!(ontology.is_a("SNV", "SEQUENCE_VARIANT"));
        assert!(ontology.is_a("mrna", TRANSCRIPT));
        assert!(ontology.is_a("LNC_RNA", "ncrna"));
        assert!(ontology.is_a("cds", CDS));
        assert!(!ontology.is_a("snv", TRANSCRIPT));

        let ontology = Table::empty().relate("Pseudogenic_Exon", "EXON");
        assert!(ontology.is_a("pseudogenic_exon", EXON));
    }

    #[test]
    fn table_lookups_terminate_on_cycles() {
        let ontology = Table::empty().relate("a", "b").relate("b", "a");
        assert!(ontology.is_a("a", "b"));
        assert!(!ontology.is_a("a", "c"));
    }
}
