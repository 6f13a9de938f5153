//! Projection of genomic features onto a target.

pub mod alleles;

use omics::coordinate::Strand;
use tracing::debug;
use tracing::trace;

use crate::map::Map;
use crate::ontology;
use crate::ontology::Ontology;
use crate::ordering;
use crate::Feature;

/// Projects `features` through `map`.
///
/// Features are visited in target order for the strand of the map (ties keep
/// their input order). A feature is emitted when `retain` holds for it and
/// its whole range projects; a feature that falls even partially into a gap
/// between the segments of the map is dropped.
///
/// Each emitted feature is a copy of the original with its range replaced by
/// the projected range and, if it had none, its group set to `source`. When
/// the map is on the negative strand, the strand of each emitted feature is
/// flipped and, for features that are a `sequence_variant` according to
/// `ontology`, the alleles are recomplemented (see [`alleles::recomplement()`]).
///
/// # Examples
///
/// ```
/// use featurelift::feature::Builder;
/// use featurelift::map;
/// use featurelift::ontology::Exact;
/// use featurelift::project::project;
/// use featurelift::Range;
///
/// let map = map::Builder::default()
///     .push(Range::try_new(1, 4)?)
///     .push(Range::try_new(7, 10)?)
///     .try_build()?;
///
/// let features = vec![
///     Builder::default().kind("motif")?.range(8, 9)?.try_build()?,
///     Builder::default().kind("motif")?.range(3, 8)?.try_build()?,
/// ];
///
/// let projected = project(&features, |_| true, &map, &Exact, "featurelift");
///
/// assert_eq!(projected.len(), 1);
/// assert_eq!(projected[0].range(), &Range::try_new(6, 7)?);
/// assert_eq!(projected[0].group(), Some("featurelift"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn project<R, O>(
    features: &[Feature],
    retain: R,
    map: &Map,
    ontology: &O,
    source: &str,
) -> Vec<Feature>
where
    R: Fn(&Feature) -> bool,
    O: Ontology + ?Sized,
{
    let mut ordered = features.iter().collect::<Vec<_>>();
    ordering::sort(&mut ordered, map.strand());

    let mut results = Vec::new();
    let mut dropped = 0usize;

    for feature in ordered.into_iter().filter(|feature| retain(feature)) {
        let range = match map.project_range(feature.begin(), feature.end()) {
            Some(range) => range,
            None => {
                trace!("feature {} does not project onto the target", feature);
                dropped += 1;
                continue;
            }
        };

        let mut projected = feature.clone();
        projected.relocate(range);
        projected.group_or(source);

        if map.strand() == Strand::Negative {
            projected.set_strand(feature.strand().flip());

            if ontology.is_a(feature.kind(), ontology::SEQUENCE_VARIANT) {
                if let Some(old) = feature.alleles() {
                    projected.rewrite_alleles(old, &alleles::recomplement(old));
                }
            }
        }

        results.push(projected);
    }

    debug!(
        "projected {} feature(s); dropped {} feature(s) falling outside of the target",
        results.len(),
        dropped
    );

    results
}

#[cfg(test)]
mod tests {
    use omics::coordinate::position::Number;
    use tracing_test::traced_test;

    use super::*;
    use crate::feature::Builder;
    use crate::feature::Strand as FeatureStrand;
    use crate::map;
    use crate::map::Ratio;
    use crate::ontology::Exact;
    use crate::ontology::Table;
    use crate::Range;

    fn feature(kind: &str, begin: Number, end: Number, strand: FeatureStrand) -> Feature {
        Builder::default()
            .kind(kind)
            .and_then(|b| b.range(begin, end))
            .map(|b| b.strand(strand))
            .and_then(|b| b.try_build())
            .unwrap()
    }

    fn variant(begin: Number, alleles: &str) -> Feature {
        Builder::default()
            .kind("SNV")
            .and_then(|b| b.range(begin, begin))
            .map(|b| {
                b.strand(FeatureStrand::Forward)
                    .attribute("alleles", alleles)
                    .description(alleles)
                    .raw(format!("ID=rs1;alleles={alleles}"))
            })
            .and_then(|b| b.try_build())
            .unwrap()
    }

    fn reverse_map() -> Map {
        map::Builder::default()
            .strand(Strand::Negative)
            .push(Range::try_new(7, 10).unwrap())
            .push(Range::try_new(1, 4).unwrap())
            .try_build()
            .unwrap()
    }

    #[test]
    fn reverse_projection_flips_strands_and_emits_in_target_order(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let features = vec![
            feature("motif", 1, 2, FeatureStrand::Forward),
            feature("motif", 8, 9, FeatureStrand::Reverse),
            feature("motif", 2, 3, FeatureStrand::Unknown),
        ];

        let projected = project(&features, |_| true, &reverse_map(), &Exact, "featurelift");

        let ranges = projected.iter().map(|f| *f.range()).collect::<Vec<_>>();
        assert_eq!(
            ranges,
            vec![
                Range::try_new(2, 3)?,
                Range::try_new(6, 7)?,
                Range::try_new(7, 8)?
            ]
        );

        let strands = projected.iter().map(Feature::strand).collect::<Vec<_>>();
        assert_eq!(
            strands,
            vec![
                FeatureStrand::Forward,
                FeatureStrand::Unknown,
                FeatureStrand::Reverse
            ]
        );

        Ok(())
    }

    #[test]
    fn variants_on_the_reverse_strand_are_recomplemented() {
        let features = vec![variant(9, "A,G")];

        let projected = project(
            &features,
            |_| true,
            &reverse_map(),
            &Table::default(),
            "featurelift",
        );

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].begin(), 2);
        assert_eq!(projected[0].alleles(), Some("T,C"));
        assert_eq!(projected[0].description(), Some("T,C"));
        assert_eq!(projected[0].raw(), Some("ID=rs1;alleles=T,C"));
    }

    #[test]
    fn variants_are_only_recomplemented_when_the_ontology_says_so() {
        let features = vec![variant(9, "A,G")];

        // `SNV` is not literally `sequence_variant`.
        let projected = project(&features, |_| true, &reverse_map(), &Exact, "featurelift");

        assert_eq!(projected[0].alleles(), Some("A,G"));
    }

    #[test]
    fn forward_projection_leaves_alleles_and_strands_alone(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let map = map::Builder::default()
            .push(Range::try_new(1, 4)?)
            .push(Range::try_new(7, 10)?)
            .try_build()?;

        let projected = project(
            &[variant(8, "A,G")],
            |_| true,
            &map,
            &Table::default(),
            "featurelift",
        );

        assert_eq!(projected[0].range(), &Range::try_new(6, 6)?);
        assert_eq!(projected[0].strand(), FeatureStrand::Forward);
        assert_eq!(projected[0].alleles(), Some("A,G"));

        Ok(())
    }

    #[test]
    #[traced_test]
    fn features_crossing_a_gap_are_dropped() {
        let features = vec![
            feature("motif", 3, 8, FeatureStrand::Forward),
            feature("motif", 5, 6, FeatureStrand::Forward),
            feature("motif", 11, 20, FeatureStrand::Forward),
        ];

        let projected = project(&features, |_| true, &reverse_map(), &Exact, "featurelift");

        assert!(projected.is_empty());
        assert!(logs_contain("dropped 3 feature(s)"));
    }

    #[test]
    fn retention_and_groups() {
        let features = vec![
            feature("exon", 7, 10, FeatureStrand::Reverse),
            Builder::default()
                .kind("motif")
                .and_then(|b| b.range(1, 4))
                .map(|b| b.group("curated"))
                .and_then(|b| b.try_build())
                .unwrap(),
        ];

        let projected = project(
            &features,
            |feature| feature.kind() != "exon",
            &reverse_map(),
            &Exact,
            "featurelift",
        );

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].kind(), "motif");
        assert_eq!(projected[0].group(), Some("curated"));
    }

    #[test]
    fn codon_ratios_are_honoured() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let map = map::Builder::default()
            .ratio(Ratio::NUCLEOTIDE_TO_CODON)
            .push(Range::try_new(1, 9)?)
            .try_build()?;

        let projected = project(
            &[feature("domain", 4, 9, FeatureStrand::Forward)],
            |_| true,
            &map,
            &Exact,
            "featurelift",
        );

        assert_eq!(projected[0].range(), &Range::try_new(2, 3)?);

        Ok(())
    }
}
