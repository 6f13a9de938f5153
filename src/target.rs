//! Deriving target sequences and their features for accessions.
//!
//! A target is derived in three steps:
//!
//! 1. The genomic extent of the target is [resolved](crate::resolve) from the
//!    features that define it (as decided by its [`Kind`]).
//! 2. The target sequence is [spliced](crate::splice) out of the genomic
//!    sequence.
//! 3. The remaining features are [projected](crate::project) onto the
//!    target through the [`Map`] built from the extent.
//!
//! [`derive()`] runs these steps for a single accession and [`derive_all()`]
//! runs them for a batch of accessions, keeping the failure of one accession
//! from affecting any other.

use tracing::debug;
use tracing::warn;

use crate::map;
use crate::map::Map;
use crate::ontology::Ontology;
use crate::project::project;
use crate::resolve;
use crate::resolve::resolve;
use crate::splice;
use crate::splice::splice;
use crate::Feature;
use crate::Sequence;

pub mod config;
pub mod kind;

pub use config::Config;
pub use kind::Kind;

pub use crate::splice::Mode;

/// An error related to deriving a [`Target`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The extent of the target could not be resolved.
    Resolve(resolve::Error),

    /// The map for the target could not be built.
    Map(map::Error),

    /// The target sequence could not be spliced.
    Splice(splice::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Resolve(err) => write!(f, "resolve error: {}", err),
            Error::Map(err) => write!(f, "map error: {}", err),
            Error::Splice(err) => write!(f, "splice error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A derived target.
#[derive(Debug)]
pub struct Target {
    /// The accession.
    accession: String,

    /// The kind.
    kind: Kind,

    /// The residues, shaped per the configured [`Mode`].
    sequence: Vec<u8>,

    /// The map from the genomic space to the target space.
    map: Map,

    /// The projected features in target order.
    features: Vec<Feature>,
}

impl Target {
    /// Gets the accession of the target.
    pub fn accession(&self) -> &str {
        &self.accession
    }

    /// Gets the kind of the target.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the residues of the target.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Gets the map from the genomic space to the target space.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Gets the projected features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Consumes `self` to return the residues and the projected features.
    pub fn into_parts(self) -> (Vec<u8>, Vec<Feature>) {
        (self.sequence, self.features)
    }
}

/// Derives the target of the given `kind` for `accession`.
///
/// # Examples
///
/// ```
/// use featurelift::feature::Builder;
/// use featurelift::feature::Strand;
/// use featurelift::ontology::Table;
/// use featurelift::target;
/// use featurelift::target::Config;
/// use featurelift::target::Kind;
/// use featurelift::Sequence;
///
/// let sequence = Sequence::new("chr1", 1, b"ACGTACGTAC".to_vec());
///
/// let features = vec![
///     Builder::default()
///         .kind("exon")?
///         .range(1, 4)?
///         .strand(Strand::Forward)
///         .parent("transcript:ENST1")
///         .try_build()?,
///     Builder::default()
///         .kind("exon")?
///         .range(7, 10)?
///         .strand(Strand::Forward)
///         .parent("transcript:ENST1")
///         .try_build()?,
/// ];
///
/// let target = target::derive(
///     &sequence,
///     &features,
///     "ENST1",
///     Kind::Transcript,
///     &Config::default(),
///     &Table::default(),
/// )?;
///
/// assert_eq!(target.sequence(), b"ACGTGTAC");
/// assert!(target.features().is_empty());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn derive<O>(
    sequence: &Sequence,
    features: &[Feature],
    accession: &str,
    kind: Kind,
    config: &Config,
    ontology: &O,
) -> Result<Target>
where
    O: Ontology + ?Sized,
{
    let extent = resolve(
        features,
        |feature| kind.is_defining(feature, accession, ontology),
        kind.is_spliceable(),
    )
    .map_err(Error::Resolve)?;

    let map = extent
        .to_map(config.to_start(), config.ratio())
        .map_err(Error::Map)?;

    let ranges = extent.ranges().iter().copied().collect::<Vec<_>>();
    let spliced =
        splice(sequence, &ranges, extent.strand(), config.gap()).map_err(Error::Splice)?;

    let features = project(
        features,
        |feature| kind.retains(feature, accession, ontology),
        &map,
        ontology,
        config.source(),
    );

    debug!(
        "derived {} {} from {}: {} residue(s), {} feature(s), map {}",
        kind,
        accession,
        sequence.name(),
        spliced.length(),
        features.len(),
        map
    );

    Ok(Target {
        accession: accession.to_string(),
        kind,
        sequence: spliced.into_mode(config.mode()),
        map,
        features,
    })
}

/// Derives the targets of the given `kind` for each of `accessions`.
///
/// Results are returned in the order of `accessions`, each paired with its
/// accession. An accession that cannot be derived is logged and reported in
/// its own result; it never prevents other accessions from being derived.
///
/// With the `parallel` feature enabled, accessions are derived on the
/// [`rayon`] global thread pool.
pub fn derive_all<A, O>(
    sequence: &Sequence,
    features: &[Feature],
    accessions: &[A],
    kind: Kind,
    config: &Config,
    ontology: &O,
) -> Vec<(String, Result<Target>)>
where
    A: AsRef<str> + Sync,
    O: Ontology + Sync + ?Sized,
{
    let run = |accession: &A| {
        let accession = accession.as_ref();
        let result = derive(sequence, features, accession, kind, config, ontology);

        if let Err(err) = &result {
            warn!("unable to derive {} {}: {}", kind, accession, err);
        }

        (accession.to_string(), result)
    };

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        accessions.par_iter().map(run).collect::<Vec<_>>()
    };

    #[cfg(not(feature = "parallel"))]
    let results = accessions.iter().map(run).collect::<Vec<_>>();

    results
}
