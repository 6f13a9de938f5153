//! `featurelift` is a crate for deriving spliced sequences from a genomic
//! sequence and projecting annotated features onto them.
//!
//! The crate provides two main points of entry:
//!
//! - The individual building blocks: resolving the genomic extent of a
//!   target, splicing its sequence and projecting features through a
//!   coordinate [`Map`].
//! - A per-accession pipeline that strings the building blocks together for
//!   a given [target kind](crate::target::Kind).
//!
//! Most users will be interested in the latter functionality. However, the
//! former is exposed in the event that a different pipeline is needed.
//!
//! ## Coordinates
//!
//! All positions are 1-based and fully-closed: a [`Range`] from `7` to `10`
//! covers four positions. A [`Sequence`] knows the position of its first
//! residue, so the residue at genomic position `p` lives at index
//! `p - start`.
//!
//! ## Maps
//!
//! A [`Map`] pairs a list of genomic ("from") ranges with a contiguous target
//! ("to") space. On the positive strand, the "to" space walks forwards across
//! the "from" space; on the negative strand, it walks backwards. Maps are
//! constructed with a [`map::Builder`] or from a resolved
//! [`Extent`](crate::resolve::Extent).
//!
//! ```
//! use featurelift::map;
//! use featurelift::Range;
//! use omics::coordinate::Strand;
//!
//! let map = map::Builder::default()
//!     .strand(Strand::Negative)
//!     .push(Range::try_new(7, 10)?)
//!     .push(Range::try_new(1, 4)?)
//!     .try_build()?;
//!
//! assert_eq!(map.to_range(), &Range::try_new(1, 8)?);
//! assert_eq!(map.project_position(10), Some(1));
//! assert_eq!(map.project_position(1), Some(8));
//!
//! // Ranges that fall (even partially) within an intron are dropped.
//! assert_eq!(map.project_range(4, 7), None);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Deriving targets
//!
//! The [`target::derive()`] function resolves, splices and projects for a
//! single accession. Whether one kind of feature is a subtype of another is
//! always answered by a caller-supplied [`Ontology`](crate::ontology::Ontology).
//!
//! ```
//! use featurelift::feature::Builder;
//! use featurelift::feature::Strand;
//! use featurelift::ontology::Table;
//! use featurelift::target;
//! use featurelift::target::Config;
//! use featurelift::target::Kind;
//! use featurelift::Sequence;
//!
//! let sequence = Sequence::new("chr1", 1, b"ACGTACGTAC".to_vec());
//!
//! let features = vec![
//!     Builder::default()
//!         .kind("exon")?
//!         .range(7, 10)?
//!         .strand(Strand::Reverse)
//!         .parent("transcript:ENST1")
//!         .try_build()?,
//!     Builder::default()
//!         .kind("exon")?
//!         .range(1, 4)?
//!         .strand(Strand::Reverse)
//!         .parent("transcript:ENST1")
//!         .try_build()?,
//!     Builder::default()
//!         .kind("SNV")?
//!         .range(8, 8)?
//!         .attribute("alleles", "A,G")
//!         .try_build()?,
//! ];
//!
//! let target = target::derive(
//!     &sequence,
//!     &features,
//!     "ENST1",
//!     Kind::Transcript,
//!     &Config::default(),
//!     &Table::default(),
//! )?;
//!
//! assert_eq!(target.sequence(), b"GTACACGT");
//!
//! let variant = &target.features()[0];
//! assert_eq!(variant.begin(), 3);
//! assert_eq!(variant.alleles(), Some("T,C"));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod feature;
pub mod map;
pub mod ontology;
pub mod ordering;
pub mod project;
pub mod range;
pub mod resolve;
pub mod sequence;
pub mod splice;
pub mod target;

pub use feature::Feature;
pub use map::Map;
pub use range::Range;
pub use sequence::Sequence;
pub use target::Target;
