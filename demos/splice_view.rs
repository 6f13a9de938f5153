//! This example splices a set of genomic ranges out of a FASTA record and
//! prints the resulting coordinate map alongside the spliced sequence. You can
//! call the program like so:
//!
//! ```
//! cargo run --release --example splice_view <FASTA> <NAME> <STRAND> <RANGE>...
//! ```
//!
//! The FASTA may be gzipped (detected by a `.gz` extension). Ranges are
//! written as `<begin>-<end>` (1-based, fully-closed) and the strand as `+` or
//! `-`. Ranges may be given in any order. Set `RUST_LOG=debug` to see how the
//! ranges were resolved.

use std::env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use featurelift::feature::Builder;
use featurelift::feature::Strand;
use featurelift::map::Ratio;
use featurelift::resolve::resolve;
use featurelift::splice::splice;
use featurelift::splice::GAP;
use featurelift::Range;
use featurelift::Sequence;
use flate2::read::GzDecoder;
use noodles::fasta;
use tabled::builder::Builder as TableBuilder;
use tabled::settings::object::Rows;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let src = env::args().nth(1).expect("missing fasta");
    let name = env::args().nth(2).expect("missing record name");
    let strand = env::args()
        .nth(3)
        .expect("missing strand")
        .parse::<Strand>()?;

    let ranges = env::args()
        .skip(4)
        .map(|s| s.parse::<Range>())
        .collect::<Result<Vec<_>, _>>()?;

    let file = File::open(&src)?;
    let inner: Box<dyn BufRead> = if src.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut reader = fasta::io::Reader::new(inner);
    let mut sequence = None;

    for result in reader.records() {
        let record = result?;

        if String::from_utf8_lossy(record.name()) == name {
            sequence = Some(Sequence::new(
                name.clone(),
                1,
                record.sequence().as_ref().to_vec(),
            ));
            break;
        }
    }

    let sequence = sequence.unwrap_or_else(|| panic!("record not found: {name}"));

    let features = ranges
        .iter()
        .map(|range| {
            Builder::default()
                .kind("exon")
                .and_then(|b| b.range(range.begin(), range.end()))
                .map(|b| b.strand(strand))
                .and_then(|b| b.try_build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let extent = resolve(&features, |_| true, true)?;
    let map = extent.to_map(1, Ratio::IDENTITY)?;

    let ranges = extent.ranges().iter().copied().collect::<Vec<_>>();
    let spliced = splice(&sequence, &ranges, extent.strand(), GAP)?;

    let mut builder = TableBuilder::default();
    builder.push_record(["Genomic", "--", "-->", "Target", "--", "-->"]);
    builder.push_record(["Begin", "End", "Length", "Begin", "End", "Length"]);

    for segment in map.segments().iter() {
        builder.push_record([
            segment.from().begin().to_string(),
            segment.from().end().to_string(),
            segment.from().len().to_string(),
            segment.to().begin().to_string(),
            segment.to().end().to_string(),
            segment.to().len().to_string(),
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);
    println!("{}", map);
    println!(">{} {} ({} residues)", sequence.name(), map.strand(), spliced.length());
    println!("{}", String::from_utf8_lossy(spliced.sequence()));
    println!("{}", String::from_utf8_lossy(spliced.padded()));

    Ok(())
}
