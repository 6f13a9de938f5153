//! Recomplementing variant alleles for the reverse strand.
//!
//! Alleles are written as a comma-separated list of tokens (e.g., `A,G` or
//! `C,HGMD_MUTATION`). Tokens made up solely of nucleotides are reverse
//! complemented; anything else is a descriptive label and is passed through
//! untouched. Tokens are trimmed of surrounding whitespace.
//!
//! Only `A`, `C`, `G`, `T` and `N` count as nucleotides. A token containing
//! `U` cannot be recomplemented without turning it into DNA, so it is treated
//! as a descriptive label.

use std::sync::LazyLock;

use regex::Regex;

use crate::sequence;

/// The delimiter between allele tokens.
const DELIMITER: char = ',';

/// Matches a token made up solely of nucleotides.
static NUCLEOTIDES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ACGTNacgtn]+$").unwrap());

/// Indicates whether a token is made up solely of nucleotides.
///
/// # Examples
///
/// ```
/// use featurelift::project::alleles::is_nucleotides;
///
/// assert!(is_nucleotides("A"));
/// assert!(is_nucleotides("acgtn"));
/// assert!(!is_nucleotides("AU"));
/// assert!(!is_nucleotides("HGMD_MUTATION"));
/// assert!(!is_nucleotides("-"));
/// assert!(!is_nucleotides(""));
/// ```
pub fn is_nucleotides(token: &str) -> bool {
    NUCLEOTIDES.is_match(token)
}

/// Reverse complements a nucleotide token, preserving case.
///
/// # Examples
///
/// ```
/// use featurelift::project::alleles::reverse_complement;
///
/// assert_eq!(reverse_complement("A"), "T");
/// assert_eq!(reverse_complement("AcG"), "CgT");
/// ```
pub fn reverse_complement(token: &str) -> String {
    sequence::reverse_complement(token.as_bytes())
        .into_iter()
        .map(char::from)
        .collect()
}

/// Recomplements every nucleotide token in a comma-separated allele string.
/// The order of the tokens is preserved and each token is trimmed.
///
/// # Examples
///
/// ```
/// use featurelift::project::alleles::recomplement;
///
/// assert_eq!(recomplement("A,G"), "T,C");
/// assert_eq!(recomplement("AC,-,COSMIC_MUTATION"), "GT,-,COSMIC_MUTATION");
/// assert_eq!(recomplement("A, G"), "T,C");
/// ```
pub fn recomplement(alleles: &str) -> String {
    alleles
        .split(DELIMITER)
        .map(str::trim)
        .map(|token| match is_nucleotides(token) {
            true => reverse_complement(token),
            false => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomplementing_twice_is_the_identity() {
        for alleles in [
            "A,G",
            "ACGT,T",
            "aCgT",
            "N,GATTACA",
            "HGMD_MUTATION",
            "A,-,TT",
            "U,AU",
            "u,ACGU,T",
        ] {
            assert_eq!(recomplement(&recomplement(alleles)), alleles);
        }
    }

    #[test]
    fn uracil_tokens_are_descriptive() {
        assert!(!is_nucleotides("U"));
        assert!(!is_nucleotides("acgu"));
        assert_eq!(recomplement("U,AU"), "U,AU");
        assert_eq!(recomplement("A,U"), "T,U");
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(recomplement("A, G"), "T,C");
        assert_eq!(recomplement(" AC ,HGMD_MUTATION "), "GT,HGMD_MUTATION");
        assert_eq!(recomplement(&recomplement("A, G")), "A,G");
    }

    #[test]
    fn descriptive_tokens_are_fixed_points() {
        for token in ["HGMD_MUTATION", "-", "<DEL>", ""] {
            assert_eq!(recomplement(token), token);
        }
    }

    #[test]
    fn single_bases_are_complemented_in_place() {
        assert_eq!(recomplement("A,G"), "T,C");
        assert_eq!(recomplement("C,T,A"), "G,A,T");
    }
}
