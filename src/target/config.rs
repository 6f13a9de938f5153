//! Configuration for deriving targets.

use omics::coordinate::position::Number;

use crate::map::Ratio;
use crate::splice;
use crate::splice::Mode;

/// The default source identifier.
pub const DEFAULT_SOURCE: &str = "featurelift";

/// An error related to building a [`Config`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The target start was zero.
    ZeroStart,

    /// The source identifier was empty.
    EmptySource,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroStart => write!(f, "targets are 1-based and cannot start at zero"),
            Error::EmptySource => write!(f, "source identifier cannot be empty"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Configuration for deriving targets.
///
/// Use [`Builder`] to construct a non-default configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The gap character used when padding.
    gap: u8,

    /// The shape of the derived sequence.
    mode: Mode,

    /// The first position of the target.
    to_start: Number,

    /// The scaling between the genomic and the target space.
    ratio: Ratio,

    /// The identifier written into the group of projected features.
    source: String,
}

impl Config {
    /// Gets the gap character.
    pub fn gap(&self) -> u8 {
        self.gap
    }

    /// Gets the output mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Gets the first position of the target.
    pub fn to_start(&self) -> Number {
        self.to_start
    }

    /// Gets the ratio.
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Gets the source identifier.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: splice::GAP,
            mode: Mode::default(),
            to_start: 1,
            ratio: Ratio::IDENTITY,
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

/// A builder for a [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The gap character.
    gap: Option<u8>,

    /// The output mode.
    mode: Option<Mode>,

    /// The first position of the target.
    to_start: Option<Number>,

    /// The ratio.
    ratio: Option<Ratio>,

    /// The source identifier.
    source: Option<String>,
}

impl Builder {
    /// Sets the gap character. Defaults to `-`.
    pub fn gap(mut self, gap: u8) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Sets the output mode. Defaults to [`Mode::Spliced`].
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the first position of the target. Defaults to `1`.
    pub fn to_start(mut self, to_start: Number) -> Self {
        self.to_start = Some(to_start);
        self
    }

    /// Sets the ratio between genomic and target units. Defaults to
    /// [`Ratio::IDENTITY`].
    pub fn ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Sets the source identifier. Defaults to `featurelift`.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Consumes `self` to attempt to build a [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use featurelift::target::config::Builder;
    /// use featurelift::target::Mode;
    ///
    /// let config = Builder::default()
    ///     .gap(b'.')
    ///     .mode(Mode::Padded)
    ///     .source("ensembl")
    ///     .try_build()?;
    ///
    /// assert_eq!(config.gap(), b'.');
    /// assert_eq!(config.mode(), Mode::Padded);
    /// assert_eq!(config.to_start(), 1);
    /// assert_eq!(config.source(), "ensembl");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Config> {
        let defaults = Config::default();

        let to_start = self.to_start.unwrap_or(defaults.to_start);
        if to_start == 0 {
            return Err(Error::ZeroStart);
        }

        let source = self.source.unwrap_or(defaults.source);
        if source.is_empty() {
            return Err(Error::EmptySource);
        }

        Ok(Config {
            gap: self.gap.unwrap_or(defaults.gap),
            mode: self.mode.unwrap_or(defaults.mode),
            to_start,
            ratio: self.ratio.unwrap_or(defaults.ratio),
            source,
        })
    }
}
