//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Cli::into_settings`] validates it into
//! [`Settings`], which is what the rest of the program consumes.

use crate::algorithms::errors::GeneratorError;
use crate::algorithms::Algorithm;
use crate::dataset::Dataset;
use crate::playback::Speed;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Fewest elements a random array can have
pub const MIN_SIZE: usize = 5;
/// Most elements a random array can have
pub const MAX_SIZE: usize = 30;
pub const DEFAULT_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "invalid speed {0} ms (expected {min}..={max} in steps of {step})",
        min = Speed::MIN_MS,
        max = Speed::MAX_MS,
        step = Speed::STEP_MS
    )]
    InvalidSpeed(u64),

    #[error("invalid array size {0} (expected {min}..={max})", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(usize),

    #[error("--target only applies to search algorithms, not {0}")]
    TargetWithoutSearch(Algorithm),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// A step-through terminal visualizer for classic search and sort algorithms
#[derive(Debug, Parser)]
#[command(name = "algotty", version, about)]
pub struct Cli {
    /// Algorithm to visualize
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Comma-separated input array; random when omitted
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i64>>,

    /// Value to search for (search algorithms only)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<i64>,

    /// Number of elements in a random array
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Delay between steps during playback, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    pub speed: u64,

    /// Seed for random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the trace as JSON instead of starting the visualizer
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub speed: Speed,
    pub size: usize,
    pub seed: Option<u64>,
    /// User-supplied input, already checked against `algorithm`
    pub dataset: Option<Dataset>,
    pub dump: bool,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let speed = Speed::from_millis(self.speed).ok_or(ConfigError::InvalidSpeed(self.speed))?;

        if self.target.is_some() && !self.algorithm.is_search() {
            return Err(ConfigError::TargetWithoutSearch(self.algorithm));
        }

        // Explicit values still leave random regeneration one keypress away
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize(self.size));
        }

        let dataset = match self.values {
            Some(values) => {
                // Fail on bad input now rather than on the first keypress
                self.algorithm.generate(&values, self.target)?;
                Some(Dataset::new(values, self.target))
            }
            None => None,
        };

        Ok(Settings {
            algorithm: self.algorithm,
            speed,
            size: self.size,
            seed: self.seed,
            dataset,
            dump: self.dump,
            log_file: self.log_file,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            algorithm: Algorithm::Bubble,
            speed: Speed::default(),
            size: DEFAULT_SIZE,
            seed: None,
            dataset: None,
            dump: false,
            log_file: None,
        }
    }
}
