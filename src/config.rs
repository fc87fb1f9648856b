use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Sorting algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Stable merge sort, returns a new sequence
    Merge,
    /// In-place Lomuto quicksort
    Quick,
}

/// Pivot strategy for quicksort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PivotKind {
    Last,
    MedianOfThree,
    Random,
}

/// How quicksort schedules its partition windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalKind {
    Recursive,
    WorkStack,
}

/// Configuration for a sort run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Sorting algorithm
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,

    /// Quicksort pivot strategy
    #[serde(default = "default_pivot")]
    pub pivot: PivotKind,

    /// Quicksort window scheduling
    #[serde(default = "default_traversal")]
    pub traversal: TraversalKind,

    /// Seed for the random pivot (fresh entropy when absent)
    pub seed: Option<u64>,

    /// First index of the quicksort window
    pub low: Option<usize>,

    /// Last index of the quicksort window
    pub high: Option<usize>,

    /// Values to sort
    #[serde(default = "default_values")]
    pub values: Vec<i64>,

    /// File with one integer per line, used instead of `values`
    pub data_file: Option<PathBuf>,
}

fn default_algorithm() -> Algorithm {
    Algorithm::Merge
}

fn default_pivot() -> PivotKind {
    PivotKind::Last
}

fn default_traversal() -> TraversalKind {
    TraversalKind::Recursive
}

fn default_values() -> Vec<i64> {
    Vec::new()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: default_algorithm(),
            pivot: default_pivot(),
            traversal: default_traversal(),
            seed: None,
            low: None,
            high: None,
            values: default_values(),
            data_file: None,
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sortlab")]
#[command(about = "Sort integers with merge sort or Lomuto quicksort")]
pub struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sorting algorithm
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Quicksort pivot strategy
    #[arg(long, value_enum)]
    pub pivot: Option<PivotKind>,

    /// Quicksort window scheduling
    #[arg(long, value_enum)]
    pub traversal: Option<TraversalKind>,

    /// Seed for the random pivot
    #[arg(long)]
    pub seed: Option<u64>,

    /// First index of the quicksort window
    #[arg(long)]
    pub low: Option<usize>,

    /// Last index of the quicksort window
    #[arg(long)]
    pub high: Option<usize>,

    /// File with one integer per line
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Values to sort
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config {
            algorithm: args.algorithm.unwrap_or_else(default_algorithm),
            pivot: args.pivot.unwrap_or_else(default_pivot),
            traversal: args.traversal.unwrap_or_else(default_traversal),
            seed: args.seed,
            low: args.low,
            high: args.high,
            values: args.values.clone(),
            data_file: args.data_file.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from either file or command-line arguments
    pub fn load(args: &Args) -> Result<Self> {
        if let Some(config_path) = &args.config {
            Self::from_file(config_path)
        } else {
            Self::from_args(args)
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.algorithm == Algorithm::Merge {
            if self.low.is_some() || self.high.is_some() {
                anyhow::bail!("low/high select a quicksort window and need algorithm = quick");
            }
            if self.pivot != PivotKind::Last || self.traversal != TraversalKind::Recursive {
                anyhow::bail!("pivot and traversal only apply to algorithm = quick");
            }
        }

        if let (Some(low), Some(high)) = (self.low, self.high) {
            if low > high {
                anyhow::bail!("low ({}) must not exceed high ({})", low, high);
            }
        }

        if self.seed.is_some() && self.pivot != PivotKind::Random {
            anyhow::bail!("seed only applies to pivot = random");
        }

        if self.data_file.is_some() && !self.values.is_empty() {
            anyhow::bail!("give either values or data_file, not both");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn quick_config() -> Config {
        Config {
            algorithm: Algorithm::Quick,
            ..Config::default()
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = quick_config();
        assert!(config.validate().is_ok());

        config.low = Some(2);
        config.high = Some(4);
        assert!(config.validate().is_ok());

        config.low = Some(5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_rejects_quick_options() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.high = Some(3);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.pivot = PivotKind::MedianOfThree;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.traversal = TraversalKind::WorkStack;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_needs_random_pivot() {
        let mut config = quick_config();
        config.seed = Some(7);
        assert!(config.validate().is_err());

        config.pivot = PivotKind::Random;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_and_data_file_exclusive() {
        let mut config = Config::default();
        config.values = vec![1, 2];
        config.data_file = Some(PathBuf::from("numbers.txt"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"quick\"").unwrap();
        writeln!(file, "pivot = \"median-of-three\"").unwrap();
        writeln!(file, "traversal = \"work-stack\"").unwrap();
        writeln!(file, "low = 2").unwrap();
        writeln!(file, "high = 4").unwrap();
        writeln!(file, "values = [5, 4, 3, 2, 1]").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.pivot, PivotKind::MedianOfThree);
        assert_eq!(config.traversal, TraversalKind::WorkStack);
        assert_eq!(config.low, Some(2));
        assert_eq!(config.high, Some(4));
        assert_eq!(config.values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_from_file_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_partial_uses_named_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"quick\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.pivot, default_pivot());
        assert_eq!(config.traversal, default_traversal());
        assert_eq!(config.values, default_values());
        assert_eq!(config.seed, None);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_example_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("sortlab.example.toml");
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!((config.low, config.high), (Some(2), Some(4)));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"bubble\"").unwrap();
        assert!(Config::from_file(file.path()).is_err());

        assert!(Config::from_file(Path::new("/nonexistent/sortlab.toml")).is_err());
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "sortlab", "-a", "quick", "--pivot", "random", "--seed", "3", "5", "-4", "3",
        ]);
        let config = Config::load(&args).unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.pivot, PivotKind::Random);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.values, vec![5, -4, 3]);
    }

    #[test]
    fn test_from_args_rejects_invalid() {
        let args = Args::parse_from(["sortlab", "--low", "1", "9", "8"]);
        assert!(Config::load(&args).is_err());
    }

    #[test]
    fn test_load_prefers_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = [2, 1]").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = Args::parse_from(["sortlab", "--config", &path]);
        let config = Config::load(&args).unwrap();
        assert_eq!(config.values, vec![2, 1]);
    }
}
