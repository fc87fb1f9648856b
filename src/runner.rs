use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use sorts::{
    merge_sort, LastElement, MedianOfThree, PivotStrategy, QuickSorter, RandomPivot, Traversal,
};

use crate::config::{Algorithm, Config, PivotKind, TraversalKind};

/// Values sorted when neither `values` nor `data_file` is given
pub const SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Read one integer per line. Blank lines and lines starting with `#` are skipped.
pub fn read_values(path: &Path) -> Result<Vec<i64>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    let mut values = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value = line.parse::<i64>().with_context(|| {
            format!("{}:{}: not an integer: {:?}", path.display(), line_no + 1, line)
        })?;
        values.push(value);
    }

    debug!(count = values.len(), file = %path.display(), "read values");
    Ok(values)
}

/// Resolve the input sequence for a run
pub fn load_values(config: &Config) -> Result<Vec<i64>> {
    if let Some(path) = &config.data_file {
        return read_values(path);
    }
    if config.values.is_empty() {
        return Ok(SAMPLE.to_vec());
    }
    Ok(config.values.clone())
}

/// Run the configured sort and return the resulting sequence
pub fn run(config: &Config) -> Result<Vec<i64>> {
    let values = load_values(config)?;
    info!(count = values.len(), algorithm = ?config.algorithm, "sorting");

    match config.algorithm {
        Algorithm::Merge => Ok(merge_sort(&values)),
        Algorithm::Quick => {
            let mut data = values;
            match config.pivot {
                PivotKind::Last => quick(config, LastElement, &mut data)?,
                PivotKind::MedianOfThree => quick(config, MedianOfThree, &mut data)?,
                PivotKind::Random => {
                    let pivot = match config.seed {
                        Some(seed) => RandomPivot::seeded(seed),
                        None => RandomPivot::from_entropy(),
                    };
                    quick(config, pivot, &mut data)?
                }
            }
            Ok(data)
        }
    }
}

fn quick<P: PivotStrategy>(config: &Config, pivot: P, data: &mut [i64]) -> Result<()> {
    let traversal = match config.traversal {
        TraversalKind::Recursive => Traversal::Recursive,
        TraversalKind::WorkStack => Traversal::WorkStack,
    };
    let mut sorter = QuickSorter::with_pivot(pivot).traversal(traversal);

    if config.low.is_none() && config.high.is_none() {
        sorter.sort(data);
        return Ok(());
    }

    let low = config.low.unwrap_or(0);
    let high = match config.high {
        Some(high) => high,
        None if data.is_empty() => anyhow::bail!("cannot select a window in an empty sequence"),
        None => data.len() - 1,
    };

    debug!(low, high, "sorting window");
    sorter
        .sort_range(data, low, high)
        .with_context(|| format!("Invalid quicksort window [{}, {}]", low, high))
}

/// Comma separated rendering used for output
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
