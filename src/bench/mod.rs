use crate::cmp::Compare;
use std::error::Error;
use std::fmt;
use std::mem;

/// Auxiliary space an algorithm needs beyond its working copy. The memory
/// estimate is structural, never measured at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuxSpace {
    InPlace,
    /// One extra dataset-sized buffer (merge sort, radix sort).
    ScratchBuffer,
    /// One tree node per element (tree sorts).
    TreeNodes { node_bytes: usize },
}

impl AuxSpace {
    pub fn bytes<T>(&self, n: usize) -> usize {
        match self {
            AuxSpace::InPlace => 0,
            AuxSpace::ScratchBuffer => n * mem::size_of::<T>(),
            AuxSpace::TreeNodes { node_bytes } => n * node_bytes,
        }
    }
}

/// A sorting algorithm plus the metadata the harness needs to decide where
/// it may run and what it costs.
pub struct Algorithm<T, C> {
    pub name: &'static str,
    pub run: fn(&mut [T], &mut C),
    pub stable: bool,
    pub comparison_based: bool,
    pub unique_keys_only: bool,
    pub integer_key_only: bool,
    pub aux: AuxSpace,
}

impl<T, C> Clone for Algorithm<T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Algorithm<T, C> {}

/// One benchmark unit: an algorithm, a comparator value, and the declared
/// properties of the active key. The flags are trusted, not inferred from
/// the data.
pub struct Strategy<T, C> {
    pub algorithm: Algorithm<T, C>,
    pub comparator: C,
    pub comparator_name: &'static str,
    /// The active key may produce duplicate values.
    pub duplicate_keys: bool,
    /// The active key is a plain integer (radix-sortable).
    pub integer_key: bool,
    /// This run validates a stable-ordering semantic; only algorithms that
    /// are stable by construction may execute.
    pub stable_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Skip {
    DuplicateKeys,
    NonIntegerKey,
    Unstable,
}

impl<T, C> Strategy<T, C> {
    /// Check the declared applicability flags. Inadmissible pairs are
    /// rejected here, before any trial runs.
    pub fn admissible(&self) -> Result<(), Skip> {
        if self.algorithm.unique_keys_only && self.duplicate_keys {
            return Err(Skip::DuplicateKeys);
        }
        if self.algorithm.integer_key_only && !self.integer_key {
            return Err(Skip::NonIntegerKey);
        }
        if self.stable_only && !self.algorithm.stable {
            return Err(Skip::Unstable);
        }

        Ok(())
    }
}

#[derive(Debug)]
pub enum BenchError {
    EmptyDataset,
    ZeroRepetitions,
    Inadmissible(Skip),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::EmptyDataset => write!(f, "refusing to benchmark an empty dataset"),
            BenchError::ZeroRepetitions => write!(f, "repetition count must be at least 1"),
            BenchError::Inadmissible(skip) => write!(f, "strategy is not applicable: {:?}", skip),
        }
    }
}

impl Error for BenchError {}

/// One result row, ready for tabular reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub algorithm: &'static str,
    pub comparator: &'static str,
    pub duplicate_keys: bool,
    pub stable: bool,
    pub avg_comparisons: u64,
    pub memory_bytes: usize,
}

/// Run one strategy for `repetitions` trials over fresh copies of `data`.
///
/// Each trial clones the dataset, resets the comparator's counter, runs the
/// algorithm, and discards the copy. The reported count is the integer-
/// truncated average; non-comparison algorithms report exactly 0.
pub fn run<T, C>(
    data: &[T],
    strategy: &mut Strategy<T, C>,
    repetitions: u32,
) -> Result<Report, BenchError>
where
    T: Clone,
    C: Compare<T>,
{
    if data.is_empty() {
        return Err(BenchError::EmptyDataset);
    }
    if repetitions == 0 {
        return Err(BenchError::ZeroRepetitions);
    }
    strategy.admissible().map_err(BenchError::Inadmissible)?;

    let memory_bytes =
        mem::size_of::<T>() * data.len() + strategy.algorithm.aux.bytes::<T>(data.len());

    let algorithm = strategy.algorithm.run;
    let mut total: u64 = 0;

    for _ in 0..repetitions {
        let mut copy = data.to_vec();
        strategy.comparator.reset();
        algorithm(&mut copy, &mut strategy.comparator);
        total += strategy.comparator.comparisons();
    }

    let avg_comparisons = if strategy.algorithm.comparison_based {
        total / u64::from(repetitions)
    } else {
        0
    };

    Ok(Report {
        algorithm: strategy.algorithm.name,
        comparator: strategy.comparator_name,
        duplicate_keys: strategy.duplicate_keys,
        stable: strategy.algorithm.stable,
        avg_comparisons,
        memory_bytes,
    })
}

/// Run every admissible strategy in the table, silently skipping the rest.
pub fn run_suite<T, C>(
    data: &[T],
    strategies: &mut [Strategy<T, C>],
    repetitions: u32,
) -> Result<Vec<Report>, BenchError>
where
    T: Clone,
    C: Compare<T>,
{
    let mut rows = Vec::new();

    for strategy in strategies.iter_mut() {
        if strategy.admissible().is_err() {
            continue;
        }
        rows.push(run(data, strategy, repetitions)?);
    }

    Ok(rows)
}

/// Render rows as a markdown-style table.
pub fn render_table(rows: &[Report]) -> String {
    let mut out = String::new();
    out.push_str(
        "| Algorithm | Criterion | Key Duplicates | Stable | Comparisons (Avg) | Memory (Bytes) |\n",
    );
    out.push_str("|:---|:---|:---|:---|---:|---:|\n");

    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            row.algorithm,
            row.comparator,
            if row.duplicate_keys { "YES" } else { "NO" },
            if row.stable { "YES" } else { "NO" },
            row.avg_comparisons,
            row.memory_bytes,
        ));
    }

    out
}
