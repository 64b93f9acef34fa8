//! Determinism checks: the same input must produce byte-identical output.
//!
//! ```rust,ignore
//! use bmfont_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| encode(&font).unwrap(), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    pub runs: usize,
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first difference between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size change.
    pub offset: usize,
    pub expected: Option<u8>,
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed from run 0.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {:02X?}, got {:02X?} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Run `generate` `runs` times and compare every output with the first.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    assert!(runs >= 2, "need at least two runs to compare");

    let first = generate();
    let hash = blake3::hash(&first).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate();
        if let Some(offset) = first_difference(&first, &output) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: first.len(),
                hash,
                diff_info: Some(DiffInfo {
                    offset,
                    expected: first.get(offset).copied(),
                    actual: output.get(offset).copied(),
                    run_index,
                }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: first.len(),
        hash,
        diff_info: None,
    }
}
