//! Byte frequency counting.

/// One byte value of the input alphabet.
pub type Symbol = u8;

/// Number of distinct symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for every byte value.
///
/// Built once from the full input and immutable afterwards. Symbols with a
/// count of zero take no part in tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count every byte of `bytes` in a single pass.
    pub fn build(bytes: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Wrap counts that were accumulated elsewhere.
    pub fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[symbol as usize]
    }

    /// Non-zero `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::from_counts([0; ALPHABET_SIZE])
    }
}
