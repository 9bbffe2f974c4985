//! Statistics for a code-table run.
//!
//! Records the size of the input, the shape of the resulting code, and how
//! long the pipeline took. Values are filled in explicitly at each stage;
//! nothing here is shared across threads.

use crate::code::{encoded_bits, CodeTable};
use crate::frequency::FrequencyTable;
use std::time::{Duration, Instant};

/// Counters and timing for one code-table build.
#[derive(Debug, Clone)]
pub struct TableStats {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input ===
    /// Total bytes read from the source
    pub input_bytes: u64,

    /// Symbols with a non-zero count
    pub distinct_symbols: usize,

    // === Code ===
    /// Bits needed to encode the input with the derived code
    pub encoded_bits: u64,

    /// Shortest code length (0 when there are no codes)
    pub min_code_len: usize,

    /// Longest code length (0 when there are no codes)
    pub max_code_len: usize,

    // === Output ===
    /// Lines written to the serialized table
    pub lines_written: u64,
}

impl TableStats {
    /// Create empty stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            distinct_symbols: 0,
            encoded_bits: 0,
            min_code_len: 0,
            max_code_len: 0,
            lines_written: 0,
        }
    }

    /// Fill the input and code fields from a frequency table and its codes.
    pub fn record_codes(&mut self, table: &FrequencyTable, codes: &CodeTable) {
        self.input_bytes = table.total();
        self.distinct_symbols = table.distinct_symbols();
        self.encoded_bits = encoded_bits(table, codes);
        self.min_code_len = codes.values().map(|code| code.len()).min().unwrap_or(0);
        self.max_code_len = codes.values().map(|code| code.len()).max().unwrap_or(0);
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Average code length weighted by frequency, in bits per input byte.
    ///
    /// Returns 0.0 for empty input.
    pub fn average_code_len(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_bytes as f64
        }
    }

    /// Encoded size relative to the input stored as plain 8-bit bytes.
    ///
    /// Returns 0.0 for empty input.
    pub fn size_ratio(&self) -> f64 {
        self.average_code_len() / 8.0
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Code Table Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("Input: {} bytes", self.input_bytes);
        println!("Distinct symbols: {}", self.distinct_symbols);
        println!("Lines written: {}", self.lines_written);
        println!();

        println!("=== Code ===");
        println!("Code length: {}..={} bits", self.min_code_len, self.max_code_len);
        println!("Average: {:.3} bits/symbol", self.average_code_len());
        println!(
            "Encoded size: {} bits ({} bytes)",
            self.encoded_bits,
            self.encoded_bits.div_ceil(8)
        );
        println!("Ratio: {:.1}%", self.size_ratio() * 100.0);
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             distinct_symbols={}\n\
             encoded_bits={}\n\
             min_code_len={}\n\
             max_code_len={}\n\
             average_code_len={:.4}\n\
             size_ratio={:.4}\n\
             lines_written={}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.distinct_symbols,
            self.encoded_bits,
            self.min_code_len,
            self.max_code_len,
            self.average_code_len(),
            self.size_ratio(),
            self.lines_written,
        )
    }
}

impl Default for TableStats {
    fn default() -> Self {
        Self::new()
    }
}
