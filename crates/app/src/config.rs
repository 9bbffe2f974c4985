//! Configuration for the huffcode application.
//!
//! The program takes no arguments: input and output locations are fixed.
//! Everything a run depends on is still collected here so it can be printed
//! and so tests can point a run at scratch files.

use std::path::PathBuf;

/// Source file read in full at startup.
pub const DEFAULT_INPUT: &str = "source.txt";

/// Destination of the serialized code table.
pub const DEFAULT_OUTPUT: &str = "output_tree.txt";

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (absent file = empty input)
    pub input_file: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    // === Behavior ===
    /// Whether to print resolved configuration
    pub print_config: bool,

    /// Whether to print the code listing to stdout
    pub print_listing: bool,

    /// Whether to print the statistics summary
    pub print_summary: bool,
}

impl Config {
    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Input file:  {}", self.input_file.display());
        println!("Output file: {}", self.output_file.display());
        println!("Listing: {}", if self.print_listing { "stdout" } else { "off" });
        println!("Summary: {}", if self.print_summary { "stdout" } else { "off" });
        println!();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT),
            output_file: PathBuf::from(DEFAULT_OUTPUT),
            print_config: false,
            print_listing: true,
            print_summary: true,
        }
    }
}
