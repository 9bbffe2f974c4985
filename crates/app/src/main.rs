//! huffcode: Huffman code table for a fixed source file
//!
//! Reads `source.txt`, builds the Huffman code for its bytes, prints the
//! `(symbol, code)` listing and writes the same lines to `output_tree.txt`.
//! A missing source yields an empty table; an unwritable destination is
//! fatal.

mod config;
mod input;

use config::Config;
use huffcode_core::{
    build_tree, derive_codes, serialize, serialize_to_file, FrequencyTable, Node, Result,
    TableStats,
};
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();
    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(stats) => {
            if config.print_summary {
                stats.print_summary();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run the whole pipeline once: read, count, build, list, write.
fn run(config: &Config) -> Result<TableStats> {
    let mut stats = TableStats::new();

    let content = input::read_source(&config.input_file);
    let table = FrequencyTable::build(&content);
    debug!(
        "{} distinct symbols in {} bytes",
        table.distinct_symbols(),
        table.total()
    );

    let root = build_tree(&table);
    let codes = root.as_ref().map(derive_codes).unwrap_or_default();
    stats.record_codes(&table, &codes);

    if config.print_listing {
        if let Some(root) = &root {
            print_listing(root)?;
        }
    }

    stats.lines_written = serialize_to_file(root.as_ref(), &config.output_file)?;
    stats.complete();
    Ok(stats)
}

/// Print the code table to stdout in the serialized line format.
fn print_listing(root: &Node) -> Result<()> {
    let mut out = io::stdout().lock();
    serialize(root, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffcode_core::Error;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("huffcode-app-{}-{}", std::process::id(), name))
    }

    fn quiet_config(input: PathBuf, output: PathBuf) -> Config {
        Config {
            input_file: input,
            output_file: output,
            print_config: false,
            print_listing: false,
            print_summary: false,
        }
    }

    #[test]
    fn test_run_writes_table() {
        let input = scratch("source.txt");
        let output = scratch("table.txt");
        std::fs::write(&input, "aaaabbbcc").unwrap();

        let stats = run(&quiet_config(input.clone(), output.clone())).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "97 0\n99 10\n98 11\n");
        assert_eq!(stats.input_bytes, 9);
        assert_eq!(stats.distinct_symbols, 3);
        assert_eq!(stats.lines_written, 3);
        assert_eq!(stats.encoded_bits, 14);
        assert!(stats.end_time.is_some());

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_missing_source_gives_empty_table() {
        let input = scratch("absent.txt");
        let output = scratch("empty-table.txt");

        let stats = run(&quiet_config(input, output.clone())).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), Vec::<u8>::new());
        assert_eq!(stats.input_bytes, 0);
        assert_eq!(stats.lines_written, 0);

        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_single_symbol_source() {
        let input = scratch("single.txt");
        let output = scratch("single-table.txt");
        std::fs::write(&input, "xxxxx").unwrap();

        let stats = run(&quiet_config(input.clone(), output.clone())).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "120 0\n");
        assert_eq!(stats.lines_written, 1);

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let input = scratch("fatal-source.txt");
        let output = scratch("no-such-dir").join("table.txt");
        std::fs::write(&input, "abc").unwrap();

        let result = run(&quiet_config(input.clone(), output));
        assert!(matches!(result, Err(Error::Output { .. })));

        std::fs::remove_file(&input).unwrap();
    }
}
