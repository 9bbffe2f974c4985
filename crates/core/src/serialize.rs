//! Text serialization of the code table.
//!
//! # Format
//!
//! One line per symbol, in traversal order (depth-first, left before right):
//!
//! ```text
//! <decimal symbol> <space> <bit string> <newline>
//! ```
//!
//! For example, `a:4 b:3 c:2` serializes as:
//!
//! ```text
//! 97 0
//! 99 10
//! 98 11
//! ```
//!
//! # Example
//! ```
//! use huffcode_core::{build_tree, serialize, FrequencyTable};
//!
//! let root = build_tree(&FrequencyTable::build(b"aaaabbbcc")).unwrap();
//! let mut out = Vec::new();
//! serialize(&root, &mut out).unwrap();
//! assert_eq!(out, b"97 0\n99 10\n98 11\n");
//! ```

use crate::code::{for_each_code, Code, CodeTable};
use crate::error::{Error, ParseError, Result};
use crate::frequency::Symbol;
use crate::tree::Node;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Write one line per leaf of `root` to `sink`.
///
/// Returns the number of lines written.
pub fn serialize<W: Write>(root: &Node, sink: &mut W) -> Result<u64> {
    Ok(write_code_lines(root, sink)?)
}

fn write_code_lines<W: Write>(root: &Node, sink: &mut W) -> io::Result<u64> {
    let mut lines = 0;
    for_each_code(root, |symbol, code| {
        writeln!(sink, "{} {}", symbol, code)?;
        lines += 1;
        Ok::<(), io::Error>(())
    })?;
    Ok(lines)
}

/// Create (or truncate) `path` and write the code table of `root` into it.
///
/// With no tree the file is still created, and left empty.
///
/// # Errors
/// `Error::Output` if the destination cannot be created or written.
pub fn serialize_to_file(root: Option<&Node>, path: &Path) -> Result<u64> {
    let output_error = |source: io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);

    let lines = match root {
        Some(root) => write_code_lines(root, &mut writer).map_err(output_error)?,
        None => 0,
    };
    writer.flush().map_err(output_error)?;

    debug!("wrote {} code lines to {}", lines, path.display());
    Ok(lines)
}

/// Read a serialized code table back into a [`CodeTable`].
///
/// Empty lines are skipped.
///
/// # Errors
/// - `Error::Io` if the reader fails
/// - `Error::Parse` for a malformed line or a repeated symbol
pub fn parse_code_table<R: BufRead>(reader: R) -> Result<CodeTable> {
    let mut codes = CodeTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.is_empty() {
            continue;
        }

        let (symbol_field, bits) = line
            .split_once(' ')
            .ok_or(ParseError::MissingSeparator { line: number })?;

        let symbol = parse_symbol(symbol_field).ok_or_else(|| ParseError::InvalidSymbol {
            line: number,
            value: symbol_field.to_string(),
        })?;

        let code = bits.parse::<Code>().map_err(|source| ParseError::InvalidCode {
            line: number,
            source,
        })?;

        if codes.insert(symbol, code).is_some() {
            return Err(ParseError::DuplicateSymbol {
                line: number,
                symbol,
            }
            .into());
        }
    }

    Ok(codes)
}

/// Plain decimal digits only; `u8::from_str` alone would also take a sign.
fn parse_symbol(field: &str) -> Option<Symbol> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
