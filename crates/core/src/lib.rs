//! huffcode-core: Huffman code tables for byte alphabets
//!
//! This library builds an optimal prefix-free code from the byte frequencies
//! of an input and writes the resulting `(symbol, code)` table as text:
//! - Counts occurrences of every byte value
//! - Builds the Huffman tree by repeated minimum-frequency merges
//! - Derives each symbol's bit code by walking the tree
//! - Serializes the table one `<symbol> <bits>` line per symbol
//!
//! It does not compress or decompress data; the code table is the product.
//!
//! # Architecture
//!
//! - `frequency`: Byte frequency table
//! - `tree`: Tree nodes and construction
//! - `code`: Bit codes and the shared tree traversal
//! - `serialize`: Text format writer and parser
//! - `stats`: Observable run statistics
//!
//! # Design Principles
//!
//! - **Total**: counting, building and traversal cannot fail
//! - **Deterministic**: equal-frequency ties are broken by a fixed sequence
//!   order, so a given input always yields the same table
//! - **Single traversal**: code derivation and serialization share one walk

pub mod code;
pub mod error;
pub mod frequency;
pub mod serialize;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use code::{derive_codes, is_prefix_free, Code, CodeTable};
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, Symbol};
pub use serialize::{parse_code_table, serialize, serialize_to_file};
pub use stats::TableStats;
pub use tree::{build_tree, Node};
