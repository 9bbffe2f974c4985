//! Bit codes and the depth-first traversal that derives them.
//!
//! [`for_each_code`] is the only tree walk in the crate. Both
//! [`derive_codes`] and [`serialize`](crate::serialize::serialize) are built
//! on it, so they always agree on order and code values.

use crate::error::CodeError;
use crate::frequency::{FrequencyTable, Symbol};
use crate::tree::Node;
use log::debug;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Path from the root to a leaf: `false` is the left edge (0), `true` the
/// right edge (1).
///
/// Ordering is lexicographic over the bits, so a code sorts directly before
/// any code it is a prefix of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: Vec<bool>,
}

/// Symbol to code mapping, iterated in ascending symbol order.
pub type CodeTable = BTreeMap<Symbol, Code>;

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other`, including equality.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CodeError::Empty);
        }

        s.chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CodeError::InvalidBit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Code::from_bits)
    }
}

/// Visit every leaf depth-first, left before right, with its code.
///
/// A root that is itself a leaf has no edge to follow; it is given the
/// one-bit code `0`. The first error returned by `visit` stops the walk.
pub fn for_each_code<E, F>(root: &Node, mut visit: F) -> Result<(), E>
where
    F: FnMut(Symbol, &Code) -> Result<(), E>,
{
    let mut prefix = Code::new();

    if let Node::Leaf { symbol, .. } = root {
        prefix.push(false);
        return visit(*symbol, &prefix);
    }

    walk(root, &mut prefix, &mut visit)
}

fn walk<E, F>(node: &Node, prefix: &mut Code, visit: &mut F) -> Result<(), E>
where
    F: FnMut(Symbol, &Code) -> Result<(), E>,
{
    match node {
        Node::Leaf { symbol, .. } => visit(*symbol, prefix),
        Node::Internal { left, right, .. } => {
            prefix.push(false);
            walk(left, prefix, visit)?;
            prefix.pop();

            prefix.push(true);
            walk(right, prefix, visit)?;
            prefix.pop();

            Ok(())
        }
    }
}

/// Collect the code of every leaf under `root`.
pub fn derive_codes(root: &Node) -> CodeTable {
    let mut codes = CodeTable::new();

    let walked: Result<(), Infallible> = for_each_code(root, |symbol, code| {
        codes.insert(symbol, code.clone());
        Ok(())
    });
    match walked {
        Ok(()) => {}
        Err(never) => match never {},
    }

    debug!("derived {} codes", codes.len());
    codes
}

/// True if no code in `codes` is a prefix of another.
pub fn is_prefix_free(codes: &CodeTable) -> bool {
    let mut sorted: Vec<&Code> = codes.values().collect();
    sorted.sort();

    // After sorting, a code that prefixes any other also prefixes its successor
    sorted.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
}

/// Total bits needed to encode the counted input: sum of count × code length.
///
/// Symbols without a code contribute nothing.
pub fn encoded_bits(table: &FrequencyTable, codes: &CodeTable) -> u64 {
    codes
        .iter()
        .map(|(&symbol, code)| table.get(symbol) * code.len() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_and_parse() {
        let c = Code::from_bits([true, false, true, true]);
        assert_eq!(c.to_string(), "1011");
        assert_eq!(code("1011"), c);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Code>(), Err(CodeError::Empty));
        assert_eq!(
            "01x1".parse::<Code>(),
            Err(CodeError::InvalidBit { position: 2, found: 'x' })
        );
    }

    #[test]
    fn test_is_prefix_of() {
        assert!(code("10").is_prefix_of(&code("101")));
        assert!(code("10").is_prefix_of(&code("10")));
        assert!(!code("11").is_prefix_of(&code("101")));
        assert!(!code("101").is_prefix_of(&code("10")));
    }

    #[test]
    fn test_derive_three_symbols() {
        let table = FrequencyTable::build(b"aaaabbbcc");
        let codes = derive_codes(&build_tree(&table).unwrap());

        assert_eq!(codes.len(), 3);
        assert_eq!(codes[&b'a'], code("0"));
        assert_eq!(codes[&b'c'], code("10"));
        assert_eq!(codes[&b'b'], code("11"));
        assert!(is_prefix_free(&codes));
        assert_eq!(encoded_bits(&table, &codes), 4 + 3 * 2 + 2 * 2);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let root = Node::leaf(b'q', 5);
        let codes = derive_codes(&root);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&b'q'], code("0"));
    }

    #[test]
    fn test_traversal_order_left_first() {
        let root = Node::merge(
            Node::merge(Node::leaf(b'c', 1), Node::leaf(b'b', 2)),
            Node::leaf(b'a', 5),
        );
        let mut seen = Vec::new();
        let walked: Result<(), Infallible> = for_each_code(&root, |symbol, code| {
            seen.push((symbol, code.to_string()));
            Ok(())
        });
        assert!(walked.is_ok());
        assert_eq!(
            seen,
            vec![
                (b'c', "00".to_string()),
                (b'b', "01".to_string()),
                (b'a', "1".to_string())
            ]
        );
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        let root = build_tree(&FrequencyTable::build(b"abcdefgh")).unwrap();
        let mut visited = 0;
        let walked = for_each_code(&root, |symbol, _| {
            visited += 1;
            if visited == 3 {
                Err(symbol)
            } else {
                Ok(())
            }
        });
        assert!(walked.is_err());
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_is_prefix_free_detects_violation() {
        let mut codes = CodeTable::new();
        codes.insert(1, code("0"));
        codes.insert(2, code("10"));
        codes.insert(3, code("11"));
        assert!(is_prefix_free(&codes));

        codes.insert(4, code("101"));
        assert!(!is_prefix_free(&codes));
    }

    #[test]
    fn test_is_prefix_free_detects_duplicate() {
        let mut codes = CodeTable::new();
        codes.insert(1, code("01"));
        codes.insert(2, code("01"));
        assert!(!is_prefix_free(&codes));
    }
}
