use std::collections::{BTreeMap, VecDeque};

use super::frequency::FrequencyTable;
use super::tree::{HuffmanTree, NodeKind};
use super::{Symbol, SINGLE_SYMBOL_CODE};

/// Symbol to code mapping, iterated in ascending symbol order.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Sum of frequency times code length over all symbols of `frequencies`.
    /// Symbols missing from the table contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|sf| self.get(sf.symbol).map(|code| sf.frequency * code.len()))
            .sum()
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut queue = VecDeque::from([(tree.root_index(), String::new())]);
        while let Some((index, prefix)) = queue.pop_front() {
            match tree.kind(index) {
                NodeKind::Leaf { symbol } if prefix.is_empty() => {
                    log::warn!(
                        "Only symbol {:?} present, assigning code '{}'",
                        symbol as char,
                        SINGLE_SYMBOL_CODE
                    );
                    codes.insert(symbol, SINGLE_SYMBOL_CODE.to_owned());
                }
                NodeKind::Leaf { symbol } => {
                    codes.insert(symbol, prefix);
                }
                NodeKind::Inner { left, right } => {
                    queue.push_back((left, format!("{}0", prefix)));
                    queue.push_back((right, prefix + "1"));
                }
            }
        }
        log::debug!("Generated {} codes", codes.len());
        Self { codes }
    }
}
