use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::frequency::FrequencyBucket;
use super::{Symbol, SINGLE_SYMBOL_CODE};
use crate::{error::Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    frequency: usize,
    index: usize,
    kind: NodeKind,
}

/// Nodes live in an arena. Leaves occupy the first `leaf_count` slots in
/// seeding order, inner nodes follow in the order they were merged.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

// The arena index doubles as insertion sequence, so equal frequencies are
// popped in the order the nodes entered the queue.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(bucket: &FrequencyBucket) -> Result<HuffmanTree> {
        let nodes: Vec<Node> = bucket
            .iter()
            .enumerate()
            .map(|(index, sf)| Node {
                frequency: sf.frequency,
                index,
                kind: NodeKind::Leaf { symbol: sf.symbol },
            })
            .collect();
        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut tree = HuffmanTree {
            leaf_count: nodes.len(),
            nodes,
            root_index: 0,
        };
        tree.merge_nodes();
        log::info!(
            "Built Huffman tree with {} leaves and {} inner nodes",
            tree.leaf_count(),
            tree.inner_node_count()
        );
        Ok(tree)
    }

    fn merge_nodes(&mut self) {
        let mut queue: BinaryHeap<Reverse<Node>> =
            self.nodes.iter().copied().map(Reverse).collect();
        while let Some(Reverse(left)) = queue.pop() {
            let Some(Reverse(right)) = queue.pop() else {
                self.root_index = left.index;
                break;
            };
            let node = Node {
                frequency: left.frequency + right.frequency,
                index: self.nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            self.nodes.push(node);
            queue.push(Reverse(node));
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn inner_node_count(&self) -> usize {
        self.nodes.len() - self.leaf_count
    }

    pub fn root_frequency(&self) -> usize {
        self.nodes[self.root_index].frequency
    }

    pub(super) fn root_index(&self) -> usize {
        self.root_index
    }

    pub(super) fn kind(&self, index: usize) -> NodeKind {
        self.nodes[index].kind
    }

    #[cfg(test)]
    pub(super) fn inner_frequency_sum(&self) -> usize {
        self.nodes[self.leaf_count..]
            .iter()
            .map(|node| node.frequency)
            .sum()
    }

    /// Walks down from the root, `'0'` taking the left and `'1'` the right
    /// child, and returns the symbol of the leaf the code ends on.
    pub fn decode_symbol(&self, code: &str) -> Result<Symbol> {
        let invalid_code_path = || Error::InvalidCodePath(code.to_owned());
        let mut node = self.nodes[self.root_index];
        if let NodeKind::Leaf { symbol } = node.kind {
            return match code {
                SINGLE_SYMBOL_CODE => Ok(symbol),
                _ => Err(invalid_code_path()),
            };
        }
        for bit in code.chars() {
            let NodeKind::Inner { left, right } = node.kind else {
                return Err(invalid_code_path());
            };
            node = match bit {
                '0' => self.nodes[left],
                '1' => self.nodes[right],
                _ => return Err(invalid_code_path()),
            };
        }
        match node.kind {
            NodeKind::Leaf { symbol } => Ok(symbol),
            NodeKind::Inner { .. } => Err(invalid_code_path()),
        }
    }
}

const LEFT_BRANCH: &str = "├───";
const RIGHT_BRANCH: &str = "└───";
const LEFT_INDENT: &str = "│   ";
const RIGHT_INDENT: &str = "    ";

// Tree visualization
impl Node {
    fn label(&self) -> String {
        match self.kind {
            NodeKind::Leaf { symbol } => format!("{:?} (f:{})", symbol as char, self.frequency),
            NodeKind::Inner { .. } => format!("(f:{})", self.frequency),
        }
    }
}

impl HuffmanTree {
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        index: usize,
        is_left: bool,
    ) -> fmt::Result {
        let node = self.nodes[index];
        let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
        writeln!(f, "{}{}{}", prefix, branch, node.label())?;
        if let NodeKind::Inner { left, right } = node.kind {
            let indent = if is_left { LEFT_INDENT } else { RIGHT_INDENT };
            let child_prefix = format!("{}{}", prefix, indent);
            self.write_node(f, &child_prefix, left, true)?;
            self.write_node(f, &child_prefix, right, false)?;
        }
        Ok(())
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, "", self.root_index, false)
    }
}
