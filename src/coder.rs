use std::fmt;
use std::io::Write;

use crate::huffman::code::CodeTable;
use crate::huffman::frequency::{CountingOptions, FrequencyBucket, FrequencyTable};
use crate::huffman::tree::HuffmanTree;
use crate::{logger, mapping, Result};

/// Huffman tree and code table built from one text.
pub struct HuffmanCoder {
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCoder {
    pub fn from_text(text: &[u8], options: &CountingOptions) -> Result<Self> {
        let tree = {
            let frequencies = FrequencyTable::count(text, options)?;
            let bucket = FrequencyBucket::from(&frequencies);
            logger::log_frequency_bucket(&bucket);
            HuffmanTree::new(&bucket)?
        };
        let code_table = CodeTable::from(&tree);
        Ok(Self { tree, code_table })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        mapping::write_code_table(&self.code_table, writer)
    }
}

impl fmt::Display for HuffmanCoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
