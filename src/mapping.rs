use std::io::Write;

use crate::error::Error;
use crate::huffman::code::CodeTable;
use crate::Result;

/// Writes one `<symbol> <code>` line per entry. Symbols are written raw, so a
/// space or line break symbol makes the line ambiguous to read back.
pub fn write_code_table<W: Write>(code_table: &CodeTable, writer: &mut W) -> Result<()> {
    for (symbol, code) in code_table.iter() {
        writeln!(writer, "{} {}", symbol as char, code).map_err(Error::FailedToWriteCodeTable)?;
    }
    writer.flush().map_err(Error::FailedToWriteCodeTable)
}

#[cfg(test)]
mod test {
    use std::io::{self, Write};

    use super::write_code_table;
    use crate::error::Error;
    use crate::huffman::code::CodeTable;
    use crate::huffman::frequency::{CountingOptions, FrequencyBucket, FrequencyTable};
    use crate::huffman::tree::HuffmanTree;

    fn code_table_for(text: &[u8]) -> CodeTable {
        let table = FrequencyTable::count(text, &CountingOptions::default()).unwrap();
        let tree = HuffmanTree::new(&FrequencyBucket::from(&table)).unwrap();
        CodeTable::from(&tree)
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_code_table() {
        let mut buffer = Vec::new();
        write_code_table(&code_table_for(b"aaabbc"), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a 0\nb 11\nc 10\n");
    }

    #[test]
    fn test_write_code_table_writes_separator_symbol_raw() {
        let mut buffer = Vec::new();
        write_code_table(&code_table_for(b"a a"), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "  0\na 1\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let result = write_code_table(&code_table_for(b"ab"), &mut FailingWriter);
        assert!(matches!(result, Err(Error::FailedToWriteCodeTable(_))));
    }
}
