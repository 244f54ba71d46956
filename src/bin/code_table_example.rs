use huffman_code_table::huffman::code::CodeTable;
use huffman_code_table::huffman::frequency::{FrequencyBucket, FrequencyTable};
use huffman_code_table::huffman::tree::HuffmanTree;
use huffman_code_table::huffman::SymbolFrequency;
use huffman_code_table::{mapping, CountingOptions, Result};

fn print_code_table(frequencies: &FrequencyTable) -> Result<()> {
    let bucket = FrequencyBucket::from(frequencies);
    if bucket.is_empty() {
        println!("nothing to encode");
        return Ok(());
    }
    for (frequency, symbols) in bucket.buckets() {
        let symbols: String = symbols.iter().map(|&s| s as char).collect();
        println!("{:>3}: {:?}", frequency, symbols);
    }

    let tree = HuffmanTree::new(&bucket)?;
    println!("huffman tree\n{}", tree);

    let code_table = CodeTable::from(&tree);
    println!("code table");
    mapping::write_code_table(&code_table, &mut std::io::stdout())?;
    println!(
        "weighted length: {} bits",
        code_table.weighted_length(frequencies)
    );

    for (symbol, code) in code_table.iter() {
        assert_eq!(tree.decode_symbol(code)?, symbol);
    }
    Ok(())
}

fn main() -> Result<()> {
    let text = b"abracadabra, alakazam";
    let options = CountingOptions {
        parallel: true,
        number_of_threads: 4,
    };
    let frequencies = FrequencyTable::count(text, &options)?;
    if frequencies.is_empty() {
        return Ok(());
    }
    println!(
        "'a' occurs {} times",
        frequencies.get(b'a').unwrap_or_default()
    );
    print_code_table(&frequencies)?;

    // symbol-frequency pairs
    let textbook: FrequencyTable = [
        (b'a', 5),
        (b'b', 9),
        (b'c', 12),
        (b'd', 13),
        (b'e', 16),
        (b'f', 45),
    ]
    .into_iter()
    .map(SymbolFrequency::from)
    .collect();
    let bucket = FrequencyBucket::from(&textbook);
    if let Some(symbols) = bucket.symbols_with_frequency(45) {
        println!("most frequent: {:?}", symbols);
    }
    print_code_table(&textbook)
}
