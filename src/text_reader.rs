use std::io::{self, BufRead};

const LINE_FEED: u8 = b'\n';

/// Reads the input line by line and joins the lines without their line
/// feeds. Bytes are kept as they are.
pub fn read_text<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut text = Vec::new();
    for line in reader.split(LINE_FEED) {
        text.extend(line?);
    }
    Ok(text)
}
