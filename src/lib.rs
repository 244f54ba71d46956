use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use coder::HuffmanCoder;
pub use error::Error;
pub use huffman::frequency::CountingOptions;
use text_reader::read_text;

mod cli;
mod coder;
mod error;
pub mod huffman;
mod logger;
pub mod mapping;
mod text_reader;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    number_of_threads: usize,
    sequential: bool,
}

impl From<&Arguments> for CountingOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            parallel: !value.sequential,
            number_of_threads: value.number_of_threads,
        }
    }
}

fn path_to_string(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn ensure_distinct_files(arguments: &Arguments) -> Result<()> {
    if arguments.input_file.as_os_str() == arguments.output_file.as_os_str() {
        return Err(Error::InputAndOutputFileAreIdentical(path_to_string(
            &arguments.input_file,
        )));
    }
    Ok(())
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_to_string(file_path), e))
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    let input_file = open_input_file(file_path)?;
    read_text(BufReader::new(input_file))
        .map_err(|e| Error::FailedToReadInputFile(path_to_string(file_path), e))
}

pub fn generate_code_table(arguments: &Arguments) -> Result<HuffmanCoder> {
    ensure_distinct_files(arguments)?;
    let text = read_input_file(&arguments.input_file)?;
    log::info!(
        "Read {} bytes from '{}'",
        text.len(),
        arguments.input_file.display()
    );
    let coder = HuffmanCoder::from_text(&text, &CountingOptions::from(arguments))?;
    let output_file = open_output_file(&arguments.output_file)?;
    let mut output_file_writer = BufWriter::new(output_file);
    coder.save(&mut output_file_writer)?;
    log::info!(
        "Wrote {} codes to '{}'",
        coder.code_table().len(),
        arguments.output_file.display()
    );
    Ok(coder)
}
