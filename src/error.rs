use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    InputAndOutputFileAreIdentical(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteCodeTable(std::io::Error),
    FrequencyCountingIncomplete { expected: usize, received: usize },
    InvalidCodePath(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(
                    f,
                    "Input does not contain any countable symbol, unable to build a Huffman tree"
                )
            }
            Self::InputAndOutputFileAreIdentical(path) => {
                write!(f, "Input and output file cannot be the same: '{}'", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteCodeTable(error) => {
                write!(f, "Failed to write code table: {}", error)
            }
            Self::FrequencyCountingIncomplete { expected, received } => {
                write!(
                    f,
                    "Frequency counting incomplete. Expected {} partial counts, but got {}.",
                    expected, received
                )
            }
            Self::InvalidCodePath(code) => {
                write!(f, "Code '{}' does not lead to a leaf of the Huffman tree", code)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadInputFile(_, error)
            | Self::FailedToWriteCodeTable(error) => Some(error),
            _ => None,
        }
    }
}
