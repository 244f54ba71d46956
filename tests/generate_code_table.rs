use huffman_code_table::{generate_code_table, CLIParser, Error};
use std::path::PathBuf;
use std::{env, fs};

const INPUT_TEXT_PATH: &str = "tests/input.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_input_text_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(INPUT_TEXT_PATH);
    root_path
}

fn get_result_path(file_name: &str) -> PathBuf {
    let mut root_path = env::temp_dir();
    root_path.push(format!("{}-{}", env!("CARGO_PKG_NAME"), file_name));
    root_path
}

fn cleanup(result_path: &PathBuf) {
    if result_path.exists() && result_path.is_file() {
        fs::remove_file(result_path).expect("Deletion of output file failed");
    }
}

#[test]
fn test_generate_code_table() {
    let result_path = get_result_path("codes.txt");
    cleanup(&result_path);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        get_input_text_path().to_str().unwrap(),
        result_path.to_str().unwrap(),
    ]);
    let coder = generate_code_table(&arguments).expect("Generation failed");
    assert!(result_path.exists(), "Output file was not created");
    let content = fs::read_to_string(&result_path).expect("Output file is not readable");
    assert_eq!(content, "a 0\nb 11\nc 10\n");
    assert_eq!(coder.code_table().len(), 3);
    cleanup(&result_path);
}

#[test]
fn test_generate_code_table_sequentially() {
    let result_path = get_result_path("codes-sequential.txt");
    cleanup(&result_path);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        get_input_text_path().to_str().unwrap(),
        result_path.to_str().unwrap(),
        "--sequential",
    ]);
    generate_code_table(&arguments).expect("Generation failed");
    let content = fs::read_to_string(&result_path).expect("Output file is not readable");
    assert_eq!(content, "a 0\nb 11\nc 10\n");
    cleanup(&result_path);
}

#[test]
fn test_identical_input_and_output_file_is_rejected() {
    let input_path = get_input_text_path();
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_path.to_str().unwrap(),
        input_path.to_str().unwrap(),
    ]);
    let result = generate_code_table(&arguments);
    assert!(matches!(
        result,
        Err(Error::InputAndOutputFileAreIdentical(_))
    ));
    let content = fs::read_to_string(&input_path).expect("Input file is not readable");
    assert_eq!(content, "aaa\nbb\nc\n", "Input file must stay untouched");
}

#[test]
fn test_missing_input_file_is_reported() {
    let result_path = get_result_path("codes-missing-input.txt");
    cleanup(&result_path);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "tests/does-not-exist.txt",
        result_path.to_str().unwrap(),
    ]);
    let result = generate_code_table(&arguments);
    assert!(matches!(
        result,
        Err(Error::UnableToOpenInputFileForReading(_, _))
    ));
    assert!(!result_path.exists(), "Output file must not be created");
}
