use std::env::args_os;
use std::process::ExitCode;

use huffman_code_table::{generate_code_table, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_code_table(&arguments) {
        Ok(coder) => {
            println!("{}", coder);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
