//! litson - Convert annotated object literals to pretty-printed JSON
//!
//! Reads a source file (typically a TypeScript module exporting a data
//! constant), extracts the object literal embedded in it, discards the
//! type annotations the syntax allows, and writes the value as
//! four-space-indented JSON.

use clap::Parser;
use litson_io::{convert, ConvertError, ConvertOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "litson")]
#[command(about = "Convert an embedded object literal to a JSON file", version)]
struct Cli {
    /// Source file containing the object literal
    input: PathBuf,

    /// Destination path for the JSON output
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(message) => println!("{message}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, ConvertError> {
    convert(&cli.input, &cli.output, &ConvertOptions::default())?;
    Ok(format!(
        "Successfully converted {} to {}",
        cli.input.display(),
        cli.output.display()
    ))
}
