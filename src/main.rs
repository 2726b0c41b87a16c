// Command-line boundary: read OCR-recognized text, run the extraction
// cascade, print the result record as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use mrz_extract::utils::ExtractError;
use mrz_extract::{ExtractorConfig, FieldExtractor};

/// Extract passport identity fields from OCR text.
#[derive(Parser)]
#[command(name = "mrz-extract", version)]
struct Args {
    /// OCR text file to read, or '-' for stdin
    input: PathBuf,

    /// Report success only when the text also classifies as a passport
    #[arg(long)]
    require_passport: bool,

    /// Pretty-print the JSON record
    #[arg(long)]
    pretty: bool,
}

fn read_input(path: &Path) -> Result<String, ExtractError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ExtractError::InputNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match read_input(&args.input) {
        Ok(text) => text,
        Err(err) => {
            println!("{}", json!({ "success": false, "error": err.to_string() }));
            return match err {
                ExtractError::InputNotFound(_) => ExitCode::from(1),
                ExtractError::Io(_) => ExitCode::from(2),
            };
        }
    };

    let extractor = FieldExtractor::with_config(ExtractorConfig {
        require_passport_classification: args.require_passport,
    });
    let result = extractor.extract(&text);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "success": false, "error": err.to_string() }));
            ExitCode::from(2)
        }
    }
}
