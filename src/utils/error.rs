use std::path::PathBuf;
use thiserror::Error;

/// Process-boundary errors. The extractors themselves never fail: noisy
/// OCR input is the expected operating condition and missing fields are
/// the designed degraded output, so errors only arise where the program
/// touches the filesystem or stdin.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
