use std::path::Path;
use std::process::Command;

use crate::error::GenerationError;

/// Run `rustfmt` over a generated file.
///
/// `MUXC_RUSTFMT_BIN` overrides the formatter binary.
pub fn format_output(path: &Path) -> Result<(), GenerationError> {
    let bin = std::env::var("MUXC_RUSTFMT_BIN").unwrap_or_else(|_| "rustfmt".to_string());

    let status = Command::new(bin)
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status()
        .map_err(|e| GenerationError::io(path, e))?;
    if !status.success() {
        return Err(GenerationError::Format {
            path: path.to_path_buf(),
            status,
        });
    }
    Ok(())
}
