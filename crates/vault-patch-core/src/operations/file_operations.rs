use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

pub fn read_file_content(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    info!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Overwrites `path` in place. There is no backup and no atomic rename.
pub fn write_file_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))?;
    info!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
