pub mod config;
pub mod image;
pub mod json;
pub mod text;

use anyhow::Result;
use std::io::Read;

/// Read all of stdin as UTF-8 text
pub fn read_stdin_string() -> Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

/// Read all of stdin as raw bytes
pub fn read_stdin_bytes() -> Result<Vec<u8>> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    Ok(input)
}
