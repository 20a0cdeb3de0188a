use std::path::Path;

use tracing::debug;

/// ROM image size ceiling in bytes (0x800 words, one word per address).
pub const CODE_FILE_MAX_SIZE: usize = 0x1000;

#[derive(thiserror::Error, Debug)]
pub enum RomError {
    #[error("input does not contain any code")]
    Empty,
    #[error("input is not word-aligned ({size} bytes)")]
    Misaligned { size: usize },
    #[error("input is too big to fit in the MCU program memory ({size} > 4096 bytes)")]
    Oversized { size: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turn a raw byte image into code words, little-endian, word 0 at address 0.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u16>, RomError> {
    let size = bytes.len();
    if size == 0 {
        return Err(RomError::Empty);
    }
    if size % 2 == 1 {
        return Err(RomError::Misaligned { size });
    }
    if size > CODE_FILE_MAX_SIZE {
        return Err(RomError::Oversized { size });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Read a ROM image from disk and validate it before any decoding happens.
pub fn load_rom(path: &Path) -> Result<Vec<u16>, RomError> {
    let bytes = std::fs::read(path)?;
    let words = words_from_bytes(&bytes)?;
    debug!(path = %path.display(), words = words.len(), "loaded ROM image");
    Ok(words)
}
