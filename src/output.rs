use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;

use image::{ImageOutputFormat, RgbaImage};
use log::debug;

use crate::error::PatternError;

/// Encode the whole canvas as PNG in memory.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, PatternError> {
    let mut buffer = Cursor::new(Vec::new());
    canvas.write_to(&mut buffer, ImageOutputFormat::Png)?;
    let bytes = buffer.into_inner();
    debug!("Encoded {}x{} canvas into {} bytes", canvas.width(), canvas.height(), bytes.len());
    Ok(bytes)
}

/// Create or truncate `path` and write `bytes` to it.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PatternError> {
    let io_err = |source: std::io::Error| PatternError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.flush().map_err(io_err)
}
