//! Transparent line access to plain or gzip-compressed catalog files.
//!
//! Whether a file is decompressed is decided by its first two bytes, not its
//! name: a stale `.gz` suffix on a plain file is ignored, and a gzip file
//! with no suffix still decompresses. Only the outermost layer is inspected,
//! so a `.tar.gz` is treated as gzip and yields tar bytes.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

/// Leading signature bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Report whether the file at `path` starts with the gzip magic number.
///
/// Files shorter than two bytes are plain by definition.
pub fn is_gzip(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == GZIP_MAGIC),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

/// Open `path` as a buffered line reader, decompressing gzip transparently.
///
/// The returned reader owns the file handle; dropping it closes the file.
/// Existence checks belong to the caller — a missing file surfaces here as
/// an ordinary open error.
pub fn open_lines(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let gzipped = is_gzip(path)?;
    let file = File::open(path)?;
    if gzipped {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
