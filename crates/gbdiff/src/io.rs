//! Log loading.
//!
//! Both logs are read eagerly into memory; the whole comparison is one
//! pass over two line vectors. Logs compressed with zstd (`.zst`
//! extension) are decompressed transparently, since multi-hour trace
//! captures rarely ship uncompressed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read a log file into lines.
///
/// A missing or unreadable file is the one fatal error in this tool;
/// it carries the offending path so the caller can report it before
/// any comparison starts.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| Error::OpenLog {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "zst") {
        Box::new(BufReader::new(zstd::stream::Decoder::new(file)?))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }

    debug!(path = %path.display(), lines = lines.len(), "loaded log");
    Ok(lines)
}
