use std::fs;
use std::path::{Path, PathBuf};

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::CHARSET;
use crate::error::{FinderError, Result};

/// Reads and parses an HTML file.
///
/// Bytes are decoded as UTF-8 (invalid sequences become the replacement
/// character) regardless of any `<meta charset>` the document declares. The
/// parser is error tolerant, so only I/O can fail here.
pub fn load(path: &Path) -> Result<Html> {
    let contents = fs::read(path).map_err(|source| FinderError::DocumentRead {
        path: absolute(path),
        source,
    })?;

    let contents_string = String::from_utf8_lossy(&contents);
    debug!("Read {} byte(s) from [{}] as {CHARSET}", contents.len(), path.display());

    Ok(Html::parse_document(&contents_string))
}

/// Every element of the document in document order, starting with `<html>`.
pub fn elements(html: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    html.root_element().descendants().filter_map(ElementRef::wrap)
}

pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
