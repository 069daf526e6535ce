use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::command::{commands, Command};
use crate::error::ExtractError;
use crate::polyline::{parse_multiple_segments, Polyline};
use shared::Dpi;

/// Extracts one polyline per pen-down command from an HPGL file, in file
/// order. The file handle is released before any parsing begins, on every
/// exit path.
///
/// Running this twice on an unmodified file with the same dpi yields
/// identical results.
pub fn extract_polylines_from_file(path: impl AsRef<Path>, dpi: Dpi) -> Result<Vec<Polyline>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(ExtractError::Io)?;
    if content.lines().next().is_none() {
        return Err(ExtractError::EmptyFile(path.to_path_buf()).into());
    }
    extract_polylines(&content, dpi)
}

/// The in-memory half of [`extract_polylines_from_file`], for callers that
/// already hold the HPGL text.
///
/// Only the first line is read; Inkscape writes the whole plot on one
/// line, and anything past it is ignored. Content with no pen-down
/// commands yields an empty collection.
pub fn extract_polylines(content: &str, dpi: Dpi) -> Result<Vec<Polyline>> {
    let line = content.lines().next().unwrap_or("");
    let payloads = commands(line)
        .filter(Command::is_pen_down)
        .map(|command| command.payload());
    parse_multiple_segments(payloads, dpi)
}
