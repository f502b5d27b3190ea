//! Versioned on-disk format for a drawing's shape history.
//!
//! A drawing file is a JSON object:
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": 1760659200,
//!   "shapes": [
//!     {
//!       "color": "red", "kind": "rectangle",
//!       "anchor_x": 10, "anchor_y": 10, "drag_x": 50, "drag_y": 40
//!     }
//!   ]
//! }
//! ```
//!
//! Shapes are stored in drawing order. The version is checked before the
//! shape list is decoded.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};
use crate::shape::Shape;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DrawingFileRef<'a> {
    version: u32,
    saved_at: u64,
    shapes: &'a [Shape],
}

// `version` is checked through `VersionProbe`; `saved_at` is informational
#[derive(Deserialize)]
struct DrawingFile {
    shapes: Vec<Shape>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Get a timestamp in seconds since the UNIX epoch
fn timestamp_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Encode a shape history into the current file format
pub fn encode_shapes(shapes: &[Shape]) -> PaintResult<Vec<u8>> {
    let file = DrawingFileRef {
        version: CURRENT_VERSION,
        saved_at: timestamp_secs(),
        shapes,
    };
    Ok(serde_json::to_vec_pretty(&file)?)
}

/// Decode a shape history, rejecting unknown versions and malformed records
pub fn decode_shapes(bytes: &[u8]) -> PaintResult<Vec<Shape>> {
    let probe: VersionProbe = serde_json::from_slice(bytes)
        .map_err(|e| PaintError::Decode(format!("unreadable header: {e}")))?;

    if probe.version != CURRENT_VERSION {
        return Err(PaintError::Decode(format!(
            "unsupported version {} (expected {})",
            probe.version, CURRENT_VERSION
        )));
    }

    let file: DrawingFile =
        serde_json::from_slice(bytes).map_err(|e| PaintError::Decode(e.to_string()))?;
    Ok(file.shapes)
}

/// Write a shape history to `path`.
///
/// The payload goes to a temporary sibling first and is renamed over the
/// destination, so an existing file survives a failed write.
pub fn save_to_path(path: &Path, shapes: &[Shape]) -> PaintResult<()> {
    let bytes = encode_shapes(shapes)?;
    let tmp_path = temp_path(path)?;

    let written = write_synced(&tmp_path, &bytes).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = written {
        fs::remove_file(&tmp_path).ok();
        return Err(PaintError::Storage {
            path: path.to_path_buf(),
            source,
        });
    }

    log::info!(
        "Saved {} shapes to {} ({} bytes)",
        shapes.len(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Read a shape history from `path`
pub fn load_from_path(path: &Path) -> PaintResult<Vec<Shape>> {
    let bytes = fs::read(path)
        .map_err(|e| PaintError::Decode(format!("cannot read {}: {e}", path.display())))?;
    let shapes = decode_shapes(&bytes)?;
    log::info!("Loaded {} shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}

fn temp_path(path: &Path) -> PaintResult<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| PaintError::Storage {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
