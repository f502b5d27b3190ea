use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{PaintError, PaintResult};
use crate::shape::{ShapeColor, ShapeKind};

/// Actions the toolbar can trigger on a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select the color for shapes created from now on
    SetColor(ShapeColor),
    /// Select the primitive for shapes created from now on
    SetKind(ShapeKind),
    /// Write the shape history to a file
    Save(PathBuf),
    /// Replace the shape history with a file's content
    Load(PathBuf),
    /// Remove the most recent shape
    Undo,
    /// Remove every shape
    Reset,
}

impl Command {
    /// Map a toolbar action caption to a command.
    ///
    /// `path` is the file chosen by the UI and is only used by Save and Load.
    pub fn from_action(action: &str, path: &Path) -> PaintResult<Self> {
        match action.trim().to_ascii_lowercase().as_str() {
            "save" => return Ok(Self::Save(path.to_path_buf())),
            "load" => return Ok(Self::Load(path.to_path_buf())),
            "undo" => return Ok(Self::Undo),
            "reset" => return Ok(Self::Reset),
            _ => {}
        }

        if let Ok(color) = action.parse::<ShapeColor>() {
            return Ok(Self::SetColor(color));
        }
        if let Ok(kind) = action.parse::<ShapeKind>() {
            return Ok(Self::SetKind(kind));
        }

        Err(PaintError::InvalidArgument {
            kind: "action",
            value: action.to_owned(),
        })
    }

    pub fn execute(&self, document: &mut Document) -> PaintResult<()> {
        match self {
            Command::SetColor(color) => {
                document.set_color(*color);
                log::info!("{}", document.mode_description());
            }
            Command::SetKind(kind) => {
                document.set_kind(*kind);
                log::info!("{}", document.mode_description());
            }
            Command::Save(path) => {
                document.save(path)?;
                log::info!("Save was successful");
            }
            Command::Load(path) => {
                document.load(path)?;
                log::info!("Load was successful");
            }
            Command::Undo => {
                if document.undo().is_some() {
                    log::info!("Undid successfully");
                }
            }
            Command::Reset => {
                document.reset();
                log::info!("Drawing reset");
            }
        }
        Ok(())
    }

    /// Whether executing this command can change which shapes are drawn
    pub fn changes_shapes(&self) -> bool {
        matches!(self, Command::Load(_) | Command::Undo | Command::Reset)
    }
}
