use std::path::Path;

use crate::error::PaintResult;
use crate::persistence;
use crate::shape::{Shape, ShapeColor, ShapeKind};

/// The drawing being edited: its shapes in drawing order plus the current
/// tool selection.
///
/// Shapes only enter the history through [`Document::begin_shape`], and only
/// the most recent one can still be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    current_color: ShapeColor,
    current_kind: ShapeKind,
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_color(&self) -> ShapeColor {
        self.current_color
    }

    pub fn current_kind(&self) -> ShapeKind {
        self.current_kind
    }

    pub fn set_color(&mut self, color: ShapeColor) {
        self.current_color = color;
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.current_kind = kind;
    }

    /// Select a color by its textual tag
    pub fn select_color(&mut self, tag: &str) -> PaintResult<()> {
        self.current_color = tag.parse()?;
        Ok(())
    }

    /// Select a shape kind by its textual tag
    pub fn select_kind(&mut self, tag: &str) -> PaintResult<()> {
        self.current_kind = tag.parse()?;
        Ok(())
    }

    /// Start a new shape at the press position using the current tool selection
    pub fn begin_shape(&mut self, x: i32, y: i32) {
        let shape = Shape::new(self.current_color, self.current_kind, x, y);
        log::debug!("Begin {} {} shape at ({}, {})", shape.color(), shape.kind(), x, y);
        self.shapes.push(shape);
    }

    /// Drag the most recently created shape. Does nothing on an empty drawing.
    pub fn update_active_shape(&mut self, x: i32, y: i32) {
        if let Some(shape) = self.shapes.last_mut() {
            shape.update_drag(x, y);
        }
    }

    /// The shape still following the pointer, if any
    pub fn active_shape(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Remove the most recent shape. Does nothing on an empty drawing.
    pub fn undo(&mut self) -> Option<Shape> {
        let removed = self.shapes.pop();
        if removed.is_some() {
            log::debug!("Undo: {} shapes remain", self.shapes.len());
        }
        removed
    }

    pub fn reset(&mut self) {
        self.shapes.clear();
    }

    /// Shapes in drawing order; later shapes render on top
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn serialize(&self) -> PaintResult<Vec<u8>> {
        persistence::encode_shapes(&self.shapes)
    }

    /// Replace the history with the decoded shapes. On failure the current
    /// history is kept as is.
    pub fn deserialize(&mut self, bytes: &[u8]) -> PaintResult<()> {
        self.shapes = persistence::decode_shapes(bytes)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> PaintResult<()> {
        persistence::save_to_path(path, &self.shapes)
    }

    /// Replace the history with the drawing stored at `path`. On failure the
    /// current history is kept as is.
    pub fn load(&mut self, path: &Path) -> PaintResult<()> {
        self.shapes = persistence::load_from_path(path)?;
        Ok(())
    }

    /// Status line describing the current tool selection
    pub fn mode_description(&self) -> String {
        format!(
            "The current color is {} and the current shape is {}",
            self.current_color, self.current_kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::BoundingBox;

    #[test]
    fn test_defaults() {
        let doc = Document::new();
        assert_eq!(doc.current_color(), ShapeColor::Black);
        assert_eq!(doc.current_kind(), ShapeKind::Point);
        assert!(doc.is_empty());
        assert!(doc.active_shape().is_none());
    }

    #[test]
    fn test_shape_uses_selection_at_press_time() {
        let mut doc = Document::new();
        doc.set_color(ShapeColor::Blue);
        doc.begin_shape(1, 1);
        doc.set_color(ShapeColor::Green);
        doc.set_kind(ShapeKind::Ellipse);

        assert_eq!(doc.shapes()[0].color(), ShapeColor::Blue);
        assert_eq!(doc.shapes()[0].kind(), ShapeKind::Point);
    }

    #[test]
    fn test_drag_only_touches_last_shape() {
        let mut doc = Document::new();
        doc.begin_shape(0, 0);
        doc.begin_shape(5, 5);
        doc.update_active_shape(20, 30);

        assert_eq!(doc.shapes()[0].drag(), (0, 0));
        assert_eq!(doc.shapes()[1].bounding_box(), BoundingBox::new(5, 5, 15, 25));
    }

    #[test]
    fn test_drag_and_undo_on_empty_are_noops() {
        let mut doc = Document::new();
        doc.update_active_shape(3, 4);
        assert!(doc.undo().is_none());
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn test_select_by_tag() {
        let mut doc = Document::new();
        doc.select_color("red").unwrap();
        doc.select_kind("oval").unwrap();
        assert_eq!(doc.current_color(), ShapeColor::Red);
        assert_eq!(doc.current_kind(), ShapeKind::Ellipse);

        assert!(doc.select_color("magenta").unwrap_err().is_invalid_argument());
        assert!(doc.select_kind("").unwrap_err().is_invalid_argument());
        assert_eq!(doc.current_color(), ShapeColor::Red);
        assert_eq!(doc.current_kind(), ShapeKind::Ellipse);
    }

    #[test]
    fn test_mode_description() {
        let mut doc = Document::new();
        assert_eq!(
            doc.mode_description(),
            "The current color is black and the current shape is point"
        );
        doc.set_kind(ShapeKind::Rectangle);
        doc.set_color(ShapeColor::Green);
        assert_eq!(
            doc.mode_description(),
            "The current color is green and the current shape is rectangle"
        );
    }

    #[test]
    fn test_deserialize_keeps_tool_selection() {
        let mut source = Document::new();
        source.begin_shape(2, 2);
        let bytes = source.serialize().unwrap();

        let mut doc = Document::new();
        doc.set_color(ShapeColor::Red);
        doc.deserialize(&bytes).unwrap();
        assert_eq!(doc.current_color(), ShapeColor::Red);
        assert_eq!(doc.shapes(), source.shapes());
    }
}
