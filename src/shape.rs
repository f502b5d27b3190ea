use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::PaintError;

/// Radius of the mark drawn for a point-kind shape
pub const POINT_RADIUS: i32 = 5;

/// The fixed palette a shape can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl ShapeColor {
    pub const ALL: [ShapeColor; 4] = [Self::Black, Self::Red, Self::Green, Self::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Caption used on toolbar buttons
    pub fn label(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Black => Color32::BLACK,
            Self::Red => Color32::RED,
            Self::Green => Color32::GREEN,
            Self::Blue => Color32::BLUE,
        }
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeColor {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            _ => Err(PaintError::InvalidArgument {
                kind: "color",
                value: s.to_owned(),
            }),
        }
    }
}

/// The primitive a shape is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Point,
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Point, Self::Ellipse, Self::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Ellipse => "ellipse",
            Self::Rectangle => "rectangle",
        }
    }

    /// Caption used on toolbar buttons
    pub fn label(self) -> &'static str {
        match self {
            Self::Point => "Dot",
            Self::Ellipse => "Oval",
            Self::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = PaintError;

    // Button captions ("Dot", "Oval") are accepted alongside the canonical names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" | "dot" => Ok(Self::Point),
            "ellipse" | "oval" => Ok(Self::Ellipse),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            _ => Err(PaintError::InvalidArgument {
                kind: "shape",
                value: s.to_owned(),
            }),
        }
    }
}

/// Axis-aligned box spanned by a shape's anchor and drag points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn to_rect(self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}

/// One drawn primitive.
///
/// The anchor is fixed at the press position. The drag point follows the
/// pointer while the shape is the most recent one in its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    color: ShapeColor,
    kind: ShapeKind,
    anchor_x: i32,
    anchor_y: i32,
    drag_x: i32,
    drag_y: i32,
}

impl Shape {
    pub fn new(color: ShapeColor, kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            color,
            kind,
            anchor_x: x,
            anchor_y: y,
            drag_x: x,
            drag_y: y,
        }
    }

    /// Move the drag point. Coordinates are not clamped to any canvas.
    pub fn update_drag(&mut self, x: i32, y: i32) {
        self.drag_x = x;
        self.drag_y = y;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.anchor_x.min(self.drag_x),
            y: self.anchor_y.min(self.drag_y),
            width: self.anchor_x.abs_diff(self.drag_x),
            height: self.anchor_y.abs_diff(self.drag_y),
        }
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn anchor(&self) -> (i32, i32) {
        (self.anchor_x, self.anchor_y)
    }

    pub fn drag(&self) -> (i32, i32) {
        (self.drag_x, self.drag_y)
    }
}
