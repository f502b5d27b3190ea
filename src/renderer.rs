use egui::{Color32, Painter, Pos2, Rect};

use crate::document::Document;
use crate::shape::{Shape, ShapeKind, POINT_RADIUS};

/// Geometry a shape paints as, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle { center: Pos2, radius: f32 },
    Ellipse { rect: Rect },
    Rectangle { rect: Rect },
}

/// A filled primitive ready to paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPrimitive {
    pub primitive: Primitive,
    pub fill: Color32,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    point_radius: f32,
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(POINT_RADIUS as f32)
    }
}

impl Renderer {
    pub fn new(point_radius: f32) -> Self {
        Self {
            point_radius,
            background: Color32::WHITE,
        }
    }

    /// Map a shape to what gets painted, with canvas coordinates offset by `origin`.
    ///
    /// Points ignore their drag position and paint at the anchor.
    pub fn primitive_for(&self, shape: &Shape, origin: Pos2) -> RenderPrimitive {
        let primitive = match shape.kind() {
            ShapeKind::Point => {
                let (x, y) = shape.anchor();
                Primitive::Circle {
                    center: origin + egui::vec2(x as f32, y as f32),
                    radius: self.point_radius,
                }
            }
            ShapeKind::Ellipse => Primitive::Ellipse {
                rect: shape.bounding_box().to_rect().translate(origin.to_vec2()),
            },
            ShapeKind::Rectangle => Primitive::Rectangle {
                rect: shape.bounding_box().to_rect().translate(origin.to_vec2()),
            },
        };

        RenderPrimitive {
            primitive,
            fill: shape.color().to_color32(),
        }
    }

    /// Paint the document's shapes in drawing order, clipped to `canvas_rect`
    pub fn render(&self, painter: &Painter, canvas_rect: Rect, document: &Document) {
        let painter = painter.with_clip_rect(canvas_rect);
        painter.rect_filled(canvas_rect, 0.0, self.background);

        for shape in document.shapes() {
            let RenderPrimitive { primitive, fill } = self.primitive_for(shape, canvas_rect.min);
            match primitive {
                Primitive::Circle { center, radius } => {
                    painter.circle_filled(center, radius, fill);
                }
                Primitive::Ellipse { rect } => {
                    let radius = rect.size() / 2.0;
                    painter.add(egui::Shape::ellipse_filled(rect.center(), radius, fill));
                }
                Primitive::Rectangle { rect } => {
                    painter.rect_filled(rect, 0.0, fill);
                }
            }
        }
    }
}
