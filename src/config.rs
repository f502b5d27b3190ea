use serde::{Deserialize, Serialize};

use crate::shape::POINT_RADIUS;

/// Settings restored across runs through eframe's persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintConfig {
    /// Initial canvas size in points
    pub canvas_size: [f32; 2],
    /// Radius of the mark drawn for point shapes
    pub point_radius: f32,
    /// File offered for Save and Load
    pub drawing_path: String,
}

impl PaintConfig {
    /// Point radius to render with; a stored value that is not a positive
    /// finite number falls back to the default
    pub fn point_radius(&self) -> f32 {
        if self.point_radius.is_finite() && self.point_radius > 0.0 {
            self.point_radius
        } else {
            log::warn!("Ignoring invalid point radius {}", self.point_radius);
            POINT_RADIUS as f32
        }
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_size: [750.0, 450.0],
            point_radius: POINT_RADIUS as f32,
            drawing_path: "drawing.json".to_owned(),
        }
    }
}
