use egui::{Context, Pos2, Rect};

use crate::document::Document;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events that drive shape creation, in integer canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { x: i32, y: i32 },
    /// Pointer moved while the press that started on the canvas is held
    PointerMove { x: i32, y: i32 },
}

impl InputEvent {
    /// Apply the event to the document: a press starts a shape, a move drags
    /// the active one
    pub fn apply(self, document: &mut Document) {
        match self {
            InputEvent::PointerDown { x, y } => document.begin_shape(x, y),
            InputEvent::PointerMove { x, y } => document.update_active_shape(x, y),
        }
    }
}

/// Handles converting raw egui pointer input into canvas [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    // A drag only counts if its press landed on the canvas
    pressed_in_canvas: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            pressed_in_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Convert a screen position into integer coordinates relative to the
    /// canvas origin. Positions outside the canvas are kept as is.
    pub fn to_canvas_coords(&self, pos: Pos2) -> (i32, i32) {
        let local = pos - self.canvas_rect.min;
        (local.x.round() as i32, local.y.round() as i32)
    }

    /// Translate a primary-button press into an event, if it hit the canvas
    pub fn pointer_pressed(&mut self, pos: Pos2) -> Option<InputEvent> {
        let location = self.make_location(pos);
        self.pressed_in_canvas = location.is_in_canvas;
        self.last_pointer_pos = Some(pos);
        if !location.is_in_canvas {
            return None;
        }
        let (x, y) = self.to_canvas_coords(pos);
        Some(InputEvent::PointerDown { x, y })
    }

    /// Translate pointer motion with the primary button held into an event
    pub fn pointer_dragged(&mut self, pos: Pos2) -> Option<InputEvent> {
        if !self.pressed_in_canvas || self.last_pointer_pos == Some(pos) {
            return None;
        }
        self.last_pointer_pos = Some(pos);
        let (x, y) = self.to_canvas_coords(pos);
        Some(InputEvent::PointerMove { x, y })
    }

    pub fn pointer_released(&mut self) {
        self.pressed_in_canvas = false;
        self.last_pointer_pos = None;
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            if let Some(pos) = pointer.interact_pos() {
                if pointer.primary_pressed() {
                    events.extend(self.pointer_pressed(pos));
                } else if pointer.primary_down() {
                    events.extend(self.pointer_dragged(pos));
                }
            }
            if pointer.primary_released() {
                self.pointer_released();
            }
        });

        events
    }
}
