#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod shape;

pub use app::PaintApp;
pub use command::Command;
pub use config::PaintConfig;
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use shape::{BoundingBox, Shape, ShapeColor, ShapeKind};
