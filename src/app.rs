use std::path::PathBuf;

use crate::command::Command;
use crate::config::PaintConfig;
use crate::document::Document;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// We derive Deserialize/Serialize so we can persist app settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: PaintConfig,
    // The drawing itself is only persisted through explicit Save
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    // Last failure reported by a command, shown in the status bar
    #[serde(skip)]
    status_error: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<PaintApp>(storage, eframe::APP_KEY))
            .map(|app| app.config)
            .unwrap_or_default();
        log::info!("Starting with drawing path {}", config.drawing_path);
        Self::with_config(config)
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            renderer: Renderer::new(config.point_radius()),
            config,
            document: Document::new(),
            input: InputHandler::default(),
            status_error: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PaintConfig {
        &mut self.config
    }

    /// The file Save and Load act on
    pub fn drawing_path(&self) -> PathBuf {
        PathBuf::from(self.config.drawing_path.trim())
    }

    pub fn status_error(&self) -> Option<&str> {
        self.status_error.as_deref()
    }

    /// Run a toolbar command, keeping its failure for the status bar
    pub fn execute_command(&mut self, command: Command) {
        match command.execute(&mut self.document) {
            Ok(()) => self.status_error = None,
            Err(err) => {
                log::warn!("{:?} failed: {}", command, err);
                self.status_error = Some(err.to_string());
            }
        }
    }

    /// Feed this frame's pointer input to the document. Returns true if any
    /// shape changed.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> bool {
        self.input.set_canvas_rect(canvas_rect);
        let events = self.input.process_input(ctx);
        for event in &events {
            event.apply(&mut self.document);
        }
        !events.is_empty()
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
