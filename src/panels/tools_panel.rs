use crate::PaintApp;
use crate::command::Command;
use crate::shape::{ShapeColor, ShapeKind};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let mut pending: Option<Command> = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let current_color = app.document().current_color();
            for color in ShapeColor::ALL {
                let label = egui::RichText::new(color.label()).color(color.to_color32());
                if ui.selectable_label(current_color == color, label).clicked() {
                    pending = Some(Command::SetColor(color));
                }
            }
            ui.separator();

            let current_kind = app.document().current_kind();
            for kind in ShapeKind::ALL {
                if ui.selectable_label(current_kind == kind, kind.label()).clicked() {
                    pending = Some(Command::SetKind(kind));
                }
            }
            ui.separator();

            let path = app.drawing_path();
            if ui.button("Save").clicked() {
                pending = Some(Command::Save(path.clone()));
            }
            if ui.add_enabled(!app.document().is_empty(), egui::Button::new("Undo")).clicked() {
                pending = Some(Command::Undo);
            }
            if ui.button("Load").clicked() {
                pending = Some(Command::Load(path));
            }
            if ui.button("Reset").clicked() {
                pending = Some(Command::Reset);
            }
        });

        // Stands in for a file dialog: Save and Load use this path
        ui.horizontal(|ui| {
            ui.label("File:");
            ui.text_edit_singleline(&mut app.config_mut().drawing_path);
        });
    });

    if let Some(command) = pending {
        log::debug!("Toolbar command: {:?}", command);
        let repaint = command.changes_shapes();
        app.execute_command(command);
        if repaint {
            ctx.request_repaint();
        }
    }
}
