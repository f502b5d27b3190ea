use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.label(egui::RichText::new(app.document().mode_description()).strong());
        if let Some(error) = app.status_error() {
            ui.colored_label(egui::Color32::RED, error);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        // Presses on the panels around the canvas must not start shapes
        let canvas_rect = response.rect.intersect(ui.clip_rect());

        if app.handle_input(ctx, canvas_rect) {
            ctx.request_repaint();
        }

        app.renderer().render(&painter, canvas_rect, app.document());
    });
}
