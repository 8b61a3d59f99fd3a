use crate::renderer::paint_display_list;
use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // The canvas follows the panel, which follows the window size
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            painter.rect_filled(canvas_rect, 0.0, app.config().background);
            app.sync_display_list();
            paint_display_list(&painter, app.display_list(), canvas_rect.min.to_vec2());
        });
}
