use crate::components::ToolButton;
use crate::tools::Tool;
use crate::SketchApp;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(56.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let active = app.active_tool();

                for tool in Tool::ALL {
                    let button = ToolButton::new(tool.icon(), tool.name(), active == Some(tool));
                    if button.show(ui).clicked() {
                        app.set_active_tool(Some(tool));
                    }
                    ui.add_space(4.0);
                }

                ui.separator();

                let none = ToolButton::new("🚫", "no tool", active.is_none());
                if none.show(ui).clicked() {
                    app.set_active_tool(None);
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                let context = app.context();
                ui.small(format!("{} shapes", context.document().len()));
                ui.small(context.state().name());
            });
        });
}
