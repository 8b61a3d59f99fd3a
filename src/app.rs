use egui::{Rect, Shape};
use log::info;

use crate::config::SketchConfig;
use crate::input::{route_event, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::render_bridge::{DisplayList, RenderBridge};
use crate::renderer::SketchGenerator;
use crate::state::EditorContext;
use crate::tools::Tool;

pub struct SketchApp {
    config: SketchConfig,
    context: EditorContext<SketchGenerator>,
    bridge: RenderBridge,
    // Renderables of the last synced revision, replayed every frame
    display_list: DisplayList<Shape>,
    input: InputHandler,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        info!(
            "Starting sketch canvas (roughness {}, seed {})",
            config.roughness, config.seed
        );
        let generator = SketchGenerator::from_config(&config);

        Self {
            config,
            context: EditorContext::new(generator),
            bridge: RenderBridge::new(),
            display_list: DisplayList::new(),
            input: InputHandler::new(Rect::NOTHING),
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn context(&self) -> &EditorContext<SketchGenerator> {
        &self.context
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.context.active_tool()
    }

    pub fn set_active_tool(&mut self, tool: Option<Tool>) {
        self.context.set_active_tool(tool);
    }

    /// Feed this frame's pointer input on `canvas_rect` to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            route_event(&event, &mut self.context);
        }
    }

    /// Rebuild the display list if the document changed since the last frame
    pub fn sync_display_list(&mut self) -> bool {
        self.bridge
            .sync(self.context.document(), &mut self.display_list)
    }

    pub fn display_list(&self) -> &DisplayList<Shape> {
        &self.display_list
    }
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
