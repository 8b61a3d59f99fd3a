#![allow(dead_code)]

use egui::{Pos2, Vec2};
use sketch_canvas::{DisplayList, EditorContext, ShapeGenerator, Surface, Tool};

/// What the generator was asked to build
#[derive(Debug, Clone, PartialEq)]
pub enum Sketch {
    Line { start: Pos2, end: Pos2 },
    Rectangle { origin: Pos2, size: Vec2 },
}

/// Generator that records its inputs instead of producing pixels
#[derive(Debug, Default, Clone)]
pub struct RecordingGenerator;

impl ShapeGenerator for RecordingGenerator {
    type Renderable = Sketch;

    fn line(&self, start: Pos2, end: Pos2) -> Sketch {
        Sketch::Line { start, end }
    }

    fn rectangle(&self, origin: Pos2, size: Vec2) -> Sketch {
        Sketch::Rectangle { origin, size }
    }
}

/// Surface that logs clear/draw calls
#[derive(Debug, Default)]
pub struct CallLog {
    pub calls: Vec<String>,
}

impl Surface<Sketch> for CallLog {
    fn clear(&mut self) {
        self.calls.push("clear".to_string());
    }

    fn draw(&mut self, renderable: &Sketch) {
        let call = match renderable {
            Sketch::Line { .. } => "draw line",
            Sketch::Rectangle { .. } => "draw rectangle",
        };
        self.calls.push(call.to_string());
    }
}

pub fn editor(tool: Option<Tool>) -> EditorContext<RecordingGenerator> {
    let mut context = EditorContext::new(RecordingGenerator);
    context.set_active_tool(tool);
    context
}

/// Run a full down / moves / up gesture
pub fn drag(context: &mut EditorContext<RecordingGenerator>, from: Pos2, path: &[Pos2]) {
    context.on_pointer_down(from);
    for &pos in path {
        context.on_pointer_move(pos);
    }
    context.on_pointer_up(path.last().copied().unwrap_or(from));
}

pub fn empty_list() -> DisplayList<Sketch> {
    DisplayList::new()
}
