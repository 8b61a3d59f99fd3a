//! The editor context owns the shape document and drives the pointer state
//! machine.
//!
//! Every pointer event goes through one of `on_pointer_down`,
//! `on_pointer_move` or `on_pointer_up`. The active tool decides what
//! pointer-down does; after that the current [`EditorState`] decides what moves
//! do, until pointer-up returns the editor to `Idle`.
//!
//! All document changes are [`Command`]s that carry a freshly built shape, so
//! there is no path that edits coordinates without regenerating the
//! renderable.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut context = EditorContext::new(generator);
//! context.set_active_tool(Some(Tool::Rectangle));
//! context.on_pointer_down(pos2(10.0, 10.0));
//! context.on_pointer_move(pos2(50.0, 40.0));
//! context.on_pointer_up(pos2(50.0, 40.0));
//! assert_eq!(context.document().len(), 1);
//! ```
use egui::Pos2;
use log::{debug, error, info, warn};

use super::EditorState;
use crate::command::Command;
use crate::document::Document;
use crate::shape::{ShapeGenerator, ShapeKind};
use crate::tools::{DrawShapeTool, SelectionTool, Tool};

pub struct EditorContext<G: ShapeGenerator> {
    state: EditorState<G::Renderable>,
    document: Document<G::Renderable>,
    generator: G,
    active_tool: Option<Tool>,
}

impl<G: ShapeGenerator> std::fmt::Debug for EditorContext<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("state", &self.state.name())
            .field("active_tool", &self.active_tool)
            .field("shapes", &self.document.len())
            .field("revision", &self.document.revision())
            .finish_non_exhaustive()
    }
}

impl<G: ShapeGenerator> EditorContext<G> {
    /// Creates an idle context with an empty document and no active tool.
    pub fn new(generator: G) -> Self {
        Self {
            state: EditorState::Idle,
            document: Document::new(),
            generator,
            active_tool: None,
        }
    }

    pub fn state(&self) -> &EditorState<G::Renderable> {
        &self.state
    }

    pub fn document(&self) -> &Document<G::Renderable> {
        &self.document
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    /// Select the tool used by the next pointer-down.
    ///
    /// An action already in progress keeps going with the behavior it started
    /// with.
    pub fn set_active_tool(&mut self, tool: Option<Tool>) {
        if self.active_tool != tool {
            info!("Active tool: {:?} -> {:?}", self.active_tool, tool);
            self.active_tool = tool;
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if !self.state.is_idle() {
            warn!(
                "Ignoring pointer down at {:?} while {}",
                pos,
                self.state.name()
            );
            return;
        }

        let Some(tool) = self.active_tool else {
            return;
        };

        match tool {
            Tool::Line | Tool::Rectangle => {
                let Ok(kind) = ShapeKind::try_from(tool) else {
                    return;
                };
                let command = DrawShapeTool::begin(pos, kind, &self.document, &self.generator);
                let shape_id = command.shape_id();
                if self.execute(command) {
                    self.transition_to(EditorState::Drawing { shape_id });
                }
            }
            Tool::Selection => {
                if let Some(selected) = SelectionTool::grab(pos, self.document.shapes()) {
                    debug!(
                        "Grabbed shape #{} at offset {:?}",
                        selected.id(),
                        selected.offset
                    );
                    self.transition_to(EditorState::Moving { selected });
                }
            }
        }
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) {
        let command = match &self.state {
            EditorState::Idle => None,
            EditorState::Drawing { .. } => {
                DrawShapeTool::update(pos, &self.document, &self.generator)
            }
            EditorState::Moving { selected } => {
                Some(SelectionTool::drag(selected, pos, &self.generator))
            }
        };

        if let Some(command) = command {
            self.execute(command);
        }
    }

    pub fn on_pointer_up(&mut self, _pos: Pos2) {
        if !self.state.is_idle() {
            self.transition_to(EditorState::Idle);
        }
    }

    fn transition_to(&mut self, new_state: EditorState<G::Renderable>) {
        debug!("State: {} -> {}", self.state.name(), new_state.name());
        self.state = new_state;
    }

    /// Apply a command to the document. Failures are logged and leave the
    /// document untouched.
    fn execute(&mut self, command: Command<G::Renderable>) -> bool {
        let name = command.name();
        let id = command.shape_id();
        match command.execute(&mut self.document) {
            Ok(()) => true,
            Err(err) => {
                error!("{} on shape #{} failed: {}", name, id, err);
                false
            }
        }
    }
}
