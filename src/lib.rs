#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod render_bridge;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::SketchApp;
pub use command::Command;
pub use config::SketchConfig;
pub use document::Document;
pub use error::{ConfigError, ShapeError};
pub use geometry::{distance, find_shape_at, is_within_element};
pub use input::{InputEvent, InputHandler};
pub use render_bridge::{DisplayList, RenderBridge, Surface};
pub use renderer::SketchGenerator;
pub use shape::{Shape, ShapeGenerator, ShapeKind};
pub use state::{EditorContext, EditorState};
pub use tools::Tool;
