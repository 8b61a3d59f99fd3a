use log::trace;

use crate::document::Document;

/// Something renderables can be painted onto.
pub trait Surface<R> {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Paint one renderable on top of what is already there
    fn draw(&mut self, renderable: &R);
}

/// A surface that records what was drawn, in order.
///
/// The app keeps one of these as a cache and replays it into the egui painter
/// every frame.
#[derive(Debug, Clone)]
pub struct DisplayList<R> {
    items: Vec<R>,
}

impl<R> Default for DisplayList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> DisplayList<R> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Clone> Surface<R> for DisplayList<R> {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn draw(&mut self, renderable: &R) {
        self.items.push(renderable.clone());
    }
}

/// Pushes the document to a surface whenever the document changed.
#[derive(Debug, Default)]
pub struct RenderBridge {
    synced_revision: Option<u64>,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `document` changed since the last sync
    pub fn is_stale<R>(&self, document: &Document<R>) -> bool {
        self.synced_revision != Some(document.revision())
    }

    /// Repaint `surface` if the document changed.
    ///
    /// Shapes are drawn oldest first, so newer shapes end up on top. Returns
    /// true if the surface was repainted.
    pub fn sync<R>(&mut self, document: &Document<R>, surface: &mut impl Surface<R>) -> bool {
        if !self.is_stale(document) {
            return false;
        }

        surface.clear();
        for shape in document.shapes() {
            surface.draw(shape.renderable());
        }
        self.synced_revision = Some(document.revision());
        trace!(
            "Repainted {} shapes at revision {}",
            document.len(),
            document.revision()
        );
        true
    }

    /// Force the next [`RenderBridge::sync`] to repaint
    pub fn invalidate(&mut self) {
        self.synced_revision = None;
    }
}
