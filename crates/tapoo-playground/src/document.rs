use std::collections::HashMap;

use tapoo_engine::canvas::Canvas;

/// Element registry: canvases looked up by identifier.
#[derive(Debug, Default)]
pub struct Document {
    canvases: HashMap<String, Canvas>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `canvas` under `id`, returning any canvas it replaced.
    pub fn insert_canvas(&mut self, id: impl Into<String>, canvas: Canvas) -> Option<Canvas> {
        self.canvases.insert(id.into(), canvas)
    }

    pub fn remove_canvas(&mut self, id: &str) -> Option<Canvas> {
        self.canvases.remove(id)
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.get(id)
    }

    pub fn canvas_mut(&mut self, id: &str) -> Option<&mut Canvas> {
        self.canvases.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let mut doc = Document::new();
        assert!(doc.insert_canvas("data-playground", Canvas::new(10, 10)).is_none());

        assert_eq!(doc.canvas("data-playground").map(Canvas::width), Some(10));
        assert!(doc.canvas("missing").is_none());

        let replaced = doc.insert_canvas("data-playground", Canvas::new(20, 20));
        assert_eq!(replaced.map(|c| c.width()), Some(10));
    }

    #[test]
    fn removed_canvas_is_gone() {
        let mut doc = Document::new();
        doc.insert_canvas("data-playground", Canvas::default());
        assert!(doc.remove_canvas("data-playground").is_some());
        assert!(doc.canvas_mut("data-playground").is_none());
    }
}
