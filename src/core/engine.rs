// src/core/engine.rs
use crate::core::markdown::format_definition;
use crate::core::slug;
use crate::core::tooltip::Tooltip;
use crate::core::types::{Anchor, AnchorBinding, GlossaryMap, Viewport};
use crate::loader::load_from_file;
use std::path::Path;

/// The hover engine: the loaded glossary, the table of bound anchors, and
/// the shared tooltip they all drive. Owns the glossary for the lifetime
/// of the page session.
pub struct HoverEngine {
    glossary: GlossaryMap,
    bindings: Vec<AnchorBinding>,
    tooltip: Tooltip,
}

impl HoverEngine {
    pub fn new(glossary: GlossaryMap) -> Self {
        Self {
            glossary,
            bindings: Vec::new(),
            tooltip: Tooltip::new(),
        }
    }

    /// Loads the glossary from disk, collapsing any I/O or parse failure
    /// into an empty mapping. A failed load and a missing term look the
    /// same to the user: no tooltip ever appears.
    pub fn from_file_or_empty(path: &Path) -> Self {
        Self::new(load_from_file(path).unwrap_or_default())
    }

    /// Scans the anchors present at setup time and binds every one whose
    /// derived slug has a glossary entry. Anchors with no fragment, an
    /// empty normalized slug, or no matching entry are skipped. The scan
    /// runs once; anchors added later are never picked up.
    /// Returns the number of bound anchors.
    pub fn bind_anchors(&mut self, anchors: &[Anchor]) -> usize {
        for anchor in anchors {
            let Some(slug) = slug::derive(&anchor.href) else {
                continue;
            };
            let Some(raw) = self.glossary.get(&slug) else {
                continue;
            };
            self.bindings.push(AnchorBinding {
                anchor: anchor.clone(),
                slug,
                definition: format_definition(raw),
            });
        }
        self.bindings.len()
    }

    pub fn bindings(&self) -> &[AnchorBinding] {
        &self.bindings
    }

    /// Pointer-enter on the binding at `index`: the tooltip takes that
    /// anchor's formatted definition and moves above its bounding box.
    /// An out-of-range index is a no-op.
    pub fn pointer_enter(&mut self, index: usize, viewport: Viewport) {
        if let Some(binding) = self.bindings.get(index) {
            self.tooltip
                .show(&binding.definition, binding.anchor.rect, viewport);
        }
    }

    /// Pointer-leave: hides the tooltip regardless of which anchor was
    /// being hovered.
    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}
