// crates/polyui-layout/src/lib.rs

use glam::Vec2;
use polyui_core::{Component, ComponentId, ComponentTree};
use std::collections::HashMap;
use tracing::debug;

pub mod flexbox;
pub mod rows;
pub mod scale;

pub use flexbox::*;
pub use rows::*;
pub use scale::*;

/// Problems found while laying out a tree. None of them abort the pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("component '{name}' ({id}) has no size and nothing to derive one from")]
    UnresolvableSize { id: ComponentId, name: String },

    #[error("content of '{name}' ({id}) overflows its cross axis by {overflow}")]
    InsufficientCrossSpace {
        id: ComponentId,
        name: String,
        overflow: f32,
    },

    #[error("component {0} is not in the tree")]
    MissingComponent(ComponentId),
}

/// Output of one layout pass. Positions are relative to the parent.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub computed_positions: HashMap<ComponentId, Vec2>,
    pub computed_sizes: HashMap<ComponentId, Vec2>,
    pub visible_sizes: HashMap<ComponentId, Vec2>,
    pub scroll_resets: Vec<ComponentId>,
    pub diagnostics: Vec<LayoutError>,
}

impl LayoutResult {
    pub fn position(&self, id: ComponentId) -> Option<Vec2> {
        self.computed_positions.get(&id).copied()
    }

    pub fn size(&self, id: ComponentId) -> Option<Vec2> {
        self.computed_sizes.get(&id).copied()
    }

    pub fn visible_size(&self, id: ComponentId) -> Option<Vec2> {
        self.visible_sizes.get(&id).copied()
    }

    /// Writes every computed value back into the tree. Sizes are stored as
    /// derived so a later pass recomputes them from the same inputs.
    pub fn apply(&self, tree: &mut ComponentTree) {
        for (&id, &size) in &self.computed_sizes {
            if let Some(component) = tree.get_mut(id) {
                component.set_derived_size(size);
            }
        }
        for (&id, &visible) in &self.visible_sizes {
            if let Some(component) = tree.get_mut(id) {
                component.fix_visible_size(visible);
            }
        }
        for (&id, &at) in &self.computed_positions {
            if let Some(component) = tree.get_mut(id) {
                component.set_at(at);
            }
        }
        for &id in &self.scroll_resets {
            if let Some(scrollable) = tree.get_mut(id).and_then(|component| component.scrollable_mut()) {
                scrollable.reset_scroll();
            }
        }
        debug!(
            "Applied layout: {} positions, {} sizes, {} scroll resets",
            self.computed_positions.len(),
            self.computed_sizes.len(),
            self.scroll_resets.len()
        );
    }
}

pub trait LayoutEngine {
    /// Computes positions and sizes for `root` and its subtree without
    /// touching the tree.
    fn compute_layout(
        &mut self,
        tree: &ComponentTree,
        root: ComponentId,
        scale: &ScaleContext,
    ) -> LayoutResult;
}

/// Lays out `root` with the default flex engine and applies the result.
/// Returns the problems encountered; the rest of the tree is laid out anyway.
pub fn layout(tree: &mut ComponentTree, root: ComponentId, scale: &ScaleContext) -> Vec<LayoutError> {
    let result = FlexLayoutEngine::new().compute_layout(tree, root, scale);
    result.apply(tree);
    result.diagnostics
}
