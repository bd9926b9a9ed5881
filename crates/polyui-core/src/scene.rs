// crates/polyui-core/src/scene.rs
//! JSON scene files: a window size plus a nested component description.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::align::Align;
use crate::component::{Component, ComponentBase, Pinned};
use crate::geometry::{Axis, Padding};
use crate::tree::{ComponentId, ComponentTree};
use crate::widgets::{Block, ScrollBlock, Text};
use crate::{PolyError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Current surface size.
    pub window: Vec2,
    /// Size the scene was designed for. Defaults to `window`.
    #[serde(default)]
    pub reference: Option<Vec2>,
    pub root: SceneNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Block {
        #[serde(default)]
        intrinsic: Option<Vec2>,
    },
    Text {
        text: String,
        #[serde(default = "default_font_size")]
        font_size: f32,
    },
    Scroll {
        #[serde(default)]
        viewport: Option<Vec2>,
    },
}

fn default_font_size() -> f32 {
    16.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub size: Option<Vec2>,
    #[serde(default)]
    pub at: Vec2,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub pinned: Vec<Axis>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl Scene {
    pub fn from_json(source: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(source)?;
        if !(scene.window.x > 0.0 && scene.window.y > 0.0) {
            return Err(PolyError::InvalidScene(format!(
                "window size must be positive, got {}x{}",
                scene.window.x, scene.window.y
            )));
        }
        Ok(scene)
    }

    pub fn reference_size(&self) -> Vec2 {
        self.reference.unwrap_or(self.window)
    }

    /// Instantiates the described components into a fresh tree.
    pub fn build(&self) -> Result<(ComponentTree, ComponentId)> {
        let mut tree = ComponentTree::new();
        let root = insert_node(&mut tree, None, &self.root, "root".to_string())?;
        debug!("Built scene tree with {} components", tree.len());
        Ok((tree, root))
    }
}

/// Reads and parses a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let source = std::fs::read_to_string(path)?;
    Scene::from_json(&source)
}

fn insert_node(
    tree: &mut ComponentTree,
    parent: Option<ComponentId>,
    node: &SceneNode,
    fallback_name: String,
) -> Result<ComponentId> {
    let name = node.name.clone().unwrap_or(fallback_name);
    let base = node.to_base(name.clone());
    let component: Box<dyn Component> = match &node.kind {
        NodeKind::Block { intrinsic } => Box::new(Block { base, intrinsic: *intrinsic }),
        NodeKind::Text { text, font_size } => Box::new(Text {
            base,
            text: text.clone(),
            font_size: *font_size,
        }),
        NodeKind::Scroll { viewport } => Box::new(ScrollBlock {
            base,
            viewport: *viewport,
            offset: Vec2::ZERO,
        }),
    };
    let id = tree.insert_boxed(parent, component)?;
    for (index, child) in node.children.iter().enumerate() {
        insert_node(tree, Some(id), child, format!("{name}.{index}"))?;
    }
    Ok(id)
}

impl SceneNode {
    fn to_base(&self, name: String) -> ComponentBase {
        let padding = self.padding.non_negative();
        if padding != self.padding {
            warn!("Component '{}' has negative padding {:?}, clamping to zero", name, self.padding);
        }
        let alignment = self.align.clone().sanitized();
        if alignment != self.align {
            warn!("Component '{}' has negative align padding, clamping to zero", name);
        }
        let pinned = self
            .pinned
            .iter()
            .fold(Pinned::empty(), |acc, &axis| acc | Pinned::from(axis));

        ComponentBase {
            name,
            at: self.at,
            size: self.size,
            size_derived: false,
            visible_size: None,
            padding,
            alignment,
            layout_ignored: self.ignored,
            pinned,
        }
    }
}
