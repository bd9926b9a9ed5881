// src/report.rs
use std::fmt::Write as _;

use glam::Vec2;
use polyui_core::{Component, ComponentId, ComponentTree};
use polyui_layout::LayoutError;
use serde::Serialize;

/// Options controlling the tree rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub show_visible: bool,
    pub show_align: bool,
}

/// Renders the laid-out tree, one component per line.
pub fn render_tree(tree: &ComponentTree, root: ComponentId, options: TreeOptions) -> String {
    let mut output = String::new();
    render_node(&mut output, tree, root, "", true, true, options);
    output
}

fn render_node(
    output: &mut String,
    tree: &ComponentTree,
    id: ComponentId,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    options: TreeOptions,
) {
    let Some(component) = tree.get(id) else {
        return;
    };
    let branch = match (is_root, is_last) {
        (true, _) => "",
        (false, true) => "└── ",
        (false, false) => "├── ",
    };

    let _ = write!(output, "{prefix}{branch}{} \"{}\"", component.kind(), component.name());
    let at = component.at();
    let _ = write!(output, " pos:({},{})", at.x, at.y);
    match component.size() {
        Some(size) => {
            let _ = write!(output, " size:({},{})", size.x, size.y);
        }
        None => output.push_str(" size:unknown"),
    }
    if options.show_visible {
        if let Some(visible) = component.visible_size() {
            let _ = write!(output, " visible:({},{})", visible.x(), visible.y());
        }
    }
    if options.show_align {
        let align = component.alignment();
        let _ = write!(
            output,
            " [{:?} main:{:?} cross:{:?} line:{:?} wrap:{:?}]",
            align.mode, align.main, align.cross, align.line, align.wrap
        );
    }
    let mut flags = Vec::new();
    if component.layout_ignored() {
        flags.push("ignored");
    }
    if !component.pinned().is_empty() {
        flags.push("pinned");
    }
    if !flags.is_empty() {
        let _ = write!(output, " ({})", flags.join(", "));
    }
    output.push('\n');

    let child_prefix = match (is_root, is_last) {
        (true, _) => String::new(),
        (false, true) => format!("{prefix}    "),
        (false, false) => format!("{prefix}│   "),
    };
    let children = tree.children(id);
    for (index, &child) in children.iter().enumerate() {
        render_node(
            output,
            tree,
            child,
            &child_prefix,
            index + 1 == children.len(),
            false,
            options,
        );
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentDump {
    pub id: ComponentId,
    pub kind: &'static str,
    pub name: String,
    pub at: Vec2,
    pub size: Option<Vec2>,
    pub visible_size: Option<Vec2>,
    pub children: Vec<ComponentId>,
}

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub window: Vec2,
    pub root: ComponentId,
    pub components: Vec<ComponentDump>,
    pub diagnostics: Vec<String>,
}

impl LayoutDump {
    pub fn new(tree: &ComponentTree, root: ComponentId, window: Vec2, diagnostics: &[LayoutError]) -> Self {
        let components = tree
            .iter()
            .map(|(id, component)| ComponentDump {
                id,
                kind: component.kind(),
                name: component.name().to_string(),
                at: component.at(),
                size: component.size(),
                visible_size: component.visible_size().map(|visible| visible.get()),
                children: tree.children(id).to_vec(),
            })
            .collect();
        Self {
            window,
            root,
            components,
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}
