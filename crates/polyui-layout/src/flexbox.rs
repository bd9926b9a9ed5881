// crates/polyui-layout/src/flexbox.rs
//! Flex/align layout: sizes components bottom-up where needed, splits
//! children into wrapping rows and positions them top-down.

use glam::Vec2;
use polyui_core::{
    Align, Axis, Component, ComponentId, ComponentTree, Line, Pinned, Vec2Ext,
};
use tracing::{debug, error, warn};

use crate::rows::{self, RowBuilder, RowItem, WRAP_EPSILON};
use crate::scale::ScaleContext;
use crate::{LayoutEngine, LayoutError, LayoutResult};

#[derive(Debug, Default)]
pub struct FlexLayoutEngine {
    debug: bool,
}

impl FlexLayoutEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl LayoutEngine for FlexLayoutEngine {
    fn compute_layout(
        &mut self,
        tree: &ComponentTree,
        root: ComponentId,
        scale: &ScaleContext,
    ) -> LayoutResult {
        if self.debug {
            debug!(
                "Layout root {} with window {:?}, padding scale {:?}",
                root,
                scale.current_size,
                scale.factor()
            );
        }
        let mut pass = LayoutPass {
            tree,
            scale: *scale,
            debug: self.debug,
            result: LayoutResult::default(),
        };
        pass.layout_node(root, None);
        pass.result
    }
}

/// State of a single `compute_layout` call.
struct LayoutPass<'a> {
    tree: &'a ComponentTree,
    scale: ScaleContext,
    debug: bool,
    result: LayoutResult,
}

impl<'a> LayoutPass<'a> {
    /// Size as known so far in this pass, falling back to the size assigned
    /// in the tree. Sizes derived by an earlier pass are derived again.
    fn size_of(&self, id: ComponentId) -> Option<Vec2> {
        self.result
            .size(id)
            .or_else(|| self.tree.get(id).and_then(|component| component.assigned_size()))
    }

    fn visible_of(&self, id: ComponentId, component: &dyn Component, size: Vec2) -> Vec2 {
        self.result
            .visible_size(id)
            .unwrap_or_else(|| component.clamp_visible(size))
    }

    fn set_size(&mut self, id: ComponentId, size: Vec2) {
        self.result.computed_sizes.insert(id, size);
    }

    fn fix_visible(&mut self, id: ComponentId, component: &dyn Component, size: Vec2) {
        self.result
            .visible_sizes
            .insert(id, component.clamp_visible(size));
    }

    fn unresolvable(&mut self, id: ComponentId, component: &dyn Component) {
        error!(
            "Cannot lay out {} '{}' ({}): size is unknown and cannot be derived",
            component.kind(),
            component.name(),
            id
        );
        self.result.diagnostics.push(LayoutError::UnresolvableSize {
            id,
            name: component.name().to_string(),
        });
    }

    fn layout_node(&mut self, id: ComponentId, hint: Option<Vec2>) {
        let tree = self.tree;
        let Some(component) = tree.get(id) else {
            error!("Component {} is not in the tree", id);
            self.result.diagnostics.push(LayoutError::MissingComponent(id));
            return;
        };

        let mut size = self.size_of(id);
        if size.is_none() {
            if let Some(intrinsic) = component.calculate_size(hint).filter(|s| s.is_positive()) {
                self.set_size(id, intrinsic);
                size = Some(intrinsic);
            }
        }

        let mut flow = Vec::with_capacity(tree.children(id).len());
        for &child in tree.children(id) {
            match tree.get(child) {
                Some(child_component) if child_component.layout_ignored() => {
                    // overlays keep their position but their subtree is still laid out
                    self.layout_node(child, None);
                }
                Some(_) => flow.push(child),
                None => {
                    error!("Component {} lists missing child {}", id, child);
                    self.result.diagnostics.push(LayoutError::MissingComponent(child));
                }
            }
        }

        if flow.is_empty() {
            match size {
                Some(size) => self.fix_visible(id, component, size),
                None => self.unresolvable(id, component),
            }
            return;
        }

        let align = component.alignment().scaled(self.scale.factor());
        if flow.len() == 1 {
            self.layout_single(id, component, size, flow[0], &align);
        } else {
            self.layout_rows(id, component, size, &flow, &align);
        }
    }

    /// Exactly one flow child: no rows, align it directly.
    fn layout_single(
        &mut self,
        id: ComponentId,
        component: &dyn Component,
        size: Option<Vec2>,
        child: ComponentId,
        align: &Align,
    ) {
        let tree = self.tree;
        let edge = align.pad_edges;
        let hint = size.map(|size| (size - edge * 2.0).max(Vec2::ZERO));
        self.layout_node(child, hint);

        let (Some(child_component), Some(child_size)) = (tree.get(child), self.size_of(child)) else {
            match size {
                Some(size) => self.fix_visible(id, component, size),
                None => self.unresolvable(id, component),
            }
            return;
        };
        let visible = self.visible_of(child, child_component, child_size);
        let padding = child_component.padding();

        let size = match size {
            Some(size) => size,
            None => {
                let derived = visible + padding.sum() + edge * 2.0;
                self.set_size(id, derived);
                derived
            }
        };
        self.fix_visible(id, component, size);

        let main = align.mode.main_axis();
        let cross = main.other();
        let place = |line: Line, axis: Axis| {
            rows::line_offset(
                line,
                size.on(axis),
                edge.on(axis),
                visible.on(axis),
                padding.leading(axis),
                padding.trailing(axis),
            )
        };
        let target = Vec2::from_axes(main, place(Line::from(align.main), main), place(align.line, cross));
        self.move_to(child, child_component, target);
    }

    /// Two or more flow children: build rows, size from them, then place.
    fn layout_rows(
        &mut self,
        id: ComponentId,
        component: &dyn Component,
        size: Option<Vec2>,
        flow: &[ComponentId],
        align: &Align,
    ) {
        let tree = self.tree;
        let main = align.mode.main_axis();
        let cross = main.other();
        let edge = align.pad_edges;
        let between = align.pad_between;

        let wrap_cap = self.wrap_cap(id, size, main, edge.on(main));
        let mut builder = RowBuilder::new(align.wrap, wrap_cap, between.on(main), edge.on(main));
        for &child in flow {
            self.layout_node(child, None);
            let (Some(child_component), Some(child_size)) = (tree.get(child), self.size_of(child)) else {
                continue;
            };
            let visible = self.visible_of(child, child_component, child_size);
            let item = RowItem::new(child, main, visible, child_component.padding());
            if item.main > wrap_cap {
                warn!(
                    "'{}' is wider than the row capacity of '{}' ({} > {}), it will overflow",
                    child_component.name(),
                    component.name(),
                    item.main,
                    wrap_cap
                );
            }
            builder.push(item);
        }

        let rows = builder.finish();
        if rows.is_empty() {
            match size {
                Some(size) => self.fix_visible(id, component, size),
                None => self.unresolvable(id, component),
            }
            return;
        }

        let (max_main, total_cross) = rows::extents(&rows, between.on(cross));
        let size = match size {
            Some(size) => size,
            None => {
                let derived = Vec2::from_axes(main, max_main, total_cross + 2.0 * edge.on(cross));
                self.set_size(id, derived);
                derived
            }
        };
        self.fix_visible(id, component, size);

        if self.debug {
            debug!(
                "'{}': {} rows in {:?}, wrap cap {}, content {}x{}",
                component.name(),
                rows.len(),
                size,
                wrap_cap,
                max_main,
                total_cross
            );
        }

        let row_extents: Vec<f32> = rows.iter().map(|row| row.cross).collect();
        let row_starts = rows::distribute(
            align.cross,
            &row_extents,
            size.on(cross),
            edge.on(cross),
            between.on(cross),
        );
        if row_starts.overflow > 0.0 {
            warn!(
                "Content of '{}' overflows its cross axis by {}",
                component.name(),
                row_starts.overflow
            );
            self.result.diagnostics.push(LayoutError::InsufficientCrossSpace {
                id,
                name: component.name().to_string(),
                overflow: row_starts.overflow,
            });
        }

        for (row, row_start) in rows.iter().zip(row_starts.offsets) {
            let item_starts = rows::distribute(
                align.main,
                &row.item_extents(),
                size.on(main),
                edge.on(main),
                between.on(main),
            );
            for (item, item_start) in row.items.iter().zip(item_starts.offsets) {
                let Some(item_component) = tree.get(item.id) else {
                    continue;
                };
                let main_at = item_start + item.padding.leading(main);
                let cross_at = row_start
                    + rows::line_offset(
                        align.line,
                        row.cross,
                        0.0,
                        item.size.on(cross),
                        item.padding.leading(cross),
                        item.padding.trailing(cross),
                    );
                self.move_to(item.id, item_component, Vec2::from_axes(main, main_at, cross_at));
            }
        }
    }

    /// Main-axis room for one row's items and gaps.
    fn wrap_cap(&self, id: ComponentId, size: Option<Vec2>, main: Axis, edge: f32) -> f32 {
        let window = self.scale.window_extent(main);
        let available = size
            .or_else(|| self.tree.ancestors(id).find_map(|ancestor| self.size_of(ancestor)))
            .map_or(window, |known| known.on(main).min(window));
        available + WRAP_EPSILON - 2.0 * edge
    }

    /// Records a new position, leaving pinned axes where they were.
    fn move_to(&mut self, id: ComponentId, component: &dyn Component, target: Vec2) {
        let pinned = component.pinned();
        if pinned == Pinned::all() {
            return;
        }
        let current = self.result.position(id).unwrap_or_else(|| component.at());
        let mut at = target;
        for axis in [Axis::X, Axis::Y] {
            if pinned.on(axis) {
                at = at.with_axis(axis, current.on(axis));
            }
        }
        if self.debug {
            debug!("Placing '{}' ({}) at {:?}", component.name(), id, at);
        }
        self.result.computed_positions.insert(id, at);
        if component.scrollable().is_some() {
            self.result.scroll_resets.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyui_core::{Block, Justify, Mode, Padding, ScrollBlock, Text, Wrap};

    fn run(tree: &ComponentTree, root: ComponentId) -> LayoutResult {
        FlexLayoutEngine::new().compute_layout(tree, root, &ScaleContext::identity(Vec2::new(800.0, 600.0)))
    }

    fn container(name: &str, size: Option<Vec2>, align: Align) -> Block {
        let mut block = Block::new(name);
        block.base.size = size;
        block.base.alignment = align;
        block
    }

    #[test]
    fn test_leaf_without_size_is_reported() {
        let mut tree = ComponentTree::new();
        let root = tree.insert(None, Block::new("empty")).unwrap();
        let result = run(&tree, root);
        assert_eq!(
            result.diagnostics,
            vec![LayoutError::UnresolvableSize { id: root, name: "empty".into() }]
        );
        assert!(result.computed_sizes.is_empty());
    }

    #[test]
    fn test_unresolvable_child_does_not_stop_siblings() {
        let mut tree = ComponentTree::new();
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 100.0)), Align::default()))
            .unwrap();
        let broken = tree.insert(Some(root), Block::new("broken")).unwrap();
        let a = tree.insert(Some(root), Block::sized("a", Vec2::new(10.0, 10.0))).unwrap();
        let b = tree.insert(Some(root), Block::sized("b", Vec2::new(10.0, 10.0))).unwrap();

        let result = run(&tree, root);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.position(broken).is_none());
        assert_eq!(result.position(a), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(result.position(b), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_sized_parent_of_unresolvable_only_child_keeps_visible_size() {
        let mut tree = ComponentTree::new();
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 80.0)), Align::default()))
            .unwrap();
        let broken = tree.insert(Some(root), Block::new("broken")).unwrap();

        let result = run(&tree, root);
        assert_eq!(
            result.diagnostics,
            vec![LayoutError::UnresolvableSize { id: broken, name: "broken".into() }]
        );
        assert_eq!(result.visible_size(root), Some(Vec2::new(100.0, 80.0)));
        assert!(result.position(broken).is_none());
    }

    #[test]
    fn test_intrinsic_size_is_adopted() {
        let mut tree = ComponentTree::new();
        let root = tree.insert(None, Text::new("label", "abcd", 10.0)).unwrap();
        let result = run(&tree, root);
        assert_eq!(result.size(root), Some(Vec2::new(20.0, 10.0)));
        assert_eq!(result.visible_size(root), Some(Vec2::new(20.0, 10.0)));
    }

    #[test]
    fn test_single_child_derives_parent_size() {
        let mut tree = ComponentTree::new();
        let align = Align::default().with_padding(Vec2::new(5.0, 3.0), Vec2::ZERO);
        let root = tree.insert(None, container("root", None, align)).unwrap();
        let mut child = Block::sized("child", Vec2::new(40.0, 20.0));
        child.base.padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        let child = tree.insert(Some(root), child).unwrap();

        let result = run(&tree, root);
        assert_eq!(result.size(root), Some(Vec2::new(40.0 + 4.0 + 10.0, 20.0 + 6.0 + 6.0)));
        assert_eq!(result.position(child), Some(Vec2::new(6.0, 5.0)));
    }

    #[test]
    fn test_single_child_end_alignment() {
        let mut tree = ComponentTree::new();
        let align = Align::new(Justify::End, Justify::Start, Line::End, Mode::Vertical)
            .with_padding(Vec2::new(2.0, 4.0), Vec2::ZERO);
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 80.0)), align))
            .unwrap();
        let child = tree.insert(Some(root), Block::sized("child", Vec2::new(10.0, 20.0))).unwrap();

        let result = run(&tree, root);
        // main is vertical: y flush to the bottom edge pad, x flush to the right
        assert_eq!(result.position(child), Some(Vec2::new(88.0, 56.0)));
    }

    #[test]
    fn test_single_child_gets_size_hint() {
        let mut tree = ComponentTree::new();
        let align = Align::default().with_padding(Vec2::new(5.0, 0.0), Vec2::ZERO);
        let root = tree
            .insert(None, container("root", Some(Vec2::new(50.0, 100.0)), align))
            .unwrap();
        // 20 glyphs of 5px = 100px, wrapped into 40px lines
        let text = tree.insert(Some(root), Text::new("text", "a".repeat(20), 10.0)).unwrap();

        let result = run(&tree, root);
        assert_eq!(result.size(text), Some(Vec2::new(40.0, 30.0)));
    }

    #[test]
    fn test_vertical_rows() {
        let mut tree = ComponentTree::new();
        let align = Align::default()
            .with_mode(Mode::Vertical)
            .with_wrap(Wrap::Auto)
            .with_padding(Vec2::ZERO, Vec2::new(4.0, 2.0));
        let root = tree
            .insert(None, container("column", Some(Vec2::new(200.0, 50.0)), align))
            .unwrap();
        let ids: Vec<_> = (0..3)
            .map(|i| tree.insert(Some(root), Block::sized(format!("c{i}"), Vec2::new(30.0, 20.0))).unwrap())
            .collect();

        let result = run(&tree, root);
        // column holds two items (20 + 2 + 20 <= 51), the third starts a new column
        assert_eq!(result.position(ids[0]), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(result.position(ids[1]), Some(Vec2::new(0.0, 22.0)));
        assert_eq!(result.position(ids[2]), Some(Vec2::new(34.0, 0.0)));
    }

    #[test]
    fn test_line_alignment_within_row() {
        let mut tree = ComponentTree::new();
        let align = Align::default().with_line(Line::Center);
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 40.0)), align))
            .unwrap();
        let tall = tree.insert(Some(root), Block::sized("tall", Vec2::new(10.0, 30.0))).unwrap();
        let short = tree.insert(Some(root), Block::sized("short", Vec2::new(10.0, 10.0))).unwrap();

        let result = run(&tree, root);
        assert_eq!(result.position(tall), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(result.position(short), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_cross_overflow_is_reported() {
        let mut tree = ComponentTree::new();
        let align = Align::default().with_wrap(Wrap::Always).with_cross(Justify::Center);
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 30.0)), align))
            .unwrap();
        let first = tree.insert(Some(root), Block::sized("a", Vec2::new(10.0, 20.0))).unwrap();
        let second = tree.insert(Some(root), Block::sized("b", Vec2::new(10.0, 20.0))).unwrap();

        let result = run(&tree, root);
        assert!(matches!(
            result.diagnostics.as_slice(),
            [LayoutError::InsufficientCrossSpace { overflow, .. }] if *overflow == 10.0
        ));
        // clamped to no extra space: rows start at the edge
        assert_eq!(result.position(first), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(result.position(second), Some(Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn test_scroll_reset_and_visible_clamp() {
        let mut tree = ComponentTree::new();
        let root = tree
            .insert(None, container("root", Some(Vec2::new(300.0, 300.0)), Align::default()))
            .unwrap();
        let mut list = ScrollBlock::new("list", Some(Vec2::new(100.0, 50.0)));
        list.offset = Vec2::new(0.0, 40.0);
        list.base.alignment = Align::default().with_mode(Mode::Vertical);
        let list = tree.insert(Some(root), list).unwrap();
        for i in 0..4 {
            tree.insert(Some(list), Block::sized(format!("row{i}"), Vec2::new(100.0, 30.0)))
                .unwrap();
        }
        let after = tree.insert(Some(root), Block::sized("after", Vec2::new(10.0, 10.0))).unwrap();

        let result = run(&tree, root);
        assert_eq!(result.size(list), Some(Vec2::new(100.0, 120.0)));
        assert_eq!(result.visible_size(list), Some(Vec2::new(100.0, 50.0)));
        // the next item is placed after the visible part only
        assert_eq!(result.position(after), Some(Vec2::new(100.0, 0.0)));
        assert_eq!(result.scroll_resets, vec![list]);
    }

    #[test]
    fn test_ignored_overlay_subtree_is_laid_out() {
        let mut tree = ComponentTree::new();
        let root = tree
            .insert(None, container("root", Some(Vec2::new(100.0, 100.0)), Align::default()))
            .unwrap();
        let mut overlay = container("overlay", Some(Vec2::new(50.0, 50.0)), Align::default().with_main(Justify::Center));
        overlay.base.layout_ignored = true;
        overlay.base.at = Vec2::new(7.0, 7.0);
        let overlay = tree.insert(Some(root), overlay).unwrap();
        let inner = tree.insert(Some(overlay), Block::sized("inner", Vec2::new(10.0, 10.0))).unwrap();
        let item = tree.insert(Some(root), Block::sized("item", Vec2::new(10.0, 10.0))).unwrap();

        let result = run(&tree, root);
        assert!(result.position(overlay).is_none());
        assert_eq!(result.position(inner), Some(Vec2::new(20.0, 0.0)));
        assert_eq!(result.position(item), Some(Vec2::new(0.0, 0.0)));
    }
}
