// crates/polyui-layout/src/rows.rs
//! Row construction and the offset arithmetic shared by row and item placement.

use glam::Vec2;
use polyui_core::{Axis, ComponentId, Justify, Line, Padding, Vec2Ext, Wrap};

/// Added to the wrap capacity so summation drift never forces a wrap.
pub const WRAP_EPSILON: f32 = 1.0;

/// One flow item as seen by the row builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    pub id: ComponentId,
    /// Visible size of the item.
    pub size: Vec2,
    pub padding: Padding,
    /// Main-axis extent including the item's own padding.
    pub main: f32,
    /// Cross-axis extent including the item's own padding.
    pub cross: f32,
}

impl RowItem {
    pub fn new(id: ComponentId, main_axis: Axis, size: Vec2, padding: Padding) -> Self {
        let cross_axis = main_axis.other();
        Self {
            id,
            size,
            padding,
            main: padding.total(main_axis) + size.on(main_axis),
            cross: padding.total(cross_axis) + size.on(cross_axis),
        }
    }
}

/// A line of items sharing one cross-axis band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappingRow {
    /// Items plus between-padding plus both edge paddings.
    pub main: f32,
    /// Tallest item (along the cross axis).
    pub cross: f32,
    pub items: Vec<RowItem>,
}

impl WrappingRow {
    pub fn item_extents(&self) -> Vec<f32> {
        self.items.iter().map(|item| item.main).collect()
    }
}

/// Splits items into rows according to a wrap policy.
#[derive(Debug)]
pub struct RowBuilder {
    wrap: Wrap,
    wrap_cap: f32,
    between: f32,
    edge: f32,
    rows: Vec<WrappingRow>,
    current: WrappingRow,
}

impl RowBuilder {
    /// `between` and `edge` are the main-axis paddings, `wrap_cap` the most
    /// a row's items and gaps may span.
    pub fn new(wrap: Wrap, wrap_cap: f32, between: f32, edge: f32) -> Self {
        Self {
            wrap,
            wrap_cap,
            between,
            edge,
            rows: Vec::new(),
            current: WrappingRow::default(),
        }
    }

    /// Appends an item, closing the current row first when it must wrap.
    /// Returns `true` if a new row was started.
    pub fn push(&mut self, item: RowItem) -> bool {
        let wrapped = self.must_wrap(item.main);
        if wrapped {
            self.close();
        }
        self.current.main += item.main + self.between;
        self.current.cross = self.current.cross.max(item.cross);
        self.current.items.push(item);
        wrapped
    }

    fn must_wrap(&self, item_main: f32) -> bool {
        if self.wrap == Wrap::Never || self.current.items.is_empty() {
            return false;
        }
        let full = self
            .wrap
            .row_capacity()
            .is_some_and(|capacity| self.current.items.len() >= capacity);
        full || self.current.main + item_main > self.wrap_cap
    }

    fn close(&mut self) {
        let mut row = std::mem::take(&mut self.current);
        row.main = row.main - self.between + 2.0 * self.edge;
        self.rows.push(row);
    }

    pub fn finish(mut self) -> Vec<WrappingRow> {
        if !self.current.items.is_empty() {
            self.close();
        }
        self.rows
    }
}

/// Widest row and the summed height of all rows with `between` gaps.
pub fn extents(rows: &[WrappingRow], between: f32) -> (f32, f32) {
    let max_main = rows.iter().map(|row| row.main).fold(0.0, f32::max);
    let total_cross = rows.iter().map(|row| row.cross).sum::<f32>()
        + between * rows.len().saturating_sub(1) as f32;
    (max_main, total_cross)
}

/// Start offsets for a run of extents laid along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub offsets: Vec<f32>,
    /// How far the run exceeds the available space; zero when it fits.
    pub overflow: f32,
}

/// Lays `extents` out inside `available`, keeping `edge` free at both ends
/// and at least `between` between neighbours.
pub fn distribute(
    justify: Justify,
    extents: &[f32],
    available: f32,
    edge: f32,
    between: f32,
) -> Distribution {
    let count = extents.len();
    if count == 0 {
        return Distribution { offsets: Vec::new(), overflow: 0.0 };
    }
    let content = extents.iter().sum::<f32>() + between * (count - 1) as f32;
    let leftover = available - 2.0 * edge - content;
    let overflow = (-leftover).max(0.0);
    let leftover = leftover.max(0.0);

    let justify = if count == 1 && justify.is_distributive() {
        Justify::Center
    } else {
        justify
    };

    let (start, gap) = match justify {
        Justify::Start => (edge, between),
        Justify::Center => (edge + leftover / 2.0, between),
        Justify::End => return Distribution { offsets: walk_back(extents, available - edge, between), overflow },
        Justify::SpaceBetween => (edge, between + leftover / (count - 1) as f32),
        Justify::SpaceEvenly => {
            let unit = leftover / (count + 1) as f32;
            (edge + unit, between + unit)
        }
    };

    let mut cursor = start;
    let offsets = extents
        .iter()
        .map(|extent| {
            let offset = cursor;
            cursor += extent + gap;
            offset
        })
        .collect();
    Distribution { offsets, overflow }
}

/// Places extents backwards from `far`, keeping their original order.
fn walk_back(extents: &[f32], far: f32, between: f32) -> Vec<f32> {
    let mut offsets = vec![0.0; extents.len()];
    let mut cursor = far;
    for (offset, extent) in offsets.iter_mut().zip(extents).rev() {
        *offset = cursor - extent;
        cursor = *offset - between;
    }
    offsets
}

/// Position of one item inside a band of `available` length.
///
/// `size` is the item's visible size and `lead`/`trail` its own padding on
/// this axis.
pub fn line_offset(line: Line, available: f32, edge: f32, size: f32, lead: f32, trail: f32) -> f32 {
    match line {
        Line::Start => edge + lead,
        Line::Center => (available - (size + lead + trail)) / 2.0 + lead,
        Line::End => available - edge - trail - size,
    }
}
