// crates/polyui-core/src/component.rs
use std::fmt;

use bitflags::bitflags;
use glam::Vec2;

use crate::align::Align;
use crate::geometry::{Axis, ConstVec2, Padding};

bitflags! {
    /// Axes on which a component was created with an explicit position.
    /// Layout never moves a component on a pinned axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pinned: u8 {
        const X = 0b01;
        const Y = 0b10;
    }
}

impl Pinned {
    pub fn on(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.contains(Pinned::X),
            Axis::Y => self.contains(Pinned::Y),
        }
    }
}

impl From<Axis> for Pinned {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Pinned::X,
            Axis::Y => Pinned::Y,
        }
    }
}

/// Fields shared by every component.
#[derive(Debug, Clone, Default)]
pub struct ComponentBase {
    pub name: String,
    pub at: Vec2,
    pub size: Option<Vec2>,
    /// Set when `size` was written by layout rather than assigned.
    pub size_derived: bool,
    pub visible_size: Option<Vec2>,
    pub padding: Padding,
    pub alignment: Align,
    pub layout_ignored: bool,
    pub pinned: Pinned,
}

impl ComponentBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Components whose content can scroll inside a viewport.
pub trait Scrollable {
    fn scroll_offset(&self) -> Vec2;
    fn reset_scroll(&mut self);
}

/// The surface the layout engine needs from a node.
///
/// Implementors only have to expose their [`ComponentBase`]; everything else
/// has a default that reads or writes it.
pub trait Component: fmt::Debug {
    fn base(&self) -> &ComponentBase;
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Short type label used in logs and reports.
    fn kind(&self) -> &'static str;

    fn name(&self) -> &str {
        &self.base().name
    }

    fn at(&self) -> Vec2 {
        self.base().at
    }

    fn set_at(&mut self, at: Vec2) {
        self.base_mut().at = at;
    }

    /// `None` while the size is unknown.
    fn size(&self) -> Option<Vec2> {
        self.base().size
    }

    fn set_size(&mut self, size: Vec2) {
        let base = self.base_mut();
        base.size = Some(size);
        base.size_derived = false;
    }

    /// Stores a size computed by layout. The next layout pass derives it
    /// again instead of treating it as assigned.
    fn set_derived_size(&mut self, size: Vec2) {
        let base = self.base_mut();
        base.size = Some(size);
        base.size_derived = true;
    }

    fn size_derived(&self) -> bool {
        self.base().size_derived
    }

    /// Size assigned by the owner, ignoring one left behind by layout.
    fn assigned_size(&self) -> Option<Vec2> {
        self.size().filter(|_| !self.size_derived())
    }

    fn size_valid(&self) -> bool {
        self.size().is_some_and(|size| size.is_finite())
    }

    fn padding(&self) -> Padding {
        self.base().padding
    }

    fn alignment(&self) -> &Align {
        &self.base().alignment
    }

    fn layout_ignored(&self) -> bool {
        self.base().layout_ignored
    }

    fn pinned(&self) -> Pinned {
        self.base().pinned
    }

    /// Intrinsic size hook (text measurement, image natural size).
    /// `hint` is the space the parent can offer, when it knows it.
    fn calculate_size(&self, _hint: Option<Vec2>) -> Option<Vec2> {
        None
    }

    /// The part of `size` that is actually shown. Scrollable components
    /// clamp this to their viewport.
    fn clamp_visible(&self, size: Vec2) -> Vec2 {
        size
    }

    fn visible_size(&self) -> Option<ConstVec2> {
        self.base().visible_size.map(ConstVec2::from)
    }

    fn fix_visible_size(&mut self, visible: Vec2) {
        self.base_mut().visible_size = Some(visible);
    }

    fn scrollable(&self) -> Option<&dyn Scrollable> {
        None
    }

    fn scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }
}
