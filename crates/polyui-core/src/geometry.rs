// crates/polyui-core/src/geometry.rs
use std::ops::{Deref, Index};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Index into a `Vec2` (`0` for x, `1` for y).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Helpers on `glam::Vec2` used by the layout code.
pub trait Vec2Ext {
    /// Component on the given axis.
    fn on(self, axis: Axis) -> f32;
    /// Copy with one axis replaced.
    fn with_axis(self, axis: Axis, value: f32) -> Vec2;
    /// Build a vector from main/cross components for the given main axis.
    fn from_axes(main: Axis, main_value: f32, cross_value: f32) -> Vec2;
    /// Copy resized so that neither component exceeds `max`.
    fn resize_within(self, max: Vec2) -> Vec2;
    /// Both components strictly greater than zero.
    fn is_positive(self) -> bool;
}

impl Vec2Ext for Vec2 {
    fn on(self, axis: Axis) -> f32 {
        self[axis.index()]
    }

    fn with_axis(mut self, axis: Axis, value: f32) -> Vec2 {
        self[axis.index()] = value;
        self
    }

    fn from_axes(main: Axis, main_value: f32, cross_value: f32) -> Vec2 {
        Vec2::ZERO
            .with_axis(main, main_value)
            .with_axis(main.other(), cross_value)
    }

    fn resize_within(self, max: Vec2) -> Vec2 {
        self.min(max)
    }

    fn is_positive(self) -> bool {
        self.x > 0.0 && self.y > 0.0
    }
}

/// Read-only vector, handed out for values callers must not mutate
/// (reported visible sizes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ConstVec2(Vec2);

impl ConstVec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn get(&self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for ConstVec2 {
    fn from(value: Vec2) -> Self {
        Self(value)
    }
}

impl Deref for ConstVec2 {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}

/// Box padding in `[left, top, right, bottom]` order.
///
/// Indexing with `axis` gives the near side, `axis + 2` the far side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same padding on all four sides.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left or top.
    pub fn leading(&self, axis: Axis) -> f32 {
        self[axis.index()]
    }

    /// Right or bottom.
    pub fn trailing(&self, axis: Axis) -> f32 {
        self[axis.index() + 2]
    }

    pub fn total(&self, axis: Axis) -> f32 {
        self.leading(axis) + self.trailing(axis)
    }

    /// Total padding on both axes.
    pub fn sum(&self) -> Vec2 {
        Vec2::new(self.total(Axis::X), self.total(Axis::Y))
    }

    /// Copy with every negative side clamped to zero.
    pub fn non_negative(self) -> Self {
        Self::new(
            self.left.max(0.0),
            self.top.max(0.0),
            self.right.max(0.0),
            self.bottom.max(0.0),
        )
    }
}

impl Index<usize> for Padding {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.left,
            1 => &self.top,
            2 => &self.right,
            3 => &self.bottom,
            _ => panic!("padding index out of bounds: {index}"),
        }
    }
}

impl From<[f32; 4]> for Padding {
    fn from([left, top, right, bottom]: [f32; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}

impl From<Padding> for [f32; 4] {
    fn from(value: Padding) -> Self {
        [value.left, value.top, value.right, value.bottom]
    }
}
