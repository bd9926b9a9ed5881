// crates/polyui-core/src/align.rs
use glam::Vec2;
use serde::Deserialize;

use crate::geometry::Axis;

/// Justification along an axis. Used for the main axis of a row and for the
/// block of rows along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceEvenly,
}

impl Justify {
    pub fn is_distributive(self) -> bool {
        matches!(self, Justify::SpaceBetween | Justify::SpaceEvenly)
    }
}

/// Alignment of a single item inside its row band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    #[default]
    Start,
    Center,
    End,
}

/// Distributive justifications collapse to centering for a single item.
impl From<Justify> for Line {
    fn from(justify: Justify) -> Self {
        match justify {
            Justify::Start => Line::Start,
            Justify::End => Line::End,
            Justify::Center | Justify::SpaceBetween | Justify::SpaceEvenly => Line::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Horizontal,
    Vertical,
}

impl Mode {
    pub fn main_axis(self) -> Axis {
        match self {
            Mode::Horizontal => Axis::X,
            Mode::Vertical => Axis::Y,
        }
    }
}

/// Row wrapping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    /// Everything goes into a single row.
    Never,
    /// A new row after every item.
    Always,
    /// Wrap only when the next item would not fit.
    #[default]
    Auto,
    /// A new row after every `n` items, or earlier if an item would not fit.
    #[serde(deserialize_with = "deserialize_items")]
    Items(usize),
}

impl Wrap {
    /// Wrap after every `n` items.
    ///
    /// # Panics
    /// If `n` is zero. A row that can hold no items is a configuration bug.
    pub fn items(n: usize) -> Self {
        assert!(n > 0, "wrap row capacity must be positive, got {n}");
        Wrap::Items(n)
    }

    /// Maximum number of items a row may hold, if limited.
    pub fn row_capacity(self) -> Option<usize> {
        match self {
            Wrap::Always => Some(1),
            Wrap::Items(n) => {
                assert!(n > 0, "wrap row capacity must be positive, got {n}");
                Some(n)
            }
            Wrap::Never | Wrap::Auto => None,
        }
    }
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n = usize::deserialize(deserializer)?;
    if n == 0 {
        return Err(serde::de::Error::custom("wrap row capacity must be positive"));
    }
    Ok(n)
}

/// Layout configuration attached to every layout-bearing component.
///
/// Paddings are stored in reference units and never mutated by layout;
/// see [`Align::scaled`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Align {
    pub main: Justify,
    pub cross: Justify,
    pub line: Line,
    pub mode: Mode,
    pub pad_edges: Vec2,
    pub pad_between: Vec2,
    pub wrap: Wrap,
}

impl Default for Align {
    fn default() -> Self {
        Self {
            main: Justify::Start,
            cross: Justify::Start,
            line: Line::Start,
            mode: Mode::Horizontal,
            pad_edges: Vec2::ZERO,
            pad_between: Vec2::ZERO,
            wrap: Wrap::Auto,
        }
    }
}

impl Align {
    pub fn new(main: Justify, cross: Justify, line: Line, mode: Mode) -> Self {
        Self { main, cross, line, mode, ..Self::default() }
    }

    pub fn with_main(mut self, main: Justify) -> Self {
        self.main = main;
        self
    }

    pub fn with_cross(mut self, cross: Justify) -> Self {
        self.cross = cross;
        self
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_padding(mut self, pad_edges: Vec2, pad_between: Vec2) -> Self {
        debug_assert!(
            pad_edges.cmpge(Vec2::ZERO).all() && pad_between.cmpge(Vec2::ZERO).all(),
            "align paddings must be non-negative"
        );
        self.pad_edges = pad_edges;
        self.pad_between = pad_between;
        self
    }

    /// Copy with both paddings multiplied component-wise by `factor`.
    pub fn scaled(&self, factor: Vec2) -> Align {
        Align {
            pad_edges: self.pad_edges * factor,
            pad_between: self.pad_between * factor,
            ..self.clone()
        }
    }

    /// Copy with negative paddings clamped to zero.
    pub fn sanitized(mut self) -> Align {
        self.pad_edges = self.pad_edges.max(Vec2::ZERO);
        self.pad_between = self.pad_between.max(Vec2::ZERO);
        self
    }
}
