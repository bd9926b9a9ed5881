// crates/polyui-core/src/widgets.rs
//! The minimal set of concrete components: plain blocks, measured text and
//! scrollable viewports.

use glam::Vec2;

use crate::component::{Component, ComponentBase, Scrollable};

/// A plain box. Acts as a container, or as a leaf with an explicit or
/// intrinsic size.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub base: ComponentBase,
    pub intrinsic: Option<Vec2>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self { base: ComponentBase::new(name), intrinsic: None }
    }

    pub fn sized(name: impl Into<String>, size: Vec2) -> Self {
        let mut block = Self::new(name);
        block.base.size = Some(size);
        block
    }
}

impl Component for Block {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Block"
    }

    fn calculate_size(&self, _hint: Option<Vec2>) -> Option<Vec2> {
        self.intrinsic
    }
}

/// A run of text measured with a fixed advance per glyph.
#[derive(Debug, Clone)]
pub struct Text {
    pub base: ComponentBase,
    pub text: String,
    pub font_size: f32,
}

impl Text {
    /// Advance of one glyph relative to the font size.
    pub const ADVANCE: f32 = 0.5;

    pub fn new(name: impl Into<String>, text: impl Into<String>, font_size: f32) -> Self {
        Self { base: ComponentBase::new(name), text: text.into(), font_size }
    }

    /// Width of the whole text on one line.
    pub fn line_width(&self) -> f32 {
        self.text.chars().count() as f32 * self.font_size * Self::ADVANCE
    }
}

impl Component for Text {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Text"
    }

    /// Breaks onto as many lines as needed to fit the hinted width.
    fn calculate_size(&self, hint: Option<Vec2>) -> Option<Vec2> {
        let width = self.line_width();
        if width <= 0.0 {
            return None;
        }
        match hint.map(|h| h.x).filter(|&w| w > 0.0 && w < width) {
            Some(max) => {
                let lines = (width / max).ceil();
                Some(Vec2::new(max, lines * self.font_size))
            }
            None => Some(Vec2::new(width, self.font_size)),
        }
    }
}

/// A component whose content may be larger than the area it shows.
#[derive(Debug, Clone, Default)]
pub struct ScrollBlock {
    pub base: ComponentBase,
    /// Largest area shown at once. `None` shows everything.
    pub viewport: Option<Vec2>,
    pub offset: Vec2,
}

impl ScrollBlock {
    pub fn new(name: impl Into<String>, viewport: Option<Vec2>) -> Self {
        Self { base: ComponentBase::new(name), viewport, offset: Vec2::ZERO }
    }
}

impl Component for ScrollBlock {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "ScrollBlock"
    }

    fn clamp_visible(&self, size: Vec2) -> Vec2 {
        match self.viewport {
            Some(viewport) => size.min(viewport),
            None => size,
        }
    }

    fn scrollable(&self) -> Option<&dyn Scrollable> {
        Some(self)
    }

    fn scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }
}

impl Scrollable for ScrollBlock {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn reset_scroll(&mut self) {
        self.offset = Vec2::ZERO;
    }
}
