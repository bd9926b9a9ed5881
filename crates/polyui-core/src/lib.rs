// crates/polyui-core/src/lib.rs
pub mod align;
pub mod component;
pub mod geometry;
pub mod scene;
pub mod tree;
pub mod widgets;

pub use align::*;
pub use component::*;
pub use geometry::*;
pub use scene::*;
pub use tree::*;
pub use widgets::*;

pub use glam::Vec2;

#[derive(Debug, thiserror::Error)]
pub enum PolyError {
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Component not found: {0}")]
    ComponentNotFound(ComponentId),

    #[error("Component tree is full ({0} components)")]
    TreeFull(usize),
}

pub type Result<T> = std::result::Result<T, PolyError>;
