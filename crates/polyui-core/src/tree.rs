// crates/polyui-core/src/tree.rs
use crate::component::Component;
use crate::{PolyError, Result};

pub type ComponentId = u32;

#[derive(Debug)]
pub struct Node {
    pub component: Box<dyn Component>,
    pub parent: Option<ComponentId>,
    pub children: Vec<ComponentId>,
}

/// Arena owning every component of a UI tree. Nodes refer to each other by
/// index, so there are no parent/child reference cycles.
#[derive(Debug, Default)]
pub struct ComponentTree {
    nodes: Vec<Node>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `component` as the last child of `parent` (or as a root).
    pub fn insert(
        &mut self,
        parent: Option<ComponentId>,
        component: impl Component + 'static,
    ) -> Result<ComponentId> {
        self.insert_boxed(parent, Box::new(component))
    }

    pub fn insert_boxed(
        &mut self,
        parent: Option<ComponentId>,
        component: Box<dyn Component>,
    ) -> Result<ComponentId> {
        let id = ComponentId::try_from(self.nodes.len())
            .map_err(|_| PolyError::TreeFull(self.nodes.len()))?;
        if let Some(parent_id) = parent {
            self.node_mut(parent_id)?.children.push(id);
        }
        self.nodes.push(Node { component, parent, children: Vec::new() });
        Ok(id)
    }

    pub fn get(&self, id: ComponentId) -> Option<&dyn Component> {
        self.nodes.get(id as usize).map(|node| node.component.as_ref())
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.nodes.get_mut(id as usize).map(|node| node.component.as_mut())
    }

    pub fn node(&self, id: ComponentId) -> Result<&Node> {
        self.nodes.get(id as usize).ok_or(PolyError::ComponentNotFound(id))
    }

    fn node_mut(&mut self, id: ComponentId) -> Result<&mut Node> {
        self.nodes.get_mut(id as usize).ok_or(PolyError::ComponentNotFound(id))
    }

    /// Children in insertion order; empty for unknown ids.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.nodes
            .get(id as usize)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes.get(id as usize).and_then(|node| node.parent)
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &dyn Component)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (index as ComponentId, node.component.as_ref()))
    }
}
