//! FlexTree - Arena of flex nodes.
//!
//! Nodes are addressed by [`NodeId`], an index into a flat `Vec<FlexNode>`.
//! Destroyed slots go to a free pool and are reused by the next allocation,
//! so ids stay small and the arena does not grow under churn.
//!
//! Every structural or style mutation goes through this type so the dirty
//! flag can be propagated to ancestors (see `FlexTree::mark_dirty`).

use std::fmt;

use crate::config::LayoutConfig;
use crate::geometry::Size;
use crate::layout::NodeLayout;

use super::{FlexNode, FlexStyle, MeasureFunc, TreeError};

// =============================================================================
// NodeId
// =============================================================================

/// Handle of a node in a [`FlexTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena slot of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// FlexTree
// =============================================================================

/// Owner of all nodes of one or more layout trees.
#[derive(Debug, Default)]
pub struct FlexTree {
    pub(crate) nodes: Vec<FlexNode>,
    free_indices: Vec<usize>,
    pub(crate) config: LayoutConfig,
    /// Incremented once per `compute_layout` call.
    pub(crate) epoch: u64,
}

impl FlexTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration. Every root is marked dirty so the next
    /// pass picks the new settings up.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        for node in self.nodes.iter_mut() {
            if node.live && node.parent.is_none() {
                node.dirty = true;
            }
        }
    }

    // =========================================================================
    // Slot access
    // =========================================================================

    /// Live node for `id`, or `NodeNotFound`.
    pub fn get(&self, id: NodeId) -> Result<&FlexNode, TreeError> {
        match self.nodes.get(id.0) {
            Some(node) if node.live => Ok(node),
            _ => Err(TreeError::NodeNotFound(id)),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut FlexNode, TreeError> {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.live => Ok(node),
            _ => Err(TreeError::NodeNotFound(id)),
        }
    }

    /// Unchecked access for ids that came out of the tree itself.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &FlexNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut FlexNode {
        &mut self.nodes[id.0]
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_indices.len()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    pub fn new_node(&mut self, style: FlexStyle) -> NodeId {
        let node = FlexNode::new(style);
        if let Some(index) = self.free_indices.pop() {
            self.nodes[index] = node;
            return NodeId(index);
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Leaf whose size comes from `measure`.
    pub fn new_leaf_with_measure<F>(&mut self, style: FlexStyle, measure: F) -> NodeId
    where
        F: Fn(f32) -> Size + 'static,
    {
        let id = self.new_node(style);
        self.node_mut(id).measure = Some(Box::new(measure));
        id
    }

    /// Node adopting `children` in order. Fails without allocating if any
    /// child is unknown, already parented, or listed twice.
    pub fn new_with_children(
        &mut self,
        style: FlexStyle,
        children: &[NodeId],
    ) -> Result<NodeId, TreeError> {
        for (i, &child) in children.iter().enumerate() {
            if self.get(child)?.parent.is_some() || children[..i].contains(&child) {
                return Err(TreeError::AlreadyHasParent(child));
            }
        }

        let id = self.new_node(style);
        for &child in children {
            self.node_mut(child).parent = Some(id);
        }
        self.node_mut(id).children = children.to_vec();
        Ok(id)
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let len = self.get(parent)?.children.len();
        self.insert_child(parent, len, child)
    }

    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        let len = self.get(parent)?.children.len();
        if self.get(child)?.parent.is_some() {
            return Err(TreeError::AlreadyHasParent(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCreateCycle { parent, child });
        }
        if index > len {
            return Err(TreeError::ChildIndexOutOfBounds { parent, index, len });
        }

        self.node_mut(parent).children.insert(index, child);
        self.node_mut(child).parent = Some(parent);
        self.set_dirty(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays alive as a root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, TreeError> {
        let index = self
            .get(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        self.remove_child_at(parent, index)
    }

    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let len = self.get(parent)?.children.len();
        if index >= len {
            return Err(TreeError::ChildIndexOutOfBounds { parent, index, len });
        }

        let child = self.node_mut(parent).children.remove(index);
        self.node_mut(child).parent = None;
        self.set_dirty(parent);
        Ok(child)
    }

    /// Replace the child list. Previous children that are not in `children`
    /// are detached and stay alive as roots.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(), TreeError> {
        self.get(parent)?;
        for (i, &child) in children.iter().enumerate() {
            let current = self.get(child)?.parent;
            if self.is_ancestor_or_self(child, parent) {
                return Err(TreeError::WouldCreateCycle { parent, child });
            }
            if (current.is_some() && current != Some(parent)) || children[..i].contains(&child) {
                return Err(TreeError::AlreadyHasParent(child));
            }
        }

        let previous = std::mem::take(&mut self.node_mut(parent).children);
        for old in previous {
            self.node_mut(old).parent = None;
        }
        for &child in children {
            self.node_mut(child).parent = Some(parent);
        }
        self.node_mut(parent).children = children.to_vec();
        self.set_dirty(parent);
        Ok(())
    }

    /// Detach `node` and free it together with its whole subtree.
    pub fn destroy(&mut self, node: NodeId) -> Result<(), TreeError> {
        if let Some(parent) = self.get(node)?.parent {
            self.remove_child(parent, node)?;
        }

        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let slot = self.node_mut(id);
            stack.append(&mut slot.children);
            slot.disconnect();
            self.free_indices.push(id.0);
        }
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.get(node)?.children)
    }

    pub fn child_count(&self, node: NodeId) -> Result<usize, TreeError> {
        Ok(self.get(node)?.children.len())
    }

    pub fn child_at(&self, node: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let children = &self.get(node)?.children;
        children
            .get(index)
            .copied()
            .ok_or(TreeError::ChildIndexOutOfBounds {
                parent: node,
                index,
                len: children.len(),
            })
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.get(node)?.parent)
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    // =========================================================================
    // Style and content
    // =========================================================================

    pub fn style(&self, node: NodeId) -> Result<&FlexStyle, TreeError> {
        Ok(&self.get(node)?.style)
    }

    /// Mutable style access. The node is marked dirty up front.
    pub fn style_mut(&mut self, node: NodeId) -> Result<&mut FlexStyle, TreeError> {
        self.get(node)?;
        self.set_dirty(node);
        Ok(&mut self.node_mut(node).style)
    }

    pub fn set_style(&mut self, node: NodeId, style: FlexStyle) -> Result<(), TreeError> {
        *self.style_mut(node)? = style;
        Ok(())
    }

    pub fn is_show(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.get(node)?.is_show)
    }

    pub fn set_show(&mut self, node: NodeId, show: bool) -> Result<(), TreeError> {
        if self.get(node)?.is_show != show {
            self.node_mut(node).is_show = show;
            self.set_dirty(node);
        }
        Ok(())
    }

    pub fn set_measure<F>(&mut self, node: NodeId, measure: F) -> Result<(), TreeError>
    where
        F: Fn(f32) -> Size + 'static,
    {
        self.get_mut(node)?.measure = Some(Box::new(measure) as MeasureFunc);
        self.set_dirty(node);
        Ok(())
    }

    pub fn clear_measure(&mut self, node: NodeId) -> Result<(), TreeError> {
        if self.get_mut(node)?.measure.take().is_some() {
            self.set_dirty(node);
        }
        Ok(())
    }

    pub fn is_dirty(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.get(node)?.dirty)
    }

    /// Output of the last pass that reached `node`.
    pub fn layout(&self, node: NodeId) -> Result<&NodeLayout, TreeError> {
        Ok(&self.get(node)?.layout)
    }
}
