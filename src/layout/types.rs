//! Layout Types
//!
//! Output types for the layout computation.

use crate::engine::NodeId;
use crate::geometry::{floats_equal, Edge, UNDEFINED};
use crate::types::{Direction, FlexDirection};

/// Resolved position and size of one node.
///
/// Positions are relative to the parent's border box. All four edges are
/// kept so reverse axes can read their leading edge directly; after a pass
/// `right == parent.width - width - left` (same for bottom/top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    /// Indexed by `Edge::Left..=Edge::Bottom`.
    pub position: [f32; 4],
    /// `[width, height]`.
    pub dimensions: [f32; 2],
    /// Direction the node resolved to during its last layout.
    pub direction: Direction,
    /// Line of the parent's flex container this node was placed on.
    pub line_index: usize,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            dimensions: [UNDEFINED; 2],
            direction: Direction::Inherit,
            line_index: 0,
        }
    }
}

impl NodeLayout {
    #[inline]
    pub fn left(&self) -> f32 {
        self.position[Edge::Left as usize]
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position[Edge::Top as usize]
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position[Edge::Right as usize]
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position[Edge::Bottom as usize]
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.dimensions[0]
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.dimensions[1]
    }

    /// Position and size as a rectangle.
    pub fn frame(&self) -> Frame {
        Frame {
            x: self.left(),
            y: self.top(),
            width: self.width(),
            height: self.height(),
        }
    }

    // =========================================================================
    // Axis-relative access (used by the algorithm)
    // =========================================================================

    #[inline]
    pub(crate) fn position(&self, edge: Edge) -> f32 {
        self.position[edge as usize]
    }

    #[inline]
    pub(crate) fn set_position(&mut self, edge: Edge, value: f32) {
        self.position[edge as usize] = value;
    }

    #[inline]
    pub(crate) fn dimension(&self, axis: FlexDirection) -> f32 {
        self.dimensions[axis.dimension() as usize]
    }

    #[inline]
    pub(crate) fn set_dimension(&mut self, axis: FlexDirection, value: f32) {
        self.dimensions[axis.dimension() as usize] = value;
    }
}

/// Rectangle in parent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Near-equality used to decide whether a node was visibly touched.
    pub fn approx_eq(&self, other: &Frame) -> bool {
        floats_equal(self.x, other.x)
            && floats_equal(self.y, other.y)
            && floats_equal(self.width, other.width)
            && floats_equal(self.height, other.height)
    }
}

/// Inputs and outputs of a node's last full layout, compared on the next
/// pass to decide whether the subtree can be skipped.
#[derive(Debug, Clone, Copy)]
pub struct LastLayout {
    /// Width/height the parent had fixed when layout started.
    pub requested_width: f32,
    pub requested_height: f32,
    pub parent_max_width: f32,
    pub parent_direction: Direction,
    /// Width/height the layout resolved to.
    pub computed_width: f32,
    pub computed_height: f32,
}

impl Default for LastLayout {
    fn default() -> Self {
        Self {
            requested_width: UNDEFINED,
            requested_height: UNDEFINED,
            parent_max_width: UNDEFINED,
            parent_direction: Direction::Inherit,
            computed_width: UNDEFINED,
            computed_height: UNDEFINED,
        }
    }
}

/// Result of one `compute_layout` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPass {
    /// Visible nodes whose frame changed this pass (or that were laid out
    /// for the first time), in visit order.
    pub touched: Vec<NodeId>,

    /// Nodes whose layout was actually recomputed rather than restored from
    /// cache. Always a superset of the dirty nodes that were reached.
    pub recomputed: Vec<NodeId>,
}

impl LayoutPass {
    pub fn is_touched(&self, node: NodeId) -> bool {
        self.touched.contains(&node)
    }

    pub fn was_recomputed(&self, node: NodeId) -> bool {
        self.recomputed.contains(&node)
    }
}
