//! FlexNode - One slot of the layout arena.
//!
//! A node lives in its slot from `FlexTree::new_node` until it is destroyed,
//! after which the slot is reset and handed out again. Everything layout needs
//! to know about a node (style, children, measurement, last output, cache
//! snapshot) is stored inline so a pass only ever indexes one `Vec`.

use std::fmt;

use crate::geometry::{Size, UNDEFINED};
use crate::layout::{Frame, LastLayout, NodeLayout};

use super::{FlexStyle, NodeId};

/// Intrinsic measurement callback.
///
/// Receives the available content width (may be `UNDEFINED` when nothing
/// constrains it) and returns the content size, padding and border excluded.
pub type MeasureFunc = Box<dyn Fn(f32) -> Size>;

/// FlexNode - Persistent layout state of one node.
///
/// # Field Categories
///
/// - **Input**: style, visibility, measurement callback
/// - **Structure**: ordered children, parent link
/// - **Output**: layout (position on 4 edges, size, direction, line)
/// - **Cache**: dirty flag, last-layout snapshot, pass bookkeeping
pub struct FlexNode {
    // =========================================================================
    // INPUT
    // =========================================================================
    pub(crate) style: FlexStyle,
    pub(crate) is_show: bool,
    pub(crate) measure: Option<MeasureFunc>,

    // =========================================================================
    // STRUCTURE
    // =========================================================================
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,

    // =========================================================================
    // OUTPUT
    // =========================================================================
    pub(crate) layout: NodeLayout,

    // =========================================================================
    // CACHE
    // =========================================================================
    pub(crate) dirty: bool,
    pub(crate) last_layout: LastLayout,
    /// Size the children were last laid out inside. Differs from
    /// `last_layout`'s output once a parent resized the node and laid it
    /// out again.
    pub(crate) laid_out_size: [f32; 2],
    /// Set once the node has completed a layout.
    pub(crate) has_layout: bool,
    /// Pass in which the node was first reached (0 = never).
    pub(crate) visited_epoch: u64,
    /// Frame the node had when it was first reached in `visited_epoch`,
    /// `None` if it had never been laid out.
    pub(crate) previous_frame: Option<Frame>,
    /// Pass in which the node was last recomputed (0 = never).
    pub(crate) recomputed_epoch: u64,

    /// Slot is allocated (false while on the free list).
    pub(crate) live: bool,
}

impl FlexNode {
    pub(crate) fn new(style: FlexStyle) -> Self {
        Self {
            style,
            is_show: true,
            measure: None,
            children: Vec::new(),
            parent: None,
            layout: NodeLayout::default(),
            dirty: true,
            last_layout: LastLayout::default(),
            laid_out_size: [UNDEFINED; 2],
            has_layout: false,
            visited_epoch: 0,
            previous_frame: None,
            recomputed_epoch: 0,
            live: true,
        }
    }

    /// Release everything the slot holds and mark it free.
    pub(crate) fn disconnect(&mut self) {
        *self = Self::new(FlexStyle::default());
        self.live = false;
        self.dirty = false;
    }

    #[inline]
    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    #[inline]
    pub fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_show(&self) -> bool {
        self.is_show
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn has_measure(&self) -> bool {
        self.measure.is_some()
    }
}

impl fmt::Debug for FlexNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexNode")
            .field("style", &self.style)
            .field("is_show", &self.is_show)
            .field("measure", &self.measure.is_some())
            .field("children", &self.children)
            .field("parent", &self.parent)
            .field("layout", &self.layout)
            .field("dirty", &self.dirty)
            .field("live", &self.live)
            .finish()
    }
}
