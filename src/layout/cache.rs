//! Dirty tracking and re-layout short-circuiting.
//!
//! A node is recomputed when it is dirty or when the constraints its parent
//! hands it differ from the ones its cached output was computed under.
//! Otherwise its cached size is restored and its subtree is not entered.
//!
//! A parent can fix a child's size after laying it out (stretching it to the
//! line, sizing an absolute child from its offsets) and lay it out again.
//! That second layout does not replace the snapshot, which stays keyed on the
//! first request of the pass. The parent compares the size it settles on with
//! `laid_out_size` instead.

use crate::engine::{FlexTree, NodeId, TreeError};
use crate::geometry::floats_equal;
use crate::types::Direction;

use super::types::NodeLayout;

impl FlexTree {
    /// Mark `node` as needing layout. Ancestors are marked too, stopping at
    /// the first one that is already dirty.
    pub fn mark_dirty(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.get(node)?;
        self.set_dirty(node);
        Ok(())
    }

    pub(crate) fn set_dirty(&mut self, node: NodeId) {
        self.node_mut(node).dirty = true;
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            let ancestor = self.node_mut(id);
            if ancestor.dirty {
                break;
            }
            ancestor.dirty = true;
            current = ancestor.parent;
        }
    }

    /// Clear the per-pass output of `node` before its parent lays it out.
    ///
    /// The cache snapshot is left alone. Returns true the first time the node
    /// is reset in pass `epoch`, after remembering the frame it had so the
    /// pass can tell whether it changed.
    pub(crate) fn reset_layout(&mut self, node: NodeId, epoch: u64) -> bool {
        let slot = self.node_mut(node);
        let first_visit = slot.visited_epoch != epoch;
        if first_visit {
            slot.visited_epoch = epoch;
            slot.previous_frame = slot.has_layout.then(|| slot.layout.frame());
        }
        slot.layout = NodeLayout::default();
        first_visit
    }

    /// Whether `node` must be recomputed under the given constraints.
    pub(crate) fn needs_relayout(
        &self,
        node: NodeId,
        parent_max_width: f32,
        parent_direction: Direction,
    ) -> bool {
        let slot = self.node(node);
        let last = &slot.last_layout;

        slot.dirty
            || !slot.has_layout
            || !floats_equal(last.requested_width, slot.layout.width())
            || !floats_equal(last.requested_height, slot.layout.height())
            || !floats_equal(last.parent_max_width, parent_max_width)
            || last.parent_direction != parent_direction
    }
}
