//! Absolute children.
//!
//! Absolute children take no part in flow. Once the parent's size is final
//! they are sized from a pair of offsets and placed from whichever offset is
//! set, on the physical axes (top/bottom first, then left/right).
//!
//! Resizing an absolute child after it was laid out can leave its own
//! children misplaced. It is laid out again only when the resize can
//! actually move them (see `absolute_needs_relayout`).

use crate::engine::{FlexStyle, NodeId};
use crate::geometry::{floats_equal, Edge};
use crate::types::{AlignItems, AlignSelf, Direction, FlexDirection, JustifyContent};

use super::algorithm::{absolute_size, LayoutContext};

impl LayoutContext<'_> {
    pub(crate) fn layout_absolute_children(
        &mut self,
        node: NodeId,
        style: &FlexStyle,
        absolute_children: &[NodeId],
        child_max_width: f32,
        direction: Direction,
        need_layout_absolute_child: bool,
    ) {
        let parent = self.tree.node(node).layout;

        for &child in absolute_children {
            let child_style = self.tree.node(child).style;
            let mut size = self.tree.node(child).layout.dimensions;
            let mut moves_children = false;

            for axis in [FlexDirection::Column, FlexDirection::Row] {
                let Some(pinned) = absolute_size(style, &child_style, axis, parent.dimension(axis))
                else {
                    continue;
                };
                let index = axis.dimension() as usize;
                if need_layout_absolute_child
                    && !floats_equal(size[index], pinned)
                    && self.absolute_needs_relayout(child, axis)
                {
                    moves_children = true;
                }
                size[index] = pinned;
            }

            // Laid out again at the pinned size only when that can move its
            // children, without re-triggering absolute re-layout further down.
            if moves_children {
                tracing::trace!(node = %child, "absolute child re-layout");
                self.tree.node_mut(child).layout.dimensions = size;
            }
            self.settle_children(child, child_max_width, direction, false);
            self.tree.node_mut(child).layout.dimensions = size;

            let layout = &mut self.tree.node_mut(child).layout;
            for axis in [FlexDirection::Column, FlexDirection::Row] {
                let lead = axis.leading_edge();
                let trail = axis.trailing_edge();
                if child_style.is_position_defined(lead) {
                    layout.set_position(
                        lead,
                        child_style.position_offset(lead)
                            + style.leading_border(axis)
                            + child_style.leading_margin(axis),
                    );
                } else if child_style.is_position_defined(trail) {
                    layout.set_position(
                        lead,
                        parent.dimension(axis) - layout.dimension(axis) - child_style.position_offset(trail),
                    );
                }
            }
            layout.set_position(Edge::Right, parent.width() - layout.width() - layout.left());
            layout.set_position(Edge::Bottom, parent.height() - layout.height() - layout.top());
        }
    }

    /// Whether resizing `child` along `axis` can move its own children.
    fn absolute_needs_relayout(&self, child: NodeId, axis: FlexDirection) -> bool {
        let slot = self.tree.node(child);
        let child_style = &slot.style;
        if child_style.is_dimension_defined(axis) {
            return false;
        }

        let child_main = child_style.flex_direction.resolve(slot.layout.direction);
        if child_main.is_row() == axis.is_row() {
            child_style.justify_content != JustifyContent::FlexStart
        } else {
            !matches!(child_style.align_items, AlignItems::FlexStart | AlignItems::Stretch)
                || slot
                    .children
                    .iter()
                    .any(|&grandchild| self.tree.node(grandchild).style.align_self != AlignSelf::Auto)
        }
    }
}
