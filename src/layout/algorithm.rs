//! Flex Layout Algorithm
//!
//! Recursive flexbox layout over a [`FlexTree`].
//!
//! # Algorithm (per node)
//!
//! 1. **Setup**: reset visible children, apply their margin and relative
//!    offsets, resolve direction and axes
//! 2. **Style sizes**: seed undefined dimensions from the style
//! 3. **Measure**: nodes with a measurement callback size themselves
//! 4. **Lines**: per flex line, lay out fixed children, wrap, distribute
//!    flexible space, justify, place on the main and cross axes
//! 5. **Multi-line**: `align_content` across lines, `align_items` within
//! 6. **Self-size**: undefined dimensions follow the content
//! 7. **Trailing edges**: right/bottom derived from left/top and sizes
//! 8. **Absolute children**: sized and placed from their offsets
//!
//! A parent writes a child's constraints (stretched cross size, flexible main
//! size) into the child's layout before recursing; the child treats any
//! dimension already present as fixed.

use crate::engine::{FlexStyle, FlexTree, NodeId, TreeError};
use crate::geometry::{floats_equal, is_defined, is_undefined, Edge};
use crate::types::{AlignContent, AlignItems, Direction, FlexDirection, JustifyContent};

use super::types::{LastLayout, LayoutPass, NodeLayout};

// =============================================================================
// ENTRY POINT
// =============================================================================

impl FlexTree {
    /// Lay out the tree rooted at `root`.
    ///
    /// `available_width` is the width budget handed to measured content when
    /// nothing narrower constrains it; it does not size the root, whose size
    /// comes from its own style or content. Pass `UNDEFINED` for no budget.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        available_width: f32,
    ) -> Result<LayoutPass, TreeError> {
        compute_layout(self, root, available_width)
    }
}

/// Free-function form of [`FlexTree::compute_layout`].
pub fn compute_layout(
    tree: &mut FlexTree,
    root: NodeId,
    available_width: f32,
) -> Result<LayoutPass, TreeError> {
    tree.get(root)?;
    tree.epoch += 1;
    let epoch = tree.epoch;
    let direction = tree.config.root_direction();
    let clamp_negative = tree.config.clamp_negative;

    tracing::debug!(root = %root, available_width, "layout pass started");

    let mut ctx = LayoutContext::new(tree, epoch);
    if !ctx.tree.node(root).is_show {
        ctx.hide(root);
        tracing::debug!(root = %root, "root hidden, nothing laid out");
        return Ok(LayoutPass::default());
    }

    // The root has no parent to apply its offsets, so it uses its own axes.
    ctx.reset_child(root);
    let style = ctx.tree.node(root).style;
    let root_direction = resolve_direction(style.direction, direction);
    ctx.apply_offsets(
        root,
        style.flex_direction.resolve(root_direction),
        style.flex_direction.cross(root_direction),
    );
    ctx.layout_node(root, available_width, direction, true);

    let pass = ctx.finish(clamp_negative);
    tracing::debug!(
        root = %root,
        recomputed = pass.recomputed.len(),
        touched = pass.touched.len(),
        "layout pass finished"
    );
    Ok(pass)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Direction a node lays out in: its own unless `Inherit`.
pub(crate) fn resolve_direction(own: Direction, parent: Direction) -> Direction {
    match (own, parent) {
        (Direction::Inherit, Direction::Inherit) => Direction::Ltr,
        (Direction::Inherit, parent) => parent,
        (own, _) => own,
    }
}

/// Cross-axis alignment of `child` inside `parent`.
#[inline]
pub(crate) fn align_for(parent: &FlexStyle, child: &FlexStyle) -> AlignItems {
    child.align_self.to_align_items().unwrap_or(parent.align_items)
}

#[inline]
fn dim_with_margin(layout: &NodeLayout, style: &FlexStyle, axis: FlexDirection) -> f32 {
    layout.dimension(axis) + style.margin_axis(axis)
}

#[inline]
fn same_dimensions(a: [f32; 2], b: [f32; 2]) -> bool {
    floats_equal(a[0], b[0]) && floats_equal(a[1], b[1])
}

/// Cross size of a stretched child inside `container_cross`.
fn stretched_cross(
    child: &FlexStyle,
    cross_axis: FlexDirection,
    container_cross: f32,
    container_pb_cross: f32,
) -> f32 {
    child
        .bound_axis(
            cross_axis,
            container_cross - container_pb_cross - child.margin_axis(cross_axis),
        )
        .max(child.padding_and_border_axis(cross_axis))
}

/// Size of an absolute child pinned on both edges of `axis`, if it is.
pub(crate) fn absolute_size(
    parent: &FlexStyle,
    child: &FlexStyle,
    axis: FlexDirection,
    parent_dim: f32,
) -> Option<f32> {
    let lead = axis.leading_edge();
    let trail = axis.trailing_edge();
    if is_undefined(parent_dim)
        || child.is_dimension_defined(axis)
        || !child.is_position_defined(lead)
        || !child.is_position_defined(trail)
    {
        return None;
    }

    let size = child.bound_axis(
        axis,
        parent_dim
            - parent.border_axis(axis)
            - child.margin_axis(axis)
            - child.position_offset(lead)
            - child.position_offset(trail),
    );
    Some(size.max(child.padding_and_border_axis(axis)))
}

/// Replace negative or NaN sizes with 0. Returns true if anything changed.
fn clamp_dimensions(layout: &mut NodeLayout) -> bool {
    let mut changed = false;
    for size in layout.dimensions.iter_mut() {
        if size.is_nan() || *size < 0.0 {
            *size = 0.0;
            changed = true;
        }
    }
    changed
}

/// Right and bottom of `node` from its left/top and its parent's size.
fn refresh_trailing_edges(tree: &mut FlexTree, node: NodeId) {
    let Some(parent) = tree.node(node).parent else {
        return;
    };
    let parent_layout = tree.node(parent).layout;
    let layout = &mut tree.node_mut(node).layout;
    layout.set_position(Edge::Right, parent_layout.width() - layout.width() - layout.left());
    layout.set_position(Edge::Bottom, parent_layout.height() - layout.height() - layout.top());
}

/// `(leading, between)` main-axis offsets for `justify` with `remaining`
/// free space shared by `count` items.
pub(crate) fn justify_offsets(justify: JustifyContent, remaining: f32, count: usize) -> (f32, f32) {
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0),
        JustifyContent::FlexEnd => (remaining, 0.0),
        JustifyContent::SpaceBetween if count > 1 => {
            (0.0, remaining.max(0.0) / (count - 1) as f32)
        }
        JustifyContent::SpaceBetween => (0.0, 0.0),
        JustifyContent::SpaceAround if count > 0 => {
            let between = remaining / count as f32;
            (between / 2.0, between)
        }
        JustifyContent::SpaceAround => (0.0, 0.0),
        JustifyContent::SpaceEvenly => {
            let between = remaining / (count + 1) as f32;
            (between, between)
        }
    }
}

/// Space per flex unit, never negative.
#[inline]
fn flex_share(remaining: f32, total_flexible: f32) -> f32 {
    if total_flexible > 0.0 {
        (remaining / total_flexible).max(0.0)
    } else {
        0.0
    }
}

// =============================================================================
// LAYOUT CONTEXT
// =============================================================================

/// State of one `compute_layout` call.
pub(crate) struct LayoutContext<'t> {
    pub(crate) tree: &'t mut FlexTree,
    epoch: u64,
    /// Visible nodes reset during this pass, in visit order.
    visited: Vec<NodeId>,
    recomputed: Vec<NodeId>,
}

impl<'t> LayoutContext<'t> {
    fn new(tree: &'t mut FlexTree, epoch: u64) -> Self {
        Self {
            tree,
            epoch,
            visited: Vec::new(),
            recomputed: Vec::new(),
        }
    }

    #[inline]
    fn child_at(&self, node: NodeId, index: usize) -> NodeId {
        self.tree.node(node).children[index]
    }

    #[inline]
    fn layout_mut(&mut self, node: NodeId) -> &mut NodeLayout {
        &mut self.tree.node_mut(node).layout
    }

    /// Zero frame for a node that does not participate.
    fn hide(&mut self, node: NodeId) {
        let slot = self.tree.node_mut(node);
        slot.layout = NodeLayout {
            dimensions: [0.0; 2],
            ..NodeLayout::default()
        };
        slot.dirty = false;
    }

    fn reset_child(&mut self, child: NodeId) {
        if self.tree.reset_layout(child, self.epoch) {
            self.visited.push(child);
        }
    }

    /// Margin plus relative offset on both edges of `main` and `cross`.
    fn apply_offsets(&mut self, child: NodeId, main: FlexDirection, cross: FlexDirection) {
        let style = self.tree.node(child).style;
        let layout = self.layout_mut(child);
        for axis in [main, cross] {
            let relative = style.relative_position(axis);
            layout.set_position(axis.leading_edge(), style.leading_margin(axis) + relative);
            layout.set_position(axis.trailing_edge(), style.trailing_margin(axis) + relative);
        }
    }

    /// Width budget handed to the children of `node`.
    fn child_max_width(
        &self,
        node: NodeId,
        style: &FlexStyle,
        row_axis: FlexDirection,
        parent_max_width: f32,
    ) -> f32 {
        let width = self.tree.node(node).layout.width();
        let pb_row = style.padding_and_border_axis(row_axis);
        if is_defined(width) {
            width - pb_row
        } else {
            parent_max_width - style.margin_axis(row_axis) - pb_row
        }
    }

    // =========================================================================
    // Cached layout
    // =========================================================================

    /// Lay out `node` unless its cached output still holds.
    pub(crate) fn layout_node(
        &mut self,
        node: NodeId,
        parent_max_width: f32,
        parent_direction: Direction,
        need_layout_absolute_child: bool,
    ) {
        if !self.tree.needs_relayout(node, parent_max_width, parent_direction) {
            let slot = self.tree.node_mut(node);
            slot.layout.dimensions = [
                slot.last_layout.computed_width,
                slot.last_layout.computed_height,
            ];
            slot.layout.direction = resolve_direction(slot.style.direction, parent_direction);
            slot.dirty = false;
            tracing::trace!(node = %node, "layout cache hit");
            return;
        }

        let requested = self.tree.node(node).layout.dimensions;
        self.layout_node_impl(node, parent_max_width, parent_direction, need_layout_absolute_child);
        let slot = self.tree.node_mut(node);
        slot.last_layout = LastLayout {
            requested_width: requested[0],
            requested_height: requested[1],
            parent_max_width,
            parent_direction,
            computed_width: slot.layout.width(),
            computed_height: slot.layout.height(),
        };
        self.record_recompute(node);
    }

    /// Bring the children of `node` in line with the size its parent settled
    /// on after laying it out.
    ///
    /// A node resized since its first layout is laid out again at the new
    /// size. `last_layout` stays keyed on the first request, so the next pass
    /// can still restore the node from it; `laid_out_size` tells the two
    /// apart. A node restored from cache whose children still sit where such
    /// a re-layout put them is laid out again from its cached request.
    pub(crate) fn settle_children(
        &mut self,
        node: NodeId,
        parent_max_width: f32,
        parent_direction: Direction,
        need_layout_absolute_child: bool,
    ) {
        let slot = self.tree.node(node);
        if slot.children.is_empty() || same_dimensions(slot.laid_out_size, slot.layout.dimensions) {
            return;
        }

        let first = [slot.last_layout.computed_width, slot.last_layout.computed_height];
        if same_dimensions(first, slot.layout.dimensions) {
            let requested = [slot.last_layout.requested_width, slot.last_layout.requested_height];
            tracing::trace!(node = %node, "children restored to first layout");
            self.layout_mut(node).dimensions = requested;
            self.layout_node_impl(node, parent_max_width, parent_direction, true);
        } else {
            tracing::trace!(node = %node, "re-layout at resized dimensions");
            self.layout_node_impl(node, parent_max_width, parent_direction, need_layout_absolute_child);
        }
        self.record_recompute(node);
    }

    /// Bookkeeping shared by every finished layout of `node`.
    fn record_recompute(&mut self, node: NodeId) {
        let epoch = self.epoch;
        let slot = self.tree.node_mut(node);
        slot.laid_out_size = slot.layout.dimensions;
        slot.has_layout = true;
        slot.dirty = false;
        tracing::trace!(
            node = %node,
            width = slot.layout.width(),
            height = slot.layout.height(),
            "layout recomputed"
        );

        if slot.recomputed_epoch != epoch {
            slot.recomputed_epoch = epoch;
            self.recomputed.push(node);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub(crate) fn layout_node_impl(
        &mut self,
        node: NodeId,
        parent_max_width: f32,
        parent_direction: Direction,
        need_layout_absolute_child: bool,
    ) {
        let style = self.tree.node(node).style;
        let child_count = self.tree.node(node).children.len();

        let direction = resolve_direction(style.direction, parent_direction);
        let main_axis = style.flex_direction.resolve(direction);
        let cross_axis = style.flex_direction.cross(direction);
        let row_axis = FlexDirection::Row.resolve(direction);

        for i in 0..child_count {
            let child = self.child_at(node, i);
            if !self.tree.node(child).is_show {
                self.hide(child);
                continue;
            }
            self.reset_child(child);
            self.apply_offsets(child, main_axis, cross_axis);
        }

        // Sizes fixed by the style, unless the parent already fixed them.
        {
            let layout = self.layout_mut(node);
            layout.direction = direction;
            for axis in [main_axis, cross_axis] {
                if is_undefined(layout.dimension(axis)) && style.is_dimension_defined(axis) {
                    let size = style
                        .bound_axis(axis, style.dimension(axis))
                        .max(style.padding_and_border_axis(axis));
                    layout.set_dimension(axis, size);
                }
            }
        }

        if self.tree.node(node).measure.is_some() {
            self.measure_node(node, &style, row_axis, parent_max_width);
            if child_count == 0 {
                return;
            }
        }

        let is_wrap = style.is_wrap();
        let justify = style.justify_content;

        let leading_pb_main = style.leading_padding_and_border(main_axis);
        let leading_pb_cross = style.leading_padding_and_border(cross_axis);
        let pb_main = style.padding_and_border_axis(main_axis);
        let pb_cross = style.padding_and_border_axis(cross_axis);

        let node_layout = self.tree.node(node).layout;
        let is_main_defined = is_defined(node_layout.dimension(main_axis));
        let is_cross_defined = is_defined(node_layout.dimension(cross_axis));
        let definite_main_dim = node_layout.dimension(main_axis) - pb_main;
        let child_max_width = self.child_max_width(node, &style, row_axis, parent_max_width);

        let main_lead = main_axis.leading_edge();
        let cross_lead = cross_axis.leading_edge();

        let mut flex_children: Vec<NodeId> = Vec::new();
        let mut absolute_children: Vec<NodeId> = Vec::new();

        let mut lines_cross_dim = 0.0_f32;
        let mut lines_main_dim = 0.0_f32;
        let mut lines_count = 0usize;
        let mut start_line = 0usize;
        let mut end_line = 0usize;
        let mut already_computed_next_layout = false;

        while end_line < child_count {
            // =================================================================
            // Line: classify and lay out fixed children
            // =================================================================
            let mut main_content_dim = 0.0_f32;
            let mut placed_in_line = 0usize;
            let mut flexible_children_count = 0usize;
            let mut total_flexible = 0.0_f32;
            let mut non_flexible_children_count = 0usize;

            let mut is_simple_stack_main = !is_main_defined || justify == JustifyContent::FlexStart;
            let mut first_complex_main = if is_simple_stack_main { child_count } else { start_line };
            let mut is_simple_stack_cross = true;
            let mut first_complex_cross = child_count;

            let mut main_dim = leading_pb_main;
            let mut cross_dim = 0.0_f32;
            flex_children.clear();

            let mut i = start_line;
            while i < child_count {
                let child = self.child_at(node, i);
                if !self.tree.node(child).is_show {
                    i += 1;
                    end_line = i;
                    continue;
                }

                let child_style = self.tree.node(child).style;
                let align = align_for(&style, &child_style);
                self.layout_mut(child).line_index = lines_count;

                if !child_style.is_absolute() {
                    if align == AlignItems::Stretch
                        && is_cross_defined
                        && !child_style.is_dimension_defined(cross_axis)
                    {
                        let size = stretched_cross(
                            &child_style,
                            cross_axis,
                            node_layout.dimension(cross_axis),
                            pb_cross,
                        );
                        self.layout_mut(child).set_dimension(cross_axis, size);
                    }
                } else {
                    for axis in [FlexDirection::Column, FlexDirection::Row] {
                        if let Some(size) =
                            absolute_size(&style, &child_style, axis, node_layout.dimension(axis))
                        {
                            self.layout_mut(child).set_dimension(axis, size);
                        }
                    }
                }

                let is_flexible = is_main_defined && child_style.is_flex();
                let mut next_content_dim = 0.0_f32;
                if is_flexible {
                    next_content_dim = child_style.padding_and_border_axis(main_axis)
                        + child_style.margin_axis(main_axis);
                } else {
                    if !already_computed_next_layout {
                        self.layout_node(child, child_max_width, direction, true);
                    }
                    if !child_style.is_absolute() {
                        next_content_dim =
                            dim_with_margin(&self.tree.node(child).layout, &child_style, main_axis);
                    }
                }

                // Starts the next line; it is already laid out for it.
                if is_wrap
                    && is_main_defined
                    && !child_style.is_absolute()
                    && placed_in_line > 0
                    && main_content_dim + next_content_dim > definite_main_dim
                {
                    already_computed_next_layout = true;
                    break;
                }
                already_computed_next_layout = false;

                if child_style.is_absolute() {
                    absolute_children.push(child);
                } else {
                    placed_in_line += 1;
                    if is_flexible {
                        flexible_children_count += 1;
                        total_flexible += child_style.flex;
                        flex_children.push(child);
                    } else {
                        non_flexible_children_count += 1;
                    }
                }

                if is_simple_stack_main && (child_style.is_absolute() || child_style.is_flex()) {
                    is_simple_stack_main = false;
                    first_complex_main = i;
                }
                if is_simple_stack_cross
                    && (child_style.is_absolute()
                        || !matches!(align, AlignItems::Stretch | AlignItems::FlexStart)
                        || !child_style.is_dimension_defined(cross_axis))
                {
                    is_simple_stack_cross = false;
                    first_complex_cross = i;
                }

                if is_simple_stack_main {
                    let layout = self.layout_mut(child);
                    layout.set_position(main_lead, layout.position(main_lead) + main_dim);
                    main_dim += dim_with_margin(layout, &child_style, main_axis);
                    cross_dim = cross_dim.max(child_style.bound_axis(
                        cross_axis,
                        dim_with_margin(layout, &child_style, cross_axis),
                    ));
                }
                if is_simple_stack_cross {
                    let layout = self.layout_mut(child);
                    layout.set_position(
                        cross_lead,
                        layout.position(cross_lead) + lines_cross_dim + leading_pb_cross,
                    );
                }

                main_content_dim += next_content_dim;
                i += 1;
                end_line = i;
            }

            // =================================================================
            // Line: free space, flexible children, justify
            // =================================================================
            let remaining_main_dim = if is_main_defined {
                definite_main_dim - main_content_dim
            } else {
                main_content_dim.max(0.0) - main_content_dim
            };

            let mut leading_main_dim = 0.0_f32;
            let mut between_main_dim = 0.0_f32;
            if flexible_children_count != 0 {
                self.distribute_flex(
                    &flex_children,
                    remaining_main_dim,
                    total_flexible,
                    main_axis,
                    child_max_width,
                    direction,
                );
            } else if justify != JustifyContent::FlexStart {
                (leading_main_dim, between_main_dim) =
                    justify_offsets(justify, remaining_main_dim, non_flexible_children_count);
            }

            // =================================================================
            // Line: main-axis placement
            // =================================================================
            main_dim += leading_main_dim;
            for i in first_complex_main..end_line {
                let child = self.child_at(node, i);
                if !self.tree.node(child).is_show {
                    continue;
                }
                let child_style = self.tree.node(child).style;
                let layout = self.layout_mut(child);

                if child_style.is_absolute() && child_style.is_position_defined(main_lead) {
                    layout.set_position(
                        main_lead,
                        child_style.position_offset(main_lead)
                            + style.leading_border(main_axis)
                            + child_style.leading_margin(main_axis),
                    );
                } else {
                    layout.set_position(main_lead, layout.position(main_lead) + main_dim);
                }

                if !child_style.is_absolute() {
                    main_dim += between_main_dim + dim_with_margin(layout, &child_style, main_axis);
                    cross_dim = cross_dim.max(child_style.bound_axis(
                        cross_axis,
                        dim_with_margin(layout, &child_style, cross_axis),
                    ));
                }
            }

            // =================================================================
            // Line: cross-axis placement
            // =================================================================
            let container_cross_axis = if is_cross_defined {
                node_layout.dimension(cross_axis)
            } else {
                style.bound_axis(cross_axis, cross_dim + pb_cross).max(pb_cross)
            };

            for i in first_complex_cross..end_line {
                let child = self.child_at(node, i);
                if !self.tree.node(child).is_show {
                    continue;
                }
                let child_style = self.tree.node(child).style;

                if child_style.is_absolute() && child_style.is_position_defined(cross_lead) {
                    let offset = child_style.position_offset(cross_lead)
                        + style.leading_border(cross_axis)
                        + child_style.leading_margin(cross_axis);
                    self.layout_mut(child).set_position(cross_lead, offset);
                    continue;
                }

                let mut leading_cross_dim = leading_pb_cross;
                if !child_style.is_absolute() {
                    let align = align_for(&style, &child_style);
                    if align == AlignItems::Stretch && !child_style.is_dimension_defined(cross_axis) {
                        let size =
                            stretched_cross(&child_style, cross_axis, container_cross_axis, pb_cross);
                        self.layout_mut(child).set_dimension(cross_axis, size);
                    }

                    self.settle_children(child, child_max_width, direction, true);

                    if matches!(align, AlignItems::Center | AlignItems::FlexEnd) {
                        let layout = &self.tree.node(child).layout;
                        let remaining_cross = container_cross_axis
                            - pb_cross
                            - dim_with_margin(layout, &child_style, cross_axis);
                        leading_cross_dim += if align == AlignItems::Center {
                            remaining_cross / 2.0
                        } else {
                            remaining_cross
                        };
                    }
                }

                let layout = self.layout_mut(child);
                layout.set_position(
                    cross_lead,
                    layout.position(cross_lead) + lines_cross_dim + leading_cross_dim,
                );
            }

            lines_cross_dim += cross_dim;
            lines_main_dim = lines_main_dim.max(main_dim);
            lines_count += 1;
            start_line = end_line;
        }

        // =====================================================================
        // Multi-line alignment
        // =====================================================================
        if lines_count > 1 && is_cross_defined {
            self.align_lines(node, &style, cross_axis, lines_count, lines_cross_dim);
        }

        // =====================================================================
        // Self-sizing
        // =====================================================================
        if !is_main_defined {
            let content = lines_main_dim + style.trailing_padding_and_border(main_axis);
            let size = style.bound_axis(main_axis, content).max(pb_main);
            self.layout_mut(node).set_dimension(main_axis, size);

            if justify != JustifyContent::FlexStart && !floats_equal(size, content) {
                self.align_child_main_axis(node, &style, main_axis, size - pb_main, leading_pb_main);
            }
        }
        if !is_cross_defined {
            let size = style
                .bound_axis(cross_axis, lines_cross_dim + pb_cross)
                .max(pb_cross);
            self.layout_mut(node).set_dimension(cross_axis, size);
        }

        // =====================================================================
        // Trailing edges
        // =====================================================================
        let node_layout = self.tree.node(node).layout;
        for i in 0..child_count {
            let child = self.child_at(node, i);
            if !self.tree.node(child).is_show {
                continue;
            }
            let layout = self.layout_mut(child);
            for axis in [main_axis, cross_axis] {
                let trailing = node_layout.dimension(axis)
                    - layout.dimension(axis)
                    - layout.position(axis.leading_edge());
                layout.set_position(axis.trailing_edge(), trailing);
            }
        }

        self.layout_absolute_children(
            node,
            &style,
            &absolute_children,
            child_max_width,
            direction,
            need_layout_absolute_child,
        );
    }

    // =========================================================================
    // Measured content
    // =========================================================================

    fn measure_node(
        &mut self,
        node: NodeId,
        style: &FlexStyle,
        row_axis: FlexDirection,
        parent_max_width: f32,
    ) {
        let layout = self.tree.node(node).layout;
        let is_row_undefined = is_undefined(layout.width());
        let is_column_undefined = is_undefined(layout.height());
        if !is_row_undefined && !is_column_undefined {
            return;
        }

        let pb_row = style.padding_and_border_axis(row_axis);
        let pb_column = style.padding_and_border_axis(FlexDirection::Column);

        let mut width = if style.is_dimension_defined(row_axis) {
            style.width
        } else if !is_row_undefined {
            layout.width()
        } else {
            parent_max_width - style.margin_axis(row_axis)
        };
        if is_defined(style.max_width) && style.max_width >= 0.0 && width > style.max_width {
            width = style.max_width;
        }
        width -= pb_row;
        if width < 0.0 {
            width = 0.0;
        }

        let Some(measure) = self.tree.node(node).measure.as_ref() else {
            return;
        };
        let measured = measure(width);
        tracing::trace!(
            node = %node,
            available_width = width,
            width = measured.width,
            height = measured.height,
            "measured"
        );

        let layout = self.layout_mut(node);
        if is_row_undefined {
            let size = style
                .bound_axis(FlexDirection::Row, measured.width + pb_row)
                .max(pb_row);
            layout.dimensions[0] = size;
        }
        if is_column_undefined {
            let size = style
                .bound_axis(FlexDirection::Column, measured.height + pb_column)
                .max(pb_column);
            layout.dimensions[1] = size;
        }
    }

    // =========================================================================
    // Flexible distribution
    // =========================================================================

    /// Share `remaining` among `flex_children` by flex factor.
    ///
    /// A child whose share violates its min/max is frozen at the bound and
    /// leaves the distribution; the rest re-share until nothing changes.
    fn distribute_flex(
        &mut self,
        flex_children: &[NodeId],
        mut remaining: f32,
        mut total_flexible: f32,
        main_axis: FlexDirection,
        child_max_width: f32,
        direction: Direction,
    ) {
        let mut frozen: Vec<Option<f32>> = vec![None; flex_children.len()];
        let mut share = flex_share(remaining, total_flexible);

        loop {
            let mut changed = false;
            for (k, &child) in flex_children.iter().enumerate() {
                if frozen[k].is_some() {
                    continue;
                }
                let child_style = &self.tree.node(child).style;
                let pb = child_style.padding_and_border_axis(main_axis);
                let base = share * child_style.flex + pb;
                let bounded = child_style.bound_axis(main_axis, base);
                if base != bounded {
                    frozen[k] = Some(bounded);
                    remaining -= bounded - pb;
                    total_flexible -= child_style.flex;
                    changed = true;
                }
            }
            share = flex_share(remaining, total_flexible);
            if !changed {
                break;
            }
        }

        for (k, &child) in flex_children.iter().enumerate() {
            let child_style = self.tree.node(child).style;
            let pb = child_style.padding_and_border_axis(main_axis);
            let size = match frozen[k] {
                Some(bounded) => bounded.max(pb),
                None => child_style
                    .bound_axis(main_axis, share * child_style.flex + pb)
                    .max(pb),
            };
            self.layout_mut(child).set_dimension(main_axis, size);
            self.layout_node(child, child_max_width, direction, true);
        }
    }

    // =========================================================================
    // Re-alignment passes
    // =========================================================================

    /// `align_content` across lines, then `align_items` within each line.
    fn align_lines(
        &mut self,
        node: NodeId,
        style: &FlexStyle,
        cross_axis: FlexDirection,
        lines_count: usize,
        lines_cross_dim: f32,
    ) {
        let child_count = self.tree.node(node).children.len();
        let cross_lead = cross_axis.leading_edge();
        let inner_cross = self.tree.node(node).layout.dimension(cross_axis)
            - style.padding_and_border_axis(cross_axis);
        let remaining = inner_cross - lines_cross_dim;

        let mut cross_dim_lead = 0.0_f32;
        let mut current_lead = style.leading_padding_and_border(cross_axis);
        match style.align_content {
            AlignContent::FlexStart => {}
            AlignContent::FlexEnd => current_lead += remaining,
            AlignContent::Center => current_lead += remaining / 2.0,
            AlignContent::Stretch => {
                if inner_cross > lines_cross_dim {
                    cross_dim_lead = remaining / lines_count as f32;
                }
            }
        }

        let mut end_index = 0usize;
        for line in 0..lines_count {
            let start_index = end_index;

            let mut line_height = 0.0_f32;
            let mut ii = start_index;
            while ii < child_count {
                let slot = self.tree.node(self.child_at(node, ii));
                if !slot.is_show || slot.style.is_absolute() {
                    ii += 1;
                    continue;
                }
                if slot.layout.line_index != line {
                    break;
                }
                let size = slot.layout.dimension(cross_axis);
                if is_defined(size) {
                    line_height = line_height.max(size + slot.style.margin_axis(cross_axis));
                }
                ii += 1;
            }
            end_index = ii;
            line_height += cross_dim_lead;

            for ii in start_index..end_index {
                let child = self.child_at(node, ii);
                let slot = self.tree.node(child);
                if !slot.is_show || slot.style.is_absolute() {
                    continue;
                }
                let child_style = slot.style;
                let size = slot.layout.dimension(cross_axis);
                let position = match align_for(style, &child_style) {
                    AlignItems::FlexStart | AlignItems::Stretch => {
                        current_lead + child_style.leading_margin(cross_axis)
                    }
                    AlignItems::FlexEnd => {
                        current_lead + line_height - child_style.trailing_margin(cross_axis) - size
                    }
                    AlignItems::Center => {
                        current_lead
                            + child_style.leading_margin(cross_axis)
                            + (line_height - size - child_style.margin_axis(cross_axis)) / 2.0
                    }
                };
                let relative = child_style.relative_position(cross_axis);
                self.layout_mut(child).set_position(cross_lead, position + relative);
            }

            current_lead += line_height;
        }
    }

    /// Re-justify relative children once a self-sized main dimension turned
    /// out different from the content extent (clamped by min/max).
    fn align_child_main_axis(
        &mut self,
        node: NodeId,
        style: &FlexStyle,
        main_axis: FlexDirection,
        inner_main: f32,
        leading_pb_main: f32,
    ) {
        let child_count = self.tree.node(node).children.len();
        let main_lead = main_axis.leading_edge();

        let mut content = 0.0_f32;
        let mut count = 0usize;
        for i in 0..child_count {
            let slot = self.tree.node(self.child_at(node, i));
            if slot.is_show && !slot.style.is_absolute() {
                content += dim_with_margin(&slot.layout, &slot.style, main_axis);
                count += 1;
            }
        }

        let (leading, between) = justify_offsets(style.justify_content, inner_main - content, count);
        let mut position = leading_pb_main + leading;
        for i in 0..child_count {
            let child = self.child_at(node, i);
            let slot = self.tree.node(child);
            if !slot.is_show || slot.style.is_absolute() {
                continue;
            }
            let child_style = slot.style;
            let layout = self.layout_mut(child);
            layout.set_position(
                main_lead,
                position
                    + child_style.leading_margin(main_axis)
                    + child_style.relative_position(main_axis),
            );
            position += dim_with_margin(layout, &child_style, main_axis) + between;
        }
    }

    // =========================================================================
    // Finish
    // =========================================================================

    /// Clamp visited sizes and work out which nodes changed.
    fn finish(self, clamp_negative: bool) -> LayoutPass {
        let LayoutContext {
            tree,
            visited,
            recomputed,
            ..
        } = self;

        let mut touched = Vec::new();
        let mut clamped: Vec<NodeId> = Vec::new();
        for id in visited {
            if clamp_negative && clamp_dimensions(&mut tree.node_mut(id).layout) {
                clamped.push(id);
            }
            // Right/bottom were derived from sizes that have since changed.
            let parent = tree.node(id).parent;
            if clamped.last() == Some(&id) || parent.is_some_and(|p| clamped.contains(&p)) {
                refresh_trailing_edges(tree, id);
            }

            let slot = tree.node(id);
            let frame = slot.layout.frame();
            let changed = match slot.previous_frame {
                Some(previous) => !previous.approx_eq(&frame),
                None => true,
            };
            if changed {
                touched.push(id);
            }
        }

        LayoutPass { touched, recomputed }
    }
}
