//! Concrete layout scenarios.
//!
//! Each test builds a small tree, runs one pass and checks frames against
//! values worked out by hand.

use std::cell::Cell;
use std::rc::Rc;

use spark_flex::{
    text_measure, AlignContent, AlignItems, AlignSelf, Direction, Edge, FlexDirection, FlexStyle,
    FlexTree, FlexWrap, Frame, JustifyContent, LayoutConfig, NodeId, PositionType, Size,
    TreeError, UNDEFINED,
};

// =============================================================================
// HELPERS
// =============================================================================

fn row(width: f32, height: f32) -> FlexStyle {
    FlexStyle {
        flex_direction: FlexDirection::Row,
        ..FlexStyle::sized(width, height)
    }
}

fn frame(tree: &FlexTree, node: NodeId) -> Frame {
    tree.layout(node).unwrap().frame()
}

fn assert_frame(tree: &FlexTree, node: NodeId, x: f32, y: f32, width: f32, height: f32) {
    let actual = frame(tree, node);
    let expected = Frame { x, y, width, height };
    assert!(
        actual.approx_eq(&expected),
        "node {node}: expected {expected:?}, got {actual:?}"
    );
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn leaves(tree: &mut FlexTree, count: usize, width: f32, height: f32) -> Vec<NodeId> {
    (0..count)
        .map(|_| tree.new_node(FlexStyle::sized(width, height)))
        .collect()
}

// =============================================================================
// JUSTIFY
// =============================================================================

#[test]
fn test_space_between_three_children() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 3, 50.0, 50.0);
    let root = tree
        .new_with_children(
            FlexStyle {
                justify_content: JustifyContent::SpaceBetween,
                ..row(300.0, 50.0)
            },
            &kids,
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 0.0, 0.0, 50.0, 50.0);
    assert_frame(&tree, kids[1], 125.0, 0.0, 50.0, 50.0);
    assert_frame(&tree, kids[2], 250.0, 0.0, 50.0, 50.0);
}

#[test]
fn test_space_around_and_evenly() {
    for (justify, expected) in [
        (JustifyContent::SpaceAround, [25.0, 125.0, 225.0]),
        (JustifyContent::SpaceEvenly, [37.5, 125.0, 212.5]),
        (JustifyContent::Center, [75.0, 125.0, 175.0]),
        (JustifyContent::FlexEnd, [150.0, 200.0, 250.0]),
    ] {
        let mut tree = FlexTree::new();
        let kids = leaves(&mut tree, 3, 50.0, 50.0);
        let root = tree
            .new_with_children(
                FlexStyle {
                    justify_content: justify,
                    ..row(300.0, 50.0)
                },
                &kids,
            )
            .unwrap();
        tree.compute_layout(root, UNDEFINED).unwrap();

        for (kid, x) in kids.iter().zip(expected) {
            assert!(approx(frame(&tree, *kid).x, x), "{justify:?}: {kid} not at {x}");
        }
    }
}

#[test]
fn test_self_sized_main_axis_realigns_after_min_clamp() {
    let mut tree = FlexTree::new();
    let child = tree.new_node(FlexStyle::sized(50.0, 20.0));
    let root = tree
        .new_with_children(
            FlexStyle {
                width: 50.0,
                min_height: 100.0,
                justify_content: JustifyContent::Center,
                ..FlexStyle::default()
            },
            &[child],
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 50.0, 100.0);
    assert_frame(&tree, child, 0.0, 40.0, 50.0, 20.0);
}

// =============================================================================
// WRAP
// =============================================================================

#[test]
fn test_wrap_starts_new_line() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 3, 40.0, 30.0);
    let root = tree
        .new_with_children(
            FlexStyle {
                flex_wrap: FlexWrap::Wrap,
                ..row(100.0, UNDEFINED)
            },
            &kids,
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 0.0, 0.0, 40.0, 30.0);
    assert_frame(&tree, kids[1], 40.0, 0.0, 40.0, 30.0);
    assert_frame(&tree, kids[2], 0.0, 30.0, 40.0, 30.0);
    assert_frame(&tree, root, 0.0, 0.0, 100.0, 60.0);
    assert_eq!(tree.layout(kids[2]).unwrap().line_index, 1);
}

#[test]
fn test_align_content_positions_lines() {
    for (align_content, first_line_y) in [
        (AlignContent::FlexStart, 0.0),
        (AlignContent::Center, 20.0),
        (AlignContent::FlexEnd, 40.0),
    ] {
        let mut tree = FlexTree::new();
        let kids = leaves(&mut tree, 3, 40.0, 30.0);
        let root = tree
            .new_with_children(
                FlexStyle {
                    flex_wrap: FlexWrap::Wrap,
                    align_content,
                    ..row(100.0, 100.0)
                },
                &kids,
            )
            .unwrap();
        tree.compute_layout(root, UNDEFINED).unwrap();

        assert!(approx(frame(&tree, kids[0]).y, first_line_y), "{align_content:?}");
        assert!(approx(frame(&tree, kids[1]).y, first_line_y), "{align_content:?}");
        assert!(approx(frame(&tree, kids[2]).y, first_line_y + 30.0), "{align_content:?}");
    }
}

#[test]
fn test_align_content_stretch_grows_lines() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 3, 40.0, 30.0);
    let end = tree.new_node(FlexStyle {
        align_self: AlignSelf::FlexEnd,
        ..FlexStyle::sized(10.0, 10.0)
    });
    let mut all = kids.clone();
    all.push(end);
    let root = tree
        .new_with_children(
            FlexStyle {
                flex_wrap: FlexWrap::Wrap,
                align_content: AlignContent::Stretch,
                ..row(100.0, 100.0)
            },
            &all,
        )
        .unwrap();
    tree.compute_layout(root, UNDEFINED).unwrap();

    // Two lines of 30 share 40 extra: each grows to 50.
    assert!(approx(frame(&tree, kids[0]).y, 0.0));
    assert!(approx(frame(&tree, kids[2]).y, 50.0));
    // FlexEnd item on the second line sits at its bottom.
    assert!(approx(frame(&tree, end).y, 90.0));
}

// =============================================================================
// FLEX
// =============================================================================

#[test]
fn test_flex_distribution_fills_container() {
    let mut tree = FlexTree::new();
    let mut first = FlexStyle {
        flex: 1.0,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    };
    first.margin.set(Edge::Left, 10.0);
    let first = tree.new_node(first);
    let second = tree.new_node(FlexStyle {
        flex: 2.0,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    });
    let fixed = tree.new_node(FlexStyle::sized(60.0, 10.0));
    let root = tree
        .new_with_children(row(300.0, 10.0), &[first, second, fixed])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    let f1 = frame(&tree, first);
    let f2 = frame(&tree, second);
    let f3 = frame(&tree, fixed);
    assert!(approx(f1.width, 230.0 / 3.0));
    assert!(approx(f2.width, 460.0 / 3.0));
    assert!(approx(f1.x, 10.0));
    assert!(approx(f2.x, 10.0 + f1.width));
    assert!(approx(f3.x + f3.width, 300.0));
    assert!(approx(10.0 + f1.width + f2.width + f3.width, 300.0));
}

#[test]
fn test_flex_max_freezes_child() {
    let mut tree = FlexTree::new();
    let capped = tree.new_node(FlexStyle {
        flex: 1.0,
        max_width: 50.0,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    });
    let a = tree.new_node(FlexStyle {
        flex: 1.0,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    });
    let b = tree.new_node(FlexStyle {
        flex: 1.0,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    });
    let root = tree.new_with_children(row(300.0, 10.0), &[capped, a, b]).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, capped, 0.0, 0.0, 50.0, 10.0);
    assert_frame(&tree, a, 50.0, 0.0, 125.0, 10.0);
    assert_frame(&tree, b, 175.0, 0.0, 125.0, 10.0);
}

#[test]
fn test_flex_min_wins_over_available_space() {
    let mut tree = FlexTree::new();
    let kids: Vec<NodeId> = (0..2)
        .map(|_| {
            tree.new_node(FlexStyle {
                flex: 1.0,
                min_width: 200.0,
                ..FlexStyle::sized(UNDEFINED, 10.0)
            })
        })
        .collect();
    let root = tree.new_with_children(row(300.0, 10.0), &kids).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 0.0, 0.0, 200.0, 10.0);
    assert_frame(&tree, kids[1], 200.0, 0.0, 200.0, 10.0);
}

// =============================================================================
// CROSS AXIS
// =============================================================================

#[test]
fn test_align_items_center_in_row() {
    let mut tree = FlexTree::new();
    let child = tree.new_node(FlexStyle::sized(40.0, 20.0));
    let root = tree
        .new_with_children(
            FlexStyle {
                align_items: AlignItems::Center,
                ..row(100.0, 40.0)
            },
            &[child],
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, child, 0.0, 10.0, 40.0, 20.0);
}

#[test]
fn test_align_self_center_in_column() {
    let mut tree = FlexTree::new();
    let child = tree.new_node(FlexStyle {
        align_self: AlignSelf::Center,
        ..FlexStyle::sized(40.0, 50.0)
    });
    let end = tree.new_node(FlexStyle {
        align_self: AlignSelf::FlexEnd,
        ..FlexStyle::sized(40.0, 50.0)
    });
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, 200.0), &[child, end])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, child, 30.0, 0.0, 40.0, 50.0);
    assert_frame(&tree, end, 60.0, 50.0, 40.0, 50.0);
}

#[test]
fn test_stretch_fills_cross_axis() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle::sized(UNDEFINED, 10.0);
    style.margin.set(Edge::Horizontal, 5.0);
    let child = tree.new_node(style);
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, 100.0), &[child])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, child, 5.0, 0.0, 90.0, 10.0);
}

#[test]
fn test_stretch_to_widest_sibling_without_container_width() {
    let mut tree = FlexTree::new();
    let wide = tree.new_node(FlexStyle::sized(80.0, 10.0));
    let auto = tree.new_node(FlexStyle::sized(UNDEFINED, 10.0));
    let root = tree.new_with_children(FlexStyle::default(), &[wide, auto]).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 80.0, 20.0);
    assert_frame(&tree, auto, 0.0, 10.0, 80.0, 10.0);
}

// =============================================================================
// BOX MODEL
// =============================================================================

#[test]
fn test_padding_and_border_offset_children() {
    let mut tree = FlexTree::new();
    let child = tree.new_node(FlexStyle::sized(UNDEFINED, 20.0));
    let mut style = FlexStyle::sized(100.0, UNDEFINED);
    style.padding.set(Edge::All, 10.0);
    style.border.set(Edge::All, 2.0);
    let root = tree.new_with_children(style, &[child]).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 100.0, 44.0);
    assert_frame(&tree, child, 12.0, 12.0, 76.0, 20.0);
}

#[test]
fn test_size_never_below_padding_and_border() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle::sized(4.0, 4.0);
    style.padding.set(Edge::All, 5.0);
    let root = tree.new_node(style);

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 10.0, 10.0);
}

#[test]
fn test_margin_and_relative_offset() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle::sized(20.0, 20.0);
    style.margin.set(Edge::Left, 10.0);
    style.position.set(Edge::Top, 3.0);
    let shifted = tree.new_node(style);
    let next = tree.new_node(FlexStyle::sized(20.0, 20.0));
    let root = tree
        .new_with_children(row(100.0, 50.0), &[shifted, next])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, shifted, 10.0, 3.0, 20.0, 20.0);
    assert_frame(&tree, next, 30.0, 0.0, 20.0, 20.0);
    let layout = tree.layout(shifted).unwrap();
    assert!(approx(layout.right(), 70.0));
    assert!(approx(layout.bottom(), 27.0));
}

// =============================================================================
// DIRECTION
// =============================================================================

#[test]
fn test_rtl_row_flows_from_the_right() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 2, 20.0, 20.0);
    let root = tree
        .new_with_children(
            FlexStyle {
                direction: Direction::Rtl,
                ..row(100.0, 20.0)
            },
            &kids,
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 80.0, 0.0, 20.0, 20.0);
    assert_frame(&tree, kids[1], 60.0, 0.0, 20.0, 20.0);
    assert_eq!(tree.layout(kids[0]).unwrap().direction, Direction::Rtl);
}

#[test]
fn test_config_direction_applies_to_inheriting_root() {
    let mut tree = FlexTree::with_config(LayoutConfig::new().with_direction(Direction::Rtl));
    let child = tree.new_node(FlexStyle {
        align_self: AlignSelf::FlexStart,
        ..FlexStyle::sized(20.0, 20.0)
    });
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, 100.0), &[child])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    // Column in RTL: the cross axis starts on the right.
    assert_frame(&tree, child, 80.0, 0.0, 20.0, 20.0);
}

#[test]
fn test_column_reverse_stacks_from_bottom() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 2, 50.0, 20.0);
    let root = tree
        .new_with_children(
            FlexStyle {
                flex_direction: FlexDirection::ColumnReverse,
                ..FlexStyle::sized(50.0, 100.0)
            },
            &kids,
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 0.0, 80.0, 50.0, 20.0);
    assert_frame(&tree, kids[1], 0.0, 60.0, 50.0, 20.0);
}

// =============================================================================
// ABSOLUTE
// =============================================================================

#[test]
fn test_absolute_child_bypasses_flow() {
    let mut tree = FlexTree::new();
    let relative = tree.new_node(FlexStyle::sized(50.0, 50.0));
    let mut style = FlexStyle {
        position_type: PositionType::Absolute,
        ..FlexStyle::sized(20.0, 20.0)
    };
    style.position.set(Edge::Left, 10.0);
    style.position.set(Edge::Top, 10.0);
    let absolute = tree.new_node(style);
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, 100.0), &[absolute, relative])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, absolute, 10.0, 10.0, 20.0, 20.0);
    assert_frame(&tree, relative, 0.0, 0.0, 50.0, 50.0);
}

#[test]
fn test_absolute_child_does_not_size_parent() {
    let mut tree = FlexTree::new();
    let relative = tree.new_node(FlexStyle::sized(30.0, 30.0));
    let absolute = tree.new_node(FlexStyle {
        position_type: PositionType::Absolute,
        ..FlexStyle::sized(200.0, 200.0)
    });
    let root = tree
        .new_with_children(FlexStyle::default(), &[relative, absolute])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 30.0, 30.0);
}

#[test]
fn test_absolute_trailing_offsets() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle {
        position_type: PositionType::Absolute,
        ..FlexStyle::sized(20.0, 20.0)
    };
    style.position.set(Edge::Right, 5.0);
    style.position.set(Edge::Bottom, 5.0);
    let absolute = tree.new_node(style);
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, 100.0), &[absolute])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, absolute, 75.0, 75.0, 20.0, 20.0);
    let layout = tree.layout(absolute).unwrap();
    assert!(approx(layout.right(), 5.0));
    assert!(approx(layout.bottom(), 5.0));
}

#[test]
fn test_absolute_sized_from_both_offsets() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle {
        position_type: PositionType::Absolute,
        ..FlexStyle::default()
    };
    style.position.set(Edge::All, 10.0);
    let absolute = tree.new_node(style);
    let mut parent = FlexStyle::sized(100.0, 60.0);
    parent.border.set(Edge::All, 1.0);
    let root = tree.new_with_children(parent, &[absolute]).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, absolute, 11.0, 11.0, 78.0, 38.0);
}

#[test]
fn test_absolute_child_relaid_out_when_resized() {
    let mut tree = FlexTree::new();
    let inner = tree.new_node(FlexStyle::sized(10.0, 10.0));
    let mut style = FlexStyle {
        position_type: PositionType::Absolute,
        flex_direction: FlexDirection::Row,
        justify_content: JustifyContent::FlexEnd,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    };
    style.position.set(Edge::Left, 0.0);
    style.position.set(Edge::Right, 0.0);
    let absolute = tree.new_with_children(style, &[inner]).unwrap();

    // The parent's width is only known after it sizes itself around `wide`.
    let wide = tree.new_node(FlexStyle::sized(120.0, 10.0));
    let root = tree
        .new_with_children(FlexStyle::default(), &[absolute, wide])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, absolute, 0.0, 0.0, 120.0, 10.0);
    assert_frame(&tree, inner, 110.0, 0.0, 10.0, 10.0);
}

/// Absolute column pinned left and right, holding one measured leaf that
/// counts how often it is measured. Its parent only learns its width (120)
/// from a sibling, so the absolute child is resized after its first layout.
fn spanning_absolute(
    align_items: AlignItems,
    inner_align: AlignSelf,
) -> (FlexTree, NodeId, NodeId, Rc<Cell<usize>>) {
    let measured = Rc::new(Cell::new(0));
    let counter = Rc::clone(&measured);

    let mut tree = FlexTree::new();
    let inner = tree.new_leaf_with_measure(
        FlexStyle {
            align_self: inner_align,
            ..FlexStyle::default()
        },
        move |_| {
            counter.set(counter.get() + 1);
            Size::new(10.0, 10.0)
        },
    );
    let mut style = FlexStyle {
        position_type: PositionType::Absolute,
        align_items,
        ..FlexStyle::sized(UNDEFINED, 10.0)
    };
    style.position.set(Edge::Left, 0.0);
    style.position.set(Edge::Right, 0.0);
    let absolute = tree.new_with_children(style, &[inner]).unwrap();
    let wide = tree.new_node(FlexStyle::sized(120.0, 10.0));
    let root = tree
        .new_with_children(FlexStyle::default(), &[absolute, wide])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();
    (tree, absolute, inner, measured)
}

#[test]
fn test_absolute_child_relaid_out_for_cross_alignment() {
    let (tree, absolute, inner, measured) = spanning_absolute(AlignItems::Center, AlignSelf::Auto);
    assert_frame(&tree, absolute, 0.0, 0.0, 120.0, 10.0);
    assert_frame(&tree, inner, 55.0, 0.0, 10.0, 10.0);
    assert_eq!(measured.get(), 2);

    let (tree, _, inner, measured) = spanning_absolute(AlignItems::FlexEnd, AlignSelf::Auto);
    assert_frame(&tree, inner, 110.0, 0.0, 10.0, 10.0);
    assert_eq!(measured.get(), 2);
}

#[test]
fn test_absolute_child_relaid_out_for_child_align_self() {
    let (tree, _, inner, measured) = spanning_absolute(AlignItems::FlexStart, AlignSelf::FlexEnd);
    assert_frame(&tree, inner, 110.0, 0.0, 10.0, 10.0);
    assert_eq!(measured.get(), 2);
}

#[test]
fn test_absolute_child_kept_when_resize_cannot_move_children() {
    for align_items in [AlignItems::FlexStart, AlignItems::Stretch] {
        let (tree, absolute, inner, measured) = spanning_absolute(align_items, AlignSelf::Auto);
        assert_frame(&tree, absolute, 0.0, 0.0, 120.0, 10.0);
        assert_frame(&tree, inner, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(measured.get(), 1, "{align_items:?} re-laid out the absolute child");
    }
}

// =============================================================================
// MEASURE
// =============================================================================

#[test]
fn test_measured_leaf_in_column_gets_stretched_width() {
    let mut tree = FlexTree::new();
    let mut style = FlexStyle::default();
    style.padding.set(Edge::All, 1.0);
    let text = tree.new_leaf_with_measure(style, text_measure("hello world"));
    let root = tree
        .new_with_children(FlexStyle::sized(100.0, UNDEFINED), &[text])
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, text, 0.0, 0.0, 100.0, 3.0);
    assert_frame(&tree, root, 0.0, 0.0, 100.0, 3.0);
}

#[test]
fn test_measured_leaf_wraps_to_row_width() {
    let mut tree = FlexTree::new();
    let text = tree.new_leaf_with_measure(FlexStyle::default(), text_measure("hello world"));
    let root = tree
        .new_with_children(
            FlexStyle {
                align_items: AlignItems::FlexStart,
                ..row(8.0, UNDEFINED)
            },
            &[text],
        )
        .unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, text, 0.0, 0.0, 8.0, 2.0);
    assert_frame(&tree, root, 0.0, 0.0, 8.0, 2.0);
}

#[test]
fn test_measure_uses_available_width_at_root() {
    let mut tree = FlexTree::new();
    let root = tree.new_leaf_with_measure(FlexStyle::default(), text_measure("hello world"));

    tree.compute_layout(root, 5.0).unwrap();
    assert_frame(&tree, root, 0.0, 0.0, 5.0, 3.0);
}

#[test]
fn test_measure_respects_max_width() {
    let mut tree = FlexTree::new();
    let root = tree.new_leaf_with_measure(
        FlexStyle {
            max_width: 4.0,
            ..FlexStyle::default()
        },
        |width| Size::new(width, 1.0),
    );

    tree.compute_layout(root, 50.0).unwrap();
    assert_frame(&tree, root, 0.0, 0.0, 4.0, 1.0);
}

#[test]
fn test_measured_container_still_lays_out_children() {
    let mut tree = FlexTree::new();
    let child = tree.new_node(FlexStyle::sized(5.0, 5.0));
    let root = tree
        .new_with_children(FlexStyle::default(), &[child])
        .unwrap();
    tree.set_measure(root, |_| Size::new(30.0, 12.0)).unwrap();

    tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, root, 0.0, 0.0, 30.0, 12.0);
    assert_frame(&tree, child, 0.0, 0.0, 5.0, 5.0);
}

// =============================================================================
// VISIBILITY AND ERRORS
// =============================================================================

#[test]
fn test_hidden_child_takes_no_space() {
    let mut tree = FlexTree::new();
    let kids = leaves(&mut tree, 3, 20.0, 20.0);
    let root = tree.new_with_children(row(100.0, 20.0), &kids).unwrap();
    tree.set_show(kids[1], false).unwrap();

    let pass = tree.compute_layout(root, UNDEFINED).unwrap();

    assert_frame(&tree, kids[0], 0.0, 0.0, 20.0, 20.0);
    assert_frame(&tree, kids[1], 0.0, 0.0, 0.0, 0.0);
    assert_frame(&tree, kids[2], 20.0, 0.0, 20.0, 20.0);
    assert!(!pass.is_touched(kids[1]));
    assert!(!pass.was_recomputed(kids[1]));
}

#[test]
fn test_unknown_root_is_an_error() {
    let mut tree = FlexTree::new();
    let root = tree.new_node(FlexStyle::default());
    tree.destroy(root).unwrap();

    assert_eq!(
        tree.compute_layout(root, UNDEFINED),
        Err(TreeError::NodeNotFound(root))
    );
}
