use stepdeck::deck::{Arrangement, Axis, DeckNode, Span};

fn leaf(name: &'static str, length: usize) -> DeckNode<&'static str> {
    DeckNode::leaf(name, length)
}

fn active(node: &DeckNode<&'static str>, step: usize) -> Vec<(usize, usize)> {
    node.active_children(step)
        .iter()
        .map(|child| (child.index, child.step))
        .collect()
}

#[test]
fn build_length_is_sum_of_children() {
    let build = DeckNode::build(Axis::Vertical, vec![leaf("a", 1), leaf("b", 2)]);
    assert_eq!(build.length(), 3);
}

#[test]
fn build_of_three_single_steps() {
    let build = DeckNode::build(
        Axis::Vertical,
        vec![leaf("a", 1), leaf("b", 1), leaf("c", 1)],
    );
    assert_eq!(active(&build, 0), vec![(0, 0)]);
    assert_eq!(active(&build, 1), vec![(0, 1), (1, 0)]);
    assert_eq!(active(&build, 2), vec![(0, 2), (1, 1), (2, 0)]);
}

#[test]
fn build_keeps_children_past_their_length() {
    let build = DeckNode::build(Axis::Horizontal, vec![leaf("a", 1), leaf("b", 1)]);
    assert_eq!(active(&build, 9), vec![(0, 9), (1, 8)]);
}

#[test]
fn build_span_reports_total_children() {
    let build = DeckNode::build(Axis::Vertical, vec![leaf("a", 1), leaf("b", 1)]);
    match build.resolve(0) {
        Span::Build {
            axis,
            total,
            children,
        } => {
            assert_eq!(axis, Axis::Vertical);
            assert_eq!(total, 2);
            assert_eq!(children.len(), 1);
            assert_eq!(children[0].index, 0);
        }
        other => panic!("expected Build, got {other:?}"),
    }
}

#[test]
fn zero_length_child_is_included_once_reached() {
    let build = DeckNode::build(
        Axis::Vertical,
        vec![leaf("a", 1), leaf("marker", 0), leaf("b", 1)],
    );
    assert_eq!(build.length(), 2);
    assert_eq!(active(&build, 0), vec![(0, 0)]);
    assert_eq!(active(&build, 1), vec![(0, 1), (1, 0), (2, 0)]);
}

#[test]
fn parallel_forwards_same_step_to_all() {
    let par = DeckNode::parallel(
        Arrangement::Horizontal,
        vec![leaf("left", 2), leaf("right", 4)],
    );
    assert_eq!(par.length(), 4);
    assert_eq!(active(&par, 3), vec![(0, 3), (1, 3)]);
}

#[test]
fn separated_parallel_returns_all_children() {
    let par = DeckNode::parallel(
        Arrangement::Separated(Axis::Vertical),
        vec![leaf("top", 1), leaf("bottom", 1)],
    );
    let leaves = par.resolve(0).leaves();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[1].path, vec![1]);
}

#[test]
fn empty_parallel_has_zero_length() {
    let par: DeckNode<&str> = DeckNode::parallel(Arrangement::Vertical, Vec::new());
    assert_eq!(par.length(), 0);
    assert!(par.resolve(0).leaves().is_empty());
}
