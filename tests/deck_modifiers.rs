use stepdeck::deck::{
    Alignment, Axis, Decoration, DeckNode, Emphasis, FrameSpec, NodeKind, Span, StepTransform,
};

fn leaf(name: &'static str, length: usize) -> DeckNode<&'static str> {
    DeckNode::leaf(name, length)
}

fn local_step(node: &DeckNode<&'static str>, step: usize) -> Option<usize> {
    let leaves = node.resolve(step).leaves();
    assert!(leaves.len() <= 1);
    leaves.first().map(|leaf| leaf.step)
}

#[test]
fn delay_two_over_three() {
    let node = leaf("a", 3).delay(2);
    assert_eq!(node.length(), 5);
    assert_eq!(local_step(&node, 0), None);
    assert_eq!(local_step(&node, 1), None);
    assert_eq!(local_step(&node, 2), Some(0));
    assert_eq!(local_step(&node, 3), Some(1));
    assert_eq!(local_step(&node, 4), Some(2));
}

#[test]
fn delay_does_not_forward_before_amount() {
    let node = leaf("a", 1).delay(3);
    assert!(node.active_children(2).is_empty());
    assert_eq!(node.resolve(2), Span::Empty);
}

#[test]
fn cut_shortens_length_but_forwards_step() {
    let node = leaf("a", 5).cut(2);
    assert_eq!(node.length(), 3);
    assert_eq!(local_step(&node, 4), Some(4));
}

#[test]
fn cut_moves_sequence_on_sooner() {
    let seq = DeckNode::sequence(vec![leaf("a", 4).cut(2), leaf("b", 1)]);
    assert_eq!(seq.length(), 3);
    let leaves = seq.resolve(2).leaves();
    assert_eq!(*leaves[0].content, "b");
}

#[test]
fn oversized_cut_saturates_at_zero() {
    let node = leaf("a", 2).cut(5);
    assert_eq!(node.length(), 0);
    let seq = DeckNode::sequence(vec![node, leaf("b", 1)]);
    assert_eq!(*seq.resolve(0).leaves()[0].content, "b");
}

#[test]
fn hide_after_hides_from_threshold() {
    let node = leaf("a", 3).hide_after(2);
    assert_eq!(node.length(), 3);
    assert_eq!(local_step(&node, 1), Some(1));
    assert_eq!(local_step(&node, 2), None);
}

#[test]
fn hide_after_own_length_inside_build() {
    let build = DeckNode::build(
        Axis::Vertical,
        vec![leaf("hint", 1).hide_after_own_length(), leaf("body", 1)],
    );
    let names: Vec<_> = build
        .resolve(1)
        .leaves()
        .into_iter()
        .map(|leaf| *leaf.content)
        .collect();
    assert_eq!(names, vec!["body"]);
}

#[test]
fn decorations_preserve_length_and_path() {
    let node = leaf("a", 2)
        .padding(1)
        .frame(FrameSpec {
            max_width: Some(40),
            max_height: None,
            alignment: Alignment::Top,
        })
        .titled("Panel")
        .boxed();
    assert_eq!(node.length(), 2);
    let leaves = node.resolve(1).leaves();
    assert!(leaves[0].path.is_empty());
    assert_eq!(leaves[0].step, 1);
    match node.kind() {
        NodeKind::Decorate { decoration, .. } => assert_eq!(decoration, &Decoration::Boxed),
        other => panic!("expected Decorate, got {other:?}"),
    }
}

#[test]
fn transform_sees_local_step() {
    let node = leaf("a", 3)
        .delay(1)
        .transform(StepTransform::new(|step| Emphasis {
            bold: step == 0,
            ..Emphasis::default()
        }));
    match node.resolve(1) {
        Span::Decorated {
            decoration: Decoration::Transform(transform),
            step,
            ..
        } => {
            assert_eq!(step, 1);
            assert!(!transform.apply(step).bold);
        }
        other => panic!("expected transform, got {other:?}"),
    }
}
