//! Text reports for looking at a deck without the presenter.

use std::fmt::Display;

use serde::Serialize;

use crate::deck::{Arrangement, Axis, Deck, DeckNode, NodeKind};
use crate::slide::Slide;

/// One line per node, indented by depth, with each node's step length.
pub fn outline<C: Display>(node: &DeckNode<C>) -> Vec<String> {
    let mut lines = Vec::new();
    outline_into(node, 0, &mut lines);
    lines
}

fn outline_into<C: Display>(node: &DeckNode<C>, depth: usize, lines: &mut Vec<String>) {
    let label = match node.kind() {
        NodeKind::Leaf(content) => content.to_string(),
        NodeKind::Sequence(_) => "sequence".to_string(),
        NodeKind::Build { axis, .. } => format!("build {}", axis_name(*axis)),
        NodeKind::Parallel { arrangement, .. } => match arrangement {
            Arrangement::Horizontal => "parallel horizontal".to_string(),
            Arrangement::Vertical => "parallel vertical".to_string(),
            Arrangement::Separated(axis) => format!("parallel separated {}", axis_name(*axis)),
        },
        NodeKind::Delay { amount, .. } => format!("delay {amount}"),
        NodeKind::Cut { amount, .. } => format!("cut {amount}"),
        NodeKind::HideAfter { after, .. } => format!("hide after {after}"),
        NodeKind::Decorate { decoration, .. } => decoration.label().to_string(),
    };
    lines.push(format!(
        "{}{} [{}]",
        "  ".repeat(depth),
        label,
        node.length()
    ));
    for child in node.children() {
        outline_into(child, depth + 1, lines);
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Vertical => "vertical",
        Axis::Horizontal => "horizontal",
    }
}

/// A visible leaf at some global step, flattened for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafReport {
    pub path: Vec<usize>,
    pub kind: &'static str,
    pub step: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub length: usize,
    pub finished: bool,
    pub leaves: Vec<LeafReport>,
}

pub fn step_report(deck: &Deck<Slide>, step: usize) -> StepReport {
    let leaves = deck
        .active_leaves(step)
        .into_iter()
        .map(|leaf| LeafReport {
            path: leaf.path,
            kind: leaf.content.kind(),
            step: leaf.step,
            text: leaf.content.text_at(leaf.step).to_string(),
        })
        .collect();
    StepReport {
        step,
        length: deck.length(),
        finished: deck.is_finished(step),
        leaves,
    }
}

impl Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "step {} of {}", self.step, self.length)?;
        if self.finished {
            return writeln!(f, "  (end of deck)");
        }
        for leaf in &self.leaves {
            let path = leaf
                .path
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(".");
            let path = if path.is_empty() { "-".to_string() } else { path };
            let first_line = leaf.text.lines().next().unwrap_or("");
            writeln!(f, "  {path} {} @{} {first_line}", leaf.kind, leaf.step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_indents_children() {
        let node = DeckNode::sequence(vec![
            DeckNode::content(Slide::title("Hello")),
            DeckNode::content(Slide::text("World")).delay(1),
        ]);
        assert_eq!(
            outline(&node),
            vec![
                "sequence [3]",
                "  title \"Hello\" [1]",
                "  delay 1 [2]",
                "    text \"World\" [1]",
            ]
        );
    }

    #[test]
    fn finished_report_has_no_leaves() {
        let deck = Deck::new("d", DeckNode::content(Slide::text("only")));
        let report = step_report(&deck, 1);
        assert!(report.finished);
        assert!(report.leaves.is_empty());
        assert!(report.to_string().contains("end of deck"));
    }
}
