use std::fs;
use std::path::PathBuf;

use stepdeck::authoring::{load_deck, DeckFileError};
use stepdeck::deck::{DeckError, NodeKind};
use stepdeck::slide::Slide;
use tempfile::TempDir;

fn write_deck(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const TALK: &str = r#"
title = "Release notes"

[root]
kind = "sequence"

[[root.children]]
kind = "title"
text = "What changed"
centered = true

[[root.children]]
kind = "build"
padding = 1
children = [
  { kind = "text", text = "Faster startup" },
  { kind = "text", text = "Smaller binary" },
]

[[root.children]]
kind = "quote"
parts = ["Ship", "it"]
"#;

#[test]
fn loads_full_deck() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(&dir, "talk.toml", TALK);
    let deck = load_deck(&path).unwrap();
    assert_eq!(deck.title(), "Release notes");
    assert_eq!(deck.length(), 1 + 2 + 2);

    let leaves = deck.active_leaves(2);
    let texts: Vec<_> = leaves.iter().map(|l| l.content.text_at(l.step)).collect();
    assert_eq!(texts, vec!["Faster startup", "Smaller binary"]);
    assert_eq!(leaves[1].path, vec![1, 1]);

    let quote = deck.active_leaves(4);
    assert_eq!(quote[0].content.text_at(quote[0].step), "Ship it");
}

#[test]
fn title_falls_back_to_file_stem() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "kickoff.toml",
        "[root]\nkind = \"text\"\ntext = \"hello\"\n",
    );
    let deck = load_deck(&path).unwrap();
    assert_eq!(deck.title(), "kickoff");
    assert!(matches!(deck.root().kind(), NodeKind::Leaf(Slide::Text(_))));
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_deck(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DeckFileError::ReadError { .. }));
}

#[test]
fn bad_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(&dir, "bad.toml", "[root\nkind = ");
    let err = load_deck(&path).unwrap_err();
    assert!(matches!(err, DeckFileError::ParseError { .. }));
}

#[test]
fn unknown_field_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "typo.toml",
        "[root]\nkind = \"text\"\ntext = \"x\"\npaddng = 2\n",
    );
    assert!(matches!(
        load_deck(&path).unwrap_err(),
        DeckFileError::ParseError { .. }
    ));
}

#[test]
fn missing_text_names_node() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "missing.toml",
        r#"
[root]
kind = "sequence"
children = [{ kind = "text", text = "ok" }, { kind = "title" }]
"#,
    );
    match load_deck(&path).unwrap_err() {
        DeckFileError::InvalidNode { node, .. } => assert_eq!(node, "root.children[1]"),
        other => panic!("expected InvalidNode, got {other:?}"),
    }
}

#[test]
fn empty_container_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(&dir, "empty.toml", "[root]\nkind = \"build\"\n");
    assert!(matches!(
        load_deck(&path).unwrap_err(),
        DeckFileError::InvalidNode { .. }
    ));
}

#[test]
fn empty_frames_surface_deck_error() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(&dir, "frames.toml", "[root]\nkind = \"body\"\n");
    match load_deck(&path).unwrap_err() {
        DeckFileError::InvalidContent { source, .. } => assert_eq!(source, DeckError::EmptyFrames),
        other => panic!("expected InvalidContent, got {other:?}"),
    }
}

#[test]
fn delay_wraps_outermost() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "delay.toml",
        "[root]\nkind = \"text\"\ntext = \"late\"\ncut = 0\nboxed = true\ndelay = 1\n",
    );
    let deck = load_deck(&path).unwrap();
    assert_eq!(deck.length(), 2);
    assert!(deck.active_leaves(0).is_empty());
    assert_eq!(deck.active_leaves(1)[0].step, 0);
    match deck.root().kind() {
        NodeKind::Delay { child, .. } => {
            assert!(matches!(child.kind(), NodeKind::Decorate { .. }))
        }
        other => panic!("expected Delay, got {other:?}"),
    }
}

#[test]
fn huge_hold_loads_without_expanding() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "hold.toml",
        "[root]\nkind = \"code\"\nframes = [{ text = \"a\", hold = 9223372036854775807 }]\n",
    );
    let deck = load_deck(&path).unwrap();
    assert_eq!(deck.length(), 9223372036854775807);
    assert_eq!(deck.active_leaves(1_000_000)[0].content.text_at(1_000_000), "a");
}

#[test]
fn overflowing_holds_surface_deck_error() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "overflow.toml",
        r#"
[root]
kind = "code"
frames = [
  { text = "a", hold = 9223372036854775807 },
  { text = "b", hold = 9223372036854775807 },
  { text = "c", hold = 9223372036854775807 },
]
"#,
    );
    match load_deck(&path).unwrap_err() {
        DeckFileError::InvalidContent { node, source } => {
            assert_eq!(node, "root");
            assert_eq!(source, DeckError::TooManySteps { index: 2 });
        }
        other => panic!("expected InvalidContent, got {other:?}"),
    }
}

#[test]
fn separated_on_sequence_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "separated.toml",
        r#"
[root]
kind = "sequence"
children = [
  { kind = "text", text = "one" },
  { kind = "build", separated = true, children = [{ kind = "blank" }] },
]
"#,
    );
    match load_deck(&path).unwrap_err() {
        DeckFileError::InvalidNode { node, message } => {
            assert_eq!(node, "root.children[1]");
            assert!(message.contains("separated"));
        }
        other => panic!("expected InvalidNode, got {other:?}"),
    }
}

#[test]
fn quote_with_frames_and_parts_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_deck(
        &dir,
        "quote.toml",
        "[root]\nkind = \"quote\"\nparts = [\"a\", \"b\"]\nframes = [\"c\"]\n",
    );
    assert!(matches!(
        load_deck(&path).unwrap_err(),
        DeckFileError::InvalidNode { .. }
    ));
}
