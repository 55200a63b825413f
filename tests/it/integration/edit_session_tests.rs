//! Inline text edit tests: double-click, typing, commit, discard.

use crate::helpers::*;
use labelboard::engine::CanvasEffect;
use labelboard::input::{CanvasEvent, Key, Modifiers};
use labelboard::types::{ItemChanges, ItemUpdate};

fn content_of(editor: &labelboard::editor::LabelEditor, item: &str) -> String {
    editor
        .document()
        .item(&id(item))
        .map(|item| item.content.clone())
        .unwrap_or_default()
}

fn editing_id(editor: &labelboard::editor::LabelEditor) -> Option<String> {
    editor
        .engine()
        .editing()
        .map(|session| session.item_id.to_string())
}

#[test]
fn test_double_click_opens_edit_with_current_content() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    let effects = editor.dispatch(&double_click(20.0, 20.0));
    assert_eq!(effects, vec![CanvasEffect::SelectionChanged(ids(&["t"]))]);

    let session = editor.engine().editing().cloned();
    assert_eq!(session.map(|s| s.draft), Some("Hello".to_string()));
}

#[test]
fn test_enter_commits_draft() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Hello world"));
    let effects = editor.dispatch(&key(Key::Enter));

    assert_eq!(
        effects,
        vec![CanvasEffect::ItemsUpdated(vec![ItemUpdate::new(
            id("t"),
            ItemChanges::content("Hello world")
        )])]
    );
    assert_eq!(content_of(&editor, "t"), "Hello world");
    assert_eq!(editing_id(&editor), None);
}

#[test]
fn test_shift_enter_does_not_commit() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Line one\n"));
    let effects = editor.dispatch(&key_with(Key::Enter, Modifiers::shift()));

    assert!(effects.is_empty());
    assert_eq!(editing_id(&editor), Some("t".to_string()));
    assert_eq!(content_of(&editor, "t"), "Hello");
}

#[test]
fn test_escape_discards_draft() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Goodbye"));
    let effects = editor.dispatch(&key(Key::Escape));

    assert!(effects.is_empty());
    assert_eq!(content_of(&editor, "t"), "Hello");
    assert_eq!(editing_id(&editor), None);
    // Selection from the double-click stays
    assert_eq!(selected(&editor), ids(&["t"]));
}

#[test]
fn test_blur_commits_draft() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Blurred"));
    editor.dispatch(&CanvasEvent::Blur);

    assert_eq!(content_of(&editor, "t"), "Blurred");
    assert_eq!(editing_id(&editor), None);
}

#[test]
fn test_double_click_on_graphics_or_canvas_does_nothing() {
    let mut editor = TestDocBuilder::new()
        .with_qr_item("q", (100.0, 100.0))
        .with_image_item("i", (200.0, 100.0))
        .build_editor();

    assert!(editor.dispatch(&double_click(110.0, 110.0)).is_empty());
    assert!(editor.dispatch(&double_click(210.0, 110.0)).is_empty());
    assert!(editor.dispatch(&double_click(500.0, 500.0)).is_empty());
    assert_eq!(editing_id(&editor), None);
}

#[test]
fn test_press_on_edited_item_is_ignored() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    let effects = editor.dispatch(&pointer_down(30.0, 20.0));

    assert!(effects.is_empty());
    assert_eq!(editing_id(&editor), Some("t".to_string()));
    assert!(!editor.engine().input_state().is_dragging_items());
}

#[test]
fn test_press_on_other_item_commits_then_drags() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .with_qr_item("q", (200.0, 200.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Edited"));
    let effects = editor.dispatch(&pointer_down(210.0, 210.0));

    assert_eq!(
        effects,
        vec![
            CanvasEffect::ItemsUpdated(vec![ItemUpdate::new(
                id("t"),
                ItemChanges::content("Edited")
            )]),
            CanvasEffect::SelectionChanged(ids(&["q"])),
        ]
    );
    assert_eq!(content_of(&editor, "t"), "Edited");
    assert!(editor.engine().input_state().is_dragging_items());
}

#[test]
fn test_press_on_canvas_commits_then_starts_marquee() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Edited"));
    let effects = editor.dispatch(&pointer_down(300.0, 300.0));

    assert_eq!(effects.len(), 3);
    assert!(has_item_updates(&effects));
    assert_eq!(effects[1], CanvasEffect::CanvasClicked);
    assert_eq!(content_of(&editor, "t"), "Edited");
    assert!(editor.engine().input_state().is_marquee_selecting());
}

#[test]
fn test_press_outside_label_commits_without_marquee() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("Edited"));
    let effects = editor.dispatch(&pointer_down(-20.0, -20.0));

    assert_eq!(effects.len(), 3);
    assert!(has_item_updates(&effects));
    assert_eq!(effects[1], CanvasEffect::CanvasClicked);
    assert_eq!(effects[2], CanvasEffect::SelectionChanged(Vec::new()));
    assert_eq!(content_of(&editor, "t"), "Edited");
    assert!(editor.engine().input_state().is_idle());
}

#[test]
fn test_double_click_on_second_text_commits_first() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("a", "First", (10.0, 10.0))
        .with_text_item("b", "Second", (10.0, 100.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    editor.dispatch(&text_input("First edited"));
    editor.dispatch(&double_click(20.0, 110.0));

    assert_eq!(content_of(&editor, "a"), "First edited");
    assert_eq!(editing_id(&editor), Some("b".to_string()));
    assert_eq!(selected(&editor), ids(&["b"]));
}

#[test]
fn test_double_click_after_press_drops_the_drag() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    // The first press of a double-click opens a drag
    editor.dispatch(&pointer_down(20.0, 20.0));
    assert!(editor.engine().input_state().is_dragging_items());

    editor.dispatch(&double_click(20.0, 20.0));
    assert_eq!(editing_id(&editor), Some("t".to_string()));
    assert!(!editor.engine().input_state().is_dragging_items());
}

#[test]
fn test_keys_during_edit_never_trigger_shortcuts() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    let effects = editor.dispatch(&key(Key::Backspace));
    assert!(effects.is_empty());
    let effects = editor.dispatch(&key_with(Key::Character('d'), Modifiers::ctrl()));
    assert!(effects.is_empty());

    assert_eq!(editor.document().items().len(), 1);
}

#[test]
fn test_deleting_edited_item_closes_session() {
    let mut editor = TestDocBuilder::new()
        .with_text_item("t", "Hello", (10.0, 10.0))
        .build_editor();

    editor.dispatch(&double_click(20.0, 20.0));
    let effects = editor.dispatch(&CanvasEvent::DeleteHandle { id: id("t") });

    assert_eq!(effects, vec![CanvasEffect::DeleteRequested(ids(&["t"]))]);
    assert_eq!(editing_id(&editor), None);
    assert!(editor.document().items().is_empty());

    // A late blur has nothing to write
    assert!(editor.dispatch(&CanvasEvent::Blur).is_empty());
}
