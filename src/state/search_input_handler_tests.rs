//! Tests for search field editing.

use super::*;

fn typed(text: &str) -> SearchField {
    text.chars()
        .fold(SearchField::default(), handle_char_input)
}

#[test]
fn typing_appends_and_advances_cursor() {
    let field = typed("cats");
    assert_eq!(field.text(), "cats");
    assert_eq!(field.cursor(), 4);
}

#[test]
fn insert_at_cursor_in_the_middle() {
    let field = handle_cursor_left(handle_cursor_left(typed("cts")));
    let field = handle_char_input(field, 'a');
    assert_eq!(field.text(), "cats");
    assert_eq!(field.cursor(), 2);
}

#[test]
fn backspace_deletes_before_cursor() {
    let field = handle_backspace(typed("cats"));
    assert_eq!(field.text(), "cat");
    assert_eq!(field.cursor(), 3);
}

#[test]
fn backspace_at_start_is_noop() {
    let field = handle_cursor_left(handle_cursor_left(typed("ab")));
    let field = handle_backspace(field);
    assert_eq!(field.text(), "ab");
    assert_eq!(field.cursor(), 0);
}

#[test]
fn cursor_saturates_at_both_ends() {
    let field = handle_cursor_right(typed("ab"));
    assert_eq!(field.cursor(), 2);

    let field = (0..5).fold(field, |f, _| handle_cursor_left(f));
    assert_eq!(field.cursor(), 0);
}

#[test]
fn multibyte_characters_are_edited_by_char() {
    let field = typed("café");
    assert_eq!(field.cursor(), 4);

    let field = handle_backspace(field);
    assert_eq!(field.text(), "caf");

    let field = handle_char_input(handle_cursor_left(typed("日本")), '語');
    assert_eq!(field.text(), "日語本");
}

#[test]
fn with_text_places_cursor_at_end() {
    let field = SearchField::with_text("mountains");
    assert_eq!(field.cursor(), 9);
}

#[test]
fn clear_field_empties_text_and_cursor() {
    let field = clear_field(typed("cats"));
    assert_eq!(field, SearchField::default());
}
