//! End-to-end tests driving a headless editor through key sequences.

use mvi::buffer::Position;
use mvi::{Editor, Mode};

fn editor_with(text: &str) -> Editor {
    let mut editor = Editor::new_headless();
    editor.set_text(text);
    editor
}

fn pos(editor: &Editor) -> Position {
    editor.cursor().pos
}

#[test]
fn test_basic_motions() {
    let mut ed = editor_with("abc\ndef\nghi");
    ed.execute_keys("jl");
    assert_eq!(pos(&ed), Position::new(1, 1));
    ed.execute_keys("kh");
    assert_eq!(pos(&ed), Position::new(0, 0));
}

#[test]
fn test_counted_vertical_motion() {
    let mut ed = editor_with("a\nb\nc\nd\ne");
    ed.execute_keys("3j");
    assert_eq!(pos(&ed).row, 3);
    ed.execute_keys("2k");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_motion_clamps_at_edges() {
    let mut ed = editor_with("ab\ncd");
    ed.execute_keys("100j");
    assert_eq!(pos(&ed).row, 1);
    ed.execute_keys("100l");
    assert_eq!(pos(&ed).col, 1);
    ed.execute_keys("100k100h");
    assert_eq!(pos(&ed), Position::new(0, 0));
}

#[test]
fn test_plus_minus_aliases() {
    let mut ed = editor_with("a\nb\nc");
    ed.execute_keys("++");
    assert_eq!(pos(&ed).row, 2);
    ed.execute_keys("-");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_gg_and_counted_gg() {
    let mut ed = editor_with("a\nb\nc\nd\ne");
    ed.execute_keys("G");
    assert_eq!(pos(&ed).row, 4);
    ed.execute_keys("gg");
    assert_eq!(pos(&ed).row, 0);
    ed.execute_keys("3gg");
    assert_eq!(pos(&ed).row, 2);
}

#[test]
fn test_counted_g_goes_to_line() {
    let mut ed = editor_with("a\nb\nc\nd\ne");
    ed.execute_keys("2G");
    assert_eq!(pos(&ed).row, 1);
    ed.execute_keys("99G");
    assert_eq!(pos(&ed).row, 4);
}

#[test]
fn test_line_motions() {
    let mut ed = editor_with("  hello world");
    ed.execute_keys("$");
    assert_eq!(pos(&ed).col, 12);
    ed.execute_keys("0");
    assert_eq!(pos(&ed).col, 0);
    ed.execute_keys("^");
    assert_eq!(pos(&ed).col, 2);
}

#[test]
fn test_sticky_column_across_short_line() {
    let mut ed = editor_with("long line one\nab\nlong line two");
    ed.execute_keys("8l");
    assert_eq!(pos(&ed).col, 8);
    ed.execute_keys("j");
    assert_eq!(pos(&ed).col, 1);
    ed.execute_keys("j");
    assert_eq!(pos(&ed).col, 8);
}

#[test]
fn test_dollar_anchor_follows_line_ends() {
    let mut ed = editor_with("short\na much longer line\nab");
    ed.execute_keys("$");
    assert_eq!(pos(&ed).col, 4);
    ed.execute_keys("j");
    assert_eq!(pos(&ed).col, 17);
    ed.execute_keys("j");
    assert_eq!(pos(&ed).col, 1);
    // Horizontal motion drops the anchor.
    ed.execute_keys("hk");
    assert_eq!(pos(&ed).col, 0);
}

#[test]
fn test_word_motions_round_trip() {
    let mut ed = editor_with("one two three");
    ed.execute_keys("w");
    assert_eq!(pos(&ed).col, 4);
    ed.execute_keys("w");
    assert_eq!(pos(&ed).col, 8);
    ed.execute_keys("bb");
    assert_eq!(pos(&ed).col, 0);
}

#[test]
fn test_word_end_lands_on_last_char() {
    let mut ed = editor_with("one  two");
    ed.execute_keys("e");
    assert_eq!(pos(&ed).col, 2);
    ed.execute_keys("e");
    assert_eq!(pos(&ed).col, 7);
    // At the final word end the motion is a no-op.
    ed.execute_keys("e");
    assert_eq!(pos(&ed).col, 7);
}

#[test]
fn test_find_char() {
    let mut ed = editor_with("hello world");
    ed.execute_keys("fo");
    assert_eq!(pos(&ed).col, 4);
    ed.execute_keys("fo");
    assert_eq!(pos(&ed).col, 7);
}

#[test]
fn test_counted_find_char() {
    let mut ed = editor_with("a.b.c.d");
    ed.execute_keys("3f.");
    assert_eq!(pos(&ed).col, 5);
}

#[test]
fn test_find_missing_char_is_noop() {
    let mut ed = editor_with("hello");
    ed.execute_keys("ll");
    ed.execute_keys("fz");
    assert_eq!(pos(&ed).col, 2);
}

#[test]
fn test_insert_and_escape() {
    let mut ed = editor_with("world");
    ed.execute_keys("ihello \x1b");
    assert_eq!(ed.text(), "hello world\n");
    assert_eq!(ed.mode(), Mode::Normal);
    // Escape backs the cursor up one column.
    assert_eq!(pos(&ed).col, 5);
}

#[test]
fn test_append_and_append_at_line_end() {
    let mut ed = editor_with("ac");
    ed.execute_keys("ab\x1b");
    assert_eq!(ed.text(), "abc\n");
    ed.execute_keys("A!\x1b");
    assert_eq!(ed.text(), "abc!\n");
}

#[test]
fn test_insert_at_first_non_blank() {
    let mut ed = editor_with("   x");
    ed.execute_keys("Iy\x1b");
    assert_eq!(ed.text(), "   yx\n");
}

#[test]
fn test_open_below_and_above() {
    let mut ed = editor_with("one");
    ed.execute_keys("otwo\x1b");
    assert_eq!(ed.text(), "one\ntwo\n");
    ed.execute_keys("Omid\x1b");
    assert_eq!(ed.text(), "one\nmid\ntwo\n");
}

#[test]
fn test_enter_splits_line_in_insert() {
    let mut ed = editor_with("helloworld");
    ed.execute_keys("5li\n\x1b");
    assert_eq!(ed.text(), "hello\nworld\n");
}

#[test]
fn test_backspace_deletes_and_joins() {
    let mut ed = editor_with("ab\ncd");
    ed.execute_keys("ji\x7f\x1b");
    assert_eq!(ed.text(), "abcd\n");
}

#[test]
fn test_ctrl_u_kills_to_line_start() {
    let mut ed = editor_with("hello world");
    ed.execute_keys("6li\x15\x1b");
    assert_eq!(ed.text(), "world\n");
}

#[test]
fn test_x_deletes_chars() {
    let mut ed = editor_with("abcdef");
    ed.execute_keys("x");
    assert_eq!(ed.text(), "bcdef\n");
    ed.execute_keys("3x");
    assert_eq!(ed.text(), "ef\n");
}

#[test]
fn test_x_stops_at_line_end() {
    let mut ed = editor_with("abc\ndef");
    ed.execute_keys("99x");
    assert_eq!(ed.text(), "\ndef\n");
}

#[test]
fn test_capital_d_deletes_to_line_end() {
    let mut ed = editor_with("hello world");
    ed.execute_keys("5lD");
    assert_eq!(ed.text(), "hello\n");
    assert_eq!(pos(&ed).col, 4);
}

#[test]
fn test_join_lines() {
    let mut ed = editor_with("foo\n    bar");
    ed.execute_keys("J");
    assert_eq!(ed.text(), "foo bar\n");
    assert_eq!(pos(&ed).col, 3);
}

#[test]
fn test_counted_join() {
    let mut ed = editor_with("a\nb\nc\nd");
    ed.execute_keys("3J");
    assert_eq!(ed.text(), "a b c\nd\n");
}

#[test]
fn test_counted_open_below() {
    let mut ed = editor_with("a\nb");
    ed.execute_keys("3o\x1b");
    assert_eq!(ed.text(), "a\n\n\n\nb\n");
    assert_eq!(pos(&ed).row, 3);
}

#[test]
fn test_counted_open_above() {
    let mut ed = editor_with("a\nb");
    ed.execute_keys("j2O\x1b");
    assert_eq!(ed.text(), "a\n\n\nb\n");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_join_blank_line_takes_next_content() {
    let mut ed = editor_with("  \nbar");
    ed.execute_keys("J");
    assert_eq!(ed.text(), "bar\n");
}

#[test]
fn test_dd_deletes_lines() {
    let mut ed = editor_with("a\nb\nc");
    ed.execute_keys("jdd");
    assert_eq!(ed.text(), "a\nc\n");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_counted_dd() {
    let mut ed = editor_with("a\nb\nc\nd");
    ed.execute_keys("2dd");
    assert_eq!(ed.text(), "c\nd\n");
}

#[test]
fn test_dd_on_only_line_leaves_empty_buffer() {
    let mut ed = editor_with("only");
    ed.execute_keys("dd");
    assert_eq!(ed.text(), "\n");
    assert_eq!(pos(&ed), Position::new(0, 0));
}

#[test]
fn test_d_dollar_is_exclusive_of_last_char() {
    let mut ed = editor_with("hello world");
    ed.execute_keys("5ld$");
    assert_eq!(ed.text(), "hellod\n");
}

#[test]
fn test_d_w_deletes_word() {
    let mut ed = editor_with("one two three");
    ed.execute_keys("dw");
    assert_eq!(ed.text(), "two three\n");
}

#[test]
fn test_d_j_is_linewise() {
    let mut ed = editor_with("a\nb\nc\nd");
    ed.execute_keys("jdj");
    assert_eq!(ed.text(), "a\nd\n");
}

#[test]
fn test_d_f_deletes_up_to_target() {
    let mut ed = editor_with("one.two");
    ed.execute_keys("df.");
    assert_eq!(ed.text(), ".two\n");
}

#[test]
fn test_cancelled_g_prefix_still_dispatches() {
    let mut ed = editor_with("a\nb\nc");
    ed.execute_keys("gj");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_escape_cancels_pending() {
    let mut ed = editor_with("a\nb\nc\nd\ne");
    ed.execute_keys("3\x1bj");
    assert_eq!(pos(&ed).row, 1);
    ed.execute_keys("d\x1bj");
    assert_eq!(ed.text(), "a\nb\nc\nd\ne\n");
    assert_eq!(pos(&ed).row, 2);
}

#[test]
fn test_escape_in_normal_is_idempotent() {
    let mut ed = editor_with("abc");
    ed.execute_keys("\x1b\x1b\x1b");
    assert_eq!(ed.mode(), Mode::Normal);
    assert_eq!(pos(&ed), Position::new(0, 0));
}

#[test]
fn test_unbound_key_cancels_pending() {
    let mut ed = editor_with("a\nb\nc");
    ed.execute_keys("dzj");
    assert_eq!(ed.text(), "a\nb\nc\n");
    assert_eq!(pos(&ed).row, 1);
}

#[test]
fn test_page_motions() {
    let mut ed = editor_with(&"x\n".repeat(100));
    ed.execute_keys("\x06"); // Ctrl-F
    assert_eq!(pos(&ed).row, 23);
    ed.execute_keys("\x02"); // Ctrl-B
    assert_eq!(pos(&ed).row, 0);
}

#[test]
fn test_viewport_follows_cursor() {
    let mut ed = editor_with(&"x\n".repeat(100));
    ed.execute_keys("50j");
    let vp = ed.viewport();
    assert!(pos(&ed).row >= vp.row_offset);
    assert!(pos(&ed).row < vp.row_offset + vp.rows);
}

#[test]
fn test_colon_q_quits() {
    let mut ed = editor_with("abc");
    ed.execute_keys(":q\n");
    assert!(ed.should_quit());
}

#[test]
fn test_colon_escape_aborts() {
    let mut ed = editor_with("abc");
    ed.execute_keys(":q\x1b");
    assert!(!ed.should_quit());
    assert_eq!(ed.mode(), Mode::Normal);
}

#[test]
fn test_unknown_ex_command_is_ignored() {
    let mut ed = editor_with("abc");
    ed.execute_keys(":nope\n");
    assert!(!ed.should_quit());
    assert_eq!(ed.mode(), Mode::Normal);
    assert_eq!(ed.text(), "abc\n");
}

#[test]
fn test_ctrl_u_clears_command_line() {
    let mut ed = editor_with("abc");
    ed.execute_keys(":nope\x15q\n");
    assert!(ed.should_quit());
}

#[test]
fn test_write_without_file_name() {
    let mut ed = editor_with("abc");
    ed.execute_keys(":w\n");
    assert_eq!(ed.message(), "No file name");
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "alpha\nbeta\n").unwrap();

    let mut ed = Editor::new_headless();
    ed.open(&path).unwrap();
    ed.execute_keys("A gamma\x1b:w\n");
    assert!(ed.message().contains("2L"));

    let mut ed2 = Editor::new_headless();
    ed2.open(&path).unwrap();
    assert_eq!(ed2.text(), "alpha gamma\nbeta\n");
}

#[test]
fn test_save_message_persists_until_mode_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.txt");
    std::fs::write(&path, "x\n").unwrap();

    let mut ed = Editor::new_headless();
    ed.open(&path).unwrap();
    ed.execute_keys(":w\n");
    assert!(ed.message().contains("1L"));
    // Escape and plain motions leave the message in place.
    ed.execute_keys("\x1bjk");
    assert!(ed.message().contains("1L"));
    // Entering Insert clears it.
    ed.execute_keys("i");
    assert_eq!(ed.message(), "");
}

#[test]
fn test_wq_writes_and_quits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "x\n").unwrap();

    let mut ed = Editor::new_headless();
    ed.open(&path).unwrap();
    ed.execute_keys("ddiy\x1b:wq\n");
    assert!(ed.should_quit());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "y\n");
}

#[test]
fn test_open_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut ed = Editor::new_headless();
    assert!(ed.open(&dir.path().join("missing.txt")).is_err());
}

#[test]
fn test_ctrl_q_quits() {
    let mut ed = editor_with("abc");
    ed.execute_keys("\x11");
    assert!(ed.should_quit());
}

#[test]
fn test_tab_inserts_literal_tab() {
    let mut ed = editor_with("");
    ed.execute_keys("i\tx\x1b");
    assert_eq!(ed.text(), "\tx\n");
}
