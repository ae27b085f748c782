use super::*;

fn doc(path: &str, content: &str) -> Document {
    Document::new(PathBuf::from(path), content)
}

#[test]
fn editor_kind_follows_extension() {
    assert_eq!(doc("/src/hello.cob", "").editor_kind(), EditorKind::Cobol);
    assert_eq!(doc("/src/HELLO.CBL", "").editor_kind(), EditorKind::Cobol);
    assert_eq!(doc("/src/notes.txt", "").editor_kind(), EditorKind::Generic);
    assert_eq!(doc("/src/Makefile", "").editor_kind(), EditorKind::Generic);
}

#[test]
fn new_document_is_clean_executable() {
    let d = doc("/src/hello.cob", "line\n");
    assert!(!d.is_dirty());
    assert_eq!(d.program_kind(), ProgramKind::Executable);
    assert!(d.program_kind().can_run());
    assert!(!ProgramKind::Module.can_run());
    assert_eq!(d.title(), "hello.cob");
}

#[test]
fn save_of_an_older_revision_leaves_document_dirty() {
    let mut d = doc("/src/hello.cob", "");
    d.insert_char('a');
    let written = d.revision();
    d.insert_char('b');

    assert!(!d.mark_saved(written));
    assert!(d.is_dirty());
    assert!(d.mark_saved(d.revision()));
    assert!(!d.is_dirty());
}

#[test]
fn insert_and_backspace_track_dirty_state() {
    let mut d = doc("/src/hello.cob", "ab");
    d.move_cursor(0, 2);
    d.insert_char('c');
    assert_eq!(d.text(), "abc");
    assert!(d.is_dirty());

    assert!(d.mark_saved(d.revision()));
    assert!(!d.mark_saved(d.revision()));

    assert!(d.backspace());
    assert_eq!(d.text(), "ab");
    assert!(d.is_dirty());
}

#[test]
fn backspace_at_start_is_noop() {
    let mut d = doc("/src/hello.cob", "abc");
    assert!(!d.backspace());
    assert!(!d.is_dirty());
}

#[test]
fn newline_moves_cursor_and_backspace_joins_lines() {
    let mut d = doc("/src/hello.cob", "ab");
    d.move_cursor(0, 1);
    d.insert_char('\n');
    assert_eq!(d.text(), "a\nb");
    assert_eq!(d.cursor(), CursorPos { line: 1, column: 0 });

    assert!(d.backspace());
    assert_eq!(d.text(), "ab");
    assert_eq!(d.cursor(), CursorPos { line: 0, column: 1 });
}

#[test]
fn goto_line_is_one_based_and_clamped() {
    let mut d = doc("/src/hello.cob", "one\ntwo\nthree");
    assert!(d.goto_line(2));
    assert_eq!(d.cursor(), CursorPos { line: 1, column: 0 });

    assert!(d.goto_line(99));
    assert_eq!(d.cursor().line, 2);

    d.goto_line(0);
    assert_eq!(d.cursor().line, 0);
}

#[test]
fn vertical_moves_clamp_column_to_line_length() {
    let mut d = doc("/src/hello.cob", "long line\nab\n");
    d.move_cursor(0, 8);
    assert!(d.move_cursor(1, 0));
    assert_eq!(d.cursor(), CursorPos { line: 1, column: 2 });
    assert!(!d.move_cursor(0, 10));
}

#[test]
fn set_path_updates_editor_kind() {
    let mut d = doc("/src/notes.txt", "");
    assert!(!d.is_cobol());
    d.set_path(PathBuf::from("/src/notes.cbl"));
    assert!(d.is_cobol());
    assert_eq!(d.path(), Path::new("/src/notes.cbl"));
}

#[test]
fn program_kind_change_reports_only_real_changes() {
    let mut d = doc("/src/lib.cob", "");
    assert!(d.set_program_kind(ProgramKind::Module));
    assert!(!d.set_program_kind(ProgramKind::Module));
    assert_eq!(d.program_kind().label(), ProgramKind::Module.label());
}
