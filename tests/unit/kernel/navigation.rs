use super::*;

const SOURCE: &str = "\
      * Sample program
       IDENTIFICATION DIVISION.
       PROGRAM-ID. HELLO.
       DATA DIVISION.
       WORKING-STORAGE SECTION.
       01 WS-NAME PIC X(10).
       PROCEDURE DIVISION.
       MAIN-PROCEDURE.
            PERFORM SHOW-NAME.
            STOP RUN.
       SHOW-NAME.
            DISPLAY WS-NAME.
       EXIT.
       UTILS SECTION.
       HELPER.
            CONTINUE.
";

fn names(node: &DocumentNode) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn outline_has_program_divisions_sections_and_paragraphs() {
    let root = analyse_outline(SOURCE, "hello.cob").unwrap();
    assert_eq!(root.name, "HELLO");
    assert_eq!(root.kind, NodeKind::Program);
    assert_eq!(
        names(&root),
        [
            "IDENTIFICATION DIVISION",
            "DATA DIVISION",
            "PROCEDURE DIVISION"
        ]
    );

    let data = &root.children[1];
    assert_eq!(names(data), ["WORKING-STORAGE SECTION"]);
    assert_eq!(data.children[0].line, 5);

    let procedure = &root.children[2];
    assert_eq!(
        names(procedure),
        ["MAIN-PROCEDURE", "SHOW-NAME", "UTILS SECTION"]
    );
    assert_eq!(procedure.children[0].kind, NodeKind::Paragraph);
    assert_eq!(procedure.children[0].line, 8);
    assert_eq!(names(&procedure.children[2]), ["HELPER"]);
}

#[test]
fn text_without_divisions_has_no_outline() {
    assert_eq!(analyse_outline("just some text\n", "notes.txt"), None);
    assert_eq!(analyse_outline("", "empty.cob"), None);
}

#[test]
fn program_name_falls_back_to_file_name() {
    let root = analyse_outline("       PROCEDURE DIVISION.\n", "anon.cob").unwrap();
    assert_eq!(root.name, "anon.cob");
}

#[test]
fn comment_lines_are_skipped() {
    assert!(is_comment("      * comment"));
    assert!(is_comment("000100/ page break"));
    assert!(is_comment("   *> free format"));
    assert!(!is_comment("       DISPLAY 'X'."));
    assert!(!is_comment(""));

    let text = "      * PROCEDURE DIVISION.\n       DATA DIVISION.\n";
    let root = analyse_outline(text, "x.cob").unwrap();
    assert_eq!(names(&root), ["DATA DIVISION"]);
}

#[test]
fn rows_expand_root_and_direct_children_only() {
    let mut nav = NavigationState::default();
    assert!(nav.update(analyse_outline(SOURCE, "hello.cob").unwrap()));

    let rows: Vec<(usize, &str)> = nav
        .rows()
        .iter()
        .map(|row| (row.depth, row.name.as_str()))
        .collect();
    assert!(rows.contains(&(0, "HELLO")));
    assert!(rows.contains(&(2, "UTILS SECTION")));
    assert!(!rows.iter().any(|(_, name)| *name == "HELPER"));
}

#[test]
fn update_with_equal_tree_is_noop() {
    let mut nav = NavigationState::default();
    let root = analyse_outline(SOURCE, "hello.cob").unwrap();
    assert!(nav.update(root.clone()));
    nav.move_selection(2);
    assert!(!nav.update(root));
    assert_eq!(nav.selected_index(), 2);
}

#[test]
fn selection_is_clamped_and_activates_line() {
    let mut nav = NavigationState::default();
    nav.update(analyse_outline(SOURCE, "hello.cob").unwrap());
    assert!(!nav.move_selection(-1));
    assert_eq!(nav.activate_selected(), Some(1));

    assert!(nav.move_selection(100));
    assert_eq!(nav.selected_index(), nav.rows().len() - 1);

    assert!(nav.clear());
    assert!(!nav.clear());
    assert_eq!(nav.activate_selected(), None);
}
