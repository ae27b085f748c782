use super::*;

fn diag(path: &str, line: Option<u32>, severity: Severity, message: &str) -> Diagnostic {
    Diagnostic::new(PathBuf::from(path), line, severity, message)
}

#[test]
fn compile_summary_rows() {
    let ok = Diagnostic::compile_summary(PathBuf::from("/w/foo.cob"), true);
    assert_eq!(ok.severity, Severity::Info);
    assert_eq!(ok.message, COMPILATION_SUCCEEDED);
    assert_eq!(ok.icon, Some(DiagnosticIcon::Accept));
    assert_eq!(ok.line, None);

    let failed = Diagnostic::compile_summary(PathBuf::from("/w/foo.cob"), false);
    assert_eq!(failed.severity, Severity::Error);
    assert_eq!(failed.message, COMPILATION_FAILED);
    assert_eq!(failed.icon, None);
}

#[test]
fn unsorted_sink_keeps_emission_order() {
    let mut sink = DiagnosticsSink::default();
    sink.set_sorting_enabled(false);
    sink.append(diag("/w/b.cob", Some(3), Severity::Error, "b"));
    sink.append(diag("/w/a.cob", Some(1), Severity::Error, "a"));

    let messages: Vec<_> = sink.items().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["b", "a"]);
}

#[test]
fn enabling_sorting_orders_by_location() {
    let mut sink = DiagnosticsSink::default();
    sink.set_sorting_enabled(false);
    sink.append(diag("/w/b.cob", Some(3), Severity::Error, "b3"));
    sink.append(diag("/w/a.cob", Some(9), Severity::Warning, "a9"));
    sink.append(diag("/w/a.cob", Some(2), Severity::Error, "a2"));

    sink.set_sorting_enabled(true);
    let messages: Vec<_> = sink.items().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["a2", "a9", "b3"]);
}

#[test]
fn sorted_append_inserts_in_place() {
    let mut sink = DiagnosticsSink::default();
    sink.append(diag("/w/a.cob", Some(5), Severity::Error, "five"));
    sink.append(diag("/w/a.cob", Some(1), Severity::Error, "one"));
    sink.append(diag("/w/a.cob", Some(3), Severity::Error, "three"));

    let lines: Vec<_> = sink.items().iter().map(|d| d.line).collect();
    assert_eq!(lines, [Some(1), Some(3), Some(5)]);
}

#[test]
fn sort_by_severity_descending_is_stable() {
    let mut sink = DiagnosticsSink::default();
    sink.set_sorting_enabled(false);
    sink.append(diag("/w/a.cob", Some(1), Severity::Warning, "w1"));
    sink.append(diag("/w/a.cob", Some(2), Severity::Error, "e1"));
    sink.append(diag("/w/a.cob", Some(3), Severity::Error, "e2"));

    sink.sort_by_column(DiagnosticColumn::Severity, SortOrder::Descending);
    let messages: Vec<_> = sink.items().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["e1", "e2", "w1"]);
    assert_eq!(
        sink.sort_key(),
        (DiagnosticColumn::Severity, SortOrder::Descending)
    );
}

#[test]
fn clear_reports_change_and_resets_selection() {
    let mut sink = DiagnosticsSink::default();
    assert!(!sink.clear());
    sink.append(diag("/w/a.cob", Some(1), Severity::Error, "x"));
    sink.append(diag("/w/a.cob", Some(2), Severity::Error, "y"));
    sink.move_selection(1);
    assert!(sink.clear());
    assert!(sink.is_empty());
    assert_eq!(sink.selected_index(), 0);
}

#[test]
fn selection_wraps_and_activation_targets_row() {
    let mut sink = DiagnosticsSink::default();
    sink.append(diag("/w/a.cob", Some(4), Severity::Error, "x"));
    sink.append(diag("/w/b.cob", None, Severity::Info, "y"));

    assert!(sink.move_selection(-1));
    assert_eq!(sink.selected_index(), 1);
    assert_eq!(
        sink.activate_selected(),
        Some(NavigationTarget {
            path: PathBuf::from("/w/b.cob"),
            line: None,
        })
    );

    assert!(sink.move_selection(1));
    assert_eq!(sink.selected_index(), 0);
    assert_eq!(sink.activate(0).and_then(|t| t.line), Some(4));
    assert_eq!(sink.activate(7), None);
}

#[test]
fn scroll_follows_selection() {
    let mut sink = DiagnosticsSink::default();
    for line in 1..=10 {
        sink.append(diag("/w/a.cob", Some(line), Severity::Error, "x"));
    }
    sink.set_view_height(3);
    for _ in 0..4 {
        sink.move_selection(1);
    }
    assert_eq!(sink.selected_index(), 4);
    assert_eq!(sink.scroll_offset(), 2);
}

#[test]
fn error_count_ignores_other_severities() {
    let mut sink = DiagnosticsSink::default();
    sink.append(diag("/w/a.cob", Some(1), Severity::Error, "x"));
    sink.append(diag("/w/a.cob", Some(2), Severity::Warning, "y"));
    sink.append(Diagnostic::compile_summary(PathBuf::from("/w/a.cob"), true));
    assert_eq!(sink.error_count(), 1);
    assert_eq!(sink.len(), 3);
}

#[test]
fn column_indices_map_to_columns() {
    assert_eq!(DiagnosticColumn::from_index(0), Some(DiagnosticColumn::Location));
    assert_eq!(DiagnosticColumn::from_index(2), Some(DiagnosticColumn::Message));
    assert_eq!(DiagnosticColumn::from_index(3), None);
}
