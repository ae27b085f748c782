use super::*;
use tempfile::tempdir;

#[test]
fn called_programs_skips_comments_and_duplicates() {
    let text = "\
       PROCEDURE DIVISION.
           CALL \"SUB1\" USING WS-A.
      *    CALL \"COMMENTED\".
           call 'sub1'.
           CALL WS-DYNAMIC.
           CALL 'SUB2'.
";
    assert_eq!(called_programs(text), ["SUB1", "SUB2"]);
}

#[test]
fn resolves_transitive_dependencies_deepest_first() {
    let dir = tempdir().unwrap();
    let main = dir.path().join("main.cob");
    std::fs::write(&main, "           CALL \"MID\".\n           CALL \"LEAF\".\n").unwrap();
    std::fs::write(dir.path().join("mid.cob"), "           CALL \"LEAF\".\n").unwrap();
    std::fs::write(dir.path().join("LEAF.cbl"), "           DISPLAY 'x'.\n").unwrap();

    let deps = CallScanResolver::new().resolve(&main);
    let names: Vec<_> = deps
        .iter()
        .map(|d| d.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["LEAF.cbl", "mid.cob"]);
    assert!(deps.iter().all(|d| d.kind == ProgramKind::Module));
}

#[test]
fn cycles_and_self_calls_terminate() {
    let dir = tempdir().unwrap();
    let main = dir.path().join("main.cob");
    std::fs::write(&main, "           CALL \"A\".\n           CALL \"MAIN\".\n").unwrap();
    std::fs::write(dir.path().join("a.cob"), "           CALL \"MAIN\".\n").unwrap();

    let deps = CallScanResolver::new().resolve(&main);
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].path, dir.path().join("a.cob"));
}

#[test]
fn unknown_callees_and_unreadable_targets_are_skipped() {
    let dir = tempdir().unwrap();
    let main = dir.path().join("main.cob");
    std::fs::write(&main, "           CALL \"NOWHERE\".\n").unwrap();
    assert!(CallScanResolver::new().resolve(&main).is_empty());
    assert!(CallScanResolver::new()
        .resolve(&dir.path().join("missing.cob"))
        .is_empty());
}
