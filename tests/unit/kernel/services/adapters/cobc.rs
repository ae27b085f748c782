use super::*;
use crate::kernel::services::ports::CompilerSettings;

#[test]
fn parses_gnucobol_messages() {
    let text = "\
hello.cob:12: error: syntax error, unexpected WORD
hello.cob: 20: warning: line not terminated by a newline
/abs/other.cob:3: note: suggest PERFORM
hello.cob: in paragraph 'MAIN':
";
    let diagnostics = parse_compiler_output(text, Path::new("/w/hello.cob"));
    assert_eq!(diagnostics.len(), 3);

    assert_eq!(diagnostics[0].path, PathBuf::from("/w/hello.cob"));
    assert_eq!(diagnostics[0].line, Some(12));
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].message, "syntax error, unexpected WORD");

    assert_eq!(diagnostics[1].line, Some(20));
    assert_eq!(diagnostics[1].severity, Severity::Warning);

    assert_eq!(diagnostics[2].path, PathBuf::from("/abs/other.cob"));
    assert_eq!(diagnostics[2].severity, Severity::Info);
}

#[test]
fn unknown_severity_labels_are_errors() {
    assert_eq!(severity_from_label("Error"), Severity::Error);
    assert_eq!(severity_from_label("fatal"), Severity::Error);
    assert_eq!(severity_from_label("Warning"), Severity::Warning);
    assert_eq!(severity_from_label("note"), Severity::Info);
}

#[test]
fn empty_output_has_no_messages() {
    assert!(parse_compiler_output("", Path::new("/w/a.cob")).is_empty());
}

#[test]
fn missing_compiler_reports_launch_failure() {
    let compiler = GnuCobolCompiler::new(&CompilerSettings {
        command: "ocide-test-missing-cobc".to_string(),
        extra_args: Vec::new(),
    });
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("prog.cob");
    std::fs::write(&source, "").unwrap();

    let output = compiler.compile(&source, ProgramKind::Executable);
    assert!(!output.success());
    assert_eq!(output.status, -1);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].severity, Severity::Error);
    assert!(output.diagnostics[0]
        .message
        .contains("ocide-test-missing-cobc"));
}

#[test]
fn command_line_selects_output_mode() {
    let compiler = GnuCobolCompiler::new(&CompilerSettings {
        command: "cobc".to_string(),
        extra_args: vec!["-free".to_string()],
    });
    let cmd = compiler.build_command(Path::new("/w/util.cob"), ProgramKind::Module);
    let args: Vec<_> = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy().to_string())
        .collect();
    assert_eq!(args[0], "-free");
    assert_eq!(args[1], "-m");
    assert_eq!(args[2], "-o");
    assert_eq!(
        PathBuf::from(&args[3]),
        output_path(Path::new("/w/util.cob"), ProgramKind::Module)
    );
    assert_eq!(args[4], "/w/util.cob");
    assert_eq!(cmd.get_current_dir(), Some(Path::new("/w")));
}
