use super::*;

#[test]
fn scrollback_drops_oldest_lines() {
    let mut console = ConsoleState::with_scrollback(2);
    console.push(ConsoleStream::Stdout, "one");
    console.push(ConsoleStream::Stderr, "two");
    console.push(ConsoleStream::Stdout, "three");

    let texts: Vec<_> = console.lines().map(|line| line.text.as_str()).collect();
    assert_eq!(texts, ["two", "three"]);
    assert_eq!(console.len(), 2);
}

#[test]
fn clear_reports_change() {
    let mut console = ConsoleState::default();
    assert!(!console.clear());
    console.push(ConsoleStream::Stdout, "x");
    assert!(console.clear());
    assert!(console.is_empty());
}
