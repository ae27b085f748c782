use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for RecordingOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingEnter;

impl TerminalOps for FailingEnter {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::other("no tty"))
    }

    fn leave(&self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn guard_leaves_terminal_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_leaves_only_once() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    assert!(!restorer.is_restored());

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn enter_failure_is_reported() {
    assert!(TerminalGuard::with_ops(Arc::new(FailingEnter)).is_err());
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
    assert_eq!(TerminationSignal::Hangup.exit_code(), 129);
}
