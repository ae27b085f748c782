use crate::kernel::compile::CompileRequest;
use crate::kernel::console::ConsoleStream;
use crate::kernel::diagnostics::{DiagnosticColumn, SortOrder};
use crate::kernel::files::{output_path, working_dir};
use crate::kernel::mode::Panel;
use crate::kernel::{Action, BottomPanelTab, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_compile_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Compile => self.start_compile(),
            Action::CompileRejected => {
                tracing::warn!("compile slot busy, request rejected");
                self.state.compile_in_flight = false;
                self.state.diagnostics.set_sorting_enabled(true);
                self.refresh_active();
                DispatchResult::changed(true)
            }
            Action::CompilerMessage(diagnostic) => {
                self.state.diagnostics.append(diagnostic);
                DispatchResult::changed(true)
            }
            Action::CompilationFinished(outcome) => {
                self.state.compile_in_flight = false;
                self.state.diagnostics.set_sorting_enabled(true);
                self.state
                    .diagnostics
                    .sort_by_column(DiagnosticColumn::Location, SortOrder::Ascending);
                self.state.last_compile = Some(outcome);
                self.refresh_active();
                DispatchResult::changed(true)
            }
            Action::Run => self.start_run(),
            Action::ConsoleOutput { stream, text } => {
                self.state.console.push(stream, text);
                DispatchResult::changed(true)
            }
            Action::ProgramFinished { status } => {
                self.state.program_running = false;
                let line = match status {
                    Some(code) => format!("Process finished with exit code {code}"),
                    None => "Process terminated".to_string(),
                };
                self.state.console.push(ConsoleStream::Stdout, line);
                self.refresh_active();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::changed(false),
        }
    }

    /// Foreground half of a compile: flush list, sink reset and trigger lockout. The job
    /// itself runs on the compile slot.
    fn start_compile(&mut self) -> DispatchResult {
        if self.state.compile_in_flight || !self.state.triggers.compile {
            return DispatchResult::changed(false);
        }
        let Some(doc) = self.state.editors.active().filter(|doc| doc.is_cobol()) else {
            return DispatchResult::changed(false);
        };

        let request = CompileRequest {
            path: doc.path().to_path_buf(),
            kind: doc.program_kind(),
            pending_writes: self.state.editors.pending_writes(),
        };

        self.state.diagnostics.clear();
        self.state.diagnostics.set_sorting_enabled(false);
        self.state.compile_in_flight = true;
        self.state.triggers.compile = false;
        self.state.triggers.run = false;
        self.state.window.set_panel_visible(Panel::Logs, true);
        self.state.ui.bottom_panel_tab = BottomPanelTab::Compiler;

        DispatchResult::with_effects(true, vec![Effect::StartCompile(request)])
    }

    fn start_run(&mut self) -> DispatchResult {
        if self.state.program_running || !self.state.triggers.run {
            return DispatchResult::changed(false);
        }
        let Some(doc) = self
            .state
            .editors
            .active()
            .filter(|doc| doc.is_cobol() && doc.program_kind().can_run())
        else {
            return DispatchResult::changed(false);
        };

        let program = output_path(doc.path(), doc.program_kind());
        let cwd = working_dir(&program);

        self.state.program_running = true;
        self.state.triggers.run = false;
        self.state.console.clear();
        self.state.window.set_panel_visible(Panel::Logs, true);
        self.state.ui.bottom_panel_tab = BottomPanelTab::Console;

        DispatchResult::with_effects(true, vec![Effect::RunProgram { program, cwd }])
    }
}
