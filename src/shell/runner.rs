use crate::core::commands::{
    self, Builtin, Resolved, MISUSE_STATUS, NOT_EXECUTABLE_STATUS, NOT_FOUND_STATUS,
};
use crate::core::state::ShellState;
use crate::parser::{self, Separator};
use crate::process::ProcessExecutor;

/// Runs one raw input line through the whole pipeline.
///
/// Comment stripping, then one syntax pass over the full line (a rejected
/// line executes nothing and leaves status 2), then segmentation and the
/// separator-driven loop: `;` and `&` run unconditionally (`&` is accepted
/// syntactically but runs synchronously), `&&` runs only after success,
/// `||` only after failure. A skipped segment leaves the status untouched,
/// and the separator after it is judged against that same status. The loop
/// stops early once a built-in has flagged termination.
pub fn process_line(state: &mut ShellState, executor: &ProcessExecutor, line: &str) {
    state.line += 1;

    let line = parser::strip_comment(line);
    if line.trim().is_empty() {
        return;
    }

    if let Err(e) = parser::check_syntax(line) {
        state.report(&e.to_string());
        state.status = MISUSE_STATUS;
        return;
    }

    let mut prev_sep = Separator::None;
    for segment in parser::split_segments(line) {
        let run = match prev_sep {
            Separator::None | Separator::Sequential | Separator::Background => true,
            Separator::AndThen => state.status == 0,
            Separator::OrElse => state.status != 0,
        };
        if run {
            run_segment(state, executor, &segment.text);
            if state.exit.is_some() {
                return;
            }
        }
        prev_sep = segment.sep;
    }
}

fn run_segment(state: &mut ShellState, executor: &ProcessExecutor, text: &str) {
    let expanded = parser::expand_vars(text, state);
    let argv = parser::split_words(&expanded);
    let name = match argv.first() {
        Some(name) => name.clone(),
        // Blank after expansion: nothing to do, status untouched.
        None => return,
    };

    match commands::resolve(&name, &state.env) {
        Resolved::Builtin(builtin) => {
            state.status = builtin.execute(state, &argv[1..]);
        }
        Resolved::External(path) => match executor.spawn(&path, &argv, &state.env) {
            Ok(code) => state.status = code,
            Err(e) => {
                state.report(&format!("{}: {}", name, e));
                state.status = MISUSE_STATUS;
            }
        },
        Resolved::NotExecutable(_) => {
            state.report(&format!("{}: Permission denied", name));
            state.status = NOT_EXECUTABLE_STATUS;
        }
        Resolved::NotFound => {
            state.report(&format!("{}: not found", name));
            state.status = NOT_FOUND_STATUS;
        }
    }
}
