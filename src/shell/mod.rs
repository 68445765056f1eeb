use std::io::{self, BufRead};

use rustyline::{config::Configurer, history::FileHistory, Editor};

mod runner;

use crate::{
    core::state::ShellState, error::ShellError, flags::Flags, highlight::OutputStyler,
    process::ProcessExecutor,
};

pub struct Shell {
    pub(crate) editor: Editor<(), FileHistory>,
    pub(crate) state: ShellState,
    pub(crate) executor: ProcessExecutor,
    pub(crate) styler: OutputStyler,
    pub(crate) flags: Flags,
    pub(crate) interactive: bool,
}

impl Shell {
    pub fn new(flags: Flags, argv: Vec<String>) -> Result<Self, ShellError> {
        let mut editor = Editor::<(), FileHistory>::new()?;
        editor.set_auto_add_history(true);

        let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) } == 1;

        // An interrupt outside readline must not take the shell down.
        ctrlc::set_handler(|| {
            println!();
        })?;

        Ok(Shell {
            editor,
            state: ShellState::new(argv),
            executor: ProcessExecutor::new(),
            styler: OutputStyler::new(),
            flags,
            interactive,
        })
    }

    /// Runs the read-eval loop until end of input or `exit`; returns the
    /// status the process should terminate with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        if let Some(line) = self.flags.get_value("command").cloned() {
            runner::process_line(&mut self.state, &self.executor, &line);
            return Ok(self.state.exit.unwrap_or(self.state.status));
        }

        if self.interactive {
            self.run_interactive()
        } else {
            self.run_batch()
        }
    }

    fn run_interactive(&mut self) -> Result<i32, ShellError> {
        let prompt = self.styler.prompt("$ ");
        loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    runner::process_line(&mut self.state, &self.executor, &line);
                    if let Some(code) = self.state.exit {
                        return Ok(code);
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    // Ctrl-C abandons the current line, never the shell.
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("{}", self.styler.error(&e.to_string()));
                    }
                    continue;
                }
            }
        }
        Ok(self.state.status)
    }

    fn run_batch(&mut self) -> Result<i32, ShellError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            runner::process_line(&mut self.state, &self.executor, &line);
            if let Some(code) = self.state.exit {
                return Ok(code);
            }
        }
        Ok(self.state.status)
    }
}
