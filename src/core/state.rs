use crate::core::env::Environment;

/// Runtime state shared by every stage of the pipeline.
///
/// Created once at startup and threaded by `&mut` through the controller and
/// the built-ins; there is exactly one of these per interpreter session.
#[derive(Clone, Debug)]
pub struct ShellState {
    /// Exit status of the most recently completed segment.
    pub status: i32,
    /// The shell's own pid, rendered once for `$$` expansion.
    pub pid: String,
    /// Argument vector the interpreter was invoked with; `argv[0]` names the
    /// program in diagnostics.
    pub argv: Vec<String>,
    /// 1-based count of input lines read so far.
    pub line: usize,
    pub env: Environment,
    /// Set by the `exit` built-in; the run loop stops once this is `Some`.
    pub exit: Option<i32>,
}

impl ShellState {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            status: 0,
            pid: std::process::id().to_string(),
            argv,
            line: 0,
            env: Environment::new(),
            exit: None,
        }
    }

    pub fn prog_name(&self) -> &str {
        self.argv.first().map(|s| s.as_str()).unwrap_or("cava")
    }

    /// Emits a diagnostic in the `<prog>: <line>: <message>` shape.
    pub fn report(&self, msg: &str) {
        eprintln!("{}: {}: {}", self.prog_name(), self.line, msg);
    }
}
