use std::env;
use std::path::PathBuf;

use super::{Builtin, MISUSE_STATUS};
use crate::core::state::ShellState;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn destination(&self, state: &ShellState, target: &str) -> Option<PathBuf> {
        match target {
            "~" => state
                .env
                .get("HOME")
                .map(PathBuf::from)
                .or_else(dirs::home_dir),
            // `cd -` with no OLDPWD stays put, like the classic shells.
            "-" => state
                .env
                .get("OLDPWD")
                .map(PathBuf::from)
                .or_else(|| env::current_dir().ok()),
            other => Some(PathBuf::from(other)),
        }
    }
}

impl Builtin for CdCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        let target = args.first().map(|s| s.as_str()).unwrap_or("~");

        let dest = match self.destination(state, target) {
            Some(dest) => dest,
            None => {
                state.report("cd: HOME not set");
                return MISUSE_STATUS;
            }
        };

        let previous = env::current_dir().ok();
        if env::set_current_dir(&dest).is_err() {
            state.report(&format!("cd: can't cd to {}", target));
            return MISUSE_STATUS;
        }

        // `cd -` echoes where it landed.
        if target == "-" {
            println!("{}", dest.display());
        }

        if let Some(prev) = previous {
            state.env.set("OLDPWD", &prev.to_string_lossy());
        }
        if let Ok(now) = env::current_dir() {
            state.env.set("PWD", &now.to_string_lossy());
        }
        0
    }
}
