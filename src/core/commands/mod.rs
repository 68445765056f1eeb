use std::path::{Path, PathBuf};

mod cd;
mod env;
mod exit;
mod help;

pub use cd::CdCommand;
pub use env::{EnvCommand, SetenvCommand, UnsetenvCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;

use crate::core::env::Environment;
use crate::core::state::ShellState;
use crate::process::executor;

/// Status for a command that could not be resolved anywhere.
pub const NOT_FOUND_STATUS: i32 = 127;
/// Status for a resolved path that lacks execute permission.
pub const NOT_EXECUTABLE_STATUS: i32 = 126;
/// Status for syntax errors and built-in misuse.
pub const MISUSE_STATUS: i32 = 2;

/// A command implemented inside the interpreter.
///
/// Handlers run synchronously, may mutate the shell state (environment,
/// termination flag), and return the segment's exit status.
pub trait Builtin {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32;
}

#[derive(Clone)]
pub enum BuiltinCmd {
    Cd(CdCommand),
    Env(EnvCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl Builtin for BuiltinCmd {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        match self {
            BuiltinCmd::Cd(cmd) => cmd.execute(state, args),
            BuiltinCmd::Env(cmd) => cmd.execute(state, args),
            BuiltinCmd::Setenv(cmd) => cmd.execute(state, args),
            BuiltinCmd::Unsetenv(cmd) => cmd.execute(state, args),
            BuiltinCmd::Exit(cmd) => cmd.execute(state, args),
            BuiltinCmd::Help(cmd) => cmd.execute(state, args),
        }
    }
}

pub fn lookup(name: &str) -> Option<BuiltinCmd> {
    match name {
        "cd" => Some(BuiltinCmd::Cd(CdCommand::new())),
        "env" => Some(BuiltinCmd::Env(EnvCommand::new())),
        "setenv" => Some(BuiltinCmd::Setenv(SetenvCommand::new())),
        "unsetenv" => Some(BuiltinCmd::Unsetenv(UnsetenvCommand::new())),
        "exit" => Some(BuiltinCmd::Exit(ExitCommand::new())),
        "help" => Some(BuiltinCmd::Help(HelpCommand::new())),
        _ => None,
    }
}

/// Classification of a segment's first token.
pub enum Resolved {
    Builtin(BuiltinCmd),
    External(PathBuf),
    NotExecutable(PathBuf),
    NotFound,
}

/// Maps a command name to a built-in handler or an executable path.
///
/// Built-ins shadow external commands. A name containing `/` bypasses the
/// `PATH` search and is tested literally; otherwise each `PATH` entry is
/// tried in order and the first executable match wins.
pub fn resolve(name: &str, env: &Environment) -> Resolved {
    if let Some(builtin) = lookup(name) {
        return Resolved::Builtin(builtin);
    }

    if name.contains('/') {
        let path = PathBuf::from(name);
        if executor::is_executable(&path) {
            return Resolved::External(path);
        }
        if path.exists() {
            return Resolved::NotExecutable(path);
        }
        return Resolved::NotFound;
    }

    let path_var = match env.get("PATH") {
        Some(v) => v,
        None => return Resolved::NotFound,
    };

    let mut blocked = None;
    for dir in path_var.split(':').filter(|d| !d.is_empty()) {
        let candidate = Path::new(dir).join(name);
        if executor::is_executable(&candidate) {
            return Resolved::External(candidate);
        }
        if blocked.is_none() && candidate.exists() {
            blocked = Some(candidate);
        }
    }

    match blocked {
        Some(path) => Resolved::NotExecutable(path),
        None => Resolved::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_shadow_externals() {
        let env = Environment::new();
        assert!(matches!(resolve("cd", &env), Resolved::Builtin(_)));
        assert!(matches!(resolve("env", &env), Resolved::Builtin(_)));
        assert!(matches!(resolve("exit", &env), Resolved::Builtin(_)));
    }

    #[test]
    fn test_path_search_finds_sh() {
        let mut env = Environment::new();
        env.set("PATH", "/nonexistent:/bin:/usr/bin");
        match resolve("sh", &env) {
            Resolved::External(path) => assert!(path.ends_with("sh")),
            _ => panic!("sh should resolve via PATH"),
        }
    }

    #[test]
    fn test_slash_bypasses_path_search() {
        let mut env = Environment::new();
        env.set("PATH", "");
        assert!(matches!(resolve("/bin/sh", &env), Resolved::External(_)));
    }

    #[test]
    fn test_unknown_command_not_found() {
        let env = Environment::new();
        assert!(matches!(resolve("nosuchcmd123", &env), Resolved::NotFound));
    }

    #[test]
    fn test_missing_path_var_means_not_found() {
        let mut env = Environment::new();
        env.unset("PATH");
        assert!(matches!(resolve("sh", &env), Resolved::NotFound));
    }

    #[test]
    fn test_literal_path_without_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let plain = std::env::temp_dir().join("cava_resolver_plain");
        std::fs::write(&plain, "data").unwrap();
        let mut perms = std::fs::metadata(&plain).unwrap().permissions();
        perms.set_mode(0o644);
        std::fs::set_permissions(&plain, perms).unwrap();

        let env = Environment::new();
        let name = plain.to_string_lossy().to_string();
        assert!(matches!(resolve(&name, &env), Resolved::NotExecutable(_)));
        let _ = std::fs::remove_file(&plain);
    }
}
