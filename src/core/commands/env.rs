use super::{Builtin, MISUSE_STATUS};
use crate::core::state::ShellState;

/// `env` - print the shell's environment copy, one `NAME=value` per line.
#[derive(Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for EnvCommand {
    fn execute(&self, state: &mut ShellState, _args: &[String]) -> i32 {
        for (name, value) in state.env.iter() {
            println!("{}={}", name, value);
        }
        0
    }
}

/// `setenv NAME VALUE` - set a variable in the shell's environment copy.
#[derive(Clone, Default)]
pub struct SetenvCommand;

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for SetenvCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        if args.len() != 2 {
            state.report("setenv: Invalid number of arguments");
            return MISUSE_STATUS;
        }
        state.env.set(&args[0], &args[1]);
        0
    }
}

/// `unsetenv NAME` - remove a variable from the shell's environment copy.
#[derive(Clone, Default)]
pub struct UnsetenvCommand;

impl UnsetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for UnsetenvCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        if args.len() != 1 {
            state.report("unsetenv: Invalid number of arguments");
            return MISUSE_STATUS;
        }
        if !state.env.unset(&args[0]) {
            state.report("unsetenv: Variable not found");
            return MISUSE_STATUS;
        }
        0
    }
}
