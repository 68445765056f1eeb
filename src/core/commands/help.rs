use super::{Builtin, MISUSE_STATUS};
use crate::core::state::ShellState;

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for HelpCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        match args.first() {
            None => {
                println!("Built-in commands:");
                for name in TOPICS {
                    if let Some(text) = usage(name) {
                        println!("  {}", text.lines().next().unwrap_or(name));
                    }
                }
                0
            }
            Some(topic) => match usage(topic) {
                Some(text) => {
                    println!("{}", text);
                    0
                }
                None => {
                    state.report(&format!("help: no help topics match {}", topic));
                    MISUSE_STATUS
                }
            },
        }
    }
}

const TOPICS: &[&str] = &["cd", "env", "setenv", "unsetenv", "exit", "help"];

fn usage(name: &str) -> Option<&'static str> {
    match name {
        "cd" => Some(
            "cd: cd [dir]\n\
             \tChange the working directory. With no argument or `~`, go to\n\
             \t$HOME; `-` returns to $OLDPWD and prints it. Updates PWD and\n\
             \tOLDPWD in the shell environment.",
        ),
        "env" => Some(
            "env: env\n\
             \tPrint the shell's environment, one NAME=value per line.",
        ),
        "setenv" => Some(
            "setenv: setenv NAME VALUE\n\
             \tSet an environment variable in the shell's copy.",
        ),
        "unsetenv" => Some(
            "unsetenv: unsetenv NAME\n\
             \tRemove an environment variable from the shell's copy.",
        ),
        "exit" => Some(
            "exit: exit [n]\n\
             \tTerminate the shell with status n (default: the current\n\
             \tstatus). n is taken modulo 256.",
        ),
        "help" => Some(
            "help: help [builtin]\n\
             \tShow usage for one built-in, or list all of them.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_usage() {
        for name in TOPICS {
            assert!(usage(name).is_some(), "missing usage for {}", name);
        }
    }

    #[test]
    fn test_unknown_topic_fails() {
        let mut state = ShellState::new(vec!["cava".to_string()]);
        let code = HelpCommand::new().execute(&mut state, &["frobnicate".to_string()]);
        assert_eq!(code, MISUSE_STATUS);
    }

    #[test]
    fn test_known_topic_succeeds() {
        let mut state = ShellState::new(vec!["cava".to_string()]);
        let code = HelpCommand::new().execute(&mut state, &["cd".to_string()]);
        assert_eq!(code, 0);
    }
}
