use super::{Builtin, MISUSE_STATUS};
use crate::core::state::ShellState;

/// `exit [n]` - flag the interpreter for termination.
///
/// Without an argument the shell exits with its current status. A numeric
/// argument is taken modulo 256; anything non-numeric is a reportable,
/// non-fatal error and the shell keeps accepting lines.
#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> i32 {
        let code = match args.first() {
            None => state.status,
            Some(arg) => match parse_code(arg) {
                Some(code) => code,
                None => {
                    state.report(&format!("exit: Illegal number: {}", arg));
                    return MISUSE_STATUS;
                }
            },
        };
        state.exit = Some(code);
        code
    }
}

fn parse_code(arg: &str) -> Option<i32> {
    arg.parse::<u64>().ok().map(|n| (n % 256) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ShellState {
        ShellState::new(vec!["cava".to_string()])
    }

    #[test]
    fn test_exit_without_argument_uses_current_status() {
        let mut state = state();
        state.status = 5;
        assert_eq!(ExitCommand::new().execute(&mut state, &[]), 5);
        assert_eq!(state.exit, Some(5));
    }

    #[test]
    fn test_exit_with_numeric_argument() {
        let mut state = state();
        assert_eq!(ExitCommand::new().execute(&mut state, &["98".to_string()]), 98);
        assert_eq!(state.exit, Some(98));
    }

    #[test]
    fn test_exit_code_wraps_at_256() {
        let mut state = state();
        assert_eq!(
            ExitCommand::new().execute(&mut state, &["300".to_string()]),
            44
        );
    }

    #[test]
    fn test_exit_with_bad_argument_keeps_shell_alive() {
        let mut state = state();
        let code = ExitCommand::new().execute(&mut state, &["abc".to_string()]);
        assert_eq!(code, MISUSE_STATUS);
        assert!(state.exit.is_none());

        let code = ExitCommand::new().execute(&mut state, &["-1".to_string()]);
        assert_eq!(code, MISUSE_STATUS);
        assert!(state.exit.is_none());
    }
}
