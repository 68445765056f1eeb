use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "Cannot spawn process: {}", e),
            ProcessError::Wait(e) => write!(f, "Cannot wait for process: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
