use libc::{signal, sighandler_t, SIGINT};

pub extern "C" fn handle_sigint(_: i32) {
    // Do nothing; the foreground child owns the terminal's interrupt.
}

/// Keeps SIGINT from killing the interpreter while a child runs.
pub fn setup_signal_handlers() {
    unsafe {
        signal(SIGINT, handle_sigint as sighandler_t);
    }
}
