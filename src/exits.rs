//! Exit handling: signal handlers and terminal restore.

/// Put the terminal back into cooked mode with echo, whatever state the
/// interactive form left it in.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let restore = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                restore.as_ptr() as *const libc::c_void,
                restore.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise for the core dump
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    let _ = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}
