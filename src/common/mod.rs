/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust sets SIGPIPE to SIG_IGN by default, but a filter feeding a closed
/// pipe (e.g. `pfactor < numbers | head`) should be killed by SIGPIPE the
/// way classic tools are, not error on every subsequent write. This must
/// be called at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
