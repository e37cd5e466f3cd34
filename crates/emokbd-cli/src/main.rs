use clap::Parser;
use emokbd::{Cli, run};

fn main() {
    // `emokbd search ... | head` must not panic when the pipe closes
    #[cfg(unix)]
    restore_default_sigpipe();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn restore_default_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
