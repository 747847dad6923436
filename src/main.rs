//! styler CLI binary
//!
//! Minimal entrypoint; all logic lives in the library.

fn main() {
    if let Err(e) = styler::cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
