pub fn main() -> miette::Result<()> {
    // The window event loop has to own the main thread on some platforms, so
    // everything runs right here without spawning a runtime.
    fibrt_cli::execute()
}
