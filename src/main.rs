/// Binary entrypoint for the `urlqr` executable.
///
/// All logic lives in the library so it can be tested without spawning a process.
fn main() -> std::process::ExitCode {
    urlqr::run(std::env::args_os())
}
