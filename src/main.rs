use std::process::ExitCode;

fn main() -> ExitCode {
    odds::cli::run(std::env::args_os())
}
