use std::process::ExitCode;

fn main() -> ExitCode {
    neurondoc::cli::run()
}
