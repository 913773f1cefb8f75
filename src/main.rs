use std::process::ExitCode;

fn main() -> ExitCode {
    rarefaction_summary::cli::main()
}
