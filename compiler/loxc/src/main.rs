//! Lox scanner CLI.

use std::io::{self, Write};

use loxc::commands::{tokenize_file, write_usage, write_version, EXIT_OK};
use loxc::tracing_setup::init_tracing;
use loxc::CliError;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(stderr, "{err}");
            if err.wants_usage() {
                let _ = writeln!(stderr);
                let _ = write_usage(&mut stderr);
            }
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(args: &[String]) -> Result<i32, CliError> {
    let Some(command) = args.get(1) else {
        return Err(CliError::Usage);
    };

    match command.as_str() {
        "tokenize" => {
            let Some(path) = args.get(2) else {
                return Err(CliError::Usage);
            };
            tokenize_file(path, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
        "help" | "--help" | "-h" => {
            write_usage(&mut io::stdout().lock())?;
            Ok(EXIT_OK)
        }
        "version" | "--version" | "-V" => {
            write_version(&mut io::stdout().lock())?;
            Ok(EXIT_OK)
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    }
}
