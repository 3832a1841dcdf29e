mod cli;
mod commands;
mod render;

use admissions::error::AppError;
use std::io::Write;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

/// Reports a failed run on `err_out` and returns the process exit code.
pub fn exit_code<W: Write>(result: Result<(), AppError>, err_out: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(err_out, "application error: {err}");
            1
        }
    }
}
