mod cli;
mod commands;

use noc_priority::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
