use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error("Terminal I/O failed: {0}")]
    #[diagnostic(code(todolist::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    #[diagnostic(code(todolist::cli::output))]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
