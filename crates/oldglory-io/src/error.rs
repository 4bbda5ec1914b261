use std::io;

use thiserror::Error;

use oldglory_core::FlagError;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flag(#[from] FlagError),
}
