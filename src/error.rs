use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error opening the file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Coordinate out of range on line: {line}")]
    Coordinate { line: String },
    #[error("k must be at least 1")]
    InvalidK,
    #[error("No points loaded to cluster")]
    NoPoints,
}

pub type Result<T> = std::result::Result<T, Error>;
